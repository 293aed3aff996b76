use dioxus::prelude::*;
use shared_types::CurrentUserDetails;

/// Who is signed in. `None` until the server has answered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub current_user: Signal<Option<CurrentUserDetails>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn can_download_search_result(&self) -> bool {
        self.current_user
            .read()
            .as_ref()
            .is_some_and(|u| u.can_download_search_result)
    }
}

pub fn use_session() -> Session {
    use_context::<Session>()
}
