// Plain components
pub mod button;
pub mod form_select;
pub mod input;
pub mod pagination;
pub mod result_card;
pub mod search_bar;
pub mod settings_list;
pub mod status_badge;

// Primitive wrappers
pub mod alert_dialog;
pub mod checkbox;
pub mod switch;
pub mod toast;

pub use alert_dialog::*;
pub use button::*;
pub use checkbox::*;
pub use form_select::*;
pub use input::*;
pub use pagination::*;
pub use result_card::*;
pub use search_bar::*;
pub use settings_list::*;
pub use status_badge::*;
pub use switch::*;
pub use toast::*;
