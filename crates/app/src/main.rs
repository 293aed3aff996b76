use client::{Client, ClientConfig};
use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod debounce;
mod routes;
mod session;
mod storage;
use routes::Route;
use session::Session;

/// Services shared by every page.
#[derive(Clone)]
pub struct AppContext {
    pub client: Client,
    pub flags: FeatureFlags,
}

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

/// Connection settings for this platform.
///
/// The browser build has no file system, so its API location is fixed at
/// compile time through `OEQ_API_BASE_URL`.
fn client_config() -> ClientConfig {
    if cfg!(target_arch = "wasm32") {
        let mut config = ClientConfig::default();
        if let Some(url) = option_env!("OEQ_API_BASE_URL") {
            config.base_url = url.to_string();
        }
        config
    } else {
        ClientConfig::load()
    }
}

fn feature_flags() -> FeatureFlags {
    if cfg!(target_arch = "wasm32") {
        FeatureFlags::default()
    } else {
        client::config::feature_flags().clone()
    }
}

fn build_context() -> AppContext {
    let config = client_config();
    let client = Client::new(&config).unwrap_or_else(|err| {
        tracing::error!(%err, "Falling back to a default HTTP client");
        Client::with_base_url(config.base_url.clone())
    });
    AppContext {
        client,
        flags: feature_flags(),
    }
}

#[component]
fn App() -> Element {
    let ctx = use_context_provider(build_context);
    let mut session = use_context_provider(Session::new);

    use_hook(move || {
        spawn(async move {
            match ctx.client.current_user().await {
                Ok(user) => {
                    tracing::info!(user = %user.username, "Signed in");
                    session.current_user.set(Some(user));
                }
                Err(err) => tracing::warn!(%err, "Could not load the current user"),
            }
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
