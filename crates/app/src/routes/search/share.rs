use dioxus::prelude::*;

/// Origin of the page, e.g. `https://repo.example.edu`. Empty when it
/// cannot be read, which leaves a root-relative link.
pub async fn current_origin() -> String {
    match document::eval("return window.location.origin;").await {
        Ok(value) => value.as_str().unwrap_or_default().to_string(),
        Err(err) => {
            tracing::warn!(?err, "Could not read the page origin");
            String::new()
        }
    }
}

pub fn copy_to_clipboard(text: &str) {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!("navigator.clipboard.writeText({literal});"));
}

/// Navigate the whole window away from the app.
pub fn open_external(url: &str) {
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!("window.location.assign({literal});"));
}
