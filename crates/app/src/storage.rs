//! Browser local storage, reached through `document::eval`.

use dioxus::prelude::*;
use shared_types::{parse_wildcard_mode, serialize_wildcard_mode, WILDCARD_MODE_KEY};

/// A JavaScript string literal holding `s`.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn get_item_script(key: &str) -> String {
    format!("return window.localStorage.getItem({});", js_string(key))
}

fn set_item_script(key: &str, value: &str) -> String {
    format!(
        "window.localStorage.setItem({}, {});",
        js_string(key),
        js_string(value)
    )
}

async fn get_item(key: &str) -> Option<String> {
    match document::eval(&get_item_script(key)).await {
        Ok(value) => value.as_str().map(str::to_string),
        Err(err) => {
            tracing::warn!(key, ?err, "Failed to read local storage");
            None
        }
    }
}

fn set_item(key: &str, value: &str) {
    document::eval(&set_item_script(key, value));
}

/// The stored wildcard-mode flag. Anything unreadable counts as on.
pub async fn load_wildcard_mode() -> bool {
    parse_wildcard_mode(get_item(WILDCARD_MODE_KEY).await.as_deref())
}

pub fn save_wildcard_mode(enabled: bool) {
    set_item(WILDCARD_MODE_KEY, &serialize_wildcard_mode(enabled));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scripts_quote_keys_and_values() {
        assert_eq!(
            get_item_script("wildcardMode"),
            r#"return window.localStorage.getItem("wildcardMode");"#
        );
        assert_eq!(
            set_item_script("wildcardMode", "false"),
            r#"window.localStorage.setItem("wildcardMode", "false");"#
        );
    }

    #[test]
    fn quotes_inside_values_are_escaped() {
        assert_eq!(
            set_item_script("k", r#"a"b"#),
            r#"window.localStorage.setItem("k", "a\"b");"#
        );
    }
}
