/// Local storage key of the wildcard-mode flag.
pub const WILDCARD_MODE_KEY: &str = "wildcardMode";

/// Read a stored wildcard-mode value. Anything missing or unreadable means
/// wildcard mode is on.
pub fn parse_wildcard_mode(stored: Option<&str>) -> bool {
    stored
        .and_then(|raw| serde_json::from_str::<bool>(raw.trim()).ok())
        .unwrap_or(true)
}

/// Value written to storage for a wildcard-mode flag.
pub fn serialize_wildcard_mode(enabled: bool) -> String {
    enabled.to_string()
}

/// Raw mode is the inverse of wildcard mode.
pub fn raw_mode_for(wildcard_mode: bool) -> bool {
    !wildcard_mode
}
