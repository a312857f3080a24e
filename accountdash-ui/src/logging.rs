//! Console logging
//!
//! Routes `tracing` events from the core controller to the browser console.
//! The level comes from `localStorage["accountdash_log_level"]`, default `info`.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

const LOG_LEVEL_KEY: &str = "accountdash_log_level";

/// Parse a stored level name, falling back to `INFO`
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

fn stored_level() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LOG_LEVEL_KEY).ok().flatten())
}

/// Install the console subscriber
pub fn init() {
    let level = parse_level(stored_level().as_deref());
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), Level::INFO);
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
        assert_eq!(parse_level(Some("loud")), Level::INFO);
    }
}
