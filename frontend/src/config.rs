use shared::config::WheelConfig;
use web_sys::window;

/// Reads the wheel configuration from the page URL, e.g. `?segments=8&duration=2000`.
/// Missing or invalid overrides fall back to the defaults.
pub fn load_wheel_config() -> WheelConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

pub fn parse_query(search: &str) -> WheelConfig {
    let mut config = WheelConfig::default();

    for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "segments" => match value.parse() {
                Ok(count) => config.segment_count = count,
                Err(_) => log::warn!("Ignoring unparseable segments override: {:?}", value),
            },
            "duration" => match value.parse() {
                Ok(ms) => config.spin_duration_ms = ms,
                Err(_) => log::warn!("Ignoring unparseable duration override: {:?}", value),
            },
            _ => {}
        }
    }

    match config.validated() {
        Ok(config) => config,
        Err(errors) => {
            log::warn!("Invalid wheel configuration, using defaults: {}", errors);
            WheelConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(parse_query(""), WheelConfig::default());
        assert_eq!(parse_query("?"), WheelConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = parse_query("?segments=8&duration=2000&theme=dark");
        assert_eq!(config.segment_count, 8);
        assert_eq!(config.spin_duration_ms, 2000);
    }

    #[test]
    fn test_unparseable_override_is_skipped() {
        let config = parse_query("?segments=lots&duration=1500");
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.spin_duration_ms, 1500);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_query("?segments=1"), WheelConfig::default());
        assert_eq!(parse_query("?segments=10&duration=50"), WheelConfig::default());
    }
}
