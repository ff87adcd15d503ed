use serde::Deserialize;

pub const DEFAULT_SESSIONS_PER_WEEK: u8 = 3;
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub sessions_per_week: u8,
    pub recent_activity_limit: usize,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_vars(|key| std::env::var(key).ok()))
    }

    /// Builds the config from an arbitrary variable source. Missing or
    /// unparseable values fall back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let log = LogConfig {
            filter: var("RUST_LOG").unwrap_or_else(|| "gymcore=debug".to_string()),
            json: var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };
        Self {
            sessions_per_week: var("GYM_SESSIONS_PER_WEEK")
                .and_then(|v| v.parse::<u8>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_SESSIONS_PER_WEEK),
            recent_activity_limit: var("GYM_RECENT_ACTIVITY_LIMIT")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(DEFAULT_RECENT_ACTIVITY_LIMIT),
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sessions_per_week, 3);
        assert_eq!(cfg.recent_activity_limit, 10);
        assert_eq!(cfg.log.filter, "gymcore=debug");
        assert!(!cfg.log.json);
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GYM_SESSIONS_PER_WEEK", "5"),
            ("GYM_RECENT_ACTIVITY_LIMIT", "many"),
            ("LOG_FORMAT", "json"),
            ("RUST_LOG", "gymcore=info"),
        ]);
        let cfg = AppConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.sessions_per_week, 5);
        assert_eq!(cfg.recent_activity_limit, 10);
        assert!(cfg.log.json);
        assert_eq!(cfg.log.filter, "gymcore=info");
    }

    #[test]
    fn zero_sessions_falls_back() {
        let cfg = AppConfig::from_vars(|k| (k == "GYM_SESSIONS_PER_WEEK").then(|| "0".into()));
        assert_eq!(cfg.sessions_per_week, DEFAULT_SESSIONS_PER_WEEK);
    }
}
