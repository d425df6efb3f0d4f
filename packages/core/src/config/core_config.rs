use std::str::FromStr;

/**
 * Configuration values, every field can be overridden from environment
 */
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CoreConfig {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl CoreConfig {
    /**
     * Get configured log level, falling back to given one when missing or invalid
     */
    pub fn get_log_level(&self, default_level: log::LevelFilter) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| log::LevelFilter::from_str(level).ok())
            .unwrap_or(default_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_configured_log_level() {
        let config = CoreConfig {
            database_path: None,
            log_level: Some("trace".to_string()),
        };

        assert_eq!(
            config.get_log_level(log::LevelFilter::Info),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_get_default_log_level() {
        let missing = CoreConfig::default();
        let invalid = CoreConfig {
            database_path: None,
            log_level: Some("wwwwtracewww".to_string()),
        };

        assert_eq!(
            missing.get_log_level(log::LevelFilter::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            invalid.get_log_level(log::LevelFilter::Info),
            log::LevelFilter::Info
        );
    }
}
