use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub voice: VoiceConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated assistant latency
    pub reply_delay_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VoiceConfig {
    /// Listening indicator turns itself off after this long
    pub listen_timeout_ms: u32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            listen_timeout_ms: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// A site is due for audit once its last audit is older than this
    pub audit_interval_days: i64,
    pub active_crews: u32,
    pub equipment_units: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            audit_interval_days: 30,
            active_crews: 8,
            equipment_units: 24,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[chat]
reply_delay_ms = 1500

[voice]
listen_timeout_ms = 3000

[dashboard]
audit_interval_days = 30
active_crews = 8
equipment_units = 24
"#;

/// Load configuration
///
/// Search order:
/// 1. `override_toml`, when the host supplies one
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    let source = match override_toml {
        Some(s) if !s.trim().is_empty() => s,
        _ => DEFAULT_CONFIG,
    };
    let config: AppConfig = toml::from_str(source)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chat.reply_delay_ms, 1500);
        assert_eq!(config.voice.listen_timeout_ms, 3000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[chat]\nreply_delay_ms = 10\n")).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.voice, VoiceConfig::default());
        assert_eq!(config.dashboard.equipment_units, 24);
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(load_config(Some("  ")).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[chat]\nreply_delay_ms = \"soon\"\n")).is_err());
    }
}
