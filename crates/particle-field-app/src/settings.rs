//! Settings loading: JSON file, named preset, or defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use particle_field_core::config::FieldConfig;
use particle_field_core::types::Rgba;
use particle_field_sim::SimConfig;

/// Path to a JSON settings file.
pub const CONFIG_ENV: &str = "PARTICLE_FIELD_CONFIG";

/// Preset name (`classic` or `toggle`) used when no settings file is given.
pub const PRESET_ENV: &str = "PARTICLE_FIELD_PRESET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sim: SimConfig,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub background: Rgba,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Particle Field".into(),
            width: 1280.0,
            height: 800.0,
            background: Rgba::opaque(0, 0, 0),
        }
    }
}

impl Settings {
    /// Resolve settings from `PARTICLE_FIELD_CONFIG` / `PARTICLE_FIELD_PRESET`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::resolve(
            std::env::var(CONFIG_ENV).ok(),
            std::env::var(PRESET_ENV).ok(),
        )
    }

    /// A settings file wins over a preset; with neither, the defaults apply.
    pub fn resolve(path: Option<String>, preset: Option<String>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load(Path::new(&path));
        }

        let mut settings = Self::default();
        if let Some(name) = preset {
            match FieldConfig::preset(&name) {
                Some(field) => {
                    info!(preset = %name, "using preset");
                    settings.sim.field = field;
                }
                None => warn!(preset = %name, "unknown preset, falling back to classic"),
            }
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings =
            Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let settings: Settings =
            serde_json::from_str(text).context("failed to parse settings json")?;
        settings
            .sim
            .field
            .validate()
            .context("invalid field configuration")?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_field_core::enums::ForcePolicy;

    #[test]
    fn test_defaults_without_env() {
        let settings = Settings::resolve(None, None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.sim.field, FieldConfig::classic());
        assert_eq!(settings.sim.seed, 42);
    }

    #[test]
    fn test_preset_selects_field() {
        let settings = Settings::resolve(None, Some("toggle".into())).unwrap();
        assert_eq!(settings.sim.field.policy, ForcePolicy::Toggleable);
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let settings = Settings::resolve(None, Some("swirl".into())).unwrap();
        assert_eq!(settings.sim.field, FieldConfig::classic());
    }

    #[test]
    fn test_parse_partial_document() {
        let settings = Settings::parse(
            r#"{"sim": {"seed": 7, "field": {"escape_radius": 150.0}}, "window": {"title": "demo"}}"#,
        )
        .unwrap();
        assert_eq!(settings.sim.seed, 7);
        assert_eq!(settings.sim.field.escape_radius, 150.0);
        assert_eq!(settings.sim.field.particle_count, 1500);
        assert_eq!(settings.window.title, "demo");
        assert_eq!(settings.window.width, 1280.0);
    }

    #[test]
    fn test_parse_rejects_invalid_field() {
        let err = Settings::parse(r#"{"sim": {"field": {"escape_radius": -5.0}}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("escape radius"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Settings::parse("{ not json").is_err());
    }

    #[test]
    fn test_file_wins_over_preset() {
        let path = std::env::temp_dir().join(format!(
            "particle-field-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"sim": {"seed": 99}}"#).unwrap();

        let settings = Settings::resolve(
            Some(path.to_string_lossy().into_owned()),
            Some("toggle".into()),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.sim.seed, 99);
        assert_eq!(settings.sim.field.policy, ForcePolicy::RepelOnly);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Settings::load(Path::new("/nonexistent/particle-field.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/particle-field.json"));
    }
}
