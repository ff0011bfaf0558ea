//! Document assembly configuration
//!
//! Defaults reproduce the fixed values of the object model (0.5 cm indent
//! step, 0.5 cm label distance, `.5cm` image bullets, `Pictures/` folder),
//! so a document built with `OdtConfig::default()` needs no config file.
//!
//! # Example
//!
//! ```
//! use odtkit::OdtConfig;
//!
//! let config = OdtConfig::from_toml(r#"
//! [lists]
//! indent_step_cm = 0.75
//!
//! [meta]
//! title = "Quarterly report"
//! "#)?;
//!
//! assert_eq!(config.lists.indent_step_cm, 0.75);
//! assert_eq!(config.lists.min_label_distance_cm, 0.5);
//! # Ok::<(), odtkit::OdtError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OdtConfig {
    /// List style defaults
    #[serde(default)]
    pub lists: ListDefaults,

    /// Image handling
    #[serde(default)]
    pub images: ImageDefaults,

    /// Values written to meta.xml
    #[serde(default)]
    pub meta: MetaConfig,
}

/// Defaults for derived list level properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListDefaults {
    /// `text:space-before` is `level * indent_step_cm`
    pub indent_step_cm: f64,
    /// `text:min-label-distance` of every derived level
    pub min_label_distance_cm: f64,
    /// Default width of image bullets
    pub image_width: String,
    /// Default height of image bullets
    pub image_height: String,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            indent_step_cm: 0.5,
            min_label_distance_cm: 0.5,
            image_width: ".5cm".to_string(),
            image_height: ".5cm".to_string(),
        }
    }
}

/// Image packaging defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    /// Folder inside the package holding packaged pictures
    pub pictures_dir: String,
    /// `draw:z-index` given to positioned frames
    pub z_index: u32,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            pictures_dir: "Pictures".to_string(),
            z_index: 1,
        }
    }
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// `meta:generator`
    pub generator: String,
    /// `dc:title`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `meta:initial-creator` and `dc:creator`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// `dc:language`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            generator: format!("odtkit/{}", env!("CARGO_PKG_VERSION")),
            title: None,
            creator: None,
            language: None,
        }
    }
}

impl OdtConfig {
    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml(&text)
    }

    /// Folder-qualified path of a packaged picture
    pub fn picture_path(&self, name: &str) -> String {
        format!("{}/{}", self.images.pictures_dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OdtConfig::default();
        assert_eq!(config.lists.indent_step_cm, 0.5);
        assert_eq!(config.lists.min_label_distance_cm, 0.5);
        assert_eq!(config.lists.image_width, ".5cm");
        assert_eq!(config.picture_path("logo.png"), "Pictures/logo.png");
        assert!(config.meta.generator.starts_with("odtkit/"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = OdtConfig::from_toml("").unwrap();
        assert_eq!(config, OdtConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = OdtConfig::from_toml(
            r#"
[images]
pictures_dir = "media"
"#,
        )
        .unwrap();
        assert_eq!(config.images.pictures_dir, "media");
        assert_eq!(config.images.z_index, 1);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = OdtConfig::default();
        config.meta.title = Some("Report".to_string());
        config.lists.indent_step_cm = 1.25;

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[lists]"));
        assert!(toml_str.contains("title = \"Report\""));

        let parsed = OdtConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = OdtConfig::from_toml("[lists]\nindent_step_cm = \"wide\"").unwrap_err();
        assert!(matches!(err, crate::OdtError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odtkit.toml");
        std::fs::write(&path, "[meta]\ncreator = \"Ada\"\n").unwrap();

        let config = OdtConfig::load(&path).unwrap();
        assert_eq!(config.meta.creator.as_deref(), Some("Ada"));
    }
}
