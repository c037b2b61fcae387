use crate::error::{OctaviaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OctaviaConfig {
    pub render: RenderConfig,
    pub server: ServerConfig,
    /// Policy used when a request names none.
    pub default_policy: String,
}

/// Presentation options handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Radius of the 1s ring.
    pub base_radius: f64,
    /// Radius added per place value.
    pub ring_spacing: f64,
    pub guide_width: f64,
    pub guide_alpha: f64,
    pub segment_width: f64,
    pub segment_color: String,
    pub guide_color: String,
    pub dot_color: String,
    pub dot_radius: f64,
    /// SVG user units per drawing unit.
    pub scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl OctaviaConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let r = &self.render;
        if !(r.base_radius > 0.0) || !(r.ring_spacing > 0.0) || !(r.scale > 0.0) {
            return Err(OctaviaError::Config(
                "base_radius, ring_spacing and scale must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&r.guide_alpha) {
            return Err(OctaviaError::Config(format!(
                "guide_alpha {} outside 0..=1",
                r.guide_alpha
            )));
        }
        Ok(())
    }
}

impl Default for OctaviaConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            server: ServerConfig::default(),
            default_policy: "compact".into(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_radius: 1.3,
            ring_spacing: 0.65,
            guide_width: 1.0,
            guide_alpha: 0.18,
            segment_width: 5.0,
            segment_color: "#d24a3a".into(),
            guide_color: "#9bb3c7".into(),
            dot_color: "#333".into(),
            dot_radius: 0.06,
            scale: 100.0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}
