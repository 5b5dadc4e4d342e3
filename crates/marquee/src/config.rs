//! Configuration management for Marquee.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use vitrine_common::VitrineError;
use vitrine_common::constants::{
    CONNECTION_DISTANCE, DEFAULT_INTAKE_URL, DEFAULT_SUBJECT, DEFAULT_SUBMIT_LABEL,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, FRAME_INTERVAL_MS, MOBILE_BREAKPOINT_PX,
    PARTICLE_COUNT,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Contact intake settings
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Particle field settings
    #[serde(default)]
    pub particles: ParticleConfig,

    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
}

/// Intake-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Intake endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Static credential attached to every submission
    #[serde(default)]
    pub access_key: String,

    /// Fixed subject line
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Label the submit control starts with
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: String::new(),
            subject: default_subject(),
            submit_label: default_submit_label(),
        }
    }
}

/// Particle field configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParticleConfig {
    /// Number of simulated points
    #[serde(default = "default_particle_count")]
    pub count: usize,

    /// Maximum connection distance in surface units
    #[serde(default = "default_connection_distance")]
    pub connection_distance: f32,

    /// Frame tick interval in milliseconds
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,

    /// Where to write the latest frame as SVG (disabled if unset)
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,

    /// Write a snapshot every N frames
    #[serde(default = "default_snapshot_every")]
    pub snapshot_every_frames: u64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: default_particle_count(),
            connection_distance: default_connection_distance(),
            frame_interval_ms: default_frame_interval(),
            snapshot_path: None,
            snapshot_every_frames: default_snapshot_every(),
        }
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ViewportConfig {
    /// Initial viewport width
    #[serde(default = "default_viewport_width")]
    pub width: f32,

    /// Initial viewport height
    #[serde(default = "default_viewport_height")]
    pub height: f32,

    /// Width at or below which the nav panel auto-collapses
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint_px: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
            mobile_breakpoint_px: default_breakpoint(),
        }
    }
}

// Default value functions
fn default_endpoint() -> String { DEFAULT_INTAKE_URL.to_string() }
fn default_subject() -> String { DEFAULT_SUBJECT.to_string() }
fn default_submit_label() -> String { DEFAULT_SUBMIT_LABEL.to_string() }
fn default_particle_count() -> usize { PARTICLE_COUNT }
fn default_connection_distance() -> f32 { CONNECTION_DISTANCE }
fn default_frame_interval() -> u64 { FRAME_INTERVAL_MS }
fn default_snapshot_every() -> u64 { 300 }
fn default_viewport_width() -> f32 { DEFAULT_VIEWPORT_WIDTH }
fn default_viewport_height() -> f32 { DEFAULT_VIEWPORT_HEIGHT }
fn default_breakpoint() -> u32 { MOBILE_BREAKPOINT_PX }

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &crate::Args) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            tracing::warn!("Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref endpoint) = args.endpoint {
            config.intake.endpoint = endpoint.clone();
        }
        if let Some(ref access_key) = args.access_key {
            config.intake.access_key = access_key.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), VitrineError> {
        if self.particles.count == 0 {
            return Err(VitrineError::Config(
                "particles.count must be at least 1".to_string(),
            ));
        }
        if self.particles.connection_distance <= 0.0 {
            return Err(VitrineError::Config(
                "particles.connection_distance must be positive".to_string(),
            ));
        }
        if self.particles.frame_interval_ms == 0 {
            return Err(VitrineError::Config(
                "particles.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.particles.snapshot_every_frames == 0 {
            return Err(VitrineError::Config(
                "particles.snapshot_every_frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            intake: IntakeConfig::default(),
            particles: ParticleConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.intake.endpoint, DEFAULT_INTAKE_URL);
        assert_eq!(config.intake.subject, DEFAULT_SUBJECT);
        assert!(config.intake.access_key.is_empty());
        assert_eq!(config.particles.count, 50);
        assert_eq!(config.particles.connection_distance, 150.0);
        assert_eq!(config.particles.frame_interval_ms, 16);
        assert_eq!(config.viewport.mobile_breakpoint_px, 992);
    }

    #[test]
    fn test_cli_overrides_win() {
        use clap::Parser;

        let args = crate::Args::parse_from([
            "marquee",
            "--endpoint",
            "http://localhost:9999/submit",
            "--access-key",
            "cli-key",
        ]);
        let config = AppConfig::load("does-not-exist.toml", &args).unwrap();
        assert_eq!(config.intake.endpoint, "http://localhost:9999/submit");
        assert_eq!(config.intake.access_key, "cli-key");
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = AppConfig::default();
        config.particles.count = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.particles.connection_distance = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.particles.snapshot_every_frames = 0;
        assert!(config.validate().is_err());
    }
}
