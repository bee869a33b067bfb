//! Runtime configuration.
//!
//! Resolution order, later layers win:
//!
//! 1. built-in defaults
//! 2. JSON file named by `FLAPPY_CONFIG` (every field optional)
//! 3. environment variables (`FLAPPY_SEED`, `FLAPPY_FRAME_MS`, `FLAPPY_SOUND`,
//!    `FLAPPY_LOG_PATH`, `FLAPPY_LOG`, `FLAPPY_PX_PER_COL`, `FLAPPY_PX_PER_ROW`)
//!
//! Unparseable numeric environment values are ignored, like an unset variable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::term::{DEFAULT_PX_PER_COL, DEFAULT_PX_PER_ROW, MAX_PX_PER_CELL};
use crate::types::{Tuning, FRAME_MS};

/// Fully resolved settings for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Pipe generator seed.
    pub seed: u64,
    /// Target frame interval in milliseconds.
    pub frame_ms: u32,
    /// Ring the terminal bell on every flap.
    pub sound: bool,
    /// Log file. Logging is off without one (the terminal is in raw mode).
    pub log_path: Option<PathBuf>,
    /// `env_logger` filter directive, e.g. `info` or `flappy_tui_core=trace`.
    pub log_level: String,
    pub px_per_col: u32,
    pub px_per_row: u32,
    pub tuning: Tuning,
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    seed: Option<u64>,
    frame_ms: Option<u32>,
    sound: Option<bool>,
    log_path: Option<PathBuf>,
    log_level: Option<String>,
    px_per_col: Option<u32>,
    px_per_row: Option<u32>,
    tuning: Option<Tuning>,
}

impl AppConfig {
    /// Built-in defaults with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            frame_ms: FRAME_MS,
            sound: true,
            log_path: None,
            log_level: "info".to_string(),
            px_per_col: DEFAULT_PX_PER_COL,
            px_per_row: DEFAULT_PX_PER_ROW,
            tuning: Tuning::default(),
        }
    }

    /// Load from the process environment. Without `FLAPPY_SEED` the seed is
    /// the current time, so every session gets different pipes.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), time_seed())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, default_seed: u64) -> Result<Self> {
        let mut cfg = Self::with_seed(default_seed);

        if let Some(path) = lookup("FLAPPY_CONFIG").filter(|p| !p.trim().is_empty()) {
            let file = read_file_config(Path::new(&path))?;
            cfg.apply_file(file);
        }

        if let Some(seed) = parse_var(&lookup, "FLAPPY_SEED") {
            cfg.seed = seed;
        }
        if let Some(ms) = parse_var(&lookup, "FLAPPY_FRAME_MS") {
            cfg.frame_ms = ms;
        }
        if let Some(v) = lookup("FLAPPY_SOUND") {
            cfg.sound = !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }
        if let Some(path) = lookup("FLAPPY_LOG_PATH").filter(|p| !p.trim().is_empty()) {
            cfg.log_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("FLAPPY_LOG").filter(|l| !l.trim().is_empty()) {
            cfg.log_level = level;
        }
        if let Some(px) = parse_var(&lookup, "FLAPPY_PX_PER_COL") {
            cfg.px_per_col = px;
        }
        if let Some(px) = parse_var(&lookup, "FLAPPY_PX_PER_ROW") {
            cfg.px_per_row = px;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config file body and layer it over the defaults.
    pub fn from_json_str(json: &str, default_seed: u64) -> Result<Self> {
        let file: FileConfig = serde_json::from_str(json).context("invalid config JSON")?;
        let mut cfg = Self::with_seed(default_seed);
        cfg.apply_file(file);
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(seed) = file.seed {
            self.seed = seed;
        }
        if let Some(ms) = file.frame_ms {
            self.frame_ms = ms;
        }
        if let Some(sound) = file.sound {
            self.sound = sound;
        }
        if let Some(path) = file.log_path {
            self.log_path = Some(path);
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        if let Some(px) = file.px_per_col {
            self.px_per_col = px;
        }
        if let Some(px) = file.px_per_row {
            self.px_per_row = px;
        }
        if let Some(tuning) = file.tuning {
            self.tuning = tuning;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            bail!("frame_ms must be at least 1");
        }
        for (name, px) in [("px_per_col", self.px_per_col), ("px_per_row", self.px_per_row)] {
            if !(1..=MAX_PX_PER_CELL).contains(&px) {
                bail!("{} must be in 1..={}, got {}", name, MAX_PX_PER_CELL, px);
            }
        }

        let t = &self.tuning;
        match t.pipe_width.checked_add(t.pipe_spacing) {
            Some(0) => bail!("pipe_width + pipe_spacing must be positive"),
            None => bail!("pipe_width + pipe_spacing overflows"),
            Some(_) => {}
        }
        for (name, v) in [
            ("start_distance", t.start_distance),
            ("gravity", t.gravity),
            ("flap_velocity", t.flap_velocity),
            ("scroll_speed", t.scroll_speed),
        ] {
            if !v.is_finite() {
                bail!("tuning.{} must be finite, got {}", name, v);
            }
        }
        if t.scroll_speed < 0.0 {
            bail!("tuning.scroll_speed must not be negative, got {}", t.scroll_speed);
        }
        Ok(())
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("parsing config file {}", path.display()))
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}
