use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::Color;
use crate::error::Result;
use crate::types::OutputFormat;

/// Compositing options, suitable for JSON presets and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Extra pixels of gradient backdrop, split evenly between opposite sides; <= 0 disables
    pub padding: i32,
    /// Corner radius in pixels; <= 0 disables rounding
    pub radius: i32,
    /// Clockwise rotation applied before cutting bands, in degrees
    pub angle: i32,
    pub format: OutputFormat,
    /// Output path without extension
    pub output_name: String,
    /// Gradient start; None samples the first image
    pub gradient_from: Option<Color>,
    /// Gradient end; None samples the last image
    pub gradient_to: Option<Color>,
    /// Gradient direction in degrees; None means `180 - angle`
    pub gradient_angle: Option<i32>,
    pub images: Vec<PathBuf>,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            padding: 80,
            radius: 20,
            angle: 9,
            format: OutputFormat::Png,
            output_name: "output".to_string(),
            gradient_from: None,
            gradient_to: None,
            gradient_angle: None,
            images: Vec::new(),
        }
    }
}

impl StripOptions {
    pub fn effective_gradient_angle(&self) -> i32 {
        self.gradient_angle.unwrap_or(180 - self.angle)
    }

    /// `<output_name>.<extension>`
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.output_name, self.format.extension()))
    }

    pub fn load_preset(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let options: StripOptions = serde_json::from_str(&json)?;
        info!("Loaded preset from {:?}", path);
        Ok(options)
    }

    pub fn save_preset(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Saved preset to {:?}", path);
        Ok(())
    }
}
