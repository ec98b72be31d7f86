use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shapes::BoxPadding;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("shape size range {min}..{max} is empty or starts at zero")]
    BadSizeRange { min: u32, max: u32 },
}

/// Settings for one dataset generation run.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// out_dir = "datasets/shapes"
/// images_per_shape = 50
/// iterations = 4
/// box_padding = "max-corner"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf, // "shapes_neural_network"
    pub network_name: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub iterations: u32,
    pub images_per_shape: u32,
    pub stroke_width: u32,
    pub canvas_padding: u32,
    /// Shape sizes are drawn from `min_size..max_size`.
    pub min_size: u32,
    pub max_size: u32,
    pub draw_bounding_box: bool, // debug overlay on the written images
    pub box_padding: BoxPadding,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("shapes_neural_network"),
            network_name: "shapes_neural_network".to_string(),
            canvas_width: 640,
            canvas_height: 480,
            iterations: 1,
            images_per_shape: 1,
            stroke_width: 4,
            canvas_padding: 20,
            min_size: 64,
            max_size: 128,
            draw_bounding_box: false,
            box_padding: BoxPadding::Symmetric,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.min_size == 0 || self.min_size >= self.max_size {
            return Err(ConfigError::BadSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    pub fn images_dir(&self) -> PathBuf {
        self.out_dir.join("generated_images")
    }

    pub fn names_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.names", self.network_name))
    }
}
