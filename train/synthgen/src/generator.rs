use std::{fs::File, io::BufWriter, path::PathBuf};

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rand_xoshiro::SplitMix64;
use shapes::{
    BoundingBox, Canvas, IVec2, RenderError, Shape, ShapeKind, Style, UVec2, create_canvas,
    render,
};
use thiserror::Error;

use crate::{
    config::GeneratorConfig,
    layout::{LayoutError, sample_origin, sample_size},
    palette::{ColorScheme, Palette},
    record::Annotation,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("writing image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("encoding manifest record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette has {0} colors, three distinct ones are needed")]
    PaletteTooSmall(usize),
}

/// One rendered image with its label, before anything is written.
pub struct Sample {
    pub kind: ShapeKind,
    pub seed: u64,
    pub canvas: Canvas,
    pub bbox: BoundingBox,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub images: usize,
    pub images_dir: PathBuf,
}

pub struct DatasetGenerator<'a> {
    pub config: &'a GeneratorConfig,
    pub palette: &'a Palette,
    /// Root the per-canvas-color directories and `labels.jsonl` go under.
    pub images_dir: PathBuf,
    pub(crate) writer: Option<BufWriter<File>>,
}

impl<'a> DatasetGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, palette: &'a Palette) -> Self {
        Self {
            config,
            palette,
            images_dir: config.images_dir(),
            writer: None,
        }
    }

    /// Full training run: class list, then `iterations` batches with a fresh
    /// random color scheme each.
    pub fn run(&mut self) -> Result<RunSummary, GenerateError> {
        self.init_output()?;
        self.write_class_names()?;

        let mut seeds = SplitMix64::seed_from_u64(self.config.seed);
        let mut rng = SmallRng::seed_from_u64(seeds.next_u64());

        let mut images = 0;
        for iteration in 0..self.config.iterations {
            let scheme = self
                .palette
                .pick_scheme(&mut rng)
                .ok_or(GenerateError::PaletteTooSmall(self.palette.len()))?;
            log::info!(
                "iteration {iteration}: {} shapes on {}",
                scheme.shape.name,
                scheme.canvas.name
            );

            let first_index = iteration * self.config.images_per_shape;
            images += self.generate_batch(
                &scheme,
                first_index,
                self.config.images_per_shape,
                self.config.draw_bounding_box,
                &mut seeds,
            )?;
        }

        self.finalize_output()?;
        log::info!("wrote {images} images under {}", self.images_dir.display());

        Ok(RunSummary {
            images,
            images_dir: self.images_dir.clone(),
        })
    }

    /// One image per shape in the first three palette colors, boxes drawn.
    pub fn preview(&mut self, dir: PathBuf) -> Result<RunSummary, GenerateError> {
        self.images_dir = dir;
        self.init_output()?;

        let scheme = self
            .palette
            .leading_scheme()
            .ok_or(GenerateError::PaletteTooSmall(self.palette.len()))?;
        let mut seeds = SplitMix64::seed_from_u64(self.config.seed);
        let images = self.generate_batch(&scheme, 0, 1, true, &mut seeds)?;

        self.finalize_output()?;
        Ok(RunSummary {
            images,
            images_dir: self.images_dir.clone(),
        })
    }

    fn generate_batch(
        &mut self,
        scheme: &ColorScheme,
        first_index: u32,
        per_shape: u32,
        overlay: bool,
        seeds: &mut SplitMix64,
    ) -> Result<usize, GenerateError> {
        let mut written = 0;
        for kind in ShapeKind::ALL {
            for i in first_index..first_index + per_shape {
                let seed = seeds.next_u64();
                let sample = self.generate_sample(kind, seed, scheme, overlay)?;
                self.save_sample(&sample, scheme, i)?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Renders a single `kind` instance. The same `seed` and scheme always
    /// give the same image and label.
    pub fn generate_sample(
        &self,
        kind: ShapeKind,
        seed: u64,
        scheme: &ColorScheme,
        overlay: bool,
    ) -> Result<Sample, GenerateError> {
        let cfg = self.config;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut canvas = create_canvas(cfg.canvas_width, cfg.canvas_height, scheme.canvas.color);

        let size = sample_size(kind, cfg.min_size..cfg.max_size, &mut rng);
        let mut origin = sample_origin(
            UVec2::new(cfg.canvas_width, cfg.canvas_height),
            cfg.canvas_padding,
            size,
            &mut rng,
        )?;
        // stars are drawn around their origin; shift it to the middle of the placed extent
        if kind == ShapeKind::Star {
            origin += IVec2::splat((size.x / 2) as i32);
        }
        let shape = Shape::new(kind, origin, size)?;

        let style = Style {
            fill: scheme.shape.color,
            stroke_width: cfg.stroke_width,
            padding: cfg.box_padding,
            overlay: overlay.then_some(scheme.overlay.color),
        };
        let bbox = render(&mut canvas, &shape, &style)?;
        let annotation = Annotation::from_box(kind, bbox, cfg.canvas_width, cfg.canvas_height);

        Ok(Sample {
            kind,
            seed,
            canvas,
            bbox,
            annotation,
        })
    }
}

impl Drop for DatasetGenerator<'_> {
    fn drop(&mut self) {
        let _ = self.finalize_output();
    }
}
