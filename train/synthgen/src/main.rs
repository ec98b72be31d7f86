use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use crate::{config::GeneratorConfig, generator::DatasetGenerator, palette::Palette};

mod config;
mod generator;
mod io;
mod layout;
mod palette;
mod record;

#[derive(Parser, Debug)]
#[command(name = "synthgen")]
#[command(version, about = "Synthesizes labelled shape images for object-detector training")]
struct Cli {
    /// TOML file with generator settings; flags below override it
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root directory for the class list and generated images
    #[arg(long, short = 'o', value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Run seed every image seed is derived from
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a training dataset (default)
    Generate {
        /// Batches to generate, each with its own color scheme
        #[arg(long)]
        iterations: Option<u32>,

        /// Images per shape kind in every batch
        #[arg(long)]
        per_shape: Option<u32>,

        /// Outline each label box on the written images
        #[arg(long, action = ArgAction::SetTrue)]
        draw_boxes: bool,
    },
    /// Render every shape once with its box drawn, for inspection
    Preview {
        #[arg(long, value_name = "DIR", default_value = "all_shapes")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let command = cli.command.unwrap_or(Command::Generate {
        iterations: None,
        per_shape: None,
        draw_boxes: false,
    });
    if let Command::Generate {
        iterations,
        per_shape,
        draw_boxes,
    } = &command
    {
        if let Some(n) = iterations {
            config.iterations = *n;
        }
        if let Some(n) = per_shape {
            config.images_per_shape = *n;
        }
        config.draw_bounding_box |= *draw_boxes;
    }

    config.validate().context("invalid generator settings")?;
    let palette = Palette::standard().context("building color palette")?;
    let mut generator = DatasetGenerator::new(&config, &palette);

    let summary = match command {
        Command::Generate { .. } => generator.run(),
        Command::Preview { dir } => generator.preview(dir),
    }
    .context("dataset generation failed")?;

    log::info!(
        "done: {} images in {}",
        summary.images,
        summary.images_dir.display()
    );
    Ok(())
}
