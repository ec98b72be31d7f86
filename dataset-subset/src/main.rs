use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use crate::{
    scan::AnnotationRule,
    select::{SubsetOptions, copy_fraction},
};

mod error;
mod scan;
mod select;

#[derive(Parser, Debug)]
#[command(name = "dataset-subset")]
#[command(version, about = "Copies a reproducible random fraction of a labelled dataset")]
struct Cli {
    /// Dataset tree to sample from
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Directory to copy the subset into; removed and recreated on every run
    #[arg(value_name = "DEST")]
    dest: PathBuf,

    /// Share of complete samples to take from each directory, in (0, 1]
    #[arg(long, short = 'f', default_value_t = 0.1)]
    fraction: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Require both .txt and .json annotations next to each image
    #[arg(long, action = ArgAction::SetTrue)]
    require_all_annotations: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let opts = SubsetOptions {
        fraction: cli.fraction,
        seed: cli.seed,
        rule: if cli.require_all_annotations {
            AnnotationRule::All
        } else {
            AnnotationRule::Any
        },
    };

    let summary = copy_fraction(&cli.source, &cli.dest, &opts).with_context(|| {
        format!(
            "sampling {} into {}",
            cli.source.display(),
            cli.dest.display()
        )
    })?;

    log::info!(
        "{} of {} samples copied ({} files)",
        summary.samples_selected,
        summary.valid_samples,
        summary.files_copied
    );
    Ok(())
}
