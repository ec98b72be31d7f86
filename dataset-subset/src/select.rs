use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{SeedableRng, rngs::SmallRng, seq::IndexedRandom};

use crate::{
    error::SubsetError,
    scan::{AnnotationRule, collect_files, complete_samples},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubsetOptions {
    pub fraction: f64,
    pub seed: u64,
    pub rule: AnnotationRule,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubsetSummary {
    pub files_scanned: usize,
    pub valid_samples: usize,
    pub directories: usize,
    pub samples_selected: usize,
    pub files_copied: usize,
}

/// Resolves `path` as far as the filesystem allows, so that overlap checks
/// see through `.` and symlinks even when the leaf does not exist yet.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    if let Ok(p) = path.canonicalize() {
        return Ok(p);
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(resolve(parent)?.join(name))
        }
        _ => std::path::absolute(path),
    }
}

/// Copies a random `fraction` of the complete samples of every directory
/// under `source` into `dest/<directory name>/`.
///
/// `dest` is removed and recreated first. The same seed over the same tree
/// selects the same samples.
pub fn copy_fraction(
    source: &Path,
    dest: &Path,
    opts: &SubsetOptions,
) -> Result<SubsetSummary, SubsetError> {
    if !(opts.fraction > 0.0 && opts.fraction <= 1.0) {
        return Err(SubsetError::InvalidFraction(opts.fraction));
    }
    if !source.is_dir() {
        return Err(SubsetError::MissingSource(source.to_path_buf()));
    }

    let src = source.canonicalize()?;
    let dst = resolve(dest)?;
    if dst.starts_with(&src) || src.starts_with(&dst) {
        return Err(SubsetError::OverlappingDestination { src, dest: dst });
    }

    log::info!("clearing {}", dst.display());
    if dst.exists() {
        fs::remove_dir_all(&dst)?;
    }
    fs::create_dir_all(&dst)?;

    let files = collect_files(&src)?;
    let mut summary = SubsetSummary {
        files_scanned: files.len(),
        ..SubsetSummary::default()
    };
    log::info!("found {} files in {}", summary.files_scanned, src.display());

    let samples = complete_samples(files, opts.rule);
    summary.directories = samples.len();
    summary.valid_samples = samples.values().map(Vec::len).sum();
    log::info!(
        "{} complete samples across {} directories",
        summary.valid_samples,
        summary.directories
    );

    let mut rng = SmallRng::seed_from_u64(opts.seed);
    for (dir, stems) in &samples {
        let take = (stems.len() as f64 * opts.fraction).floor() as usize;
        let target = match dir.file_name() {
            Some(name) => dst.join(name),
            None => dst.clone(),
        };
        fs::create_dir_all(&target)?;

        let mut copied = 0;
        for (stem, group) in stems.choose_multiple(&mut rng, take) {
            for file in group {
                let Some(name) = file.file_name() else {
                    continue;
                };
                fs::copy(file, target.join(name))?;
                copied += 1;
            }
            log::debug!("selected {stem} from {}", dir.display());
        }

        log::info!("copied {copied} files to {}", target.display());
        summary.samples_selected += take;
        summary.files_copied += copied;
    }

    log::info!(
        "copied {} files ({} samples) to {}",
        summary.files_copied,
        summary.samples_selected,
        dst.display()
    );
    Ok(summary)
}
