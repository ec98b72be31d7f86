//! Finding complete samples: files that share a stem in one directory and
//! together hold an image and its annotations.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::read_dir,
    io,
    path::{Path, PathBuf},
};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const ANNOTATION_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Which annotation files a sample must carry besides its image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnnotationRule {
    /// At least one of the annotation extensions.
    #[default]
    Any,
    /// Every annotation extension.
    All,
}

/// A sample: its directory and the file stem shared by its files.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleKey {
    pub dir: PathBuf,
    pub stem: String,
}

/// Every regular file under `root`, recursively, in path order.
pub fn collect_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

pub fn group_by_stem(files: Vec<PathBuf>) -> BTreeMap<SampleKey, Vec<PathBuf>> {
    let mut groups: BTreeMap<SampleKey, Vec<PathBuf>> = BTreeMap::new();
    for path in files {
        let (Some(dir), Some(stem)) = (path.parent(), path.file_stem().and_then(|s| s.to_str()))
        else {
            log::warn!("skipping {}: no usable stem", path.display());
            continue;
        };
        let key = SampleKey {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
        };
        groups.entry(key).or_default().push(path);
    }
    groups
}

pub fn is_complete(files: &[PathBuf], rule: AnnotationRule) -> bool {
    let extensions: BTreeSet<String> = files.iter().filter_map(|p| extension(p)).collect();

    let has_image = IMAGE_EXTENSIONS.iter().any(|e| extensions.contains(*e));
    let has_annotations = match rule {
        AnnotationRule::Any => ANNOTATION_EXTENSIONS.iter().any(|e| extensions.contains(*e)),
        AnnotationRule::All => ANNOTATION_EXTENSIONS.iter().all(|e| extensions.contains(*e)),
    };

    has_image && has_annotations
}

/// Complete samples grouped by directory, stems sorted within each.
/// Incomplete stems are dropped without error.
pub fn complete_samples(
    files: Vec<PathBuf>,
    rule: AnnotationRule,
) -> BTreeMap<PathBuf, Vec<(String, Vec<PathBuf>)>> {
    let mut by_dir: BTreeMap<PathBuf, Vec<(String, Vec<PathBuf>)>> = BTreeMap::new();

    for (key, group) in group_by_stem(files) {
        if !is_complete(&group, rule) {
            log::debug!("dropping incomplete sample {}/{}", key.dir.display(), key.stem);
            continue;
        }
        by_dir.entry(key.dir).or_default().push((key.stem, group));
    }
    by_dir
}
