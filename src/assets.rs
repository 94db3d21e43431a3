// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Asset discovery
//!
//! Enumerates the asset folder once at startup. Missing or unreadable
//! folders produce empty sets; nothing here is fatal.

use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::AssetsConfig;

/// A raw project text file, not yet decoded
#[derive(Debug, Clone)]
pub struct TextAsset {
    /// Path relative to the asset root, `/`-separated
    pub id: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Everything found under the asset root
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    pub hero: Option<PathBuf>,
    /// Gallery candidates, hero excluded
    pub images: Vec<PathBuf>,
    pub backgrounds: Vec<PathBuf>,
    pub biography: Vec<PathBuf>,
    pub project_texts: Vec<TextAsset>,
}

/// Eager loader for the portfolio asset layout
pub struct AssetLoader<'a> {
    config: &'a AssetsConfig,
}

impl<'a> AssetLoader<'a> {
    pub fn new(config: &'a AssetsConfig) -> Self {
        Self { config }
    }

    /// Enumerate every asset category
    pub fn load(&self) -> AssetSet {
        let root = &self.config.root;
        info!("Loading assets from {:?}", root);

        let (hero, images) = self.gallery_images();
        if hero.is_none() {
            warn!("Hero image '{}' not found in {:?}", self.config.hero_image, root);
        }

        let set = AssetSet {
            hero,
            images,
            backgrounds: find_files(&self.config.backgrounds_path(), "*", &self.config.carousel_formats),
            biography: find_files(&self.config.biography_path(), "*", &self.config.carousel_formats),
            project_texts: self.project_texts(),
        };

        info!(
            "Found {} gallery images, {} backgrounds, {} biography photos, {} project files",
            set.images.len(),
            set.backgrounds.len(),
            set.biography.len(),
            set.project_texts.len()
        );

        set
    }

    /// Flat root images, split into the hero and the rest.
    ///
    /// Image names are unique: when several files share a stem (`a.jpg`,
    /// `a.JPG`), the first by path wins.
    fn gallery_images(&self) -> (Option<PathBuf>, Vec<PathBuf>) {
        let mut hero = None;
        let mut images = Vec::new();
        let mut seen = HashSet::new();

        for path in find_files(&self.config.root, "*", &self.config.gallery_formats) {
            let stem = file_stem(&path);
            if !seen.insert(stem.clone()) {
                warn!("Skipping {:?}: another image is already named '{}'", path, stem);
                continue;
            }
            if stem == self.config.hero_image {
                hero = Some(path);
            } else {
                images.push(path);
            }
        }

        (hero, images)
    }

    fn project_texts(&self) -> Vec<TextAsset> {
        let dir = self.config.projects_path();
        let mut texts = Vec::new();

        for path in find_files(&dir, "**/*", &["txt".to_string()]) {
            let id = relative_id(&self.config.root, &path);
            match std::fs::read(&path) {
                Ok(bytes) => texts.push(TextAsset { id, path, bytes }),
                Err(e) => warn!("Skipping unreadable project file {:?}: {}", path, e),
            }
        }

        texts
    }
}

/// File stem as a string, lossy for non-UTF-8 names
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Files under `dir` matching `{dir}/{prefix}.{ext}` for each extension.
///
/// Case-insensitive on the extension, sorted, duplicates removed.
pub fn find_files(dir: &Path, prefix: &str, extensions: &[String]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!("Asset folder {:?} missing, treating as empty", dir);
        return Vec::new();
    }

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let base = Pattern::escape(&dir.to_string_lossy());

    let mut files = Vec::new();
    for ext in extensions {
        let pattern = format!("{}/{}.{}", base, prefix, Pattern::escape(ext));
        let paths = match glob::glob_with(&pattern, options) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Bad asset pattern {}: {}", pattern, e);
                continue;
            }
        };

        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Cannot read {:?}: {}", e.path(), e.error()),
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn relative_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
