// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Ordered gallery and its derived views

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::assets::file_stem;
use crate::classify::{classify, Category};

/// A classified gallery photograph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub src: PathBuf,
    pub name: String,
    pub category: Category,
    pub alt: String,
}

impl ImageAsset {
    /// Classify an image file by its stem
    pub fn from_path(path: &Path) -> Self {
        let name = file_stem(path);
        let category = classify(&name);
        Self {
            src: path.to_path_buf(),
            name,
            category,
            alt: category.alt_text().to_string(),
        }
    }
}

/// Category precedence first, then a locale-style name comparison
pub fn gallery_order(a: &ImageAsset, b: &ImageAsset) -> Ordering {
    a.category
        .precedence()
        .cmp(&b.category.precedence())
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Case- and accent-insensitive comparison, raw text as the tie breaker
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// One page of the gallery
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// 1-based page number as requested
    pub number: usize,
    pub total_pages: usize,
    pub items: &'a [ImageAsset],
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1 && self.number <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.number >= 1 && self.number < self.total_pages
    }
}

/// The full ordered gallery, immutable once assembled
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Gallery {
    images: Vec<ImageAsset>,
}

impl Gallery {
    /// Classify and order image files
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        Self::assemble(paths.iter().map(|p| ImageAsset::from_path(p)).collect())
    }

    /// Order already classified images
    pub fn assemble(mut images: Vec<ImageAsset>) -> Self {
        images.sort_by(gallery_order);
        Self { images }
    }

    pub fn images(&self) -> &[ImageAsset] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&ImageAsset> {
        self.images.iter().find(|i| i.name == name)
    }

    /// Index of an image in the ordered sequence
    pub fn position(&self, name: &str) -> Option<usize> {
        self.images.iter().position(|i| i.name == name)
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.images.len().div_ceil(page_size)
    }

    /// Page `number` (1-based). Page 0 and pages past the end are empty.
    pub fn page(&self, number: usize, page_size: usize) -> Page<'_> {
        let total_pages = self.total_pages(page_size);
        let items: &[ImageAsset] = if number == 0 || number > total_pages {
            &[]
        } else {
            let start = (number - 1) * page_size;
            let end = (start + page_size).min(self.images.len());
            &self.images[start..end]
        };

        Page { number, total_pages, items }
    }

    /// Up to `count` distinct images chosen at random
    pub fn preview<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<ImageAsset> {
        self.images.choose_multiple(rng, count).cloned().collect()
    }

    /// Count of images per category, in precedence order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.images.iter().filter(|i| i.category == c).count()))
            .collect()
    }
}

/// Current page and enlarged image of the gallery view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub page: usize,
    pub lightbox: Option<String>,
    page_size: usize,
}

impl GalleryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            lightbox: None,
            page_size,
        }
    }

    /// Move back one page; stays put on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one page; stays put on the last page
    pub fn next_page(&mut self, gallery: &Gallery) -> bool {
        if self.page < gallery.total_pages(self.page_size) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, page: usize, gallery: &Gallery) -> bool {
        let total = gallery.total_pages(self.page_size);
        if (1..=total).contains(&page) {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Enlarge an image from the gallery
    pub fn open(&mut self, name: &str, gallery: &Gallery) -> bool {
        if gallery.find(name).is_some() {
            self.lightbox = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Enlarge an image picked on the home preview.
    ///
    /// The page is left alone; the lightbox overlays whatever page is shown.
    pub fn open_from_home(&mut self, image: &ImageAsset, gallery: &Gallery) -> bool {
        self.open(&image.name, gallery)
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn current<'a>(&self, gallery: &'a Gallery) -> Page<'a> {
        gallery.page(self.page, self.page_size)
    }
}
