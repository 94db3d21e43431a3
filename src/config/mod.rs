// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for Folio

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Asset folder layout
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Gallery view settings
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Background/biography rotation
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Local preference storage
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Contact page details
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,
    /// File stem of the landing image, excluded from the gallery
    #[serde(default = "default_hero_image")]
    pub hero_image: String,
    #[serde(default = "default_backgrounds_dir")]
    pub backgrounds_dir: String,
    #[serde(default = "default_biography_dir")]
    pub biography_dir: String,
    #[serde(default = "default_projects_dir")]
    pub projects_dir: String,
    #[serde(default = "default_gallery_formats")]
    pub gallery_formats: Vec<String>,
    #[serde(default = "default_carousel_formats")]
    pub carousel_formats: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_preview_size")]
    pub preview_size: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CarouselConfig {
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PreferencesConfig {
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub instagram: Vec<String>,
    #[serde(default = "default_resume_path")]
    pub resume_path: PathBuf,
    #[serde(default = "default_resume_download_name")]
    pub resume_download_name: String,
    #[serde(default = "default_copy_confirmation")]
    pub copy_confirmation_secs: u64,
}

// Default value functions
fn default_assets_root() -> PathBuf { PathBuf::from("assets") }
fn default_hero_image() -> String { "IMG_9998".to_string() }
fn default_backgrounds_dir() -> String { "backgrounds".to_string() }
fn default_biography_dir() -> String { "biography".to_string() }
fn default_projects_dir() -> String { "projects".to_string() }
fn default_gallery_formats() -> Vec<String> { vec!["jpg".to_string()] }
fn default_carousel_formats() -> Vec<String> {
    vec!["jpg", "jpeg", "png"].into_iter().map(String::from).collect()
}
fn default_page_size() -> usize { 12 }
fn default_preview_size() -> usize { 3 }
fn default_interval() -> u64 { 60 }
fn default_preferences_path() -> PathBuf { PathBuf::from("folio_preferences.json") }
fn default_email() -> String { "contato@example.com".to_string() }
fn default_resume_path() -> PathBuf { PathBuf::from("curriculo.pdf") }
fn default_resume_download_name() -> String { "Curriculo-2025.pdf".to_string() }
fn default_copy_confirmation() -> u64 { 2 }

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
            hero_image: default_hero_image(),
            backgrounds_dir: default_backgrounds_dir(),
            biography_dir: default_biography_dir(),
            projects_dir: default_projects_dir(),
            gallery_formats: default_gallery_formats(),
            carousel_formats: default_carousel_formats(),
        }
    }
}

impl AssetsConfig {
    pub fn backgrounds_path(&self) -> PathBuf {
        self.root.join(&self.backgrounds_dir)
    }

    pub fn biography_path(&self) -> PathBuf {
        self.root.join(&self.biography_dir)
    }

    pub fn projects_path(&self) -> PathBuf {
        self.root.join(&self.projects_dir)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            preview_size: default_preview_size(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            phone: String::new(),
            instagram: Vec::new(),
            resume_path: default_resume_path(),
            resume_download_name: default_resume_download_name(),
            copy_confirmation_secs: default_copy_confirmation(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::FolioError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the derived views cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.gallery.page_size == 0 {
            return Err(crate::FolioError::Config("gallery.page_size must be at least 1".to_string()));
        }
        let max_interval = crate::carousel::MAX_PERIOD.as_secs();
        if !(1..=max_interval).contains(&self.carousel.interval_secs) {
            return Err(crate::FolioError::Config(format!(
                "carousel.interval_secs must be between 1 and {}",
                max_interval
            )));
        }
        let max_confirmation = crate::contact::MAX_CONFIRMATION.as_secs();
        if self.contact.copy_confirmation_secs > max_confirmation {
            return Err(crate::FolioError::Config(format!(
                "contact.copy_confirmation_secs must be at most {}",
                max_confirmation
            )));
        }
        if self.assets.gallery_formats.is_empty() {
            return Err(crate::FolioError::Config("assets.gallery_formats is empty".to_string()));
        }
        Ok(())
    }
}
