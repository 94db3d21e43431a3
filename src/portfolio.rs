// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! The assembled portfolio: every collection the site renders

use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::assets::{AssetLoader, AssetSet};
use crate::config::AppConfig;
use crate::gallery::Gallery;
use crate::projects::{ingest_projects, ProjectRecord};
use crate::video::VideoLink;

/// Immutable result of one ingestion pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Portfolio {
    pub hero: Option<PathBuf>,
    pub gallery: Gallery,
    pub backgrounds: Vec<PathBuf>,
    pub biography: Vec<PathBuf>,
    pub projects: Vec<ProjectRecord>,
}

/// A project paired with its resolved video presentation
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry<'a> {
    #[serde(flatten)]
    pub record: &'a ProjectRecord,
    pub video: VideoLink,
}

impl Portfolio {
    /// Scan the asset root and build every collection
    pub fn load(config: &AppConfig) -> Self {
        let assets = AssetLoader::new(&config.assets).load();
        Self::from_assets(assets)
    }

    /// Build from an already enumerated asset set
    pub fn from_assets(assets: AssetSet) -> Self {
        let gallery = Gallery::from_paths(&assets.images);
        let projects = ingest_projects(&assets.project_texts);

        info!(
            "Portfolio ready: {} gallery images, {} of {} project files parsed",
            gallery.len(),
            projects.len(),
            assets.project_texts.len()
        );

        Self {
            hero: assets.hero,
            gallery,
            backgrounds: assets.backgrounds,
            biography: assets.biography,
            projects,
        }
    }

    /// Projects with their video links, in discovery order
    pub fn project_entries(&self) -> Vec<ProjectEntry<'_>> {
        self.projects
            .iter()
            .map(|record| ProjectEntry {
                record,
                video: VideoLink::resolve(record),
            })
            .collect()
    }
}
