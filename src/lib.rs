// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Folio: Portfolio Asset Ingestion
//!
//! Turns a folder of loose photographs and project notes into the ordered,
//! classified collections a portfolio site renders.

pub mod assets;
pub mod carousel;
pub mod classify;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod portfolio;
pub mod preferences;
pub mod projects;
pub mod video;

pub use config::AppConfig;
pub use error::{FolioError, ParseFailure, Result};
pub use portfolio::Portfolio;
