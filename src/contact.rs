// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Contact page actions: e-mail copy, phone link, résumé download

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::ContactConfig;
use crate::{FolioError, Result};

/// Longest time a copy confirmation stays visible
pub const MAX_CONFIRMATION: Duration = Duration::from_secs(60 * 60);

/// Result of a copy-to-clipboard request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copied; the confirmation should be shown until the deadline
    Copied { confirm_until: Instant },
    /// Copy failed; no confirmation is shown
    Failed,
}

impl CopyOutcome {
    /// Whether a "copied" confirmation is visible at `now`
    pub fn confirmation_visible(&self, now: Instant) -> bool {
        match self {
            CopyOutcome::Copied { confirm_until } => now < *confirm_until,
            CopyOutcome::Failed => false,
        }
    }
}

/// Anything that can receive text on the system clipboard
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| FolioError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| FolioError::Clipboard(e.to_string()))
    }
}

/// Copy the contact e-mail. Failures are logged, never returned.
pub fn copy_email(config: &ContactConfig, sink: &mut dyn ClipboardSink) -> CopyOutcome {
    match sink.set_text(&config.email) {
        Ok(()) => {
            info!("Copied {} to clipboard", config.email);
            let shown = Duration::from_secs(config.copy_confirmation_secs).min(MAX_CONFIRMATION);
            let now = Instant::now();
            CopyOutcome::Copied { confirm_until: now.checked_add(shown).unwrap_or(now) }
        }
        Err(e) => {
            warn!("Failed to copy e-mail: {}", e);
            CopyOutcome::Failed
        }
    }
}

/// `tel:` link for the configured phone number, if any
pub fn phone_link(config: &ContactConfig) -> Option<String> {
    let number: String = config
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    (!number.is_empty()).then(|| format!("tel:{}", number))
}

/// Copy the résumé into `dest_dir` under its download name
pub fn download_resume(config: &ContactConfig, dest_dir: &Path) -> Result<PathBuf> {
    if !config.resume_path.is_file() {
        return Err(FolioError::NotFound(format!(
            "résumé not found at {:?}",
            config.resume_path
        )));
    }

    std::fs::create_dir_all(dest_dir)?;
    let target = dest_dir.join(&config.resume_download_name);
    std::fs::copy(&config.resume_path, &target)?;
    info!("Saved résumé to {:?}", target);

    Ok(target)
}
