// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Folio: Portfolio Asset Ingestion
//!
//! Command-line front end over the ingestion pipeline. Every command scans
//! the asset folder once and prints the derived view.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

use folio::carousel::{Rotation, MAX_PERIOD};
use folio::config::AppConfig;
use folio::contact::{copy_email, download_resume, phone_link, CopyOutcome, SystemClipboard};
use folio::gallery::ImageAsset;
use folio::preferences::{PreferenceStore, Theme};
use folio::video::VideoLink;
use folio::{FolioError, Portfolio, Result};

/// Folio CLI - Portfolio Asset Ingestion
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version)]
#[command(about = "Classify and index a photography portfolio's assets", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Asset root (overrides config)
    #[arg(short, long, global = true)]
    assets: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ingest the asset folder and print the full manifest
    Scan {
        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show one page of the ordered gallery
    Gallery {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Pick the home page preview images
    Preview,

    /// List project records with their video links
    Projects,

    /// Classify image filenames
    Classify {
        /// Filenames or stems
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Rotate background or biography photos on a timer
    Slideshow {
        /// Which sequence to rotate
        #[arg(value_enum)]
        target: SlideshowTarget,

        /// Stop after this many changes (default: run until Ctrl+C)
        #[arg(short, long)]
        ticks: Option<usize>,

        /// Seconds between changes (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show or change the stored theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Show contact details
    Contact {
        /// Copy the e-mail address to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Save the résumé PDF under its download name
    Resume {
        /// Destination directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Create the asset folder layout and a default config
    Init {
        /// Directory to initialize (default: current)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SlideshowTarget {
    Backgrounds,
    Biography,
}

#[derive(Subcommand, Debug)]
enum ThemeCommands {
    /// Print the stored theme
    Show,
    /// Switch to the dark theme
    Dark,
    /// Switch to the light theme
    Light,
    /// Flip between dark and light
    Toggle,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(root) = cli.assets.clone() {
        config.assets.root = root;
    }

    let format = cli.format.as_str();
    match cli.command {
        Some(Commands::Scan { output }) => run_scan(&config, output, format),
        Some(Commands::Gallery { page }) => run_gallery(&config, page, format),
        Some(Commands::Preview) => run_preview(&config, format),
        Some(Commands::Projects) => run_projects(&config, format),
        Some(Commands::Classify { names }) => run_classify(&names, format),
        Some(Commands::Slideshow { target, ticks, interval }) => {
            run_slideshow(&config, target, ticks, interval).await
        }
        Some(Commands::Theme { action }) => run_theme(&config, action),
        Some(Commands::Contact { copy }) => run_contact(&config, copy),
        Some(Commands::Resume { output }) => run_resume(&config, &output),
        Some(Commands::Config { action }) => run_config_command(&config, action, &cli.config),
        Some(Commands::Init { dir, force }) => run_init(dir, force),
        None => run_scan(&config, None, format),
    }
}

/// Print a list of serializable items in the requested format
fn emit<T: serde::Serialize>(items: &[T], format: &str, text: impl Fn(&T) -> String) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(items)?),
        "jsonl" => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        }
        _ => {
            for item in items {
                println!("{}", text(item));
            }
        }
    }
    Ok(())
}

fn image_line(image: &ImageAsset) -> String {
    format!("{:<10} {:<24} {}", image.category, image.name, image.alt)
}

/// Ingest and print the full manifest
fn run_scan(config: &AppConfig, output: Option<PathBuf>, format: &str) -> Result<()> {
    let portfolio = Portfolio::load(config);

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&portfolio)?)?;
        info!("Manifest written to {:?}", path);
        return Ok(());
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&portfolio)?),
        "jsonl" => println!("{}", serde_json::to_string(&portfolio)?),
        _ => {
            match &portfolio.hero {
                Some(hero) => println!("Hero: {}", hero.display()),
                None => println!("Hero: (missing)"),
            }
            println!("Gallery: {} images", portfolio.gallery.len());
            for (category, count) in portfolio.gallery.category_counts() {
                println!("  {:<10} {}", category, count);
            }
            println!("Backgrounds: {}", portfolio.backgrounds.len());
            println!("Biography photos: {}", portfolio.biography.len());
            println!("Projects: {}", portfolio.projects.len());
        }
    }

    Ok(())
}

/// Print one gallery page
fn run_gallery(config: &AppConfig, page: usize, format: &str) -> Result<()> {
    let portfolio = Portfolio::load(config);
    let view = portfolio.gallery.page(page, config.gallery.page_size);

    if format != "text" {
        return emit(view.items, format, image_line);
    }

    if view.is_empty() {
        println!("Page {} is out of range (1-{})", page, view.total_pages);
        return Ok(());
    }

    println!("Page {} of {}", view.number, view.total_pages);
    emit(view.items, format, image_line)?;

    let mut nav = Vec::new();
    if view.has_previous() {
        nav.push(format!("previous: --page {}", page - 1));
    }
    if view.has_next() {
        nav.push(format!("next: --page {}", page + 1));
    }
    if !nav.is_empty() {
        println!("\n{}", nav.join(", "));
    }

    Ok(())
}

/// Sample the home preview
fn run_preview(config: &AppConfig, format: &str) -> Result<()> {
    let portfolio = Portfolio::load(config);
    let mut rng = rand::rng();
    let preview = portfolio.gallery.preview(&mut rng, config.gallery.preview_size);
    emit(&preview, format, image_line)
}

/// List projects and how their videos open
fn run_projects(config: &AppConfig, format: &str) -> Result<()> {
    let portfolio = Portfolio::load(config);
    let entries = portfolio.project_entries();

    emit(&entries, format, |entry| {
        let record = entry.record;
        let meta: Vec<&str> = [record.role.as_str(), record.year.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let line = if meta.is_empty() {
            record.title.clone()
        } else {
            format!("{} [{}]", record.title, meta.join(", "))
        };
        let video = match &entry.video {
            VideoLink::Embed { player, .. } => format!("player {}", player),
            VideoLink::File { path } => format!("file {}", path),
            VideoLink::External { url } => format!("link {}", url),
            VideoLink::None => "no video".to_string(),
        };
        format!("{}\n  {}\n  {}", line, record.id, video)
    })
}

fn run_classify(names: &[String], format: &str) -> Result<()> {
    let images: Vec<ImageAsset> = names
        .iter()
        .map(|n| ImageAsset::from_path(Path::new(n)))
        .collect();
    emit(&images, format, image_line)
}

/// Rotation period from `--interval` or config, clamped to what a timer accepts
fn slideshow_period(interval: Option<u64>, config: &AppConfig) -> Duration {
    let secs = interval.unwrap_or(config.carousel.interval_secs);
    Duration::from_secs(secs.clamp(1, MAX_PERIOD.as_secs()))
}

/// Rotate a carousel until the tick count runs out or Ctrl+C
async fn run_slideshow(
    config: &AppConfig,
    target: SlideshowTarget,
    ticks: Option<usize>,
    interval: Option<u64>,
) -> Result<()> {
    let portfolio = Portfolio::load(config);
    let photos = match target {
        SlideshowTarget::Backgrounds => portfolio.backgrounds,
        SlideshowTarget::Biography => portfolio.biography,
    };

    if photos.is_empty() {
        warn!("No photos to rotate for {:?}", target);
        return Ok(());
    }

    let period = slideshow_period(interval, config);
    println!("{}", photos[0].display());
    if photos.len() < 2 {
        return Ok(());
    }

    let rotation = Rotation::spawn(photos.len(), period);
    let mut rx = rotation.subscribe();
    let mut shown = 0usize;

    info!("Rotating {} photos every {:?}. Press Ctrl+C to stop.", photos.len(), period);

    loop {
        if ticks.is_some_and(|limit| shown >= limit) {
            break;
        }

        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let index = *rx.borrow_and_update();
                println!("{}", photos[index].display());
                shown += 1;
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, stopping slideshow");
                break;
            }
        }
    }

    rotation.stop().await;
    Ok(())
}

fn run_theme(config: &AppConfig, action: Option<ThemeCommands>) -> Result<()> {
    let store = PreferenceStore::new(config.preferences.path.clone());

    let theme = match action.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => store.theme(),
        ThemeCommands::Dark => {
            store.set_theme(Theme::Dark)?;
            Theme::Dark
        }
        ThemeCommands::Light => {
            store.set_theme(Theme::Light)?;
            Theme::Light
        }
        ThemeCommands::Toggle => store.toggle_theme()?,
    };

    println!("{}", theme);
    Ok(())
}

fn run_contact(config: &AppConfig, copy: bool) -> Result<()> {
    let contact = &config.contact;

    println!("E-mail: {}", contact.email);
    if let Some(link) = phone_link(contact) {
        println!("Phone: {} ({})", contact.phone, link);
    }
    for handle in &contact.instagram {
        println!("Instagram: https://instagram.com/{}", handle.trim_start_matches('@'));
    }

    if copy {
        match copy_email(contact, &mut SystemClipboard) {
            CopyOutcome::Copied { .. } => println!("Copied to clipboard"),
            // already logged; no confirmation
            CopyOutcome::Failed => {}
        }
    }

    Ok(())
}

fn run_resume(config: &AppConfig, output: &Path) -> Result<()> {
    let saved = download_resume(&config.contact, output)?;
    println!("Saved {}", saved.display());
    Ok(())
}

/// Run config commands
fn run_config_command(config: &AppConfig, action: ConfigCommands, config_path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            AppConfig::default().save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            config.validate()?;
            println!("Configuration at {:?} is valid", config_path);
            println!("  Asset root: {:?}", config.assets.root);
            println!("  Hero image: {}", config.assets.hero_image);
            println!("  Page size: {}", config.gallery.page_size);
        }
    }

    Ok(())
}

/// Create the asset layout next to a default config
fn run_init(dir: Option<PathBuf>, force: bool) -> Result<()> {
    let target = dir.unwrap_or_else(|| PathBuf::from("."));
    let config_path = target.join("config.json");

    if config_path.exists() && !force {
        return Err(FolioError::Config(
            "config.json already exists. Use --force to overwrite".to_string()
        ));
    }

    let mut config = AppConfig::default();
    config.assets.root = target.join("assets");

    for folder in [
        config.assets.root.clone(),
        config.assets.backgrounds_path(),
        config.assets.biography_path(),
        config.assets.projects_path(),
    ] {
        std::fs::create_dir_all(&folder)?;
    }
    config.save(&config_path)?;

    println!("Folio initialized in {:?}", target);
    println!("\nCreated:");
    println!("  - config.json");
    println!("  - assets/{{{}, {}, {}}}/",
        config.assets.backgrounds_dir,
        config.assets.biography_dir,
        config.assets.projects_dir
    );
    println!("\nNext steps:");
    println!("  1. Drop photos into assets/ (hero: {}.jpg)", config.assets.hero_image);
    println!("  2. Run: folio scan");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slideshow_period_clamped() {
        let config = AppConfig::default();
        assert_eq!(slideshow_period(None, &config), Duration::from_secs(60));
        assert_eq!(slideshow_period(Some(0), &config), Duration::from_secs(1));
        assert_eq!(slideshow_period(Some(u64::MAX), &config), MAX_PERIOD);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_gallery_command() {
        let cli = Cli::try_parse_from(["folio", "gallery", "--page", "3", "--format", "json"]).unwrap();

        match cli.command {
            Some(Commands::Gallery { page }) => assert_eq!(page, 3),
            _ => panic!("Expected Gallery command"),
        }
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_slideshow_command() {
        let cli = Cli::try_parse_from([
            "folio", "slideshow", "biography", "--ticks", "2", "--interval", "5"
        ]).unwrap();

        match cli.command {
            Some(Commands::Slideshow { target, ticks, interval }) => {
                assert_eq!(target, SlideshowTarget::Biography);
                assert_eq!(ticks, Some(2));
                assert_eq!(interval, Some(5));
            }
            _ => panic!("Expected Slideshow command"),
        }
    }

    #[test]
    fn test_cli_classify_requires_names() {
        assert!(Cli::try_parse_from(["folio", "classify"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["folio", "scan", "--format", "xml"]).is_err());
    }
}
