use anyhow::{Context, Result, bail};
use autoresize_config::Config;
use autoresize_engine::io;
use clap::Parser;
use std::path::PathBuf;
use std::process;

mod files;
mod rewrite;

/// Keep image widths in markdown notes in sync with one configured width.
///
/// Rewrites `![[image.png]]` to `![[image.png|150]]` and `![alt](image.png)`
/// to `![alt|150](image.png)`, replacing any width already present.
#[derive(Parser, Debug)]
#[command(name = "autoresize", version)]
#[command(about = "Set an explicit width on every image embedded in markdown notes")]
struct Args {
    /// Markdown files, directories or glob patterns
    #[arg(help = "Files, directories or globs to process (default: notes_path from the config)")]
    paths: Vec<String>,

    /// Target width in pixels
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..),
          help = "Target width in pixels (overrides image_width from the config)")]
    width: Option<u32>,

    /// Leave width hints inside image URLs alone
    #[arg(long, help = "Do not rewrite width parameters in image URLs (w_424, width=300, w=300)")]
    no_url_params: bool,

    /// Config file path
    #[arg(short, long, help = "Config file (default: ~/.config/autoresize/config.toml)")]
    config: Option<PathBuf>,

    /// Report files that would change without writing them
    #[arg(long, help = "Only report files that would change; exit with status 1 if any would")]
    dry_run: bool,

    /// Persist the effective settings
    #[arg(long, help = "Save the effective width settings to the config file")]
    save_config: bool,

    #[arg(short, long, help = "Log every file and match count")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::error!("{e:#}");
            process::exit(2);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let mut config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(width) = args.width {
        config.resize = config.resize.with_width(width);
    }
    if args.no_url_params {
        config.resize.resize_url_width_params = false;
    }

    if args.save_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        log::info!("Saved settings to {}", config_path.display());
    }

    let inputs = if !args.paths.is_empty() {
        args.paths
    } else if let Some(notes_path) = &config.notes_path {
        io::validate_notes_dir(notes_path).with_context(|| {
            format!(
                "Notes path '{}' from config file '{}' is invalid",
                notes_path.display(),
                config_path.display()
            )
        })?;
        vec![notes_path.to_string_lossy().into_owned()]
    } else if args.save_config {
        return Ok(0);
    } else {
        bail!(
            "No paths given and no notes_path set in {}",
            config_path.display()
        );
    };

    let files = files::collect_markdown_files(&inputs)?;
    let settings = config.settings();
    log::info!(
        "Resizing images in {} file(s) to {}px",
        files.len(),
        settings.image_width
    );

    let summary = rewrite::process_files(&files, &settings, args.dry_run);
    log::info!(
        "{} of {} file(s) {}, {} failed",
        summary.changed,
        summary.processed,
        if args.dry_run { "would change" } else { "changed" },
        summary.failed
    );

    if args.dry_run {
        for path in &summary.changed_files {
            println!("{}", path.display());
        }
    }

    Ok(summary.exit_code(args.dry_run))
}
