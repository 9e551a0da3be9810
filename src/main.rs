//! postergrid - Entry Point

use clap::Parser;
use postergrid::model::SizeClass;
use std::path::PathBuf;
use tracing::info;

/// Browse an ordered item list as a virtualized poster grid
#[derive(Parser, Debug)]
#[command(name = "postergrid")]
#[command(version)]
#[command(about = "Browse an ordered item list as a virtualized poster grid")]
pub struct Args {
    /// Path to a JSON (array or one object per line) items file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Poster size class: small, medium or large
    #[arg(long)]
    pub size: Option<SizeClass>,

    /// Active sort key (e.g. sizeOnDisk, added, path); "none" clears it
    #[arg(long)]
    pub sort_key: Option<String>,

    /// Use small-screen dimensions and internal scrolling
    #[arg(long)]
    pub small_screen: bool,

    /// Rows rendered beyond each edge of the viewport
    #[arg(long)]
    pub overscan: Option<usize>,

    /// Start in table mode
    #[arg(long)]
    pub table: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = postergrid::config::load_config_with_precedence(args.config.clone())?;
        let merged = postergrid::config::merge_config(config_file)?;
        let with_env = postergrid::config::apply_env_overrides(merged);

        // Boolean flags only override when explicitly set
        let small_screen_override = args.small_screen.then_some(true);
        let table_override = args.table.then_some(true);

        postergrid::config::apply_cli_overrides(
            with_env,
            args.size,
            args.sort_key.clone(),
            small_screen_override,
            args.overscan,
            table_override,
        )
    };

    postergrid::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Detect input source (file or stdin)
    let input_source = postergrid::source::detect_input_source(args.file.clone())?;

    postergrid::view::run_with_source(input_source, config)?;

    Ok(())
}
