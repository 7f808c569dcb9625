//! blogview - Entry Point

use blogview::api::BlogClient;
use blogview::config::{self, CliOverrides};
use blogview::model::{AppError, PageNumber, PageSize};
use blogview::source::RemoteSource;
use blogview::state::{AppState, ControllerOptions};
use blogview::view::{self, TuiError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// blogview - browse paginated posts in the terminal
#[derive(Parser, Debug)]
#[command(name = "blogview")]
#[command(version)]
#[command(about = "TUI application for browsing paginated posts from a JSON placeholder API")]
pub struct Args {
    /// Base URL of the post API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Page to open on startup (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Posts per page: 10, 20 or 50
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep the current page when the page size changes
    #[arg(long)]
    pub keep_page_on_resize: bool,

    /// Apply responses in arrival order, even out-of-date ones
    #[arg(long)]
    pub allow_stale_responses: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            page: self.page.and_then(PageNumber::new),
            page_size: self.page_size,
            keep_page_on_resize: self.keep_page_on_resize,
            allow_stale_responses: self.allow_stale_responses,
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())
    };

    blogview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let client = BlogClient::new(&config.base_url)?;
    let source = RemoteSource::new(client).map_err(TuiError::Runtime)?;

    let app_state = AppState::new(
        config.page,
        config.page_size,
        ControllerOptions {
            clamp_page_on_resize: config.clamp_page_on_resize,
            discard_stale_responses: config.discard_stale_responses,
        },
    );

    view::run_with_dispatcher(app_state, source)?;

    info!("Exiting");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
