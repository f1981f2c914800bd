slint::include_modules!();

mod callbacks;
mod toast;

use callbacks::pages::setup_page_count_callbacks;
use callbacks::selection::setup_selection_callbacks;
use callbacks::summary::setup_summary_callbacks;
use callbacks::{refresh_view, spin_value};
use clap::Parser;
use page_selector::config;
use page_selector::state::MAX_PAGE_COUNT;
use page_selector::SelectionPanel;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;
use toast::ToastNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Page selector
#[derive(Debug, Parser)]
#[command(name = "page-selector")]
#[command(about = "Choose the pages to print or export")]
#[command(version)]
struct CliArgs {
    /// Number of pages (overrides the config file)
    pages: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Failures that stop the window from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Selector(#[from] page_selector::Error),

    #[error("UI platform error: {0}")]
    Platform(#[from] slint::PlatformError),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), StartupError> {
    init_tracing();

    let args = CliArgs::parse();
    // An explicitly requested config file has to load; the default one may
    // be missing or broken.
    let file_config = match &args.config {
        Some(path) => config::read_config(path).map_err(page_selector::Error::from)?,
        None => config::load_config(),
    };
    let (config, count) = config::resolve(file_config, args.pages.as_deref())?;

    let ui = AppWindow::new()?;
    let notifier = ToastNotifier::new(&ui, config.auto_dismiss(), config.notifications.position);
    let panel = Rc::new(RefCell::new(SelectionPanel::new(count, notifier)));

    let rows = Rc::new(slint::VecModel::<PageRow>::default());
    ui.set_pages(rows.clone().into());
    ui.set_max_page_count(spin_value(MAX_PAGE_COUNT));
    ui.set_page_count(spin_value(count.get()));
    refresh_view(&ui, &panel.borrow(), &rows);

    setup_selection_callbacks(&ui, panel.clone(), rows.clone());
    setup_summary_callbacks(&ui, panel.clone());
    setup_page_count_callbacks(&ui, panel, rows);

    tracing::info!(pages = count.get(), "starting page selector");
    ui.run()?;
    Ok(())
}
