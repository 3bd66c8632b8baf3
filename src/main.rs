//! SmartWeb — a bookmark manager that opens saved web apps in an embedded browser view.
//!
//! Entry point: the CLI subcommands drive the same home-screen and form flow as the window.
//! With the `gui` feature and no subcommand, opens the WebView window.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartweb::app::App;
use smartweb::managers::record_store::{RecordStoreTrait, StoreLocation};
use smartweb::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use smartweb::types::bookmark::Bookmark;

#[derive(Parser)]
#[command(name = "smartweb")]
#[command(version, about = "Save web apps and open them in an embedded browser", long_about = None)]
struct Cli {
    /// Database file, overriding the settings and the platform default
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Settings file, overriding the platform config directory
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List saved web apps
    List,
    /// Search web apps by name or URL
    Search {
        /// Substring to look for
        query: String,
    },
    /// Save a new web app
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
    },
    /// Change the name or URL of a saved web app
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a saved web app. An unknown id deletes nothing and still succeeds
    Delete { id: String },
    /// Print one web app
    Show { id: String },
    /// Resolve the URL a web app would load
    Open { id: String },
    /// Delete every saved web app
    Clear,
    /// Open the window
    Gui,
}

fn print_bookmark(b: &Bookmark) {
    println!("{}\t{}\t{}", b.id, b.name, b.url);
}

fn init_logging(settings_path: Option<String>) {
    let mut settings = SettingsEngine::new(settings_path);
    let fallback = settings
        .load()
        .map(|s| s.logging.filter)
        .unwrap_or_else(|_| settings.get_settings().logging.filter.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.settings.clone());

    let mut app = App::new(cli.db.map(StoreLocation::File), cli.settings);
    app.startup().context("failed to open the web app store")?;

    match cli.command {
        Some(Commands::List) => {
            for b in app.home.items() {
                print_bookmark(b);
            }
        }
        Some(Commands::Search { query }) => {
            for b in app.search(&query)? {
                print_bookmark(&b);
            }
        }
        Some(Commands::Add { name, url }) => {
            let saved = app.add_web_app(&name, &url)?;
            print_bookmark(&saved);
        }
        Some(Commands::Edit { id, name, url }) => {
            let saved = app.edit_web_app(&id, name.as_deref(), url.as_deref())?;
            print_bookmark(&saved);
        }
        Some(Commands::Delete { id }) => match app.delete_web_app(&id)? {
            Some(deleted) => info!(id = %deleted, "deleted"),
            None => info!(%id, "no web app with that id, nothing deleted"),
        },
        Some(Commands::Show { id }) => match app.store.get(&id)? {
            Some(b) => print_bookmark(&b),
            None => bail!("web app not found: {}", id),
        },
        Some(Commands::Open { id }) => {
            let screen = app.open_web_app_by_id(&id)?;
            println!("{}\t{}", screen.title(), screen.url());
        }
        Some(Commands::Clear) => {
            app.store.clear()?;
            app.home.refresh(&app.store)?;
        }
        Some(Commands::Gui) | None => return run_gui(app),
    }

    app.shutdown();
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(app: App) -> anyhow::Result<()> {
    smartweb::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn run_gui(mut app: App) -> anyhow::Result<()> {
    app.shutdown();
    bail!("smartweb was built without the gui feature; try --help for the CLI commands")
}
