//! Dashboard CLI
//!
//! Command-line access to the dashboard core:
//! - Resolve paths against the route table
//! - Render a view from local JSON files
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dashboard::config::{generate_default_config, DataConfig, LoggingConfig, WeatherFormat};
use dashboard::logging::init_tracing;
use dashboard::presenter::Render;
use dashboard::router::RouteTable;
use dashboard::snapshot::Snapshot;
use dashboard::view::{render_document, render_view};

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the personal dashboard from local data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the view a path resolves to
    Resolve {
        /// URL path, e.g. "/calendarlist"
        path: String,
    },

    /// Render the view at a path
    Render {
        /// URL path, e.g. "/"
        #[arg(default_value = "/")]
        path: String,
        /// Event list JSON file
        #[arg(short, long)]
        events: Option<PathBuf>,
        /// Weather reading JSON file
        #[arg(short, long)]
        weather: Option<PathBuf>,
        /// Weather file is an OpenWeatherMap response
        #[arg(long)]
        openweather: bool,
        /// Print a full HTML document instead of text
        #[arg(long)]
        html: bool,
    },

    /// List the route table
    Routes,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: cli.log_level.clone(),
        ..Default::default()
    };
    // stdout carries rendered output
    init_tracing(&logging, std::io::stderr).context("failed to initialize logging")?;

    let routes = RouteTable::new();

    match cli.command {
        Commands::Resolve { path } => match routes.resolve(&path) {
            Some(view) => println!("{}", view),
            None => {
                eprintln!("No view for path: {}", path);
                std::process::exit(1);
            }
        },

        Commands::Render {
            path,
            events,
            weather,
            openweather,
            html,
        } => {
            let Some(view) = routes.resolve(&path) else {
                eprintln!("No view for path: {}", path);
                std::process::exit(1);
            };

            let data = DataConfig {
                events_path: events,
                weather_path: weather,
                weather_format: if openweather {
                    WeatherFormat::OpenWeather
                } else {
                    WeatherFormat::Reading
                },
            };
            let snapshot = Snapshot::load(&data).context("failed to load dashboard data")?;

            let page = render_view(view, &snapshot);
            if html {
                let document =
                    render_document(&page, &routes).context("failed to render document")?;
                print!("{}", document);
            } else {
                println!("{}", page.render_text());
            }
        }

        Commands::Routes => {
            for (path, view) in routes.entries() {
                println!("{:<16} {:<14} {}", path, view.to_string(), view.title());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
