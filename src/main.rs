//! view-router command line.
//!
//! Loads a route table (built-in or from a TOML file) and answers questions
//! about it: which route a path resolves to, what the table contains, and how
//! to build the href of a named route. Results go to stdout as JSON, logs to
//! stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use view_router::config::{load_config, RouterConfig, ViewId};
use view_router::history::Base;
use view_router::observability::{logging, metrics};
use view_router::routing::{Params, RouteTable};

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Inspect and exercise a client-side route table", long_about = None)]
struct Cli {
    /// Route table configuration (TOML). Defaults to the built-in table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths, printing one JSON object per path
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the route table
    Routes,
    /// Build the href of a named route
    Href {
        name: String,
        /// Parameters as KEY=VALUE
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Validate the configuration
    Check,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    logging::init_logging(&config.observability);

    tracing::debug!(
        routes = config.routes.len(),
        base = %config.history.base,
        "Configuration loaded"
    );

    let table = config.route_table()?;

    match cli.command {
        Commands::Resolve { paths } => {
            for path in &paths {
                println!("{}", resolve_json(&table, path));
            }
        }
        Commands::Routes => {
            let routes: Vec<Value> = table
                .routes()
                .iter()
                .map(|route| {
                    json!({
                        "name": route.name(),
                        "path": route.pattern().as_str(),
                        "view": route.view(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            let path = table.href(&name, &params)?;
            println!("{}", Base::new(&config.history.base).href(&path));
        }
        Commands::Check => {
            let source = cli
                .config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in table".to_string());
            println!("{source}: ok, {} routes", table.len());
        }
    }

    Ok(())
}

fn resolve_json(table: &RouteTable<ViewId>, path: &str) -> Value {
    match table.resolve(path) {
        Ok(resolution) => {
            metrics::record_resolution(resolution.name());
            json!({
                "path": path,
                "status": "matched",
                "route": resolution.name(),
                "view": resolution.view(),
                "params": resolution.params,
                "query": resolution.query,
            })
        }
        Err(not_found) => {
            metrics::record_not_found();
            tracing::info!(path = %not_found.path, "no route matched");
            json!({ "path": path, "status": "not_found" })
        }
    }
}
