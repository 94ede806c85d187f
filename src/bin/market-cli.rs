use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use market_gateway::config::load_config;
use market_gateway::{
    CredentialProvider, Gateway, GatewayConfig, StaticTokenProvider, Unauthenticated,
};

#[derive(Parser)]
#[command(name = "market-cli")]
#[command(about = "Query CLI for the Local Market Tracker backend", long_about = None)]
struct Cli {
    /// Backend base URL, including the /api prefix
    #[arg(short, long, default_value = "https://backend-xi-seven-28.vercel.app/api")]
    url: String,

    /// Gateway config file (TOML); takes precedence over --url
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bearer token to attach to every request
    #[arg(short, long)]
    token: Option<String>,

    /// Principal uid the token belongs to
    #[arg(long, default_value = "cli-operator")]
    uid: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    Products,
    /// Fetch a product by id
    Product { id: String },
    /// Fetch price history for a product
    Prices { id: String },
    /// Fetch reviews for a product
    Reviews { id: String },
    /// Fetch a user by uid
    User { uid: String },
    /// List orders for a user
    Orders { uid: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_gateway=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let credentials: Arc<dyn CredentialProvider> = match &cli.token {
        Some(token) => Arc::new(StaticTokenProvider::new(cli.uid.clone(), token.clone())),
        None => Arc::new(Unauthenticated),
    };

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig {
            base_url: cli.url.clone(),
            ..GatewayConfig::default()
        },
    };
    let gateway = Gateway::new(config, credentials)?;

    let result = match cli.command {
        Commands::Products => gateway.all_products().await,
        Commands::Product { id } => gateway.product_by_id(&id).await,
        Commands::Prices { id } => gateway.product_price_history(&id).await,
        Commands::Reviews { id } => gateway.product_reviews(&id).await,
        Commands::User { uid } => gateway.user_by_uid(&uid).await,
        Commands::Orders { uid } => gateway.user_orders(&uid).await,
    };

    match result {
        Ok(body) => print_json(&body)?,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_json(body: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}
