//! Launchkit CLI - Launch pump.fun tokens and validate Sui identifiers
//!
//! # Commands
//!
//! ```bash
//! launchkit launch --wallet <PUBKEY> --name "My Token" --ticker MTK \
//!     --description "a token" --image-url https://example.com/token.png
//! launchkit validate-address 0x0000...0002
//! launchkit validate-coin 0x2::sui::SUI
//! ```
//!
//! The `launch` command prints the co-signed transaction as base64; it still
//! needs the wallet's signature before submission.

use clap::{Parser, Subcommand};
use launchkit::{launch_token, validate_address, validate_coin_type, LaunchOptions, TokenInfo};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "launchkit")]
#[command(about = "Launch pump.fun tokens and validate Sui coin types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch a new pump.fun token
    Launch {
        /// Wallet public key that will pay for and own the launch
        #[arg(short, long)]
        wallet: String,

        /// Token display name
        #[arg(long)]
        name: String,

        /// Ticker symbol
        #[arg(long)]
        ticker: String,

        /// Token description
        #[arg(long)]
        description: String,

        /// URL to fetch the token image from
        #[arg(long)]
        image_url: String,

        /// Twitter / X link
        #[arg(long)]
        twitter: Option<String>,

        /// Telegram link
        #[arg(long)]
        telegram: Option<String>,

        /// Website link
        #[arg(long)]
        website: Option<String>,

        /// Initial developer buy in SOL (default: 0, create only)
        #[arg(long)]
        amount: Option<f64>,

        /// Slippage tolerance in basis points (default: 10)
        #[arg(long)]
        slippage: Option<u64>,

        /// Priority fee in SOL (default: 0.0001)
        #[arg(long)]
        priority_fee: Option<f64>,

        /// Output file for the base64 transaction (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that an address is a canonical Sui address
    ValidateAddress {
        /// Address to check
        address: String,
    },

    /// Check a coin type against the configured Sui node
    ValidateCoin {
        /// Fully-qualified coin type, e.g. 0x2::sui::SUI
        coin_type: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launchkit=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Launch {
            wallet,
            name,
            ticker,
            description,
            image_url,
            twitter,
            telegram,
            website,
            amount,
            slippage,
            priority_fee,
            output,
        } => {
            cmd_launch(
                wallet,
                TokenInfo {
                    name,
                    ticker,
                    description,
                    image_url,
                },
                LaunchOptions {
                    twitter,
                    telegram,
                    website,
                    initial_buy_amount: amount,
                    slippage_bps: slippage,
                    priority_fee,
                },
                output.as_deref(),
            )
            .await
        }

        Commands::ValidateAddress { address } => cmd_validate_address(&address),

        Commands::ValidateCoin { coin_type } => cmd_validate_coin(&coin_type).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_launch(
    wallet: String,
    token: TokenInfo,
    options: LaunchOptions,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Launching {} ({})...", token.name, token.ticker);

    let encoded = launch_token(&wallet, &token, &options).await?;

    eprintln!("Launch transaction ready ({} base64 chars)", encoded.len());
    eprintln!("Sign with your wallet key and submit it to complete the launch.");
    write_output(&encoded, output)?;

    Ok(())
}

fn cmd_validate_address(address: &str) -> Result<(), Box<dyn std::error::Error>> {
    validate_address(address)?;
    println!("{} is a valid Sui address", address);
    Ok(())
}

async fn cmd_validate_coin(coin_type: &str) -> Result<(), Box<dyn std::error::Error>> {
    validate_coin_type(coin_type).await?;
    println!("{} is a valid coin type", coin_type);
    Ok(())
}

/// Write to a file, or stdout when no path was given.
fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
