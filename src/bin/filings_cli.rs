//! One-shot filing listing
//!
//! ```text
//! filings_cli --cik 320193 --group "Current Reports" --page 1 --per-page 5
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use sec_filings::filings::{ArchiveLinks, FilingQuery, FilingsResponse, FilingsService, PageRequest};
use sec_filings::{FilingsConfig, SecEdgarClient};

#[derive(Debug, Parser)]
#[command(name = "filings_cli", about = "List a company's recent SEC filings")]
struct Args {
    /// Company CIK (defaults to FILINGS_DEFAULT_CIK)
    #[arg(long)]
    cik: Option<String>,

    /// Form group filter, e.g. "Annual Filings"
    #[arg(long)]
    group: Option<String>,

    /// Filing year filter, e.g. 2024
    #[arg(long)]
    year: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: i64,

    #[arg(long)]
    per_page: Option<i64>,

    /// Contact User-Agent sent to SEC EDGAR
    #[arg(long, env = "SEC_EDGAR_USER_AGENT")]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sec_filings=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = FilingsConfig::from_env().context("Invalid configuration")?;
    if let Some(user_agent) = args.user_agent {
        config.sec.user_agent = user_agent;
    }

    let client = SecEdgarClient::new(&config.sec).context("Failed to create SEC EDGAR client")?;
    let service = FilingsService::new(
        Arc::new(client),
        ArchiveLinks::new(config.sec.archives_base.clone()),
    );

    let cik = args.cik.unwrap_or_else(|| config.paging.default_cik.clone());
    let per_page = args
        .per_page
        .unwrap_or_else(|| i64::try_from(config.paging.default_per_page).unwrap_or(i64::MAX));
    let query = FilingQuery {
        group: args.group,
        year: args.year,
        page: PageRequest::new(args.page, per_page, config.paging.max_per_page),
    };

    match service.browse(&cik, &query).await {
        Ok(FilingsResponse::Page(result)) => {
            println!(
                "Filings for {} (Total: {})",
                result.company_name, result.total
            );
            for item in &result.data {
                println!("{} | {} | {}", item.date, item.form, item.description);
            }
            println!("Page {} of {}", result.page, result.pages_total);
        }
        Ok(FilingsResponse::Empty(_)) => {
            println!("No recent filings for CIK {}", cik);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
