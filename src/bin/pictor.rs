//! Command-line host: run one aggregated image search and print JSON.
//!
//! Usage: `pictor [--config <path>] <query...>`
//!
//! Results go to stdout as pretty-printed JSON. All tracing output goes to
//! stderr.

use std::path::PathBuf;

use anyhow::Context;
use pictor::PictorConfig;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pictor [--config <path>] <query...>";
const DEFAULT_LOG_FILTER: &str = "pictor=info,pictor_search=info";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    query: String,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut config = None;
    let mut words = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("--config needs a path\n{USAGE}"))?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        return Err(USAGE.to_owned());
    }
    Ok(CliArgs {
        config,
        query: words.join(" "),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1)).map_err(|msg| anyhow::anyhow!(msg))?;

    let config = PictorConfig::load(args.config.as_deref()).context("failed to load config")?;

    let fallback = config
        .log_filter
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    tracing::info!(
        providers = config.search.enabled_sources().len(),
        "pictor search starting"
    );

    let result = pictor::run_search(&config, &args.query).await.map_err(|e| {
        tracing::error!(error = %e, "search failed");
        anyhow::anyhow!("search failed: {e}")
    })?;

    let json = serde_json::to_string_pretty(&result).context("failed to encode results")?;
    println!("{json}");
    Ok(())
}
