/*
[INPUT]:  CLI arguments, YAML configuration file, KUCOIN_* environment variables
[OUTPUT]: One endpoint call per invocation, response envelope printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kucoin_margin_adapter::MarginClient;
use kucoin_margin_cli::{ApiCommand, CliConfig};

#[derive(Parser, Debug)]
#[command(
    name = "kucoin-margin",
    version,
    about = "KuCoin margin borrow and lend REST client"
)]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Overrides the configured base URL
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    /// Exit non-zero when the envelope code is not a success code
    #[arg(long = "fail-on-api-error")]
    fail_on_api_error: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective configuration with secrets redacted
    Config,
    #[command(flatten)]
    Api(ApiCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_deref())?;
    config.apply_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let command = match args.command {
        Command::Config => {
            let rendered =
                serde_yaml::to_string(&config.redacted()).context("render configuration")?;
            print!("{rendered}");
            return Ok(());
        }
        Command::Api(command) => command,
    };

    info!(
        base_url = %config.base_url,
        signed = config.credentials.is_some(),
        "starting request"
    );

    let client = MarginClient::http(config.client_config(), config.credentials())
        .context("build http client")?;
    let response = command.execute(&client).await.context("request failed")?;

    let rendered =
        serde_json::to_string_pretty(response.as_value()).context("render response")?;
    println!("{rendered}");

    if args.fail_on_api_error && !response.is_success() {
        warn!(code = ?response.code(), msg = ?response.msg(), "api returned an error envelope");
        bail!(
            "api error {}: {}",
            response.code().unwrap_or_default(),
            response.msg().unwrap_or_default()
        );
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => CliConfig::from_file(path).context("load config"),
        None => Ok(CliConfig::default()),
    }
}
