use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use insurance_decoded::app::app_api_loop;
use insurance_decoded::environment::Config;
use insurance_decoded::logging;
use insurance_decoded::Catalogue;

/// Serves generated video scripts, prompts and upload metadata over HTTP.
///
/// Flags override the matching environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on [env: HOST]
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on [env: PORT]
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Directory for the rolling log file [env: LOG_DIR]
    #[arg(short = 'l', long)]
    log_dir: Option<PathBuf>,

    /// JSON file replacing the built-in topic catalogue [env: TOPICS_PATH]
    #[arg(short = 't', long)]
    topics: Option<PathBuf>,
}

impl Args {
    fn into_config(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(log_dir) = self.log_dir {
            config.log_dir = log_dir;
        }
        if self.topics.is_some() {
            config.topics_path = self.topics;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config(Config::from_env());

    logging::configure_logging(&config.log_dir);

    let catalogue = match &config.topics_path {
        Some(path) => Catalogue::from_json_file(path)
            .with_context(|| format!("Unable to use topic catalogue {}", path.display()))?,
        None => {
            info!("Using built-in topic catalogue");
            Catalogue::builtin().clone()
        }
    };

    app_api_loop(&config, catalogue).await
}
