use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod run;

const DEFAULT_QUERY: &str = "restaurants in new york";

#[derive(Debug, Parser)]
#[command(name = "mapscout")]
#[command(about = "Scrape map search results and their place pages into a spreadsheet")]
struct Cli {
    /// Search query; a city name in it picks the browser locale.
    #[arg(default_value = DEFAULT_QUERY)]
    query: String,

    /// Where to write the `.xlsx` file [env: MAPSCOUT_OUTPUT_PATH]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// WebDriver server to drive Chrome through [env: MAPSCOUT_WEBDRIVER_URL]
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Run Chrome without a window.
    #[arg(long)]
    headless: bool,
}

impl Cli {
    /// Layers command-line flags over the environment configuration.
    fn apply(&self, config: &mut mapscout_core::AppConfig) {
        if let Some(output) = &self.output {
            config.output_path.clone_from(output);
        }
        if let Some(url) = &self.webdriver_url {
            config.webdriver_url.clone_from(url);
        }
        if self.headless {
            config.headless = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        mapscout_core::load_app_config().context("failed to load configuration")?;
    cli.apply(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run::scrape_to_file(&cli.query, &config).await? {
        Some(summary) => println!(
            "Scraped {} places; saved to {}",
            summary.rows,
            config.output_path.display()
        ),
        None => println!("No results found for '{}'", cli.query),
    }

    Ok(())
}
