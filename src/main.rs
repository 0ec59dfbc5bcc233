use std::path::PathBuf;

use clap::Parser;

use ticklist::config::Config;
use ticklist::logging::init_tracing;
use ticklist::ui::runtime;

/// Terminal to-do list with local persistence.
#[derive(Debug, Parser)]
#[command(name = "ticklist", version, about)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// State snapshot path (overrides the config file).
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Feed URL returning a JSON item array (overrides the config file).
    #[arg(long, value_name = "URL")]
    seed_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = cli.data {
        config.storage.path = Some(path);
    }
    if let Some(url) = cli.seed_url {
        config.seed.url = Some(url);
    }
    // Overrides can re-break what the file load already checked.
    config.validate()?;

    runtime::run(config)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn cli_accepts_no_arguments() {
        let cli = Cli::try_parse_from(["ticklist"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.data.is_none());
        assert!(cli.seed_url.is_none());
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "ticklist",
            "--data",
            "/tmp/items.json",
            "--seed-url",
            "https://example.com/items.json",
        ])
        .unwrap();

        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/items.json")));
        assert_eq!(cli.seed_url.as_deref(), Some("https://example.com/items.json"));
        assert!(cli.config.is_none());
    }
}
