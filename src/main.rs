use anyhow::Context;
use clap::Parser;
use plotkit::cli::Cli;
use plotkit::{commands, init_logging, Config, FileStore, LayoutSession, SyncOptions};
use url::Url;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };

    let location = match cli.link.clone() {
        Some(link) => link,
        None => Url::parse(&config.share.base_url)
            .with_context(|| format!("Invalid share.base_url '{}'", config.share.base_url))?,
    };

    let store = FileStore::new(&config.storage.state_file);
    let mut session = LayoutSession::open(store, location, SyncOptions::from_config(&config));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &mut session, &config, &mut out)
}
