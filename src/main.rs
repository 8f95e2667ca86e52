use clap::Parser;
use schemaform::cli::Cli;
use schemaform::config::{watcher::PreviewWatcher, Settings};
use schemaform::preview::render_preview;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    schemaform::logging::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    println!("{}", render_preview(&cli.field, &settings, &cli.children)?);

    if !cli.watch {
        return Ok(());
    }

    let mut paths = settings.watched_paths();
    paths.push(cli.field.clone());

    let field = cli.field.clone();
    let children = cli.children.clone();
    let watched_settings = settings.clone();
    let _watcher = PreviewWatcher::new(paths, move || {
        match render_preview(&field, &watched_settings, &children) {
            Ok(output) => println!("{}", output),
            Err(e) => error!("Failed to render {}: {:#}", field.display(), e),
        }
    })?;

    info!("Watching for changes, press Ctrl+C to stop");
    loop {
        std::thread::park();
    }
}
