use clap::Parser;
use env_logger::Target;
use eyre::{Report, Result};
use ldc_complete::cli::{Cli, Engine, output};
use ldc_complete::complete::generator::Fetcher;
use ldc_complete::tree;
use log::info;
use std::fs::OpenOptions;
use std::time::Duration;

fn setup_logging() -> Result<(), Report> {
    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| eyre::eyre!("Could not determine local data directory"))?
        .join("ldc-complete")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("ldc-complete.log");

    let log_file = OpenOptions::new().create(true).append(true).open(&log_file_path)?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"))
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() {
    // stdout is the completion protocol, so logs go to a file; a broken
    // log setup must not break completion
    if let Err(e) = setup_logging() {
        eprintln!("Failed to setup logging: {e}");
    }

    let cli = Cli::parse();
    info!("completing line: {:?}", cli.line);

    let fetcher = Fetcher::new(cli.program.clone(), Duration::from_secs(cli.timeout));
    let engine = Engine::new(tree::ldc(), fetcher);
    let reply = engine.complete(&cli.line).await;

    if cli.json {
        match output::render_json(&reply) {
            Ok(doc) => println!("{doc}"),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        let color = atty::is(atty::Stream::Stdout);
        print!("{}", output::render_plain(&reply, color));
    }
}
