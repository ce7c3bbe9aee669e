// src/main.rs

use scrapeops::scratch::ScratchSpace;
use scrapeops::{cli, load_settings, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("scrapeops error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    let settings = load_settings(&args)?;

    let log_file = args
        .log_file
        .then(|| ScratchSpace::from_settings(&settings).log_path().to_path_buf());
    logging::init_logging(args.log_level, log_file.as_deref())?;

    run(args, settings).await
}
