use clap::Parser;
use review_etl::utils::{logger, validation::Validate};
use review_etl::{CliConfig, EtlEngine, LocalStorage, ReviewPipeline, RunOutcome, SerpApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads SERPAPI_KEY.
    let _ = dotenvy::dotenv();
    let cli = CliConfig::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::init_cli_logger(cli.verbose, &settings.logging) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting review-etl");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let run = settings.run_config();
    let storage = LocalStorage::new(run.output_dir.clone());
    let api = SerpApiClient::new(settings.api.clone())?;
    let pipeline = ReviewPipeline::new(storage, api, run);

    let engine = EtlEngine::new(pipeline);

    // Every run outcome exits 0; details are in the log file.
    match engine.run().await {
        RunOutcome::Completed {
            output_path,
            companies,
            rows,
        } => {
            println!("✅ Scraping completed! {} reviews from {} companies", rows, companies);
            println!("📁 Data saved in: {}", output_path);
        }
        RunOutcome::NoCompanies => {
            println!("⚠️ No companies found; nothing was written");
        }
        RunOutcome::WriteFailed { error, .. } => {
            eprintln!("❌ Error saving data to CSV: {}", error);
        }
    }

    Ok(())
}
