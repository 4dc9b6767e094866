use clap::Parser;
use follow_sync::utils::logger::{self, LogFormat};
use follow_sync::utils::validation::Validate;
use follow_sync::{CliConfig, Credentials, GithubClient, SyncEngine, SyncError};

fn report_and_exit(stage: &str, e: SyncError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(config.json_logs), config.verbose);

    tracing::info!("Starting follow-sync");
    tracing::debug!("CLI config: {:?}", config);

    // 設定錯誤必須在任何網路請求之前中止
    if let Err(e) = config.validate() {
        report_and_exit("Configuration validation failed", e);
    }
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => report_and_exit("Missing credentials", e),
    };

    let client = match GithubClient::new(&config.api_base, &credentials) {
        Ok(client) => client,
        Err(e) => report_and_exit("Could not build API client", e),
    };

    let engine = SyncEngine::new(client, config.dry_run);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("Sync finished: {}", summary);
            if summary.failed() > 0 {
                println!("⚠️ Sync finished with {} failed actions ({})", summary.failed(), summary);
            } else {
                println!("✅ Sync finished ({})", summary);
            }
        }
        Err(e) => report_and_exit("Sync failed", e),
    }
}
