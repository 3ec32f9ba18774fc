use clap::Parser;
use static_folio::domain::ports::ConfigProvider;
use static_folio::utils::{logger, validation::Validate};
use static_folio::{CliConfig, ExportEngine, LocalStorage, PortfolioPipeline, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting static-folio");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match SiteConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "📄 Data: {}, output: {}, mode: {:?}",
        config.data_path(),
        config.output_path(),
        config.build_mode()
    );

    // 輸入檔案路徑相對於目前工作目錄
    let storage = LocalStorage::default();
    let pipeline = PortfolioPipeline::new(storage, config);
    let engine = ExportEngine::new(pipeline);

    let result = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        engine.dry_run().await.map(|_| None)
    } else {
        engine.run().await.map(Some)
    };

    match result {
        Ok(Some(output_path)) => {
            tracing::info!("✅ Export completed successfully!");
            println!("✅ Export completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(None) => {
            println!("✅ Dry run completed, nothing written");
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
