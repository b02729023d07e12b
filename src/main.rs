use anyhow::Context;
use clap::Parser;
use report_safety::domain::model::SafetySummary;
use report_safety::utils::{logger, validation::Validate};
use report_safety::{AnalyzerError, CliConfig, LocalStorage, ReportPipeline, SafetyEngine};

fn print_summary(summary: &SafetySummary, json: bool) -> Result<(), AnalyzerError> {
    if json {
        println!("{}", serde_json::to_string(summary)?);
    } else {
        println!("Part 1 - Number of safe reports: {}", summary.safe_count);
        println!(
            "Part 2 - Number of safe reports with dampener: {}",
            summary.safe_count_with_dampener
        );
    }
    Ok(())
}

fn fail(e: &AnalyzerError) -> ! {
    tracing::error!(
        "❌ Report analysis failed: {} (Category: {:?}, Severity: {})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting report-safety");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let json = config.json;
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let base_dir = std::env::current_dir().context("cannot resolve working directory")?;
    let pipeline = ReportPipeline::new(LocalStorage::new(base_dir), config);
    let mut engine = SafetyEngine::new_with_monitoring(pipeline, monitor_enabled);

    // 讀取失敗時不輸出部分結果
    match engine.run() {
        Ok(result) => {
            if let Err(e) = print_summary(&result.summary, json) {
                fail(&e);
            }
            tracing::info!("✅ Analysis completed");
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
