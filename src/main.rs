use clap::{CommandFactory, Parser};
use session_assigner::utils::{logger, validation::Validate};
use session_assigner::{AssignmentEngine, AssignmentPipeline, CliConfig, LocalStorage};

fn wants_usage(args: &[String]) -> bool {
    matches!(args.get(1).map(String::as_str), None | Some("-h") | Some("--help"))
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    // 無參數或只要求說明時印出用法並以 1 結束
    if wants_usage(&args) {
        let _ = CliConfig::command().print_help();
        println!();
        std::process::exit(1);
    }

    let config = match CliConfig::try_parse_from(&args) {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting session-assigner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置 (在任何檔案存取之前)
    if let Err(e) = config.validate() {
        tracing::debug!("Suggestion: {}", e.recovery_suggestion());
        println!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let app_config = match config.resolve() {
        Ok(app_config) => app_config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            println!("❌ {}", e.user_friendly_message());
            println!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let input = LocalStorage::new(app_config.input_dir.clone());
    let output = LocalStorage::new(app_config.output_dir.clone());
    let pipeline = AssignmentPipeline::new(input, output, app_config);
    let engine = AssignmentEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            println!(
                "Students have been successfully assigned to slots. Output saved to {}. Seed: {}",
                outcome.output_path, outcome.seed
            );
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            println!("Error generating seed and assigning students to slots: {}", e);
            std::process::exit(1);
        }
    }
}
