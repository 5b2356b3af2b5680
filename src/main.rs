use clap::Parser;
use diff_calc::utils::{error::ErrorSeverity, logger};
use diff_calc::{CalcEngine, CliConfig, DifferencePipeline, StdConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting diff-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let console = StdConsole::new();
    let pipeline = DifferencePipeline::new(console);
    let mut engine = CalcEngine::new(pipeline);

    match engine.run() {
        Ok(result) => {
            tracing::info!("✅ Difference computed successfully");
            tracing::debug!(
                "|{} - {}| = {}",
                result.pair.first,
                result.pair.second,
                result.difference
            );
        }
        Err(e) => {
            tracing::error!("❌ Calculation failed: {} (Severity: {:?})", e, e.severity());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
