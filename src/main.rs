use all_products::app;
use all_products::utils::logger;
use all_products::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = app::parse_exit_code(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting all-products");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match app::run(cli).await {
        Ok(report) => {
            tracing::info!(
                "✅ {} links written to {} in {:?}",
                report.link_count,
                report.output,
                report.elapsed
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
