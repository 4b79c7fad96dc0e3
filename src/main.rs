use anyhow::Context;
use clap::Parser;
use goldbach_viz::adapters::console::resolve_number;
use goldbach_viz::core::prime::build_tester;
use goldbach_viz::domain::ports::ConfigProvider;
use goldbach_viz::utils::validation::Validate;
use goldbach_viz::utils::{error::GoldbachError, logger};
use goldbach_viz::{CliConfig, GoldbachEngine, JsonPresenter, OutputFormat, TextPresenter, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting goldbach-viz");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = TomlConfig::load(&cli).unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let format = config.output_format();
    tracing::debug!(
        "Output format: {:?}, primality strategy: {:?}",
        format,
        config.strategy()
    );

    let mut stdin = io::stdin().lock();
    let resolved = if format.console_on_stderr() {
        resolve_number(cli.number, &mut stdin, &mut io::stderr())
    } else {
        resolve_number(cli.number, &mut stdin, &mut io::stdout())
    };
    let n = resolved.unwrap_or_else(|e| exit_with(&e));

    let tester = build_tester(config.strategy(), n);
    let stdout = io::stdout();
    let report = match format {
        OutputFormat::Text => {
            let presenter = TextPresenter::new(stdout.lock(), config.display());
            GoldbachEngine::new(tester, presenter).run(n)
        }
        OutputFormat::Json => {
            let presenter = JsonPresenter::new(stdout.lock());
            GoldbachEngine::new(tester, presenter).run(n)
        }
    }
    .with_context(|| format!("Failed to report Goldbach pairs for {}", n))?;

    tracing::info!("✅ Reported {} prime pairs for {}", report.pairs.len(), n);
    Ok(())
}

fn exit_with(e: &GoldbachError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
