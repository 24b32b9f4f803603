use clap::Parser;
use maybe::utils::{logger, validation::Validate};
use maybe::{CliConfig, ConfigProvider, ProbeEngine, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 有指定檔案時以 TOML 配置為準
    let provider: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            if let Err(e) = file_config.validate() {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(file_config)
        }
        None => Box::new(cli.clone()),
    };

    let verbose = cli.verbose || provider.verbose();
    logger::init_logger(verbose, cli.log_json || provider.log_json());

    tracing::info!("Starting maybe-probe");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let cases = provider.cases()?;
    let engine = ProbeEngine::new();
    let mut failures = 0usize;
    let mut internal_failure = false;

    for (case, result) in engine.run_all(&cases) {
        match result {
            Ok(report) => println!("{}", serde_json::to_string(&report)?),
            Err(e) => {
                failures += 1;
                if e.is_boundary_error() {
                    tracing::warn!("⚠️ Case {:?} ({:?}) rejected: {}", case.name, case.kind, e);
                } else {
                    internal_failure = true;
                    tracing::error!("❌ Case {:?} ({:?}) failed: {}", case.name, case.kind, e);
                }
                eprintln!("❌ {}", e);
            }
        }
    }

    tracing::info!("✅ Probed {} case(s), {} failed", cases.len(), failures);

    // 1: 執行失敗, 2: 輸入被容器拒絕
    if internal_failure {
        std::process::exit(1);
    }
    if failures > 0 {
        std::process::exit(2);
    }

    Ok(())
}
