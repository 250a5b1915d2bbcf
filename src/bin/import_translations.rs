/// Import the curated mandala 1 translations into the dataset.
///
/// Usage:
///   cargo run --bin import-translations
///
/// Output (stdout): one JSON object:
///   {"backup": "...", "updated_count": N, "updated_suktas": [...], "validation": "ok"}
/// Diagnostics (stderr): controlled by RUST_LOG, `info` by default.
use anyhow::Context;
use sukta_import::Config;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::default();
    let report = sukta_import::run(&config)
        .with_context(|| format!("import into {} failed", config.data_file.display()))?;
    println!("{}", report.to_json()?);
    Ok(())
}
