use anyhow::Context;
use proforma::config::CONFIG_FILE;
use proforma::{run, AppConfig};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = AppConfig::load_or_default(CONFIG_FILE)
        .with_context(|| format!("Failed to load {CONFIG_FILE}"))?;
    info!(
        input = %config.input.display(),
        template = %config.template.display(),
        "Starting proforma generation"
    );

    let summary = run(&config).context("Proforma generation failed")?;
    if summary.skipped > 0 {
        info!(skipped = summary.skipped, "Skipped rows without a location");
    }

    println!(
        "Generated {} DOCX files in: {}",
        summary.generated,
        summary.output_dir.display()
    );
    Ok(())
}
