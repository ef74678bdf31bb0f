use anyhow::Context;
use clap::Parser;
use smart_counter::config::Config;
use smart_counter::facts::GeminiFactProvider;
use smart_counter::logging::init_tracing;
use smart_counter::ui::app::App;
use smart_counter::ui::runtime;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "smart-counter", version, about = "Count things. Learn things. Powered by Gemini.")]
struct Cli {
    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gemini model to use, overriding the config file.
    #[arg(long, value_name = "NAME")]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::info!(model = %config.gemini.model, "Starting smart-counter");

    let provider = GeminiFactProvider::from_config(config.gemini.clone());
    let app = App::new(Arc::new(provider));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime::run(
        app,
        Duration::from_millis(config.ui.tick_rate_ms),
        rt.handle().clone(),
    )
    .context("terminal UI failed")?;

    rt.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!(
                "failed to load config from {}",
                Config::config_path().display()
            )
        })?,
    };

    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
        config.validate().context("invalid --model")?;
    }
    Ok(config)
}
