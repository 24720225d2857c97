mod report;

use std::{path::PathBuf, process::ExitCode};

use {
    clap::Parser,
    mcpgen_config::ConfigGenerator,
    tracing::debug,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "mcpgen",
    version,
    about = "Generate .mcp.json from .mcp.template.json and .env"
)]
struct Cli {
    /// Project root containing `.env`, `.mcp.template.json` and `.mcp.json`.
    #[arg(long, env = "MCPGEN_ROOT", default_value = ".")]
    root: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    // Logs go to stderr; stdout carries the report.
    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn run(generator: &ConfigGenerator) -> anyhow::Result<()> {
    let outcome = generator.generate()?;
    report::success(generator, &outcome);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(&cli);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        root = %cli.root.display(),
        "mcpgen starting"
    );

    let generator = ConfigGenerator::new(&cli.root);
    match run(&generator) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::failure(&generator, &e);
            ExitCode::FAILURE
        },
    }
}
