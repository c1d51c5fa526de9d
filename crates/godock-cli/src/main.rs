mod commands;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "godock", about = "Generate a multi-stage Dockerfile from go.mod")]
#[command(version)]
struct Cli {
    /// Port to expose in the Dockerfile (0 or less omits EXPOSE)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    port: Option<i64>,
    /// Dockerfile name
    #[arg(short = 'o', long, default_value = "Dockerfile")]
    output: PathBuf,
    /// Path to the go.mod manifest
    #[arg(short = 'm', long, default_value = "go.mod")]
    manifest: PathBuf,
    /// Print the Dockerfile to stdout instead of writing it
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="an unset or invalid RUST_LOG falls back to the default level"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let target = if cli.stdout {
        commands::Target::Stdout
    } else {
        commands::Target::File(cli.output)
    };
    commands::generate(&cli.manifest, cli.port, &target)?;

    Ok(())
}
