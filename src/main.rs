use clap::Parser;
use orgdocs::cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging: -v flags, then LOG_LEVEL, then RUST_LOG
    let directive = cli::logging::filter_directive(
        cli.verbose,
        std::env::var("LOG_LEVEL").ok().as_deref(),
        std::env::var("RUST_LOG").ok().as_deref(),
    );
    let filter = EnvFilter::new(directive);

    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .init();
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        cli::Commands::Sync(args) => cli::sync::handle_sync(args, config_path).await,
        cli::Commands::Preview(args) => cli::preview::handle_preview(args, config_path).await,
        cli::Commands::Validate => cli::validate::handle_validate(config_path).await,
    };

    if let Err(e) = result {
        let class = e.classify();
        error!(error_type = class.error_type, error = %e, "Script execution failed");
        eprintln!("Error: {}", e);
        std::process::exit(class.exit_code);
    }
}

