use clap::Parser;
use mcpdex::cli::{self, Cli};
use mcpdex::config::{self, ConfigManager, ConfigValidator};
use mcpdex::http_server::HttpServer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve(args) => {
            // Initialize tracing
            tracing_subscriber::fmt()
                .with_env_filter(args.log_level.as_str())
                .init();

            let config_path = cli::expand_path(&args.config);

            // Keep the manager in scope so the config watcher stays alive
            let _manager;
            let mut config = if std::path::Path::new(&config_path).exists() {
                let manager = ConfigManager::new(&config_path).await?;
                let config = manager.get_config();
                _manager = Some(manager);
                config
            } else {
                warn!("no config file at {}, using defaults", config_path);
                _manager = None;
                config::load_or_default(&config_path).await
            };

            // Override with CLI args
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }

            info!(
                "Starting mcpdex on {}:{}",
                config.server.host, config.server.port
            );
            info!("Manifest: {}", config.catalog.manifest_path);

            HttpServer::new(config).run().await?;
        }
        Cli::List(args) => {
            let config = config::load_or_default(&cli::expand_path(&args.config)).await;
            cli::catalog::list(&config).await?;
        }
        Cli::Score(args) => {
            let config = config::load_or_default(&cli::expand_path(&args.config)).await;
            cli::catalog::score(&config, &args.name).await?;
        }
        Cli::Validate(args) => {
            let validator = ConfigValidator::new();
            match validator.validate_file(&args.config).await {
                Ok(()) => println!("Configuration is valid"),
                Err(errors) => {
                    for error in &errors {
                        eprintln!("{}", error);
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
