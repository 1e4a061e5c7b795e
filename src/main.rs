// src/main.rs
use std::path::Path;
use std::sync::Arc;

use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use furia_fanbot::bot::{Command, handler_tree};
use furia_fanbot::{BotError, Config, StatsClient};

#[tokio::main]
async fn main() -> Result<(), BotError> {
    // A local .env is optional; deployments set real environment variables.
    dotenvy::dotenv().ok();

    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    // to ensure file logs are flushed properly.
    let _guard = init_logging(&config).await?;

    info!(
        "Starting furia_fanbot v{} (timeout {}s, cache TTL {}s)",
        furia_fanbot::VERSION,
        config.http_timeout_seconds,
        furia_fanbot::constants::cache_ttl::RESPONSE_SECONDS,
    );

    let stats = Arc::new(StatsClient::new(&config)?);
    let bot = Bot::new(config.bot_token.clone());

    // Publish the command list so clients show completions for /menu etc.
    bot.set_my_commands(Command::bot_commands()).await?;

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler_tree())
        .dependencies(dptree::deps![stats])
        .enable_ctrlc_handler()
        .build();

    match &config.webhook_url {
        Some(base) => {
            let addr = ([0, 0, 0, 0], config.webhook_port).into();
            let url = format!("{}/webhook", base.trim_end_matches('/'))
                .parse::<url::Url>()
                .map_err(|e| BotError::config_error(format!("Invalid webhook URL: {e}")))?;

            info!(
                "Registering webhook {} and listening on port {}",
                url, config.webhook_port
            );
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("No webhook URL configured, using long-polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}

/// Sets up tracing to stdout, plus a daily-rolling log file when one is
/// configured. Returns the non-blocking writer guard for the file layer.
async fn init_logging(config: &Config) -> Result<Option<WorkerGuard>, BotError> {
    let registry = tracing_subscriber::registry();
    let stdout_layer = fmt::Layer::new()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(
            EnvFilter::from_default_env().add_directive("furia_fanbot=info".parse().unwrap()),
        );

    match &config.log_file_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let log_dir = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("furia_fanbot.log");

            if !log_dir.exists() {
                tokio::fs::create_dir_all(log_dir).await.map_err(|e| {
                    BotError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            registry
                .with(stdout_layer)
                .with(
                    fmt::Layer::new()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(
                            EnvFilter::from_default_env()
                                .add_directive("furia_fanbot=info".parse().unwrap()),
                        ),
                )
                .init();

            info!("Logs are being written to: {custom_path}");
            Ok(Some(guard))
        }
        None => {
            registry.with(stdout_layer).init();
            Ok(None)
        }
    }
}
