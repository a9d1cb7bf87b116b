use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use pdfbot::cli::{convert_file, Cli, Commands};
use pdfbot::telegram::{
    create_bot, create_http_client, run_polling, run_webhook, setup_bot_commands, AppState, ConverterDeps,
    TelegramFileFetcher, TelegramSender,
};
use pdfcore::core::{init_logger, log_startup_configuration};
use pdfcore::config;

/// Main entry point
///
/// Parses CLI arguments and dispatches to the selected subcommand; with no
/// subcommand the bot runs with long polling.
#[tokio::main]
async fn main() -> Result<()> {
    // Config statics read the environment lazily, so .env must be loaded first
    let _ = dotenv();

    let cli = Cli::parse_args();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    match cli.command {
        Some(Commands::Run { webhook }) => run_bot(webhook).await,
        Some(Commands::Convert { input, output }) => {
            let written = convert_file(&input, output.as_deref())?;
            println!("{}", written.display());
            Ok(())
        }
        None => run_bot(false).await,
    }
}

/// Builds the bot and runs the selected ingress until shutdown.
async fn run_bot(use_webhook: bool) -> Result<()> {
    init_logger(&config::LOG_FILE_PATH)?;
    log_startup_configuration(use_webhook);

    let client = create_http_client()?;
    let bot = create_bot(client.clone())?;

    let me = bot.get_me().await?;
    let bot_username: Arc<str> = Arc::from(me.username());
    log::info!("Authorized as @{}", bot_username);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let deps = ConverterDeps::new(
        Arc::new(TelegramFileFetcher::new(bot.clone(), client)),
        Arc::new(TelegramSender::new(bot.clone())),
    );

    if use_webhook {
        let webhook_url = config::WEBHOOK_URL
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("WEBHOOK_URL must be set for webhook mode"))?;
        let url = url::Url::parse(webhook_url)?;
        let state = AppState::new(deps, bot_username);
        run_webhook(bot, state, url, &config::WEBHOOK_ADDR).await
    } else {
        run_polling(bot, deps, bot_username).await;
        Ok(())
    }
}
