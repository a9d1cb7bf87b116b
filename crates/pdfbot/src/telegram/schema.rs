//! Dispatcher schema and long-polling ingress

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::update_listeners::Polling;

use super::error::HandlerError;
use super::router::{route_message, ConverterDeps};
use super::types::IncomingMessage;
use pdfcore::config;

/// Creates the dispatcher schema for the bot.
///
/// Only `message` updates reach the router; everything else falls through
/// to the dispatcher's default handler.
///
/// # Arguments
/// * `deps` - Router dependencies (fetcher, sender, PDF options)
/// * `bot_username` - Username used to accept `/start@<bot_username>`
pub fn schema(deps: ConverterDeps, bot_username: Arc<str>) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |msg: Message| {
        let deps = deps.clone();
        let bot_username = Arc::clone(&bot_username);
        async move {
            let incoming = IncomingMessage::from_telegram(&msg, &bot_username);
            route_message(&deps, &incoming).await?;
            Ok::<(), HandlerError>(())
        }
    })
}

/// Runs the bot with long polling until Ctrl-C.
pub async fn run_polling(bot: Bot, deps: ConverterDeps, bot_username: Arc<str>) {
    log::info!(
        "Starting long polling (timeout {}s)",
        config::polling::TIMEOUT_SECS
    );

    let listener = Polling::builder(bot.clone())
        .timeout(config::polling::timeout())
        .build();

    Dispatcher::builder(bot, schema(deps, bot_username))
        .default_handler(|update| async move {
            log::debug!("Ignoring update {}", update.id.0);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred while handling an update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
}
