//! Routing scenarios: /start, photos, failures, ignored updates
//!
//! Run with: cargo test -p pdfbot --test router_test

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::sync::Arc;

use common::{deps, jpeg_bytes, RecordingSender, SentReply, StubFetcher};
use pdfbot::telegram::Command;
use pdfbot::{route, route_message, BotError, InboundUpdate, IncomingMessage, PhotoVariant, RouteOutcome};
use pdfcore::{config, ConvertError};
use pretty_assertions::assert_eq;
use teloxide::types::ChatId;

fn photo_message(chat_id: i64) -> IncomingMessage {
    IncomingMessage::new(ChatId(chat_id)).with_photo(vec![
        PhotoVariant::new("a", 90, 90),
        PhotoVariant::new("b", 900, 900),
    ])
}

#[tokio::test]
async fn test_start_sends_welcome() {
    let fetcher = Arc::new(StubFetcher::new());
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher.clone(), sender.clone());

    let message = IncomingMessage::new(ChatId(42)).with_command(Command::Start);
    let outcome = route_message(&deps, &message).await.unwrap();

    assert_eq!(outcome, RouteOutcome::Welcome);
    assert_eq!(
        sender.sent(),
        vec![SentReply::Prompt {
            chat_id: ChatId(42),
            text: config::messages::WELCOME.to_string(),
        }]
    );
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_start_wins_over_photo() {
    let fetcher = Arc::new(StubFetcher::new().with_bytes("b", jpeg_bytes(30, 30)));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher.clone(), sender.clone());

    let message = photo_message(42).with_command(Command::Start);
    let outcome = route_message(&deps, &message).await.unwrap();

    assert_eq!(outcome, RouteOutcome::Welcome);
    assert!(fetcher.calls().is_empty());
    assert!(sender.documents().is_empty());
}

#[tokio::test]
async fn test_photo_converts_largest_variant() {
    let fetcher = Arc::new(StubFetcher::new().with_bytes("b", jpeg_bytes(64, 48)));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher.clone(), sender.clone());

    let outcome = route_message(&deps, &photo_message(7)).await.unwrap();

    assert_eq!(outcome, RouteOutcome::Done);
    assert_eq!(fetcher.calls(), vec!["b".to_string()]);

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        SentReply::Document {
            chat_id,
            file_name,
            bytes,
        } => {
            assert_eq!(*chat_id, ChatId(7));
            assert_eq!(file_name, "converted.pdf");
            assert!(bytes.starts_with(b"%PDF-"));

            let doc = lopdf::Document::load_mem(bytes).unwrap();
            assert_eq!(doc.get_pages().len(), 1);
        }
        other => panic!("expected a document, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_failure_sends_no_document() {
    let fetcher = Arc::new(StubFetcher::new().with_status("b", 404));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher.clone(), sender.clone());

    let err = route_message(&deps, &photo_message(7)).await.unwrap_err();

    match err {
        BotError::Convert(ConvertError::FetchFailed { status }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_undecodable_photo_fails() {
    let fetcher = Arc::new(StubFetcher::new().with_bytes("b", b"<html>not a photo</html>".to_vec()));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher, sender.clone());

    let err = route_message(&deps, &photo_message(7)).await.unwrap_err();

    assert!(matches!(err, BotError::Convert(ConvertError::DecodeFailed(_))));
    assert!(sender.documents().is_empty());
}

#[tokio::test]
async fn test_failure_notice_when_enabled() {
    let fetcher = Arc::new(StubFetcher::new().with_status("b", 500));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher, sender.clone()).with_notify_on_failure(true);

    let result = route_message(&deps, &photo_message(7)).await;

    assert!(result.is_err());
    assert_eq!(
        sender.sent(),
        vec![SentReply::Text {
            chat_id: ChatId(7),
            text: config::messages::CONVERSION_FAILED.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_send_failure_gets_no_notice() {
    let fetcher = Arc::new(StubFetcher::new().with_bytes("b", jpeg_bytes(16, 16)));
    let sender = Arc::new(RecordingSender::failing_documents());
    let deps = deps(fetcher, sender.clone()).with_notify_on_failure(true);

    let err = route_message(&deps, &photo_message(7)).await.unwrap_err();

    assert!(matches!(err, BotError::SendFailed(_)));
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_message_without_photo_or_command_is_ignored() {
    let fetcher = Arc::new(StubFetcher::new());
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher.clone(), sender.clone());

    let outcome = route_message(&deps, &IncomingMessage::new(ChatId(5))).await.unwrap();

    assert_eq!(outcome, RouteOutcome::Ignored);
    assert!(sender.sent().is_empty());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_update_without_message_is_ignored() {
    let fetcher = Arc::new(StubFetcher::new());
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher, sender.clone());

    let update = InboundUpdate {
        update_id: 99,
        message: None,
    };
    let outcome = route(&deps, &update).await.unwrap();

    assert_eq!(outcome, RouteOutcome::Ignored);
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_same_photo_twice_gives_identical_documents() {
    let fetcher = Arc::new(StubFetcher::new().with_bytes("b", jpeg_bytes(40, 40)));
    let sender = Arc::new(RecordingSender::new());
    let deps = deps(fetcher, sender.clone());

    route_message(&deps, &photo_message(7)).await.unwrap();
    route_message(&deps, &photo_message(7)).await.unwrap();

    let docs = sender.documents();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0], docs[1]);
}
