use super::send::{split_message, MAX_MESSAGE_LEN};
use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use dobby_core::traits::Channel;

#[test]
fn test_channel_name_and_base_url() {
    let channel = TelegramChannel::new("123:abc");
    assert_eq!(channel.name(), "telegram");
    assert_eq!(channel.base_url, "https://api.telegram.org/bot123:abc");
}

#[test]
fn test_split_message_short_text_is_one_chunk() {
    let chunks = split_message("hello", MAX_MESSAGE_LEN);
    assert_eq!(chunks, vec!["hello"]);
}

#[test]
fn test_split_message_exact_limit_is_one_chunk() {
    let text = "x".repeat(MAX_MESSAGE_LEN);
    assert_eq!(split_message(&text, MAX_MESSAGE_LEN).len(), 1);
}

#[test]
fn test_split_message_long_text_splits() {
    let text = "y".repeat(MAX_MESSAGE_LEN + 100);
    let chunks = split_message(&text, MAX_MESSAGE_LEN);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chars().count(), MAX_MESSAGE_LEN);
    assert_eq!(chunks[1].chars().count(), 100);
}

#[test]
fn test_split_message_prefers_newline_break() {
    let text = format!("{}\n{}", "a".repeat(50), "b".repeat(60));
    let chunks = split_message(&text, 80);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], "a".repeat(50));
    assert_eq!(chunks[1], "b".repeat(60));
}

#[test]
fn test_update_deserialization() {
    let json = r#"{
        "ok": true,
        "result": [{
            "update_id": 10,
            "message": {
                "message_id": 5,
                "from": {"id": 99, "first_name": "Scorpy", "username": "sscorpy_"},
                "chat": {"id": -4242, "type": "group"},
                "text": "/dobby gm"
            }
        }]
    }"#;
    let resp: TgResponse<Vec<TgUpdate>> = serde_json::from_str(json).unwrap();
    assert!(resp.ok);
    let updates = resp.result.unwrap();
    assert_eq!(updates[0].update_id, 10);
    let msg = updates[0].message.as_ref().unwrap();
    assert_eq!(msg.chat.id, -4242);
    assert_eq!(msg.text.as_deref(), Some("/dobby gm"));
    assert_eq!(
        msg.from.as_ref().and_then(|u| u.username.as_deref()),
        Some("sscorpy_")
    );
}

#[test]
fn test_non_text_update_has_no_text() {
    let json = r#"{
        "ok": true,
        "result": [{
            "update_id": 11,
            "message": {
                "message_id": 6,
                "chat": {"id": 7},
                "sticker": {"file_id": "xyz"}
            }
        }]
    }"#;
    let resp: TgResponse<Vec<TgUpdate>> = serde_json::from_str(json).unwrap();
    let updates = resp.result.unwrap();
    assert!(updates[0].message.as_ref().unwrap().text.is_none());
}

#[test]
fn test_api_error_response() {
    let json = r#"{"ok": false, "description": "Unauthorized"}"#;
    let resp: TgResponse<Vec<TgUpdate>> = serde_json::from_str(json).unwrap();
    assert!(!resp.ok);
    assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
}
