//! # Revert Messages
//!
//! Wallet providers wrap contract reverts in varying JSON-RPC error shapes.
//! The user-facing message is `error.error.message` when present, otherwise
//! `error.message`, with the `execution reverted: ` prefix removed and the
//! result cut to 120 characters.

use serde_json::Value;

const REVERT_PREFIX: &str = "execution reverted: ";
const MAX_MESSAGE_CHARS: usize = 120;

fn message_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(value, |v, key| v.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extract a short display message from a provider error payload. Empty
/// when the payload carries no message.
pub fn extract_error_message(error: &Value) -> String {
    let Some(message) =
        message_at(error, &["error", "message"]).or_else(|| message_at(error, &["message"]))
    else {
        return String::new();
    };
    message
        .replacen(REVERT_PREFIX, "", 1)
        .chars()
        .take(MAX_MESSAGE_CHARS)
        .collect()
}
