use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured payload carried by every error on the wire
///
/// `code` and `message` are independent: an empty `message` with a non-empty
/// `code` means the message is still waiting to be localized, while an empty
/// `code` is the "unset" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable classification token chosen by the caller
    #[serde(default)]
    pub code: String,
    /// Human readable text
    #[serde(default)]
    pub message: String,
    /// Optional structured context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorBody {
    /// Body with `code` and `message` and no payload
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Body with a code and no message yet
    pub fn pending(code: impl Into<String>) -> Self {
        Self::new(code, String::new())
    }

    /// Attach a serializable payload
    ///
    /// A payload that fails to serialize is dropped and logged; the body
    /// itself stays usable.
    #[must_use]
    pub fn with_data(mut self, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(Value::Null) => self.data = None,
            Ok(value) => self.data = Some(value),
            Err(e) => {
                tracing::warn!(code = %self.code, error = %e, "dropping unserializable error data");
                self.data = None;
            }
        }
        self
    }

    /// Whether the body carries a code but no message
    pub fn is_pending_localization(&self) -> bool {
        !self.code.is_empty() && self.message.is_empty()
    }
}
