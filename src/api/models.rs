use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MOBILE_USER_NAME: &str = "Mobile User";
pub const NO_RESPONSE_TEXT: &str = "No response";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub user_question: String,
    pub user_name: String,
}

impl TaskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            user_question: question.into(),
            user_name: MOBILE_USER_NAME.to_string(),
        }
    }
}

/// Reply from `/api/run-browser-task`. Either field may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskReply {
    pub message: Option<String>,
    pub live_view_url: Option<String>,
}

impl TaskReply {
    /// Falsy values (`""`, `0`, `false`, `null`) count as absent. Other
    /// numbers and `true` are shown as written; arrays and objects are
    /// ignored. Bodies that are not objects carry no fields at all.
    pub fn from_value(json: &Value) -> Self {
        let field = |key: &str| json.get(key).and_then(truthy_text);
        Self {
            message: field("message"),
            live_view_url: field("live_view_url"),
        }
    }

    pub fn display_text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.live_view_url.as_deref())
            .unwrap_or(NO_RESPONSE_TEXT)
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
