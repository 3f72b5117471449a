use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation. Turns are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Inbound chat payload. History defaults to empty for a fresh conversation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<Turn>,
}

/// Response envelope returned on every path, success or failure.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(
        rename = "conversationHistory",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_history: Option<Vec<Turn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(response: String, conversation_history: Vec<Turn>) -> Self {
        Self {
            success: true,
            response: Some(response),
            conversation_history: Some(conversation_history),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            conversation_history: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_history_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert!(request.conversation_history.is_empty());
    }

    #[test]
    fn request_missing_message_is_rejected() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"conversationHistory":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Turn::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        let json = serde_json::to_value(Turn::assistant("hello")).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn success_envelope_uses_camel_case_history() {
        let response = ChatResponse::success("hello".into(), vec![Turn::user("hi")]);
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["conversationHistory"][0]["content"], "hi");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_omits_history() {
        let json = serde_json::to_value(ChatResponse::failure("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("conversationHistory").is_none());
        assert!(json.get("response").is_none());
    }
}
