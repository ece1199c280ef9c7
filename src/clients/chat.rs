// src/clients/chat.rs
use serde::Serialize;

use crate::core::{ApiResult, RequestDescriptor, ServiceClient};
use crate::types::{ChatMessage, ChatReply, ConversationId, SmartChatResponse};

const QUERY_ENDPOINT: &str = "/chat/query";
const HISTORY_ENDPOINT: &str = "/chat/history";

#[derive(Serialize)]
struct ChatQuery<'a> {
    message: &'a str,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

#[derive(Serialize)]
struct SmartChatQuery<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

/// Session-based chat of the main API
#[derive(Debug, Clone, Copy)]
pub struct ChatApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> ChatApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn query(&self, message: &str, session_id: Option<&str>) -> ApiResult<ChatReply> {
        let body = ChatQuery {
            message,
            session_id,
        };
        self.client
            .execute(RequestDescriptor::post(QUERY_ENDPOINT).json(&body)?)
            .await
    }

    pub async fn history(&self, session_id: &str) -> ApiResult<Vec<ChatMessage>> {
        let request = RequestDescriptor::get(HISTORY_ENDPOINT).query("sessionId", session_id);
        self.client.execute(request).await
    }
}

/// Assistant of the AI service with database access
#[derive(Debug, Clone, Copy)]
pub struct SmartChatApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> SmartChatApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn query(
        &self,
        message: &str,
        conversation_id: Option<&ConversationId>,
    ) -> ApiResult<SmartChatResponse> {
        let body = SmartChatQuery {
            message,
            conversation_id: conversation_id.map(ConversationId::as_str),
        };
        self.client
            .execute(RequestDescriptor::post(QUERY_ENDPOINT).json(&body)?)
            .await
    }
}
