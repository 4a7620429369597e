//! Conversation management for the assistant page: the conversation list,
//! the open thread, message sending and service health.

use chrono::Utc;
use leptos::*;
use uuid::Uuid;

use crate::{
    api::{ApiClient, ChatMessage, ChatRequest, ChatRole, ChatbotHealth, Conversation, CurrentUser},
    config,
    state::toast::{use_toasts, ToastStore},
    utils::RequestToken,
};

pub const CONVERSATION_PAGE_SIZE: u32 = 10;
pub const PREVIEW_CHARS: usize = 100;
const DEFAULT_CHAT_ROLE: &str = "EMPLOYEE";

/// A message as shown in the thread; `key` is stable for list rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    pub key: Uuid,
    pub message: ChatMessage,
}

impl ThreadMessage {
    pub fn new(message: ChatMessage) -> Self {
        Self {
            key: Uuid::new_v4(),
            message,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChatbotStore {
    pub conversations: RwSignal<Vec<Conversation>>,
    pub current: RwSignal<Option<Conversation>>,
    pub messages: RwSignal<Vec<ThreadMessage>>,
    pub is_sending: RwSignal<bool>,
    pub is_loading_conversations: RwSignal<bool>,
    pub health: RwSignal<Option<ChatbotHealth>>,
    api: StoredValue<ApiClient>,
    thread_token: StoredValue<RequestToken>,
    toasts: ToastStore,
}

impl ChatbotStore {
    pub fn new(api: ApiClient, toasts: ToastStore) -> Self {
        Self {
            conversations: create_rw_signal(Vec::new()),
            current: create_rw_signal(None),
            messages: create_rw_signal(Vec::new()),
            is_sending: create_rw_signal(false),
            is_loading_conversations: create_rw_signal(false),
            health: create_rw_signal(None),
            api: store_value(api),
            thread_token: store_value(RequestToken::new()),
            toasts,
        }
    }

    fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    fn token(&self) -> RequestToken {
        self.thread_token.get_value()
    }

    pub fn is_available(&self) -> bool {
        chatbot_available(config::chatbot_enabled(), self.health.get().as_ref())
    }

    pub async fn load_conversations(self) {
        self.is_loading_conversations.set(true);
        match self
            .api()
            .list_conversations(1, CONVERSATION_PAGE_SIZE)
            .await
        {
            Ok(response) => self.conversations.set(response.conversations),
            Err(err) => {
                log::error!("[chatbot] loading conversations failed: {}", err);
                self.toasts.error("Failed to load conversations");
            }
        }
        self.is_loading_conversations.set(false);
    }

    pub async fn open_conversation(self, conversation: Conversation) {
        let ticket = self.token().issue();
        let id = conversation.id.clone();
        self.current.set(Some(conversation));
        match self.api().get_conversation(&id).await {
            Ok(detail) => {
                if self.token().is_current(ticket) {
                    self.messages
                        .set(detail.messages.into_iter().map(ThreadMessage::new).collect());
                }
            }
            Err(err) => {
                log::error!("[chatbot] loading conversation {} failed: {}", id, err);
                self.toasts.error("Failed to load conversation");
            }
        }
    }

    pub fn start_new_conversation(self) {
        self.token().invalidate();
        self.current.set(None);
        self.messages.set(Vec::new());
    }

    /// Returns whether a request was sent and answered.
    pub async fn send_message(self, user: &CurrentUser, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_sending.get_untracked() {
            return false;
        }
        let Some(user_id) = user.identifier().map(str::to_string) else {
            log::warn!("[chatbot] cannot send without a user id");
            return false;
        };

        let ticket = self.token().issue();
        let pending = ThreadMessage::new(ChatMessage {
            role: ChatRole::User,
            content: trimmed.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            sources: None,
        });
        let pending_key = pending.key;
        self.messages.update(|list| list.push(pending));
        self.is_sending.set(true);

        let current = self.current.get_untracked();
        let request = ChatRequest {
            message: trimmed.to_string(),
            conversation_id: current.as_ref().map(|c| c.id.clone()),
            user_id,
            department_id: user.department.clone(),
            role: user
                .role
                .clone()
                .filter(|role| !role.is_empty())
                .unwrap_or_else(|| DEFAULT_CHAT_ROLE.to_string()),
        };

        let result = self.api().send_chat_message(&request).await;
        self.is_sending.set(false);
        match result {
            Ok(reply) => {
                if !self.token().is_current(ticket) {
                    return true;
                }
                let preview = preview_of(&reply.message);
                self.messages.update(|list| {
                    list.push(ThreadMessage::new(ChatMessage {
                        role: ChatRole::Assistant,
                        content: reply.message.clone(),
                        timestamp: reply.timestamp.clone(),
                        sources: reply.sources.clone(),
                    }))
                });
                match current {
                    None => {
                        self.current.set(Some(Conversation {
                            id: reply.conversation_id.clone(),
                            last_activity: reply.timestamp.clone(),
                            message_count: 2,
                            preview,
                            department_id: None,
                            role: None,
                        }));
                        self.load_conversations().await;
                    }
                    Some(_) => self.current.update(|conversation| {
                        if let Some(conversation) = conversation.as_mut() {
                            conversation.last_activity = reply.timestamp.clone();
                            conversation.message_count += 2;
                            conversation.preview = preview;
                        }
                    }),
                }
                true
            }
            Err(err) => {
                log::error!("[chatbot] sending message failed: {}", err);
                self.toasts.error("Failed to send message");
                self.messages
                    .update(|list| list.retain(|m| m.key != pending_key));
                false
            }
        }
    }

    pub async fn delete_conversation(self, conversation_id: String) {
        match self.api().delete_conversation(&conversation_id).await {
            Ok(()) => {
                self.conversations
                    .update(|list| list.retain(|c| c.id != conversation_id));
                let is_current = self
                    .current
                    .get_untracked()
                    .map(|c| c.id == conversation_id)
                    .unwrap_or(false);
                if is_current {
                    self.start_new_conversation();
                }
                self.toasts.success("Conversation deleted");
            }
            Err(err) => {
                log::error!("[chatbot] deleting {} failed: {}", conversation_id, err);
                self.toasts.error("Failed to delete conversation");
            }
        }
    }

    pub async fn check_health(self) {
        match self.api().get_chatbot_health().await {
            Ok(health) => self.health.set(Some(health)),
            Err(err) => {
                log::warn!("[chatbot] health check failed: {}", err);
                self.health
                    .set(Some(ChatbotHealth::unavailable(Utc::now().to_rfc3339())));
            }
        }
    }

    pub fn reset(self) {
        self.token().invalidate();
        self.conversations.set(Vec::new());
        self.current.set(None);
        self.messages.set(Vec::new());
    }
}

/// The assistant is usable only when enabled and every component reports healthy.
pub fn chatbot_available(enabled: bool, health: Option<&ChatbotHealth>) -> bool {
    enabled && health.map(ChatbotHealth::is_healthy).unwrap_or(false)
}

pub fn preview_of(message: &str) -> String {
    message.chars().take(PREVIEW_CHARS).collect()
}

pub fn provide_chatbot() -> ChatbotStore {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let store = ChatbotStore::new(api, use_toasts());
    provide_context(store);
    store
}

pub fn use_chatbot() -> ChatbotStore {
    use_context::<ChatbotStore>().unwrap_or_else(provide_chatbot)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn user() -> CurrentUser {
        CurrentUser {
            mongo_id: Some("u1".into()),
            id: None,
            name: "Lan".into(),
            email: "lan@example.com".into(),
            role: Some("MANAGER".into()),
            department: Some("d1".into()),
            phone: None,
            position: None,
        }
    }

    fn store_for(server: &MockServer) -> ChatbotStore {
        ChatbotStore::new(
            ApiClient::new_with_base_url(server.url("/api")),
            ToastStore::new(),
        )
    }

    fn conversation(id: &str) -> Conversation {
        Conversation {
            id: id.into(),
            last_activity: "2025-01-08T10:00:00Z".into(),
            message_count: 4,
            preview: "old".into(),
            department_id: None,
            role: None,
        }
    }

    #[tokio::test]
    async fn new_conversation_adopts_returned_id_and_reloads_list() {
        let server = MockServer::start_async().await;
        let chat = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/rag/chat").json_body(json!({
                    "message": "Xin chào",
                    "user_id": "u1",
                    "department_id": "d1",
                    "role": "MANAGER"
                }));
                then.status(200).json_body(json!({
                    "conversation_id": "c9",
                    "message": "Chào bạn!",
                    "timestamp": "2025-01-08T10:00:00Z"
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rag/conversations");
                then.status(200).json_body(json!({
                    "conversations": [{ "id": "c9", "lastActivity": "2025-01-08T10:00:00Z", "messageCount": 2, "preview": "Chào bạn!" }]
                }));
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        assert!(store.send_message(&user(), "  Xin chào ").await);

        chat.assert_async().await;
        list.assert_async().await;
        let current = store.current.get_untracked().unwrap();
        assert_eq!(current.id, "c9");
        assert_eq!(current.message_count, 2);
        assert_eq!(current.preview, "Chào bạn!");
        let messages = store.messages.get_untracked();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message.role, ChatRole::User);
        assert_eq!(messages[1].message.role, ChatRole::Assistant);
        assert_eq!(store.conversations.get_untracked().len(), 1);
        assert!(!store.is_sending.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn existing_conversation_updates_counters() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/rag/chat").json_body_partial(
                    r#"{ "conversation_id": "c1" }"#,
                );
                then.status(200).json_body(json!({
                    "conversation_id": "c1",
                    "message": "Bạn còn 5 ngày phép.",
                    "timestamp": "2025-01-09T08:00:00Z"
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rag/conversations");
                then.status(200).json_body(json!({ "conversations": [] }));
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        store.current.set(Some(conversation("c1")));
        assert!(store.send_message(&user(), "Tôi còn bao nhiêu ngày phép?").await);

        let current = store.current.get_untracked().unwrap();
        assert_eq!(current.message_count, 6);
        assert_eq!(current.preview, "Bạn còn 5 ngày phép.");
        assert_eq!(current.last_activity, "2025-01-09T08:00:00Z");
        list.assert_hits_async(0).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_send_removes_optimistic_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/rag/chat");
                then.status(500).json_body(json!({ "error": "LLM offline" }));
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        assert!(!store.send_message(&user(), "Xin chào").await);
        assert!(store.messages.get_untracked().is_empty());
        assert!(store.current.get_untracked().is_none());
        assert_eq!(store.toasts.messages(), vec!["Failed to send message".to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn blank_message_sends_nothing() {
        let server = MockServer::start_async().await;
        let chat = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/rag/chat");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        assert!(!store.send_message(&user(), "   ").await);
        chat.assert_hits_async(0).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn deleting_current_conversation_clears_thread() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/rag/conversation/c1");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        store
            .conversations
            .set(vec![conversation("c1"), conversation("c2")]);
        store.current.set(Some(conversation("c1")));
        store.messages.set(vec![ThreadMessage::new(ChatMessage {
            role: ChatRole::User,
            content: "hi".into(),
            timestamp: String::new(),
            sources: None,
        })]);

        store.delete_conversation("c1".into()).await;
        let ids: Vec<String> = store
            .conversations
            .get_untracked()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c2".to_string()]);
        assert!(store.current.get_untracked().is_none());
        assert!(store.messages.get_untracked().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_health_check_marks_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rag/health");
                then.status(503);
            })
            .await;

        let runtime = create_runtime();
        let store = store_for(&server);
        store.check_health().await;
        let health = store.health.get_untracked().unwrap();
        assert_eq!(health.status, "unavailable");
        assert!(!store.is_available());
        runtime.dispose();
    }
}
