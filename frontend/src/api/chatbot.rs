use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, ChatRequest, ChatResponse, ChatbotHealth, ConversationDetail,
        ConversationsResponse,
    },
};

impl ApiClient {
    pub async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.endpoint("/rag/chat").await;
        self.send_json(self.http_client().post(url).json(request))
            .await
    }

    pub async fn list_conversations(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ConversationsResponse, ApiError> {
        let url = self.endpoint("/rag/conversations").await;
        let request = self
            .http_client()
            .get(url)
            .query(&[("page", page), ("limit", limit)]);
        self.send_json(request).await
    }

    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<ConversationDetail, ApiError> {
        let url = self
            .endpoint(&format!(
                "/rag/conversation/{}",
                encode_segment(conversation_id)
            ))
            .await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/rag/conversation/{}",
                encode_segment(conversation_id)
            ))
            .await;
        self.send_empty(self.http_client().delete(url)).await
    }

    pub async fn get_chatbot_health(&self) -> Result<ChatbotHealth, ApiError> {
        let url = self.endpoint("/rag/health").await;
        self.send_json(self.http_client().get(url)).await
    }
}
