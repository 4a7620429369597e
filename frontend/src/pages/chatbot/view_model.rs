use leptos::*;

use super::utils::{assistant_status, can_send, AssistantStatus};
use crate::{
    api::{Conversation, CurrentUser},
    config,
    state::{
        auth::use_auth,
        chatbot::{use_chatbot, ChatbotStore},
    },
};

#[derive(Clone, Copy)]
pub struct ChatbotViewModel {
    pub store: ChatbotStore,
    pub input: RwSignal<String>,
    pub user: Memo<Option<CurrentUser>>,
    pub status: Memo<AssistantStatus>,
}

impl ChatbotViewModel {
    pub fn can_send(&self) -> bool {
        self.input
            .with(|text| can_send(text, self.store.is_sending.get(), self.status.get()))
    }

    pub fn send(&self) {
        if !self.can_send() {
            return;
        }
        let Some(user) = self.user.get_untracked() else {
            return;
        };
        let text = self.input.get_untracked();
        let store = self.store;
        let input = self.input;
        spawn_local(async move {
            store.send_message(&user, &text).await;
            input.set(String::new());
        });
    }

    pub fn open(&self, conversation: Conversation) {
        let store = self.store;
        spawn_local(async move { store.open_conversation(conversation).await });
    }

    pub fn start_new(&self) {
        self.store.start_new_conversation();
    }

    pub fn delete(&self, conversation_id: String) {
        let store = self.store;
        spawn_local(async move { store.delete_conversation(conversation_id).await });
    }
}

pub fn use_chatbot_view_model() -> ChatbotViewModel {
    let store = use_chatbot();
    let (auth, _) = use_auth();
    let user = create_memo(move |_| auth.get().user);
    let status = create_memo(move |_| {
        store
            .health
            .with(|health| assistant_status(config::chatbot_enabled(), health.as_ref()))
    });

    // Health and the conversation list load once per signed-in user.
    create_effect(move |previous: Option<Option<String>>| {
        let user_id = user.with(|user| {
            user.as_ref()
                .and_then(CurrentUser::identifier)
                .map(str::to_string)
        });
        if user_id.is_some() && previous.as_ref() != Some(&user_id) {
            spawn_local(async move {
                store.check_health().await;
                store.load_conversations().await;
            });
        }
        user_id
    });

    ChatbotViewModel {
        store,
        input: create_rw_signal(String::new()),
        user,
        status,
    }
}
