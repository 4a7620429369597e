use leptos::{ev::KeyboardEvent, *};

use super::{
    utils::{is_send_key, parse_rich_text, AssistantStatus, TextSpan},
    view_model::{use_chatbot_view_model, ChatbotViewModel},
};
use crate::{
    api::{ChatMessage, ChatRole},
    components::{
        badge::{Badge, BadgeTone},
        layout::LoadingSpinner,
    },
    state::chatbot::ThreadMessage,
    utils::time::{format_conversation_timestamp, format_message_timestamp, now_in_app_tz},
};

const GHOST_BUTTON: &str = "inline-flex items-center gap-1 rounded-md border border-border px-3 py-1.5 text-sm text-fg hover:bg-action-ghost-bg-hover";

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let vm = use_chatbot_view_model();

    view! {
        <div class="flex h-[calc(100vh-12rem)] bg-surface rounded-lg border border-border overflow-hidden">
            <ConversationSidebar vm=vm />
            <div class="flex-1 flex flex-col">
                <ChatHeader vm=vm />
                <AvailabilityNotice status=vm.status.into() />
                <MessageThread vm=vm />
                <ChatInput vm=vm />
            </div>
        </div>
    }
}

#[component]
fn ConversationSidebar(vm: ChatbotViewModel) -> impl IntoView {
    let store = vm.store;
    let current_id = move || store.current.with(|c| c.as_ref().map(|c| c.id.clone()));

    view! {
        <aside class="w-80 bg-surface-elevated border-r border-border flex flex-col">
            <div class="p-4 border-b border-border space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Conversations"</h2>
                <button
                    type="button"
                    class="w-full rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-medium"
                    on:click=move |_| vm.start_new()
                >
                    "+ New Conversation"
                </button>
            </div>
            <div class="flex-1 overflow-y-auto p-2">
                <Show
                    when=move || !store.is_loading_conversations.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !store.conversations.with(Vec::is_empty)
                        fallback=|| view! {
                            <p class="p-4 text-center text-sm text-fg-muted">"No conversations yet"</p>
                        }
                    >
                        <For
                            each=move || store.conversations.get()
                            key=|conversation| (conversation.id.clone(), conversation.message_count)
                            children=move |conversation| {
                                let id = conversation.id.clone();
                                let delete_id = conversation.id.clone();
                                let selected = move || current_id().as_deref() == Some(id.as_str());
                                let label = if conversation.preview.is_empty() {
                                    "New Chat".to_string()
                                } else {
                                    conversation.preview.clone()
                                };
                                let when = format_conversation_timestamp(
                                    &conversation.last_activity,
                                    now_in_app_tz(),
                                );
                                let count = conversation.message_count.to_string();
                                let open_target = conversation.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if selected() {
                                                "p-3 rounded-lg mb-2 cursor-pointer border border-action-primary-bg bg-surface-muted"
                                            } else {
                                                "p-3 rounded-lg mb-2 cursor-pointer border border-border hover:bg-surface-muted"
                                            }
                                        }
                                        on:click=move |_| vm.open(open_target.clone())
                                    >
                                        <div class="flex items-start justify-between gap-2">
                                            <div class="flex-1 min-w-0">
                                                <div class="flex items-center gap-2 mb-1">
                                                    <span class="text-sm font-medium text-fg truncate">{label}</span>
                                                    <Badge label=count />
                                                </div>
                                                <p class="text-xs text-fg-muted">{when}</p>
                                            </div>
                                            <button
                                                type="button"
                                                aria-label="Delete conversation"
                                                class="text-xs text-fg-muted hover:text-status-error-text"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    vm.delete(delete_id.clone());
                                                }
                                            >
                                                {"✕"}
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </Show>
            </div>
        </aside>
    }
}

#[component]
fn ChatHeader(vm: ChatbotViewModel) -> impl IntoView {
    let store = vm.store;
    view! {
        <div class="bg-surface-elevated border-b border-border p-4 flex items-center justify-between">
            <div>
                <h1 class="text-xl font-semibold text-fg">"AI Assistant"</h1>
                <p class="text-sm text-fg-muted">
                    {move || if store.current.with(Option::is_some) {
                        "Conversation"
                    } else {
                        "Start a new conversation"
                    }}
                </p>
            </div>
            {move || store.current.get().map(|conversation| view! {
                <button
                    type="button"
                    class=GHOST_BUTTON
                    on:click=move |_| vm.delete(conversation.id.clone())
                >
                    "Delete"
                </button>
            })}
        </div>
    }
}

#[component]
fn AvailabilityNotice(status: Signal<AssistantStatus>) -> impl IntoView {
    move || match status.get() {
        AssistantStatus::Available => ().into_view(),
        AssistantStatus::Checking => view! {
            <p class="px-4 py-2 text-xs text-fg-muted border-b border-border">"Checking assistant status..."</p>
        }
        .into_view(),
        AssistantStatus::Unavailable => view! {
            <div class="px-4 py-2 border-b border-status-warning-border bg-status-warning-bg text-status-warning-text text-sm" role="status">
                "AI Assistant is currently unavailable. Please try again later."
            </div>
        }
        .into_view(),
    }
}

#[component]
fn MessageThread(vm: ChatbotViewModel) -> impl IntoView {
    let store = vm.store;
    view! {
        <div class="flex-1 p-4 overflow-y-auto">
            <Show
                when=move || !store.messages.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="flex flex-col items-center justify-center h-full text-center">
                        <h3 class="text-lg font-medium text-fg mb-2">"Welcome to AI Assistant"</h3>
                        <p class="text-fg-muted max-w-md">
                            "Ask me about your attendance, payroll, leave requests, or request reports. I'm here to help!"
                        </p>
                    </div>
                }
            >
                <div class="space-y-1">
                    <For
                        each=move || store.messages.get()
                        key=|entry: &ThreadMessage| entry.key
                        children=|entry| view! { <ChatMessageBubble message=entry.message /> }
                    />
                    <Show when=move || store.is_sending.get()>
                        <div class="flex justify-start mb-4">
                            <div class="bg-surface-elevated border border-border rounded-lg p-3 shadow-sm flex items-center gap-2">
                                <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-action-primary-bg"></div>
                                <span class="text-sm text-fg-muted">"AI is thinking..."</span>
                            </div>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChatMessageBubble(message: ChatMessage) -> impl IntoView {
    if message.role == ChatRole::System {
        return view! {
            <div class="flex justify-center my-2">
                <Badge label=message.content tone=BadgeTone::Outline />
            </div>
        }
        .into_view();
    }

    let is_assistant = message.role == ChatRole::Assistant;
    let row_class = if is_assistant {
        "flex gap-3 mb-4 justify-start"
    } else {
        "flex gap-3 mb-4 justify-end"
    };
    let bubble_class = if is_assistant {
        "p-3 rounded-lg shadow-sm bg-surface-elevated border border-border text-fg"
    } else {
        "p-3 rounded-lg shadow-sm bg-action-primary-bg text-action-primary-text"
    };
    let column_class = if is_assistant {
        "flex flex-col max-w-[70%] items-start"
    } else {
        "flex flex-col max-w-[70%] items-end"
    };
    let role_attr = if is_assistant { "assistant" } else { "user" };
    let lines = parse_rich_text(&message.content);

    view! {
        <div class=row_class data-role=role_attr>
            <div class=column_class>
                <div class=bubble_class>
                    <div class="text-sm leading-relaxed">
                        {lines
                            .into_iter()
                            .map(|spans| view! {
                                <div>
                                    {spans
                                        .into_iter()
                                        .map(|span| match span {
                                            TextSpan::Plain(text) => text.into_view(),
                                            TextSpan::Bold(text) => view! { <strong class="font-bold">{text}</strong> }.into_view(),
                                        })
                                        .collect_view()}
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <span class="text-xs text-fg-muted mt-1 px-1">{format_message_timestamp(&message.timestamp)}</span>
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn ChatInput(vm: ChatbotViewModel) -> impl IntoView {
    let store = vm.store;
    let blocked = move || store.is_sending.get() || vm.status.get() != AssistantStatus::Available;

    view! {
        <div class="bg-surface-elevated border-t border-border p-4">
            <div class="flex gap-2">
                <input
                    type="text"
                    class="flex-1 rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    placeholder="Type your message..."
                    prop:value=move || vm.input.get()
                    disabled=blocked
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if is_send_key(&ev.key(), ev.shift_key()) {
                            ev.prevent_default();
                            vm.send();
                        }
                    }
                />
                <button
                    type="button"
                    class="rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-medium disabled:opacity-50"
                    disabled=move || !vm.can_send()
                    on:click=move |_| vm.send()
                >
                    {move || if store.is_sending.get() { "..." } else { "Send" }}
                </button>
            </div>
            <p class="mt-2 text-xs text-fg-muted">
                "Try asking: \"How many days have I worked this month?\" or \"Generate payroll report\""
            </p>
        </div>
    }
}
