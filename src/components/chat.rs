//! Chat Panel
//!
//! Conversation with the recommendation agent. Messages are append-only;
//! concurrent submits are allowed and replies land in arrival order.

use leptos::*;

use crate::api;

#[derive(Clone, Copy, PartialEq)]
enum Role {
    User,
    Agent,
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
    role: Role,
    text: String,
}

/// Chat panel component
#[component]
pub fn ChatPanel() -> impl IntoView {
    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let (input, set_input) = create_signal(String::new());

    let input_ref = create_node_ref::<html::Input>();
    let log_ref = create_node_ref::<html::Div>();

    // Keep the log scrolled to the latest message
    create_effect(move |_| {
        let _count = messages.with(|m| m.len());
        if let Some(log) = log_ref.get() {
            log.set_scroll_top(log.scroll_height());
        }
    });

    let append = move |role: Role, text: String| {
        messages.update(|m| m.push(ChatMessage { role, text }));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let message = input.get().trim().to_string();
        if message.is_empty() {
            return;
        }

        append(Role::User, message.clone());

        // Clear and refocus before the reply resolves
        set_input.set(String::new());
        if let Some(field) = input_ref.get() {
            let _ = field.focus();
        }

        spawn_local(async move {
            match api::send_chat(&message).await {
                Ok(reply) => append(Role::Agent, reply),
                Err(e) => append(Role::Agent, format!("Erreur: {}", e)),
            }
        });
    };

    view! {
        <div class="flex flex-col h-[70vh]">
            <h2 class="text-xl font-semibold mb-4">"Discussion avec l'agent"</h2>

            // Message log
            <div node_ref=log_ref class="flex-1 overflow-y-auto space-y-3 pr-2">
                {move || {
                    if messages.with(|m| m.is_empty()) {
                        view! {
                            <p class="empty-chat text-gray-500 text-sm">
                                "Pose une question a l'agent pour commencer."
                            </p>
                        }
                        .into_view()
                    } else {
                        messages
                            .get()
                            .into_iter()
                            .map(|msg| view! { <Message msg /> })
                            .collect_view()
                    }
                }}
            </div>

            // Input row
            <form on:submit=on_submit class="mt-4 flex space-x-2">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder="Ton message..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="px-5 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Envoyer"
                </button>
            </form>
        </div>
    }
}

#[component]
fn Message(msg: ChatMessage) -> impl IntoView {
    let (meta, wrapper_class) = match msg.role {
        Role::User => ("Toi", "message user bg-gray-700 rounded-lg p-3"),
        Role::Agent => ("Agent", "message agent bg-gray-900 rounded-lg p-3"),
    };

    view! {
        <div class=wrapper_class>
            <div class="meta text-xs text-gray-400 mb-1">{meta}</div>
            {match msg.role {
                // Agent replies carry markdown
                Role::Agent => view! {
                    <div class="content prose prose-invert text-sm" inner_html=markdown_to_html(&msg.text) />
                }
                .into_view(),
                Role::User => view! {
                    <div class="content text-sm whitespace-pre-wrap">{msg.text}</div>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Render an agent reply's markdown to HTML
fn markdown_to_html(text: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_emphasis() {
        let html = markdown_to_html("un film **culte**");
        assert!(html.contains("<strong>culte</strong>"), "{}", html);
    }

    #[test]
    fn test_markdown_list() {
        let html = markdown_to_html("- Matrix\n- Alien");
        assert!(html.contains("<li>Matrix</li>"), "{}", html);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let html = markdown_to_html("juste du texte");
        assert!(html.contains("juste du texte"));
    }
}
