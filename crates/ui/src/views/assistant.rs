use dioxus::prelude::*;
use services::{AssistantRequest, AssistantSession};

use crate::context::AppContext;
use crate::vm::map_assistant_panel;

/// Floating "ask the tutor" panel. One conversation per app session; the log
/// survives closing the panel and switching lessons.
#[component]
pub fn AssistantPanel(topic_title: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(AssistantSession::new);

    let run_request = use_callback(move |request: AssistantRequest| {
        let tutor = ctx.tutor();
        spawn(async move {
            let reply = request.run(&tutor).await;
            session.write().complete(&request, reply);
        });
    });

    let vm = map_assistant_panel(&session.read(), &topic_title);

    let open_title = topic_title.clone();
    let open_panel = use_callback(move |()| {
        let request = session.write().open(&open_title);
        if let Some(request) = request {
            run_request.call(request);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::course::CourseTestHandles>() {
                handles.register_assistant(open_panel);
            }
        }
    }

    let submit_title = topic_title.clone();
    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let request = session.write().submit(&submit_title);
        if let Some(request) = request {
            run_request.call(request);
        }
    };

    rsx! {
        div { class: "assistant",
            if !vm.is_open {
                button {
                    class: "assistant__launcher",
                    r#type: "button",
                    onclick: move |_| open_panel.call(()),
                    "{vm.launcher_label}"
                }
            } else {
                div { class: "assistant__panel",
                    div { class: "assistant__header",
                        span { class: "assistant__heading", "AI Tutor" }
                        button {
                            class: "assistant__close",
                            r#type: "button",
                            onclick: move |_| session.write().close(),
                            "×"
                        }
                    }
                    div { class: "assistant__log",
                        if let Some(hint) = vm.empty_hint.clone() {
                            p { class: "assistant__hint", "{hint}" }
                        }
                        for (idx, bubble) in vm.bubbles.iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: if bubble.from_user { "bubble bubble--user" } else { "bubble bubble--tutor" },
                                "{bubble.text}"
                            }
                        }
                        if vm.is_loading {
                            div { class: "bubble bubble--tutor bubble--loading", "Thinking..." }
                        }
                    }
                    form { class: "assistant__form", onsubmit: on_submit,
                        input {
                            class: "assistant__input",
                            r#type: "text",
                            placeholder: "Ask a question...",
                            value: "{vm.draft}",
                            oninput: move |event: FormEvent| session.write().set_draft(event.value()),
                        }
                        button {
                            class: "assistant__send",
                            r#type: "submit",
                            disabled: !vm.can_submit,
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
