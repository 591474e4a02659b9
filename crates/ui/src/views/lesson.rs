use dioxus::prelude::*;
use masterclass_core::model::TopicId;

use crate::views::CodeBlock;
use crate::vm::{LessonBlockVm, LessonVm};

#[component]
pub fn LessonView(vm: LessonVm, on_toggle: EventHandler<TopicId>) -> Element {
    let toggle_label = vm.toggle_label();
    let toggle_class = if vm.is_completed {
        "lesson-toggle lesson-toggle--done"
    } else {
        "lesson-toggle"
    };
    let id = vm.id.clone();

    rsx! {
        header { class: "lesson-header",
            span { class: "lesson-header__path", "Learning Path: {vm.category_label}" }
        }
        section { class: "lesson",
            div { class: "lesson__title-row",
                h1 { class: "lesson__title", "{vm.title}" }
                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    onclick: move |_| on_toggle.call(id.clone()),
                    "{toggle_label}"
                }
            }
            p { class: "lesson__summary", "{vm.summary}" }
            div { class: "lesson__body",
                for (idx, block) in vm.blocks.iter().enumerate() {
                    match block {
                        LessonBlockVm::Paragraph { html } => rsx! {
                            p { key: "{idx}", class: "lesson__para", dangerous_inner_html: "{html}" }
                        },
                        LessonBlockVm::ListItem { html } => rsx! {
                            div { key: "{idx}", class: "lesson__item",
                                span { class: "lesson__bullet" }
                                span { dangerous_inner_html: "{html}" }
                            }
                        },
                    }
                }
            }
            div { class: "lesson__example",
                h3 { class: "lesson__example-title", "Interactive Code Example" }
                CodeBlock { code: vm.code.clone(), lines: vm.code_lines.clone() }
            }
        }
    }
}
