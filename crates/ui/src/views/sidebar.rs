use dioxus::prelude::*;
use masterclass_core::model::TopicId;

use crate::vm::{SidebarTopicVm, SidebarVm};

#[component]
pub fn Sidebar(vm: SidebarVm, on_select: EventHandler<TopicId>) -> Element {
    let progress_label = vm.progress_label();
    let fill_style = format!("width: {}%;", vm.percent);

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                div { class: "sidebar__logo", "C" }
                h1 { class: "sidebar__title", "C Masterclass" }
            }
            nav { class: "sidebar__groups",
                for group in vm.groups {
                    div { key: "{group.label}", class: "sidebar-group",
                        h2 { class: "sidebar-group__label", "{group.label}" }
                        ul { class: "sidebar-group__list",
                            for topic in group.topics {
                                SidebarItem { key: "{topic.id}", topic: topic.clone(), on_select: on_select }
                            }
                        }
                    }
                }
            }
            footer { class: "sidebar__progress",
                div { class: "sidebar__progress-label", "{progress_label}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{fill_style}" }
                }
            }
        }
    }
}

#[component]
fn SidebarItem(topic: SidebarTopicVm, on_select: EventHandler<TopicId>) -> Element {
    let item_class = if topic.is_active {
        "sidebar-item sidebar-item--active"
    } else {
        "sidebar-item"
    };
    let dot_class = if topic.is_completed {
        "status-dot status-dot--done"
    } else {
        "status-dot"
    };
    let id = topic.id.clone();

    rsx! {
        li {
            button {
                class: "{item_class}",
                r#type: "button",
                onclick: move |_| on_select.call(id.clone()),
                span { class: "{dot_class}" }
                span { class: "sidebar-item__title", "{topic.title}" }
                if topic.is_active {
                    span { class: "sidebar-item__chevron", "›" }
                }
            }
        }
    }
}
