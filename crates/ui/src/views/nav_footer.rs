use dioxus::prelude::*;
use masterclass_core::Direction;

use crate::vm::NavFooterVm;

#[component]
pub fn NavFooter(vm: NavFooterVm, on_step: EventHandler<Direction>) -> Element {
    rsx! {
        nav { class: "lesson-nav",
            button {
                class: "lesson-nav__btn",
                r#type: "button",
                disabled: !vm.can_go_back,
                onclick: move |_| on_step.call(Direction::Backward),
                "‹ Previous"
            }
            div { class: "lesson-nav__dots",
                for (idx, active) in vm.dots.iter().copied().enumerate() {
                    span {
                        key: "{idx}",
                        class: if active { "nav-dot nav-dot--active" } else { "nav-dot" },
                    }
                }
            }
            button {
                class: "lesson-nav__btn",
                r#type: "button",
                disabled: !vm.can_go_forward,
                onclick: move |_| on_step.call(Direction::Forward),
                "Next ›"
            }
        }
    }
}
