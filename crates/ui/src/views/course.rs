#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use masterclass_core::model::TopicId;
use masterclass_core::{Direction, Navigator};

use crate::context::AppContext;
use crate::views::{AssistantPanel, LessonView, NavFooter, Sidebar};
use crate::vm::{map_lesson, map_nav_footer, map_sidebar};

const SCROLL_TO_TOP: &str = "window.scrollTo(0, 0);";

fn initial_navigator(ctx: &AppContext) -> Navigator {
    let catalog = ctx.catalog();
    match ctx.initial_topic() {
        Some(id) => Navigator::starting_at(&catalog, id.as_str()),
        None => Navigator::new(&catalog),
    }
}

/// Top-level screen. Owns the current lesson and the completed set.
#[component]
pub fn CourseView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut navigator = use_signal(|| initial_navigator(&ctx));
    let mut completed = use_signal(|| ctx.initial_completed());

    let topic = navigator.read().current(&catalog);
    let sidebar = map_sidebar(&catalog, &completed.read(), navigator.read().current_id());
    let lesson = map_lesson(topic, &completed.read());
    let footer = map_nav_footer(&navigator.read(), &catalog);
    let topic_title = topic.title().to_string();

    let select_catalog = Arc::clone(&catalog);
    let on_select = move |id: TopicId| {
        navigator.write().select(&select_catalog, id.as_str());
    };

    let step_catalog = Arc::clone(&catalog);
    let on_step = use_callback(move |direction: Direction| {
        let moved = navigator.write().step(&step_catalog, direction);
        if moved {
            let _ = eval(SCROLL_TO_TOP);
        }
    });

    // The in-memory set updates first; the write runs behind it.
    let progress = ctx.progress();
    let on_toggle = use_callback(move |id: TopicId| {
        let next = completed.peek().toggled(&id);
        tracing::debug!(topic = %id, completed = next.contains(id.as_str()), "toggled lesson");
        completed.set(next.clone());
        let progress = Arc::clone(&progress);
        spawn(async move {
            progress.persist(&next).await;
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CourseTestHandles>() {
                handles.register_course(on_toggle, on_step);
            }
        }
    }

    rsx! {
        div { class: "course",
            Sidebar { vm: sidebar, on_select: on_select }
            main { class: "course__main",
                LessonView { vm: lesson, on_toggle: on_toggle }
                NavFooter { vm: footer, on_step: on_step }
            }
            AssistantPanel { topic_title: topic_title }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CourseTestHandles {
    toggle: Rc<RefCell<Option<Callback<TopicId>>>>,
    step: Rc<RefCell<Option<Callback<Direction>>>>,
    open_assistant: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl CourseTestHandles {
    pub(crate) fn register_course(&self, toggle: Callback<TopicId>, step: Callback<Direction>) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.step.borrow_mut() = Some(step);
    }

    pub(crate) fn register_assistant(&self, open: Callback<()>) {
        *self.open_assistant.borrow_mut() = Some(open);
    }

    pub(crate) fn toggle(&self) -> Callback<TopicId> {
        (*self.toggle.borrow()).expect("course toggle registered")
    }

    pub(crate) fn step(&self) -> Callback<Direction> {
        (*self.step.borrow()).expect("course step registered")
    }

    pub(crate) fn open_assistant(&self) -> Callback<()> {
        (*self.open_assistant.borrow()).expect("assistant open registered")
    }
}
