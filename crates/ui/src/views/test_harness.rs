use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use masterclass_core::model::{AiSettings, Catalog, CompletedSet, TopicId};
use services::{AppServices, TutorService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::CourseView;
use crate::views::course::CourseTestHandles;

struct TestApp {
    services: AppServices,
    completed: CompletedSet,
    topic: Option<TopicId>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<services::ProgressService> {
        self.services.progress()
    }

    fn tutor(&self) -> Arc<TutorService> {
        self.services.tutor()
    }

    fn initial_completed(&self) -> CompletedSet {
        self.completed.clone()
    }

    fn initial_topic(&self) -> Option<TopicId> {
        self.topic.clone()
    }
}

#[derive(Props, Clone)]
struct CourseHarnessProps {
    app: Arc<TestApp>,
    handles: CourseTestHandles,
}

impl PartialEq for CourseHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CourseHarness(props: CourseHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { CourseView {} }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handles: CourseTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run `f` inside the dom's runtime so callbacks can spawn tasks.
    pub fn act(&mut self, f: impl FnOnce(&CourseTestHandles)) {
        let handles = self.handles.clone();
        self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Course screen over in-memory storage and a tutor with no credential.
pub fn setup_course_harness(completed: CompletedSet, topic: Option<&str>) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::from_parts(
        Catalog::builtin(),
        &storage,
        TutorService::from_settings(&AiSettings::default()),
    );
    let app = Arc::new(TestApp {
        services,
        completed,
        topic: topic.map(TopicId::from),
    });
    let handles = CourseTestHandles::default();
    let dom = VirtualDom::new_with_props(
        CourseHarness,
        CourseHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        storage,
        handles,
    }
}
