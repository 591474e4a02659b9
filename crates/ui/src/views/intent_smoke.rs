use masterclass_core::Direction;
use masterclass_core::model::{Catalog, CompletedSet, TopicId};
use services::PROGRESS_KEY;

use super::test_harness::setup_course_harness;

#[tokio::test(flavor = "current_thread")]
async fn toggle_updates_progress_and_saves_it() {
    let mut harness = setup_course_harness(CompletedSet::new(), None);
    harness.rebuild();
    assert!(harness.render().contains("CURRICULUM PROGRESS: 0/14"));

    harness.act(|handles| handles.toggle().call(TopicId::from("history")));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("CURRICULUM PROGRESS: 1/14"), "missing progress in {html}");
    assert!(html.contains("Completed"), "missing completed toggle in {html}");

    let stored = harness.storage.kv.get(PROGRESS_KEY).await.expect("read progress");
    assert_eq!(stored.as_deref(), Some(r#"["history"]"#));
}

#[tokio::test(flavor = "current_thread")]
async fn next_on_last_lesson_stays_put() {
    let catalog = Catalog::builtin();
    let last = catalog.at(catalog.len() - 1).expect("last topic");
    let previous = catalog.at(catalog.len() - 2).expect("previous topic");

    let mut harness = setup_course_harness(CompletedSet::new(), Some(last.id().as_str()));
    harness.rebuild();

    harness.act(|handles| handles.step().call(Direction::Forward));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(last.summary()), "left the last lesson: {html}");

    harness.act(|handles| handles.step().call(Direction::Backward));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(previous.summary()), "did not step back: {html}");
    assert!(!html.contains(last.summary()), "still on the last lesson: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn opening_assistant_without_credential_shows_fallback() {
    let mut harness = setup_course_harness(CompletedSet::new(), Some("storage-classes"));
    harness.rebuild();

    harness.act(|handles| handles.open_assistant().call(()));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("AI Tutor"), "panel did not open: {html}");
    assert!(
        html.contains("trouble connecting to my brain right now"),
        "missing fallback reply in {html}"
    );
    assert!(!html.contains("Thinking..."), "still loading in {html}");
}
