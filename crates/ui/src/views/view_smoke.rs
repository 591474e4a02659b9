use masterclass_core::model::{CompletedSet, TopicId};

use super::test_harness::setup_course_harness;

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_first_lesson() {
    let mut harness = setup_course_harness(CompletedSet::new(), None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Role of C"), "missing title in {html}");
    assert!(html.contains("Learning Path: Environment"), "missing path in {html}");
    assert!(html.contains("Mark Complete"), "missing toggle in {html}");
    assert!(html.contains("CURRICULUM PROGRESS: 0/14"), "missing progress in {html}");
    assert!(html.contains("Interactive Code Example"), "missing code header in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_inline_markdown() {
    let mut harness = setup_course_harness(CompletedSet::new(), None);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("<strong>Operating Systems</strong>"),
        "missing bold list item in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_honours_initial_state() {
    let completed = CompletedSet::from_ids([TopicId::from("storage-classes")]);
    let mut harness = setup_course_harness(completed, Some("storage-classes"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Storage Classes"), "missing title in {html}");
    assert!(html.contains("Learning Path: Functions"), "missing path in {html}");
    assert!(html.contains("Completed"), "missing completed toggle in {html}");
    assert!(!html.contains("Mark Complete"), "unexpected toggle label in {html}");
    assert!(html.contains("CURRICULUM PROGRESS: 1/14"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_unknown_topic_opens_first_lesson() {
    let mut harness = setup_course_harness(CompletedSet::new(), Some("no-such-topic"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Learning Path: Environment"), "missing path in {html}");
    assert!(html.contains("Role of C"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_starts_closed_with_launcher() {
    let mut harness = setup_course_harness(CompletedSet::new(), Some("storage-classes"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("assistant__launcher"), "missing launcher in {html}");
    assert!(html.contains("Storage Classes"), "missing topic in launcher {html}");
    assert!(!html.contains("AI Tutor"), "panel should be closed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn code_block_numbers_lines() {
    let mut harness = setup_course_harness(CompletedSet::new(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("code-line__number"), "missing line numbers in {html}");
    assert!(
        html.contains("The C language has powered the world"),
        "missing code text in {html}"
    );
}
