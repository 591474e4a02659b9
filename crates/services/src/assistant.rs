//! Conversation state for the "ask the tutor" panel.
//!
//! Every transition is split in two. `open` and `submit` update the log
//! synchronously and hand back an `AssistantRequest`; the caller runs it
//! against the tutor and feeds the text to `complete`. At most one request is
//! in flight per session.

use masterclass_core::model::ChatMessage;

use crate::ai::TutorService;

/// Shown when the automatic explanation comes back empty.
pub const EMPTY_EXPLANATION: &str = "Failed to explain.";
/// Shown when an answer to a question comes back empty.
pub const EMPTY_ANSWER: &str = "I am sorry, I could not generate a response.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistantState {
    Closed,
    OpenIdle,
    OpenLoading,
}

/// A tutor call issued by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantRequest {
    topic_title: String,
    question: Option<String>,
}

impl AssistantRequest {
    #[must_use]
    pub fn topic_title(&self) -> &str {
        &self.topic_title
    }

    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// True for the explanation fired when the panel first opens.
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.question.is_none()
    }

    /// Run the request. Never fails; see `TutorService::explain`.
    pub async fn run(&self, tutor: &TutorService) -> String {
        tutor.explain(&self.topic_title, self.question.as_deref()).await
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantSession {
    messages: Vec<ChatMessage>,
    is_open: bool,
    is_loading: bool,
    draft: String,
    explained: bool,
}

impl AssistantSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> AssistantState {
        match (self.is_open, self.is_loading) {
            (false, _) => AssistantState::Closed,
            (true, false) => AssistantState::OpenIdle,
            (true, true) => AssistantState::OpenLoading,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True once the automatic explanation has been requested.
    #[must_use]
    pub fn has_explained(&self) -> bool {
        self.explained
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Whether `submit` would issue a request right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_open && !self.is_loading && !self.draft.trim().is_empty()
    }

    /// Show the panel. The first open of a session asks for an explanation
    /// of `topic_title`; later opens only show the existing log.
    pub fn open(&mut self, topic_title: &str) -> Option<AssistantRequest> {
        if self.is_open {
            return None;
        }
        self.is_open = true;
        if self.explained || self.is_loading {
            return None;
        }
        self.explained = true;
        self.is_loading = true;
        Some(AssistantRequest {
            topic_title: topic_title.to_string(),
            question: None,
        })
    }

    /// Hide the panel. Pending requests keep running and the log is kept.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Send the draft as a question about `topic_title`.
    ///
    /// Appends the user message and clears the draft immediately. Returns
    /// `None` without touching anything when the panel is closed, a request
    /// is already in flight, or the draft is blank.
    pub fn submit(&mut self, topic_title: &str) -> Option<AssistantRequest> {
        if !self.can_submit() {
            return None;
        }
        let question = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(question.clone()));
        self.is_loading = true;
        Some(AssistantRequest {
            topic_title: topic_title.to_string(),
            question: Some(question),
        })
    }

    /// Apply the tutor's reply to `request` and leave the loading state.
    pub fn complete(&mut self, request: &AssistantRequest, reply: impl Into<String>) {
        let reply = reply.into();
        let content = if reply.trim().is_empty() {
            if request.is_automatic() {
                EMPTY_EXPLANATION.to_string()
            } else {
                EMPTY_ANSWER.to_string()
            }
        } else {
            reply
        };
        self.messages.push(ChatMessage::assistant(content));
        self.is_loading = false;
    }

    /// Run `request` against `tutor` and apply the reply.
    pub async fn drive(&mut self, request: AssistantRequest, tutor: &TutorService) {
        let reply = request.run(tutor).await;
        self.complete(&request, reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterclass_core::model::ChatRole;

    #[test]
    fn fresh_session_is_closed_and_empty() {
        let session = AssistantSession::new();
        assert_eq!(session.state(), AssistantState::Closed);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn first_open_requests_an_explanation() {
        let mut session = AssistantSession::new();
        let request = session.open("Pointer Arithmetic").expect("auto explain");
        assert!(request.is_automatic());
        assert_eq!(request.topic_title(), "Pointer Arithmetic");
        assert_eq!(session.state(), AssistantState::OpenLoading);

        session.complete(&request, "It is like house numbers.");
        assert_eq!(session.state(), AssistantState::OpenIdle);
        assert_eq!(session.messages()[0].role, ChatRole::Assistant);
    }

    #[test]
    fn reopening_keeps_log_and_does_not_explain_again() {
        let mut session = AssistantSession::new();
        let request = session.open("Tokens").unwrap();
        session.complete(&request, "Tokens are words.");
        session.close();
        assert_eq!(session.state(), AssistantState::Closed);

        assert!(session.open("Tokens").is_none());
        assert_eq!(session.state(), AssistantState::OpenIdle);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn submit_appends_user_message_and_clears_draft() {
        let mut session = AssistantSession::new();
        let auto = session.open("Tokens").unwrap();
        session.complete(&auto, "ok");

        session.set_draft("What is an identifier?");
        let request = session.submit("Tokens").expect("request");
        assert_eq!(request.question(), Some("What is an identifier?"));
        assert_eq!(session.draft(), "");
        assert_eq!(session.state(), AssistantState::OpenLoading);
        let last = session.messages().last().unwrap();
        assert!(last.is_user());
        assert_eq!(last.content, "What is an identifier?");
    }

    #[test]
    fn blank_draft_is_ignored() {
        let mut session = AssistantSession::new();
        let auto = session.open("Tokens").unwrap();
        session.complete(&auto, "ok");

        session.set_draft("   \n\t");
        assert!(session.submit("Tokens").is_none());
        assert_eq!(session.state(), AssistantState::OpenIdle);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.draft(), "   \n\t");
    }

    #[test]
    fn submit_while_loading_is_rejected() {
        let mut session = AssistantSession::new();
        let _auto = session.open("Tokens").unwrap();
        session.set_draft("second question");

        let before = session.messages().len();
        assert!(session.submit("Tokens").is_none());
        assert_eq!(session.messages().len(), before);
        assert_eq!(session.draft(), "second question");
    }

    #[test]
    fn submit_while_closed_is_rejected() {
        let mut session = AssistantSession::new();
        session.set_draft("hello");
        assert!(session.submit("Tokens").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn closing_mid_flight_still_applies_the_reply() {
        let mut session = AssistantSession::new();
        let request = session.open("Memory Model").unwrap();
        session.close();
        assert!(session.is_loading());
        assert_eq!(session.state(), AssistantState::Closed);

        assert!(session.open("Memory Model").is_none());
        assert_eq!(session.state(), AssistantState::OpenLoading);

        session.complete(&request, "Stack and heap.");
        assert_eq!(session.state(), AssistantState::OpenIdle);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn empty_replies_get_a_placeholder() {
        let mut session = AssistantSession::new();
        let auto = session.open("Tokens").unwrap();
        session.complete(&auto, "");
        assert_eq!(session.messages()[0].content, EMPTY_EXPLANATION);

        session.set_draft("why?");
        let asked = session.submit("Tokens").unwrap();
        session.complete(&asked, "  ");
        assert_eq!(session.messages()[2].content, EMPTY_ANSWER);
    }
}
