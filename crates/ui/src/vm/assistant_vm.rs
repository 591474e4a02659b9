use services::AssistantSession;

const FOLLOW_UP_LABEL: &str = "Ask the AI Tutor";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub from_user: bool,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantPanelVm {
    pub is_open: bool,
    pub is_loading: bool,
    pub launcher_label: String,
    pub empty_hint: Option<String>,
    pub bubbles: Vec<ChatBubbleVm>,
    pub draft: String,
    pub can_submit: bool,
}

#[must_use]
pub fn map_assistant_panel(session: &AssistantSession, topic_title: &str) -> AssistantPanelVm {
    let bubbles: Vec<ChatBubbleVm> = session
        .messages()
        .iter()
        .map(|message| ChatBubbleVm {
            from_user: message.is_user(),
            text: message.content.clone(),
        })
        .collect();

    let empty_hint = (bubbles.is_empty() && !session.is_loading())
        .then(|| format!("Ask me anything about {topic_title}!"));

    // Reopening never re-explains, so the launcher stops promising it.
    let launcher_label = if session.has_explained() {
        FOLLOW_UP_LABEL.to_string()
    } else {
        format!("Explain \"{topic_title}\"")
    };

    AssistantPanelVm {
        is_open: session.is_open(),
        is_loading: session.is_loading(),
        launcher_label,
        empty_hint,
        bubbles,
        draft: session.draft().to_string(),
        can_submit: session.can_submit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_session_shows_launcher_for_current_topic() {
        let vm = map_assistant_panel(&AssistantSession::new(), "Tokens");
        assert!(!vm.is_open);
        assert_eq!(vm.launcher_label, "Explain \"Tokens\"");
        assert_eq!(vm.empty_hint.as_deref(), Some("Ask me anything about Tokens!"));
    }

    #[test]
    fn launcher_switches_to_follow_up_after_first_explanation() {
        let mut session = AssistantSession::new();
        let auto = session.open("Tokens").unwrap();
        session.complete(&auto, "Tokens are the words of C.");
        session.close();

        let vm = map_assistant_panel(&session, "Storage Classes");
        assert!(!vm.is_open);
        assert_eq!(vm.launcher_label, "Ask the AI Tutor");
    }

    #[test]
    fn loading_hides_the_empty_hint() {
        let mut session = AssistantSession::new();
        let _request = session.open("Tokens");
        let vm = map_assistant_panel(&session, "Tokens");
        assert!(vm.is_open);
        assert!(vm.is_loading);
        assert!(vm.empty_hint.is_none());
        assert!(!vm.can_submit);
    }

    #[test]
    fn bubbles_mirror_the_log() {
        let mut session = AssistantSession::new();
        let auto = session.open("Tokens").unwrap();
        session.complete(&auto, "Tokens are the words of C.");
        session.set_draft("and keywords?");
        let asked = session.submit("Tokens").unwrap();
        session.complete(&asked, "Reserved words.");

        let vm = map_assistant_panel(&session, "Tokens");
        let from_user: Vec<bool> = vm.bubbles.iter().map(|b| b.from_user).collect();
        assert_eq!(from_user, vec![false, true, false]);
        assert_eq!(vm.bubbles[1].text, "and keywords?");
    }
}
