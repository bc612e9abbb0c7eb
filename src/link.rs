use chrono::{DateTime, Local};

use crate::gemini::{Content, Part};

/// Seed message shown when the widget comes up.
pub const GREETING: &str = "NEURAL LINK ESTABLISHED. AWAITING QUERY...";

/// Placeholder for a successful response with an empty body.
pub const EMPTY_RESPONSE: &str = "NO DATA RECEIVED";

/// Fixed text appended when a request fails for any reason.
pub const LINK_ERROR: &str = "CONNECTION INTERRUPTED. RETRY.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Idle,
    AwaitingResponse,
}

/// Conversation state for the Neural Link widget.
///
/// The message log is append-only: messages are never edited or removed,
/// so insertion order is also chronological order. At most one request is
/// outstanding at a time; `submit` refuses while a response is pending,
/// which keeps response ordering deterministic.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    state: LinkState,
    pub input: String,
    pub cursor: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: GREETING.to_string(),
                timestamp: Local::now(),
            }],
            state: LinkState::Idle,
            input: String::new(),
            cursor: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == LinkState::AwaitingResponse
    }

    /// Try to start a submit cycle. Moves the input buffer into the log as
    /// a user message and transitions to `AwaitingResponse`.
    ///
    /// Returns false without touching any state when the trimmed buffer is
    /// empty or a request is already outstanding; the caller only spawns
    /// the remote call on true.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() || self.state != LinkState::Idle {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: std::mem::take(&mut self.input),
            timestamp: Local::now(),
        });
        self.input.clear();
        self.cursor = 0;
        self.state = LinkState::AwaitingResponse;
        true
    }

    /// The full log in wire form, including the message just appended by
    /// `submit`. Sent as conversation history with every request.
    pub fn history(&self) -> Vec<Content> {
        self.messages
            .iter()
            .map(|msg| Content {
                role: msg.role.as_str().to_string(),
                parts: vec![Part {
                    text: msg.text.clone(),
                }],
            })
            .collect()
    }

    /// Finish the outstanding request. Every completion appends exactly one
    /// model message and returns the session to `Idle`: the response text
    /// on success (or the placeholder when it is empty), the fixed error
    /// text on failure. Errors stop here; they are logged, not raised.
    pub fn resolve(&mut self, result: anyhow::Result<String>) {
        let text = match result {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE.to_string(),
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("neural link request failed: {err:#}");
                LINK_ERROR.to_string()
            }
        };

        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            text,
            timestamp: Local::now(),
        });
        self.state = LinkState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn session_starts_idle_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.state(), LinkState::Idle);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Model);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn empty_or_whitespace_input_is_a_no_op() {
        let mut session = ChatSession::new();
        assert!(!session.submit());

        session.input = "   \t  ".to_string();
        assert!(!session.submit());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state(), LinkState::Idle);
        assert_eq!(session.input, "   \t  ");
    }

    #[test]
    fn submit_appends_user_message_and_clears_input() {
        let mut session = ChatSession::new();
        session.input = "hello".to_string();
        session.cursor = 5;

        assert!(session.submit());
        assert_eq!(session.state(), LinkState::AwaitingResponse);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, ChatRole::User);
        assert_eq!(session.messages()[1].text, "hello");
        assert!(session.input.is_empty());
        assert_eq!(session.cursor, 0);
    }

    #[test]
    fn submit_while_awaiting_is_a_no_op() {
        let mut session = ChatSession::new();
        session.input = "first".to_string();
        assert!(session.submit());

        session.input = "second".to_string();
        assert!(!session.submit());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.state(), LinkState::AwaitingResponse);
        assert_eq!(session.input, "second");
    }

    #[test]
    fn completed_cycle_grows_log_by_exactly_two() {
        let mut session = ChatSession::new();
        let before = session.messages().len();

        session.input = "hello".to_string();
        session.submit();
        session.resolve(Ok("GREETINGS, OPERATOR.".to_string()));

        let log = session.messages();
        assert_eq!(log.len(), before + 2);
        assert_eq!(log[log.len() - 2].role, ChatRole::User);
        assert_eq!(log[log.len() - 1].role, ChatRole::Model);
        assert_eq!(log[log.len() - 1].text, "GREETINGS, OPERATOR.");
        assert_eq!(session.state(), LinkState::Idle);
    }

    #[test]
    fn empty_response_becomes_placeholder() {
        let mut session = ChatSession::new();
        session.input = "hello".to_string();
        session.submit();
        session.resolve(Ok("   ".to_string()));

        assert_eq!(session.messages().last().unwrap().text, EMPTY_RESPONSE);
        assert_eq!(session.state(), LinkState::Idle);
    }

    #[test]
    fn failure_appends_fixed_error_text() {
        let mut session = ChatSession::new();
        session.input = "hello".to_string();
        session.submit();
        session.resolve(Err(anyhow!("connection refused")));

        let log = session.messages();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].text, GREETING);
        assert_eq!(log[1].text, "hello");
        assert_eq!(log[2].role, ChatRole::Model);
        assert_eq!(log[2].text, LINK_ERROR);
        assert_eq!(session.state(), LinkState::Idle);
    }

    #[test]
    fn timestamps_never_decrease() {
        let mut session = ChatSession::new();
        session.input = "one".to_string();
        session.submit();
        session.resolve(Ok("two".to_string()));
        session.input = "three".to_string();
        session.submit();
        session.resolve(Err(anyhow!("boom")));

        let log = session.messages();
        for pair in log.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn history_carries_the_whole_log_in_wire_roles() {
        let mut session = ChatSession::new();
        session.input = "hello".to_string();
        session.submit();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, "model");
        assert_eq!(history[0].parts[0].text, GREETING);
        assert_eq!(history[1].role, "user");
        assert_eq!(history[1].parts[0].text, "hello");
    }
}
