//! Conversation state accumulation.
//!
//! The remote API requires that every tool call issued by an assistant
//! message is answered by exactly one tool-result message, correlated by
//! `tool_call_id`, before the next request is sent. `ConversationState`
//! owns that protocol: rounds are appended as a unit and the history is
//! otherwise append-only.

use std::collections::HashMap;

use crate::llm::{ChatMessage, ToolCall};

/// Ordered, append-only chat history for one process invocation.
#[derive(Debug, Clone)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
}

impl ConversationState {
    /// Initialize the history with the user's prompt as its only turn.
    pub fn seed(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    /// Append one completed tool round: the assistant message carrying
    /// `calls`, followed by one tool-result message per call in the order
    /// the model emitted them.
    ///
    /// `results` maps each call id to its result text; tool failures arrive
    /// here already stringified, so a failed call still gets its result
    /// turn. A call id absent from `results` gets a placeholder rather than
    /// breaking the one-result-per-call requirement.
    pub fn append_round(&mut self, calls: Vec<ToolCall>, results: HashMap<String, String>) {
        let mut results = results;
        let mut round = Vec::with_capacity(calls.len() + 1);
        for call in &calls {
            let content = results
                .remove(&call.id)
                .unwrap_or_else(|| "Error: tool produced no result".to_string());
            round.push(ChatMessage::tool_result(call.id.clone(), content));
        }
        self.messages.push(ChatMessage::assistant_tool_calls(calls));
        self.messages.extend(round);
    }

    /// Read-only snapshot of the history for the next request.
    pub fn render(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{FunctionCall, Role};

    fn call(id: &str, name: &str) -> ToolCall {
        ToolCall {
            id: id.to_string(),
            kind: "function".to_string(),
            function: FunctionCall {
                name: name.to_string(),
                arguments: "{}".to_string(),
            },
        }
    }

    #[test]
    fn seed_produces_single_user_turn() {
        let state = ConversationState::seed("do the thing");
        let messages = state.render();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content.as_deref(), Some("do the thing"));
    }

    #[test]
    fn append_round_adds_assistant_then_one_result_per_call() {
        let mut state = ConversationState::seed("prompt");
        let calls = vec![call("call_a", "Read"), call("call_b", "Bash")];
        let results = HashMap::from([
            ("call_a".to_string(), "file text".to_string()),
            ("call_b".to_string(), "ok\n".to_string()),
        ]);

        state.append_round(calls, results);

        let messages = state.render();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].tool_calls.as_ref().unwrap().len(), 2);
        assert_eq!(messages[2].role, Role::Tool);
        assert_eq!(messages[2].tool_call_id.as_deref(), Some("call_a"));
        assert_eq!(messages[2].content.as_deref(), Some("file text"));
        assert_eq!(messages[3].tool_call_id.as_deref(), Some("call_b"));
        assert_eq!(messages[3].content.as_deref(), Some("ok\n"));
    }

    #[test]
    fn append_round_preserves_call_order_not_map_order() {
        let mut state = ConversationState::seed("prompt");
        let calls = vec![call("call_2", "Write"), call("call_1", "Read")];
        let results = HashMap::from([
            ("call_1".to_string(), "first inserted".to_string()),
            ("call_2".to_string(), "second inserted".to_string()),
        ]);

        state.append_round(calls, results);

        let messages = state.render();
        assert_eq!(messages[2].tool_call_id.as_deref(), Some("call_2"));
        assert_eq!(messages[3].tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn append_round_with_failed_call_still_appends_result_turn() {
        let mut state = ConversationState::seed("prompt");
        let calls = vec![call("call_a", "Read")];
        let results = HashMap::from([(
            "call_a".to_string(),
            "Error: invalid file path: ../secret".to_string(),
        )]);

        state.append_round(calls, results);

        let messages = state.render();
        assert_eq!(messages.len(), 3);
        assert!(messages[2].content.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn append_round_missing_result_gets_placeholder() {
        let mut state = ConversationState::seed("prompt");
        state.append_round(vec![call("call_a", "Read")], HashMap::new());

        let messages = state.render();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].tool_call_id.as_deref(), Some("call_a"));
        assert_eq!(
            messages[2].content.as_deref(),
            Some("Error: tool produced no result")
        );
    }
}
