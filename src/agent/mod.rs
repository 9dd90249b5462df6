//! Agent module - the core autonomous agent logic.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Seed the conversation with the user's prompt
//! 2. Call the LLM with the fixed tool declarations
//! 3. If the LLM requests tool calls, execute them and feed results back
//! 4. Repeat until the LLM produces a final text response

mod agent_loop;

pub use agent_loop::{Agent, LoopOutcome};
