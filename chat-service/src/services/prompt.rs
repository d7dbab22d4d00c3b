//! Prompt composition and the hardcoded reply rules.

use crate::models::ConversationTurn;
use chrono::{Datelike, Utc};

/// Instruction used when no document has been ingested yet.
pub const DEFAULT_INSTRUCTION: &str = "You are a helpful AI assistant.";

/// Reply used when the generation API returns no usable candidate.
pub const NO_REPLY_SENTINEL: &str = "No reply from AI";

const BIRTH_YEAR: i32 = 2002;
const BIRTH_MONTH: u32 = 6; // June

/// Render caller-supplied history, one `role: content` line per turn.
pub fn render_conversation(turns: &[ConversationTurn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the full generation prompt from the stored instruction, the
/// rendered history and the new user message.
pub fn compose(instruction: &str, turns: &[ConversationTurn], user_message: &str) -> String {
    format!(
        "{}\nConversation so far:\n{}\nUser: {}\nAssistant:",
        instruction,
        render_conversation(turns),
        user_message
    )
}

/// Whether the message is answered by the hardcoded age rule instead of the
/// generation API. Substring matching false-positives on unrelated sentences
/// mentioning both words; kept for compatibility.
pub fn is_age_question(user_message: &str) -> bool {
    let lower = user_message.to_lowercase();
    lower.contains("hassnain") && lower.contains("age")
}

/// Reply for the age rule, computed against the current date.
pub fn age_reply() -> String {
    let today = Utc::now().date_naive();
    age_reply_at(today.year(), today.month())
}

fn age_reply_at(year: i32, month: u32) -> String {
    format!("{} years old in {} (born June 2002)", age_at(year, month), year)
}

/// Age in whole years: the year difference, minus one until June is reached.
fn age_at(year: i32, month: u32) -> i32 {
    let mut age = year - BIRTH_YEAR;
    if month < BIRTH_MONTH {
        age -= 1;
    }
    age
}
