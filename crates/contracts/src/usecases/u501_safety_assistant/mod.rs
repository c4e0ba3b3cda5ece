//! Scripted safety assistant
//!
//! Structure:
//! - rules.rs: ordered keyword table and category selection
//! - templates.rs: reply text per category
//! - responder.rs: `AssistantResponder` seam used by the chat session

pub mod responder;
pub mod rules;
pub mod templates;

pub use responder::{AssistantResponder, KeywordAssistant};
pub use rules::{classify_category, Category, RULES};
pub use templates::{greeting, render};

use crate::domain::a001_site::Site;

/// Pick the reply for `input` given the current sites.
///
/// Total: unmatched or empty input gets the default reply.
pub fn classify(input: &str, sites: &[Site]) -> String {
    render(classify_category(input), sites)
}
