use crate::domain::a001_site::Site;

/// Source of assistant replies for a chat session
pub trait AssistantResponder {
    /// Reply to `input`. Must always produce text.
    fn respond(&self, input: &str, sites: &[Site]) -> String;
}

/// Keyword-table assistant, see [`super::RULES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAssistant;

impl AssistantResponder for KeywordAssistant {
    fn respond(&self, input: &str, sites: &[Site]) -> String {
        super::classify(input, sites)
    }
}
