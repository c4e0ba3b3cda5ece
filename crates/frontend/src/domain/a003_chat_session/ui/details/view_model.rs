//! Chat panel - View Model

use super::model::{spawn_reply, spawn_voice_revert};
use crate::layout::global_context::AppGlobalContext;
use chrono::Utc;
use contracts::domain::a002_chat_message::ChatMessage;
use contracts::domain::a003_chat_session::{ChatSession, PendingReply};
use contracts::domain::a004_voice_indicator::VoiceIndicator;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
    pub voice: RwSignal<VoiceIndicator>,
}

impl ChatPanelVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new(Utc::now())),
            input: RwSignal::new(String::new()),
            voice: RwSignal::new(VoiceIndicator::default()),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.session.with(|s| s.messages().to_vec())
    }

    pub fn is_awaiting(&self) -> bool {
        self.session.with(|s| s.is_awaiting())
    }

    pub fn can_send(&self) -> bool {
        !self.is_awaiting() && !self.input.with(|i| i.trim().is_empty())
    }

    /// Send the current input. Blank input or a pending reply makes this a no-op.
    pub fn send_command(&self, ctx: AppGlobalContext) {
        if let Some(pending) = self.accept_send() {
            let delay_ms = ctx.config.with_value(|c| c.chat.reply_delay_ms);
            spawn_reply(self.session, ctx.sites, pending, delay_ms);
        }
    }

    /// Append the user message and clear the input. The input is kept when
    /// the session refuses the send.
    pub fn accept_send(&self) -> Option<PendingReply> {
        let text = self.input.get_untracked();
        let accepted = self
            .session
            .try_update(|s| s.begin_send(&text, Utc::now()));

        match accepted {
            Some(Ok(pending)) => {
                self.input.set(String::new());
                Some(pending)
            }
            Some(Err(e)) => {
                log::debug!("send ignored: {}", e);
                None
            }
            None => None,
        }
    }

    pub fn toggle_voice(&self, ctx: AppGlobalContext) {
        if let Some(Some(ticket)) = self.voice.try_update(|v| v.toggle()) {
            let timeout_ms = ctx.config.with_value(|c| c.voice.listen_timeout_ms);
            spawn_voice_revert(self.voice, ticket, timeout_ms);
        }
    }

    /// Fill the input with a suggestion, unless a reply is pending
    pub fn use_suggestion(&self, text: &str) {
        if !self.session.with_untracked(|s| s.is_awaiting()) {
            self.input.set(text.to_string());
        }
    }

    /// End of the panel's life: an in-flight reply must not land
    pub fn cancel(&self) {
        if let Some(Some(_)) = self.session.try_update(|s| s.cancel_pending()) {
            log::debug!("pending reply cancelled");
        }
    }
}

impl Default for ChatPanelVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_chat_message::ChatRole;
    use contracts::domain::a003_chat_session::SessionState;

    fn setup() -> (Owner, ChatPanelVm) {
        let owner = Owner::new();
        owner.set();
        (owner, ChatPanelVm::new())
    }

    #[test]
    fn test_blank_send_keeps_input() {
        let (_owner, vm) = setup();
        vm.input.set("   ".to_string());

        assert!(vm.accept_send().is_none());
        assert_eq!(vm.input.get_untracked(), "   ");
        assert_eq!(vm.session.with_untracked(|s| s.messages().len()), 1);
    }

    #[test]
    fn test_accepted_send_clears_input() {
        let (_owner, vm) = setup();
        vm.input.set("grain bin entry hazard".to_string());

        let pending = vm.accept_send().expect("send accepted");

        assert_eq!(pending.user_text, "grain bin entry hazard");
        assert_eq!(vm.input.get_untracked(), "");
        assert!(vm.session.with_untracked(|s| s.is_awaiting()));
        let last = vm.messages().last().cloned().unwrap();
        assert_eq!(last.role, ChatRole::User);
    }

    #[test]
    fn test_send_while_awaiting_keeps_input() {
        let (_owner, vm) = setup();
        vm.input.set("first".to_string());
        vm.accept_send().unwrap();

        vm.input.set("second".to_string());
        assert!(!vm.can_send());
        assert!(vm.accept_send().is_none());
        assert_eq!(vm.input.get_untracked(), "second");
        assert_eq!(vm.session.with_untracked(|s| s.messages().len()), 2);
    }

    #[test]
    fn test_cancel_drops_outstanding_ticket() {
        let (_owner, vm) = setup();
        vm.input.set("audit schedule".to_string());
        vm.accept_send().unwrap();

        vm.cancel();

        assert_eq!(vm.session.with_untracked(|s| s.state()), SessionState::Idle);
        // cancelling again is harmless
        vm.cancel();
        assert!(!vm.session.with_untracked(|s| s.is_awaiting()));
    }

    #[test]
    fn test_suggestion_ignored_while_awaiting() {
        let (_owner, vm) = setup();
        vm.use_suggestion("Schedule audit");
        assert_eq!(vm.input.get_untracked(), "Schedule audit");

        vm.accept_send().unwrap();
        vm.use_suggestion("Report an incident");
        assert_eq!(vm.input.get_untracked(), "");
    }
}
