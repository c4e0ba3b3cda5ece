//! Voice input indicator
//!
//! Visual only: listening never produces chat input. Starting to listen hands
//! out a ticket; the auto-revert timer presents it back to `expire`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening(ListenTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoiceIndicator {
    state: VoiceState,
    generation: u64,
}

impl VoiceIndicator {
    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, VoiceState::Listening(_))
    }

    /// Flip the indicator. Returns the ticket to schedule auto-revert with
    /// when listening starts.
    pub fn toggle(&mut self) -> Option<ListenTicket> {
        match self.state {
            VoiceState::Listening(_) => {
                self.state = VoiceState::Idle;
                None
            }
            VoiceState::Idle => {
                self.generation += 1;
                let ticket = ListenTicket(self.generation);
                self.state = VoiceState::Listening(ticket);
                Some(ticket)
            }
        }
    }

    /// Auto-revert. Ignored unless `ticket` is the current listening period.
    pub fn expire(&mut self, ticket: ListenTicket) -> bool {
        if self.state == VoiceState::Listening(ticket) {
            self.state = VoiceState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut voice = VoiceIndicator::default();
        assert!(!voice.is_listening());

        let ticket = voice.toggle();
        assert!(ticket.is_some());
        assert!(voice.is_listening());

        assert_eq!(voice.toggle(), None);
        assert_eq!(voice.state(), VoiceState::Idle);
    }

    #[test]
    fn test_expire_reverts_current_period() {
        let mut voice = VoiceIndicator::default();
        let ticket = voice.toggle().unwrap();
        assert!(voice.expire(ticket));
        assert_eq!(voice.state(), VoiceState::Idle);
        assert!(!voice.expire(ticket));
    }

    #[test]
    fn test_stale_expiry_keeps_newer_period() {
        let mut voice = VoiceIndicator::default();
        let old = voice.toggle().unwrap();
        voice.toggle();
        let current = voice.toggle().unwrap();

        assert!(!voice.expire(old));
        assert!(voice.is_listening());
        assert!(voice.expire(current));
    }
}
