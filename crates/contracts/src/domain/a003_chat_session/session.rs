//! Chat session state machine
//!
//! `Idle` -> `AwaitingResponse` on an accepted send, back to `Idle` when the
//! reply for the outstanding ticket is completed or the session is cancelled.

use crate::domain::a001_site::Site;
use crate::domain::a002_chat_message::{ChatMessage, MessageId};
use crate::usecases::u501_safety_assistant::{greeting, AssistantResponder};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Identifies one outstanding reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse(ReplyTicket),
}

/// Reply owed for an accepted user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub user_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("message is empty")]
    BlankInput,

    #[error("a reply is still pending")]
    ResponsePending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("reply ticket is not outstanding (cancelled or already completed)")]
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    state: SessionState,
    next_ticket: u64,
}

impl ChatSession {
    /// New session holding the assistant greeting
    pub fn new(now: DateTime<Utc>) -> Self {
        let greeting = ChatMessage::assistant(MessageId::next_after(None, now), greeting(), now);
        Self {
            messages: vec![greeting],
            state: SessionState::Idle,
            next_ticket: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, SessionState::AwaitingResponse(_))
    }

    /// Accept a user message and start waiting for the reply.
    ///
    /// The trimmed text is appended right away.
    pub fn begin_send(
        &mut self,
        input: &str,
        now: DateTime<Utc>,
    ) -> Result<PendingReply, SendRejected> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SendRejected::BlankInput);
        }
        if self.is_awaiting() {
            return Err(SendRejected::ResponsePending);
        }

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;

        self.push(now, |id| ChatMessage::user(id, text, now));
        self.state = SessionState::AwaitingResponse(ticket);

        Ok(PendingReply {
            ticket,
            user_text: text.to_string(),
        })
    }

    /// Append the assistant reply for `pending`, built from the original user
    /// text and the sites as they are now.
    pub fn complete_reply<R: AssistantResponder + ?Sized>(
        &mut self,
        pending: &PendingReply,
        responder: &R,
        sites: &[Site],
        now: DateTime<Utc>,
    ) -> Result<&ChatMessage, ReplyError> {
        if self.state != SessionState::AwaitingResponse(pending.ticket) {
            return Err(ReplyError::Stale);
        }

        let content = responder.respond(&pending.user_text, sites);
        self.state = SessionState::Idle;
        Ok(self.push(now, |id| ChatMessage::assistant(id, content, now)))
    }

    /// Drop the outstanding reply, if any. A later `complete_reply` for it is stale.
    pub fn cancel_pending(&mut self) -> Option<ReplyTicket> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::AwaitingResponse(ticket) => Some(ticket),
            SessionState::Idle => None,
        }
    }

    fn push(&mut self, now: DateTime<Utc>, build: impl FnOnce(MessageId) -> ChatMessage) -> &ChatMessage {
        let id = MessageId::next_after(self.messages.last().map(|m| m.id), now);
        self.messages.push(build(id));
        &self.messages[self.messages.len() - 1]
    }
}
