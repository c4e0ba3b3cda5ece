//! Chat panel - Model (simulated assistant latency)
//!
//! Both tasks are plain futures on the browser event loop. They carry the
//! ticket they were started with; if the session moved on (cancelled, or the
//! panel was disposed) the ticket is stale and the task does nothing.

use chrono::Utc;
use contracts::domain::a001_site::SiteStore;
use contracts::domain::a003_chat_session::{ChatSession, PendingReply};
use contracts::domain::a004_voice_indicator::{ListenTicket, VoiceIndicator};
use contracts::usecases::u501_safety_assistant::{classify_category, KeywordAssistant};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Deliver the assistant reply for `pending` after `delay_ms`.
pub fn spawn_reply(
    session: RwSignal<ChatSession>,
    sites: RwSignal<SiteStore>,
    pending: PendingReply,
    delay_ms: u32,
) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;

        // Sites as they are now, not as they were when the user hit send
        let Some(store) = sites.try_get_untracked() else {
            log::debug!("site store disposed, dropping reply");
            return;
        };

        let outcome = session.try_update(|s| {
            s.complete_reply(&pending, &KeywordAssistant, store.sites(), Utc::now())
                .map(|msg| msg.id)
        });

        match outcome {
            Some(Ok(id)) => log::debug!(
                "assistant replied: message {} category={}",
                id.value(),
                classify_category(&pending.user_text).as_str()
            ),
            Some(Err(e)) => log::debug!("reply dropped: {}", e),
            None => log::debug!("chat session disposed before reply"),
        }
    });
}

/// Turn the listening indicator off after `timeout_ms` unless it was
/// restarted or stopped in the meantime.
pub fn spawn_voice_revert(voice: RwSignal<VoiceIndicator>, ticket: ListenTicket, timeout_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        if let Some(true) = voice.try_update(|v| v.expire(ticket)) {
            log::debug!("voice indicator timed out");
        }
    });
}
