pub mod global_context;
pub mod top_header;

use crate::dashboards::d400_safety_overview::ui::SafetyOverview;
use crate::domain::a003_chat_session::ui::details::ChatPanel;
use contracts::dashboards::d400_safety_overview::DashboardMode;
use global_context::use_app_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |      SafetyOverview  |  ChatPanel        |
/// +------------------------------------------+
/// ```
///
/// Only one of the two views is mounted at a time; leaving the chat drops its session.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout" style="min-height: 100vh; background: var(--colorNeutralBackground2);">
            <TopHeader />
            <main style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
                {move || match ctx.mode.get() {
                    DashboardMode::Overview => view! { <SafetyOverview /> }.into_any(),
                    DashboardMode::Chat => view! { <ChatPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
