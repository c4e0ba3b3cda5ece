//! TopHeader component - application title and the overview/chat switch.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::dashboards::d400_safety_overview::DashboardMode;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let in_chat = move || ctx.mode.get() == DashboardMode::Chat;

    view! {
        <header style="border-bottom: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground1);">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="max-width: 1200px; margin: 0 auto; padding: 16px 24px;"
            >
                <div>
                    <h1 style="font-size: 24px; font-weight: 600; margin: 0;">"Farm Safety Hub"</h1>
                    <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin: 4px 0 0;">
                        "Iowa Agricultural EHS Management"
                    </p>
                </div>
                <Button
                    appearance=Signal::derive(move || {
                        if in_chat() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                    })
                    on_click=move |_| ctx.toggle_mode()
                >
                    {icon("message")}
                    {move || ctx.mode.get().switch_label()}
                </Button>
            </Flex>
        </header>
    }
}
