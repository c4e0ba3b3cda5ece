//! Chat panel - View Component

use super::view_model::ChatPanelVm;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_message_time;
use crate::shared::icons::icon;
use contracts::dashboards::d400_safety_overview::CHAT_SUGGESTIONS;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_app_context();
    let vm = ChatPanelVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    if let Some(prompt) = ctx.take_draft_prompt() {
        vm.input.set(prompt);
    }

    on_cleanup(move || vm.cancel());

    // Keep the newest message in view
    Effect::new(move |_| {
        let _ = vm.session.with(|s| s.messages().len());
        let _ = vm.is_awaiting();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| vm.send_command(ctx));

    view! {
        <div style="max-width: 900px; margin: 0 auto;">
            <Card attr:style="padding: 0; overflow: hidden;">
                <div style="padding: 16px 24px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                    <h2 style="font-size: 18px; font-weight: 600; margin: 0;">"AI Safety Assistant"</h2>
                    <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin: 4px 0 0;">
                        "Ask me anything about safety, compliance, or your operations"
                    </p>
                </div>

                // Messages area
                <div
                    node_ref=messages_container_ref
                    style="height: 500px; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; padding: 24px; background: var(--colorNeutralBackground2);"
                >
                    <For
                        each=move || vm.messages()
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let is_user = msg.is_user();
                            let time = format_message_time(&msg.timestamp);
                            view! {
                                <div
                                    data-role=msg.role.as_str()
                                    style=if is_user {
                                        "align-self: flex-end; max-width: 80%;"
                                    } else {
                                        "align-self: flex-start; max-width: 80%;"
                                    }
                                >
                                    <div
                                        style=if is_user {
                                            "background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); padding: 12px 16px; border-radius: 8px;"
                                        } else {
                                            "background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); padding: 12px 16px; border-radius: 8px;"
                                        }
                                    >
                                        <div style="font-size: 14px; white-space: pre-wrap;">{msg.content.clone()}</div>
                                        <div style="font-size: 11px; opacity: 0.7; margin-top: 8px;">{time}</div>
                                    </div>
                                </div>
                            }
                        }}
                    </For>

                    <Show when=move || vm.is_awaiting()>
                        <div style="align-self: flex-start; padding: 12px 16px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    </Show>
                </div>

                // Input area
                <Flex gap=FlexGap::Small style="align-items: flex-end; padding: 16px; border-top: 1px solid var(--colorNeutralStroke2);">
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.input
                            placeholder="Ask about incidents, audits, compliance, or anything safety-related..."
                            attr:style="width: 100%; min-height: 60px; resize: none;"
                            disabled=Signal::derive(move || vm.is_awaiting())
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Button
                            appearance=Signal::derive(move || {
                                if vm.voice.get().is_listening() {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            })
                            on_click=move |_| vm.toggle_voice(ctx)
                        >
                            {move || if vm.voice.get().is_listening() { icon("mic-off") } else { icon("mic") }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_send())
                            on_click=move |_| handle_send.run(())
                        >
                            {icon("send")}
                        </Button>
                    </Flex>
                </Flex>
            </Card>

            // Suggestions
            <Flex gap=FlexGap::Small justify=FlexJustify::Center style="margin-top: 16px; flex-wrap: wrap;">
                {CHAT_SUGGESTIONS
                    .into_iter()
                    .map(|text| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.use_suggestion(text)
                            >
                                {text}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}
