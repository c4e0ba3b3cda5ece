//! Safety overview: site cards, summary counters, quick actions, recent activity

use crate::domain::a001_site::ui::list::SiteList;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::dashboards::d400_safety_overview::{
    recent_activity, ActivityKind, QuickAction, SummaryCounters,
};
use leptos::prelude::*;
use thaw::*;

/// (label, value, icon, tint) for each summary tile, in display order
pub fn counter_tiles(c: &SummaryCounters) -> [(&'static str, u32, &'static str, &'static str); 4] {
    [
        ("Total Incidents", c.total_incidents, "alert", "var(--colorPaletteMarigoldBackground2)"),
        ("Pending Audits", c.pending_audits, "clipboard", "var(--colorPaletteBlueBackground2)"),
        ("Active Crews", c.active_crews, "users", "var(--colorPaletteGreenBackground2)"),
        ("Equipment", c.equipment, "wrench", "var(--colorPalettePurpleBackground2)"),
    ]
}

fn activity_tint(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Incident => "var(--colorPaletteMarigoldBackground2)",
        ActivityKind::Audit => "var(--colorPaletteGreenBackground2)",
        ActivityKind::Compliance => "var(--colorPaletteBlueBackground2)",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SafetyOverview() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <SiteList />

        // Summary counters
        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; margin-bottom: 32px;">
            {move || {
                counter_tiles(&ctx.summary())
                    .into_iter()
                    .map(|(label, value, icon_name, tint)| {
                        view! {
                            <Card attr:style="padding: 24px;">
                                <Flex align=FlexAlign::Center gap=FlexGap::Medium>
                                    <div style=format!("border-radius: 999px; padding: 12px; background: {};", tint)>
                                        {icon(icon_name)}
                                    </div>
                                    <div>
                                        <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin: 0;">{label}</p>
                                        <p style="font-size: 24px; font-weight: 600; margin: 0;">{value.to_string()}</p>
                                    </div>
                                </Flex>
                            </Card>
                        }
                    })
                    .collect_view()
            }}
        </div>

        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px;">
            <Card attr:style="padding: 24px;">
                <h3 style="font-size: 18px; font-weight: 600; margin: 0 0 16px;">"Quick Actions"</h3>
                <Flex vertical=true gap=FlexGap::Small>
                    {QuickAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    attr:style="width: 100%; justify-content: flex-start;"
                                    on_click=move |_| ctx.run_quick_action(action)
                                >
                                    {icon(action.icon())}
                                    " "
                                    {action.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Flex>
            </Card>

            <Card attr:style="padding: 24px;">
                <h3 style="font-size: 18px; font-weight: 600; margin: 0 0 16px;">"Recent Activity"</h3>
                <Flex vertical=true gap=FlexGap::Medium>
                    {recent_activity()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <Flex gap=FlexGap::Medium style="align-items: flex-start;">
                                    <div style=format!(
                                        "border-radius: 999px; padding: 8px; margin-top: 2px; background: {};",
                                        activity_tint(entry.kind),
                                    )>
                                        {icon(entry.kind.icon())}
                                    </div>
                                    <div style="flex: 1;">
                                        <p style="font-size: 14px; font-weight: 500; margin: 0;">{entry.title}</p>
                                        <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin: 0;">{entry.detail}</p>
                                        <p style="font-size: 12px; color: var(--colorNeutralForeground4); margin: 4px 0 0;">{entry.when}</p>
                                    </div>
                                </Flex>
                            }
                        })
                        .collect_view()}
                </Flex>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_tiles_order_and_values() {
        let counters = SummaryCounters {
            total_incidents: 3,
            pending_audits: 2,
            active_crews: 8,
            equipment: 24,
        };
        let tiles = counter_tiles(&counters);
        let labels: Vec<_> = tiles.iter().map(|t| t.0).collect();
        assert_eq!(
            labels,
            vec!["Total Incidents", "Pending Audits", "Active Crews", "Equipment"]
        );
        let values: Vec<_> = tiles.iter().map(|t| t.1).collect();
        assert_eq!(values, vec![3, 2, 8, 24]);
    }
}
