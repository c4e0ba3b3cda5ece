use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::dashboards::d400_safety_overview::site_audit_prompt;
use contracts::domain::a001_site::{Site, SiteStatus};
use leptos::prelude::*;
use thaw::*;

/// Badge look for an incident count: neutral when clean, danger otherwise
pub fn incident_badge(incidents: u32) -> (BadgeAppearance, BadgeColor) {
    if incidents == 0 {
        (BadgeAppearance::Outline, BadgeColor::Informative)
    } else {
        (BadgeAppearance::Filled, BadgeColor::Danger)
    }
}

pub fn status_badge_color(status: SiteStatus) -> BadgeColor {
    match status {
        SiteStatus::Active => BadgeColor::Success,
        SiteStatus::Pending => BadgeColor::Warning,
        SiteStatus::Inactive => BadgeColor::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SiteCard(site: Site) -> impl IntoView {
    let ctx = use_app_context();
    let audit_prompt = site_audit_prompt(&site.name);
    let (incident_appearance, incident_color) = incident_badge(site.incidents);
    let last_audit = format_date(&site.last_audit);

    view! {
        <Card attr:style="padding: 20px;">
            <div style="margin-bottom: 12px;">
                <h3 style="font-size: 18px; font-weight: 600; margin: 0;">{site.name.clone()}</h3>
                <Flex align=FlexAlign::Center gap=FlexGap::Small style="margin-top: 6px; color: var(--colorNeutralForeground3);">
                    {icon("map-pin")}
                    <span style="font-size: 14px;">{site.location.clone()}</span>
                </Flex>
            </div>

            <Flex vertical=true gap=FlexGap::Medium>
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Flex align=FlexAlign::Center gap=FlexGap::Small style="font-size: 14px; color: var(--colorNeutralForeground2);">
                        {icon("calendar")}
                        <span>"Last Audit"</span>
                    </Flex>
                    <span style="font-size: 14px; font-weight: 500;">{last_audit}</span>
                </Flex>

                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Flex align=FlexAlign::Center gap=FlexGap::Small style="font-size: 14px; color: var(--colorNeutralForeground2);">
                        {icon("alert")}
                        <span>"Incidents"</span>
                    </Flex>
                    <Badge appearance=incident_appearance color=incident_color>
                        {site.incidents.to_string()}
                    </Badge>
                </Flex>

                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Badge appearance=BadgeAppearance::Tint color=status_badge_color(site.status)>
                        {site.status.label()}
                    </Badge>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| ctx.open_chat_with(&audit_prompt)
                    >
                        {icon("clipboard")}
                        " Start Audit"
                    </Button>
                </Flex>
            </Flex>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_badge_neutral_only_when_clean() {
        assert!(matches!(
            incident_badge(0),
            (BadgeAppearance::Outline, BadgeColor::Informative)
        ));
        for incidents in [1, 2, 40] {
            assert!(matches!(
                incident_badge(incidents),
                (BadgeAppearance::Filled, BadgeColor::Danger)
            ));
        }
    }

    #[test]
    fn test_status_badge_color() {
        assert!(matches!(status_badge_color(SiteStatus::Active), BadgeColor::Success));
        assert!(matches!(status_badge_color(SiteStatus::Pending), BadgeColor::Warning));
        assert!(matches!(status_badge_color(SiteStatus::Inactive), BadgeColor::Subtle));
    }
}
