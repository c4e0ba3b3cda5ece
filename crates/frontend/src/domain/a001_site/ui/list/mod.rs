use crate::domain::a001_site::ui::card::SiteCard;
use crate::domain::a001_site::ui::details::{NewSiteDialog, NewSiteVm};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a001_site::Site;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SiteList() -> impl IntoView {
    let ctx = use_app_context();
    let new_site = NewSiteVm::new();

    view! {
        <section style="margin-bottom: 32px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 24px;">
                <div>
                    <h2 style="font-size: 20px; font-weight: 600; margin: 0;">{Site::list_name()}</h2>
                    <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin: 4px 0 0;">
                        "Manage safety across all your agricultural operations"
                    </p>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| new_site.open.set(true)
                >
                    {icon("plus")}
                    " Add Site"
                </Button>
            </Flex>

            <NewSiteDialog vm=new_site />

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;">
                <For
                    each=move || ctx.sites.with(|store| store.sites().to_vec())
                    key=|site| site.id
                    let:site
                >
                    <SiteCard site=site />
                </For>
            </div>
        </section>
    }
}
