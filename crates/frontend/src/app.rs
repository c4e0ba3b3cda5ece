use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_app_config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();
    log::debug!("app config: {:?}", config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
