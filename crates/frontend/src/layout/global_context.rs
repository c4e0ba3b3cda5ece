use contracts::dashboards::d400_safety_overview::{DashboardMode, QuickAction, SummaryCounters};
use contracts::domain::a001_site::{NewSiteDto, SiteStore};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

use crate::shared::date_utils::today;

/// Dashboard-wide state: created with the app, dropped with it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sites: RwSignal<SiteStore>,
    pub mode: RwSignal<DashboardMode>,
    /// Text handed to the chat input the next time the chat panel opens
    pub draft_prompt: RwSignal<Option<String>>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sites: RwSignal::new(SiteStore::seeded()),
            mode: RwSignal::new(DashboardMode::Overview),
            draft_prompt: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    /// Append a site to the store.
    ///
    /// Invalid input is rejected before the store signal is touched, so
    /// subscribers are not notified for a no-op.
    pub fn add_site(&self, dto: &NewSiteDto) -> Result<(), String> {
        dto.validate().map_err(|e| e.to_string())?;
        let today = today();
        let added = self.sites.try_update(|store| {
            store
                .add_site(&dto.name, &dto.location, today)
                .map(|site| log::info!("site added: id={} name='{}'", site.to_string_id(), site.name))
        });

        match added {
            Some(result) => result.map_err(|e| e.to_string()),
            None => Err("site store is no longer available".to_string()),
        }
    }

    pub fn summary(&self) -> SummaryCounters {
        let config = self.config.with_value(|c| c.dashboard.clone());
        self.sites
            .with(|store| SummaryCounters::derive(store, &config, today()))
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|m| *m = m.toggle());
        log::debug!("dashboard mode: {:?}", self.mode.get_untracked());
    }

    /// Switch to the assistant with a prepared question in the input
    pub fn open_chat_with(&self, prompt: &str) {
        self.draft_prompt.set(Some(prompt.to_string()));
        self.mode.set(DashboardMode::Chat);
    }

    pub fn run_quick_action(&self, action: QuickAction) {
        log::debug!("quick action: {}", action.label());
        self.open_chat_with(action.prompt());
    }

    pub fn take_draft_prompt(&self) -> Option<String> {
        self.draft_prompt
            .try_update(|p| p.take())
            .flatten()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_context(test: impl FnOnce(AppGlobalContext)) {
        let owner = Owner::new();
        owner.set();
        test(AppGlobalContext::new(AppConfig::default()));
    }

    #[test]
    fn test_add_site_appends_to_store() {
        with_context(|ctx| {
            assert_eq!(ctx.add_site(&NewSiteDto::new("Farm A", "Boone County, IA")), Ok(()));
            ctx.sites.with_untracked(|store| {
                assert_eq!(store.len(), 4);
                assert_eq!(store.sites()[3].name, "Farm A");
            });
        });
    }

    #[test]
    fn test_add_site_blank_leaves_store_alone() {
        with_context(|ctx| {
            assert!(ctx.add_site(&NewSiteDto::new("  ", "Iowa")).is_err());
            assert!(ctx.add_site(&NewSiteDto::new("Farm A", "")).is_err());
            assert_eq!(ctx.sites.with_untracked(|s| s.len()), 3);
        });
    }

    #[test]
    fn test_add_site_after_dispose_is_an_error() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new(AppConfig::default());
        ctx.sites.dispose();

        assert!(ctx.add_site(&NewSiteDto::new("Farm A", "Iowa")).is_err());
    }

    #[test]
    fn test_quick_action_opens_chat_with_draft_once() {
        with_context(|ctx| {
            assert_eq!(ctx.mode.get_untracked(), DashboardMode::Overview);

            ctx.run_quick_action(QuickAction::ReportIncident);
            assert_eq!(ctx.mode.get_untracked(), DashboardMode::Chat);
            assert_eq!(
                ctx.take_draft_prompt().as_deref(),
                Some(QuickAction::ReportIncident.prompt())
            );
            assert_eq!(ctx.take_draft_prompt(), None);
        });
    }

    #[test]
    fn test_toggle_mode_round_trip() {
        with_context(|ctx| {
            ctx.toggle_mode();
            assert_eq!(ctx.mode.get_untracked(), DashboardMode::Chat);
            ctx.toggle_mode();
            assert_eq!(ctx.mode.get_untracked(), DashboardMode::Overview);
            assert_eq!(ctx.take_draft_prompt(), None);
        });
    }

    #[test]
    fn test_summary_tracks_added_sites() {
        with_context(|ctx| {
            let before = ctx.summary();
            ctx.add_site(&NewSiteDto::new("Farm A", "Iowa")).unwrap();
            let after = ctx.summary();
            assert_eq!(after.total_incidents, before.total_incidents);
            assert_eq!(after.active_crews, 8);
        });
    }
}
