use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_site::NewSiteDto;
use leptos::prelude::*;

/// ViewModel for the "Add Site" form
#[derive(Clone, Copy)]
pub struct NewSiteVm {
    pub open: RwSignal<bool>,
    pub name: RwSignal<String>,
    pub location: RwSignal<String>,
}

impl NewSiteVm {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            name: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
        }
    }

    pub fn dto(&self) -> NewSiteDto {
        NewSiteDto::new(self.name.get_untracked(), self.location.get_untracked())
    }

    /// Create the site. Blank fields leave the dialog open and change nothing.
    pub fn save_command(&self, ctx: AppGlobalContext) {
        match ctx.add_site(&self.dto()) {
            Ok(()) => {
                self.name.set(String::new());
                self.location.set(String::new());
                self.open.set(false);
            }
            Err(e) => log::debug!("add site ignored: {}", e),
        }
    }
}

impl Default for NewSiteVm {
    fn default() -> Self {
        Self::new()
    }
}
