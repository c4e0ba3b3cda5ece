//! Safety assistant chat panel (MVVM Standard)
//!
//! Structure:
//! - model.rs: delayed reply and voice auto-revert tasks
//! - view_model.rs: ChatPanelVm with RwSignals
//! - view.rs: Main component ChatPanel

mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::ChatPanelVm;
