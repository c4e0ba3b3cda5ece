//! New Site dialog (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: NewSiteVm with RwSignals
//! - view.rs: NewSiteDialog component

mod view;
mod view_model;

pub use view::NewSiteDialog;
pub use view_model::NewSiteVm;
