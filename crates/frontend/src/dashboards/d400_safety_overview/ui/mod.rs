mod view;

pub use view::{counter_tiles, SafetyOverview};
