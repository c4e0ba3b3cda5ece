use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId: Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug {
    /// Render the id as the string used in keys and on the wire
    fn as_string(&self) -> String;

    /// Parse an id back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}
