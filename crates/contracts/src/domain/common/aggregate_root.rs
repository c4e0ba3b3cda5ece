use super::AggregateId;

/// Trait for aggregate roots
///
/// Instance accessors plus the static naming used by the UI.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id: AggregateId;

    /// Id of this record
    fn id(&self) -> Self::Id;

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// UI name of a single element (e.g. "Site")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Sites")
    fn list_name() -> &'static str;
}
