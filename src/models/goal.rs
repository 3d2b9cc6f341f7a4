/// The sole persisted entity: a short text note with a store-assigned
/// identifier. The id is an opaque string handle; its encoding belongs to the
/// store that minted it. Wire shapes live in the DTOs and the store
/// implementations; this type never crosses a serialization boundary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: String,
    pub text: String,
}
