use crate::query::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run the fetch function of `key`; report back with the same `seq`.
    Fetch { key: QueryKey, seq: u64 },
}
