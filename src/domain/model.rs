use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntPair {
    pub first: i64,
    pub second: i64,
}

// `difference` is unsigned: |a - b| over the full i64 range does not fit in i64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceResult {
    pub pair: IntPair,
    pub difference: u64,
}
