/// Weight of an edge.
///
/// Weights are plain signed integers. Algorithms that require nonnegative
/// weights check them at runtime.
pub type Weight = i64;

/// Weight used for edges added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;
