use serde::{Deserialize, Serialize};

/// Parameters of a stack node as found in a model description.
///
/// ```
/// use tenstack::kernel::StackOptions;
///
/// let options = StackOptions::new(3, -1);
/// assert_eq!(options.values_count, 3);
/// assert_eq!(options.axis, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackOptions {
    /// Number of inputs the node expects.
    pub values_count: usize,
    /// Position of the new axis, negative values count from the end.
    #[serde(default)]
    pub axis: i32,
}

impl StackOptions {
    pub fn new(values_count: usize, axis: i32) -> Self {
        StackOptions { values_count, axis }
    }
}
