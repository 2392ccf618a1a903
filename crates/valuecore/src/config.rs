//! Growth policy and array configuration

/// Slots allocated by the first growth of an empty array.
pub const MINIMUM_BLOCK: usize = 8;

/// Multiplier applied to the capacity on each growth.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity growth policy for value arrays.
///
/// The next capacity is `max(minimum_block, old * factor)`. With a factor of
/// at least 2 the total number of element copies across `n` appends stays
/// below `2n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity the first growth jumps to (doubling zero yields zero)
    pub minimum_block: usize,

    /// Multiplier applied to the old capacity
    pub factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            minimum_block: MINIMUM_BLOCK,
            factor: GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Create a policy with the given minimum block and factor.
    pub fn new(minimum_block: usize, factor: usize) -> Self {
        Self {
            minimum_block,
            factor,
        }
    }

    /// Compute the capacity that follows `old`.
    ///
    /// The result is always larger than `old`, so a degenerate factor of
    /// 0 or 1 still makes progress. Returns `None` on overflow.
    pub fn next_capacity(&self, old: usize) -> Option<usize> {
        let at_least = old.checked_add(1)?;
        old.checked_mul(self.factor)
            .map(|grown| grown.max(self.minimum_block).max(at_least))
    }
}

/// Next capacity under the default policy, saturating at `usize::MAX`.
pub fn grow_capacity(old: usize) -> usize {
    GrowthPolicy::default()
        .next_capacity(old)
        .unwrap_or(usize::MAX)
}

/// Configuration for a value array.
#[derive(Debug, Clone, Default)]
pub struct ArrayConfig {
    /// How capacity grows when an append finds the array full
    pub growth: GrowthPolicy,

    /// Upper bound on slots; growth past it fails with `OutOfMemory`
    pub max_capacity: Option<usize>,

    /// Whether to trace writes, growth and disposal to stderr
    pub trace: bool,
}

impl ArrayConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Cap the number of slots an array may allocate.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
