//! Growth policy configuration.

/// Configuration for buffer growth.
///
/// Controls the capacity ceiling consulted by resize and by automatic
/// growth during append. Immutable after creation; copied into every
/// buffer that uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Maximum capacity (in elements) a buffer may reach.
    ///
    /// Default: [`GrowthPolicy::DEFAULT_MAX_CAPACITY`], half the address
    /// space in elements — effectively unbounded. Small values make the
    /// allocation-failure path reachable in tests.
    pub max_capacity: usize,
}

impl GrowthPolicy {
    /// Default capacity ceiling: effectively unbounded.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX >> 1;

    /// Create a policy with the given capacity ceiling.
    pub fn limited(max_capacity: usize) -> Self {
        Self { max_capacity }
    }

    /// Next capacity under geometric growth, or `None` if the ceiling
    /// prevents any progress.
    ///
    /// The rule is `2 * capacity + 1`, clamped to the ceiling. This
    /// guarantees progress even from capacity 0 or 1 (0→1, 1→3, 3→7, …)
    /// and amortized O(1) append cost.
    pub fn grown(&self, capacity: usize) -> Option<usize> {
        if capacity >= self.max_capacity {
            return None;
        }
        let target = capacity.saturating_mul(2).saturating_add(1);
        Some(target.min(self.max_capacity))
    }

    /// Whether a buffer of `capacity` slots is permitted by this policy.
    pub fn permits(&self, capacity: usize) -> bool {
        capacity <= self.max_capacity
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::limited(Self::DEFAULT_MAX_CAPACITY)
    }
}
