//! Capacity policies choosing how an allocator handle budgets elements.

/// Initial element capacity used by [`Policy::default`].
pub const DEFAULT_INITIAL_ELEMENTS: usize = 1024;

/// Capacity configuration for an [`ArenaAllocator`](crate::ArenaAllocator).
///
/// Chosen once at handle construction and never renegotiated. `Fixed`
/// enforces a hard ceiling on the cumulative number of elements granted;
/// `Expandable` enforces no ceiling and relies on the arena growing.
/// Counts are logical elements, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
  Fixed { max: usize, initial: usize },
  Expandable { initial: usize },
}

impl Policy {
  /// Fixed policy whose initial arena capacity equals the ceiling.
  ///
  /// A `max` of 0 behaves like an unlimited policy, mirroring the
  /// "0 means no ceiling" convention of the shared accounting.
  pub fn fixed(max: usize) -> Self {
    Policy::Fixed { max, initial: max }
  }

  /// Fixed policy with an explicit initial arena capacity.
  pub fn fixed_with_initial(max: usize, initial: usize) -> Self {
    Policy::Fixed { max, initial }
  }

  /// Expandable policy with the given initial arena capacity.
  pub fn expandable(initial: usize) -> Self {
    Policy::Expandable { initial }
  }

  /// Element ceiling, 0 meaning unlimited.
  pub fn max_elements(&self) -> usize {
    match self {
      Policy::Fixed { max, .. } => *max,
      Policy::Expandable { .. } => 0,
    }
  }

  /// Element count the arena is initially sized for.
  pub fn initial_elements(&self) -> usize {
    match self {
      Policy::Fixed { initial, .. } => *initial,
      Policy::Expandable { initial } => *initial,
    }
  }
}

impl Default for Policy {
  fn default() -> Self {
    Policy::Expandable {
      initial: DEFAULT_INITIAL_ELEMENTS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixed_defaults_initial_to_max() {
    let policy = Policy::fixed(16);
    assert_eq!(policy.max_elements(), 16);
    assert_eq!(policy.initial_elements(), 16);
  }

  #[test]
  fn fixed_with_separate_initial() {
    let policy = Policy::fixed_with_initial(64, 8);
    assert_eq!(policy.max_elements(), 64);
    assert_eq!(policy.initial_elements(), 8);
  }

  #[test]
  fn expandable_has_no_ceiling() {
    let policy = Policy::expandable(4);
    assert_eq!(policy.max_elements(), 0);
    assert_eq!(policy.initial_elements(), 4);
  }

  #[test]
  fn default_is_expandable() {
    let policy = Policy::default();
    assert_eq!(policy.max_elements(), 0);
    assert_eq!(policy.initial_elements(), DEFAULT_INITIAL_ELEMENTS);
  }
}
