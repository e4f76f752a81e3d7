//! One-based display indices.

/// An index into the currently displayed person list, as the user sees it.
///
/// Stored one-based; [`zero_based`](Index::zero_based) converts for slice
/// access. Zero is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Builds from a one-based value; `None` for zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn one_based(self) -> usize {
        self.0
    }

    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.zero_based(), 2);
    }

    #[test]
    fn test_index_rejects_zero() {
        assert!(Index::from_one_based(0).is_none());
    }
}
