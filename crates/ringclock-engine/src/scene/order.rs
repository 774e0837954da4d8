use core::cmp::Ordering;

/// Z-ordering key for draw items. Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let back = SortKey::new(ZIndex(0), 9);
        let front = SortKey::new(ZIndex(1), 0);
        assert!(back < front);
    }

    #[test]
    fn equal_z_falls_back_to_insertion_order() {
        assert!(SortKey::new(ZIndex(3), 1) < SortKey::new(ZIndex(3), 2));
    }
}
