//! Intersection samples reported by viewport observers.

/// One observer entry, keyed by whatever the caller tracks elements with.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<K> {
    /// Tracked element key.
    pub key: K,
    /// Observer's own intersecting flag.
    pub is_intersecting: bool,
    /// Visible fraction of the element in `0.0..=1.0`.
    pub ratio: f64,
}

impl<K> Intersection<K> {
    /// Build an entry.
    pub const fn new(key: K, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            key,
            is_intersecting,
            ratio,
        }
    }

    /// Whether the element is intersecting at or above `threshold`.
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::Intersection;

    #[test]
    fn meets_requires_flag_and_ratio() {
        assert!(Intersection::new("a", true, 0.5).meets(0.5));
        assert!(!Intersection::new("a", true, 0.2).meets(0.5));
        assert!(!Intersection::new("a", false, 1.0).meets(0.5));
    }

    #[test]
    fn ratios_just_below_threshold_do_not_qualify() {
        assert!(!Intersection::new("a", true, 0.4992).meets(0.5));
        assert!(!Intersection::new("a", true, 0.4999).meets(0.5));
        assert!(!Intersection::new("a", true, 0.2995).meets(0.3));
        assert!(Intersection::new("a", true, 0.3).meets(0.3));
    }
}
