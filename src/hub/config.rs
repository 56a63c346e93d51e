//! # Hub configuration.
//!
//! Provides [`HubConfig`], the settings shared by [`Hub`](crate::Hub) and
//! [`AsyncHub`](crate::AsyncHub).
//!
//! ## Sentinel values
//! - `capacity = 0` → no pre-allocation (the sequence grows on first attach)
//! - `capacity > MAX_RESERVED_CAPACITY` → clamped to [`MAX_RESERVED_CAPACITY`]

/// Upper bound on slots reserved up front; larger hints are clamped.
pub const MAX_RESERVED_CAPACITY: usize = 4096;

/// Configuration for a notification hub.
///
/// ## Field semantics
/// - `capacity`: subscriber slots reserved up front (`0` = allocate lazily)
/// - `catch_panics`: convert subscriber panics into `SubscriberError::Panicked`
///
/// ## Notes
/// All fields are public for flexibility. Delivery is fail-fast regardless of
/// `catch_panics`; the flag only decides whether a panic surfaces as a
/// `HubError` or keeps unwinding through `notify`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HubConfig {
    /// Number of subscriber slots to reserve when the hub is created.
    ///
    /// A hint only; values above [`MAX_RESERVED_CAPACITY`] are clamped.
    pub capacity: usize,

    /// Capture panics raised by subscribers.
    ///
    /// - `true`: the panic is reported as `HubError::SubscriberFailed`
    ///   with a `SubscriberError::Panicked` source
    /// - `false`: the panic propagates to the `notify` caller
    pub catch_panics: bool,
}

impl HubConfig {
    /// Returns the pre-allocation hint as an `Option`.
    ///
    /// - `None` → allocate lazily
    /// - `Some(n)` → reserve `n` slots, at most [`MAX_RESERVED_CAPACITY`]
    #[inline]
    pub fn reserved_capacity(&self) -> Option<usize> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity.min(MAX_RESERVED_CAPACITY))
        }
    }
}

impl Default for HubConfig {
    /// Default configuration:
    ///
    /// - `capacity = 8`
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            capacity: 8,
            catch_panics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = HubConfig::default();
        assert_eq!(cfg.capacity, 8);
        assert!(cfg.catch_panics);
        assert_eq!(cfg.reserved_capacity(), Some(8));
    }

    #[test]
    fn test_zero_capacity_is_lazy() {
        let cfg = HubConfig {
            capacity: 0,
            ..HubConfig::default()
        };
        assert_eq!(cfg.reserved_capacity(), None);
    }

    #[test]
    fn test_huge_capacity_is_clamped() {
        let cfg = HubConfig {
            capacity: usize::MAX,
            ..HubConfig::default()
        };
        assert_eq!(cfg.reserved_capacity(), Some(MAX_RESERVED_CAPACITY));
    }
}
