//! # Ordered subscriber sequence.
//!
//! [`Roster`] is the container behind both hubs: an append-only-at-the-end
//! `Vec` of shared handles, where removal keeps the relative order of the
//! remaining entries.
//!
//! ## Rules
//! - Insertion order is delivery order.
//! - Duplicates are allowed; each entry is delivered separately.
//! - Equality is handle identity (same `Arc` allocation), never value equality.

use std::sync::Arc;

/// Ordered sequence of subscriber handles.
pub(crate) struct Roster<S: ?Sized> {
    entries: Vec<Arc<S>>,
}

impl<S: ?Sized> Roster<S> {
    /// Creates an empty roster, reserving `capacity` slots if given.
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: capacity.map(Vec::with_capacity).unwrap_or_default(),
        }
    }

    /// Appends a handle to the end.
    pub(crate) fn push(&mut self, entry: Arc<S>) {
        self.entries.push(entry);
    }

    /// Removes every entry sharing `target`'s allocation; returns how many were removed.
    pub(crate) fn remove_all<T: ?Sized>(&mut self, target: &Arc<T>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !same_handle(e, target));
        before - self.entries.len()
    }

    pub(crate) fn contains<T: ?Sized>(&self, target: &Arc<T>) -> bool {
        self.entries.iter().any(|e| same_handle(e, target))
    }

    /// Iterates handles in delivery order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Arc<S>> {
        self.entries.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compares allocations, ignoring trait-object metadata.
fn same_handle<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Named {
        fn name(&self) -> &str;
    }

    struct Hero(&'static str);

    impl Named for Hero {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn names(r: &Roster<dyn Named>) -> Vec<&str> {
        r.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_remove_keeps_order() {
        let a: Arc<dyn Named> = Arc::new(Hero("a"));
        let b: Arc<dyn Named> = Arc::new(Hero("b"));
        let c: Arc<dyn Named> = Arc::new(Hero("c"));

        let mut r: Roster<dyn Named> = Roster::new(None);
        r.push(a.clone());
        r.push(b.clone());
        r.push(c.clone());

        assert_eq!(r.remove_all(&b), 1);
        assert_eq!(names(&r), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_all_duplicates() {
        let a: Arc<dyn Named> = Arc::new(Hero("a"));
        let b: Arc<dyn Named> = Arc::new(Hero("b"));

        let mut r: Roster<dyn Named> = Roster::new(Some(4));
        r.push(a.clone());
        r.push(b.clone());
        r.push(a.clone());

        assert_eq!(r.remove_all(&a), 2);
        assert_eq!(names(&r), vec!["b"]);
        assert!(!r.contains(&a));
    }

    #[test]
    fn test_identity_not_value() {
        let first: Arc<dyn Named> = Arc::new(Hero("twin"));
        let second: Arc<dyn Named> = Arc::new(Hero("twin"));

        let mut r: Roster<dyn Named> = Roster::new(None);
        r.push(first.clone());
        r.push(second.clone());

        assert_eq!(r.remove_all(&first), 1);
        assert_eq!(r.len(), 1);
        assert!(r.contains(&second));
    }

    #[test]
    fn test_concrete_handle_matches_erased_entry() {
        let hero = Arc::new(Hero("a"));
        let mut r: Roster<dyn Named> = Roster::new(None);
        r.push(hero.clone());

        assert!(r.contains(&hero));
        assert_eq!(r.remove_all(&hero), 1);
        assert!(r.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let a: Arc<dyn Named> = Arc::new(Hero("a"));
        let stranger: Arc<dyn Named> = Arc::new(Hero("x"));

        let mut r: Roster<dyn Named> = Roster::new(None);
        r.push(a);

        assert_eq!(r.remove_all(&stranger), 0);
        assert_eq!(names(&r), vec!["a"]);
    }
}
