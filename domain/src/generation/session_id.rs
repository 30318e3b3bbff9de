//! Session identity token.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global session counter.
static SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque token identifying one generation session (Value Object)
///
/// Fresh per session, never reused within a process. Event handling
/// discriminates stale channel events by comparing this token, not a shared
/// boolean, so a new session can never be contaminated by events still
/// draining from an old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate the next session ID.
    pub fn next() -> Self {
        Self(SESSION_ID.fetch_add(1, Ordering::SeqCst))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = SessionId::next();
        let b = SessionId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }

    #[test]
    fn display_includes_the_number() {
        let id = SessionId::next();
        assert_eq!(id.to_string(), format!("session-{}", id.value()));
    }
}
