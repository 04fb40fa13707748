//! Session gate consulted by the upload widget.
//!
//! The widget never looks up a global session; whoever builds it hands over a
//! [`SessionStatus`] and the widget asks it on every interaction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read access to the host's sign-in state.
pub trait SessionStatus {
    fn is_signed_in(&self) -> bool;
}

impl<F> SessionStatus for F
where
    F: Fn() -> bool,
{
    fn is_signed_in(&self) -> bool {
        self()
    }
}

/// Shared, cloneable sign-in flag.
///
/// The app keeps one handle to toggle the session and gives a clone to the
/// widget.
#[derive(Debug, Clone, Default)]
pub struct SignInFlag(Arc<AtomicBool>);

impl SignInFlag {
    pub fn new(signed_in: bool) -> Self {
        Self(Arc::new(AtomicBool::new(signed_in)))
    }

    pub fn set(&self, signed_in: bool) {
        self.0.store(signed_in, Ordering::Relaxed);
    }
}

impl SessionStatus for SignInFlag {
    fn is_signed_in(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
