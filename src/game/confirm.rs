//! Two-step gate for destructive actions.

/// An action waiting for the player to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<A> {
    pub action: A,
    pub message: &'static str,
}

/// Holds at most one pending action. Confirming hands the action back to the
/// caller; cancelling drops it without side effects.
#[derive(Debug, Clone)]
pub struct ConfirmGate<A> {
    pending: Option<Pending<A>>,
}

impl<A> ConfirmGate<A> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Ask for confirmation, replacing any earlier request.
    pub fn request(&mut self, action: A, message: &'static str) {
        self.pending = Some(Pending { action, message });
    }

    pub const fn pending(&self) -> Option<&Pending<A>> {
        self.pending.as_ref()
    }

    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn confirm(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.action)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<A> Default for ConfirmGate<A> {
    fn default() -> Self {
        Self::new()
    }
}
