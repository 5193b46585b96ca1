/// User activity that keeps a session alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    PointerMove,
    KeyPress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn { redirect_to: String },
    /// The user has already been shown why.
    Failed,
}

impl SignInOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut { redirect_to: String },
    /// Nothing to sign out of; no network call was made.
    AlreadySignedOut,
}
