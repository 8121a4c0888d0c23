//! Type markers for CivicClient's typestate pattern.
//!
//! An admin session only exists on `CivicClient<Authenticated>`; logging in
//! and out moves the client between the two states.

// ============================================================================
// State Markers
// ============================================================================

/// No admin session. The public issue feed is still available.
///
/// Available transitions:
/// - `login()` -> Authenticated
/// - `restore_session()` -> Authenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

/// Admin logged in, token attached to every request.
///
/// Available transitions:
/// - `logout()` -> Anonymous
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

/// Sealed trait for client states.
pub trait SessionState: private::Sealed + Send + Sync + 'static {}
impl SessionState for Anonymous {}
impl SessionState for Authenticated {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Anonymous {}
    impl Sealed for super::Authenticated {}
}

// ============================================================================
// Client Status
// ============================================================================

/// Runtime status information for the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientStatus {
    /// Whether a token is persisted in local storage.
    pub has_stored_token: bool,
    /// Whether the client holds an admin session.
    pub is_authenticated: bool,
}
