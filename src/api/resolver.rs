//! Name resolution seam between the organizer and the lookup service.

use async_trait::async_trait;

/// Result of looking up a display name for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service knows the identifier and supplied its name.
    Resolved(String),
    /// The service answered but does not know the identifier.
    NotFound,
    /// The lookup could not be completed.
    Error(String),
}

/// Anything able to turn an identifier into a display name.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Look up the display name for `identifier`. Never retries.
    async fn resolve(&self, identifier: &str) -> LookupOutcome;
}
