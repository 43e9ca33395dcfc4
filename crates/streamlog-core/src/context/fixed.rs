//! Fixed-value context implementation

use super::traits::RequestContext;

/// Context that reports values chosen at construction
///
/// Suits hosts that resolve their peer once per connection, and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRequestContext {
    client_addr: Option<String>,
    session_id: Option<String>,
}

impl StaticRequestContext {
    /// Create a context with neither field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client address
    pub fn with_client_addr(mut self, addr: impl Into<String>) -> Self {
        self.client_addr = Some(addr.into());
        self
    }

    /// Set the session identifier
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }
}

impl RequestContext for StaticRequestContext {
    fn client_addr(&self) -> Option<String> {
        self.client_addr.clone()
    }

    fn session_id(&self) -> Option<String> {
        self.session_id.clone()
    }
}
