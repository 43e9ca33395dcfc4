//! Request context trait definition

use std::sync::Arc;

/// Source of per-request attribution for the `i` and `e` format codes
///
/// Implementations:
/// - `NoRequestContext`: nothing to report (CLIs, batch jobs)
/// - `StaticRequestContext`: fixed values supplied by the host
pub trait RequestContext: Send + Sync {
    /// Network address of the client behind the current request, if any
    fn client_addr(&self) -> Option<String>;

    /// Identifier of the current session, if any
    fn session_id(&self) -> Option<String>;
}

/// Type alias for an Arc-wrapped context
pub type SharedContext = Arc<dyn RequestContext>;
