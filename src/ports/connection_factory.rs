//! ConnectionFactory port - seam for constructing portal connections.
//!
//! `connect` builds a fresh connection per call, including on its graceful
//! fallback path. Injecting the factory keeps that construction
//! substitutable in tests instead of overriding a method on the service.

use crate::domain::PortalConnection;

/// Port for creating fresh, unauthenticated portal connections.
pub trait ConnectionFactory: Send + Sync {
    /// Creates a new connection with no cookies and no login recorded.
    fn create(&self) -> PortalConnection;
}

/// Production factory: plain unauthenticated connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConnectionFactory;

impl ConnectionFactory for DefaultConnectionFactory {
    fn create(&self) -> PortalConnection {
        PortalConnection::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_creates_unauthenticated_connections() {
        let connection = DefaultConnectionFactory.create();
        assert!(!connection.is_logged_in());
        assert!(connection.cookies().is_empty());
    }
}
