//! Portal session state carried between connect and order lookups.

/// One authenticated (or not-yet-authenticated) session to the portal.
///
/// Created fresh per `connect` call by the injected connection factory and
/// mutated either by restoring cached cookies or by a live login. It is not
/// persisted beyond the call unless its cookies land in the session cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalConnection {
    cookies: Vec<String>,
    login_successful: bool,
}

impl PortalConnection {
    /// Creates a fresh, unauthenticated connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session cookies in portal order.
    pub fn cookies(&self) -> &[String] {
        &self.cookies
    }

    /// Replaces the session cookies.
    pub fn set_cookies(&mut self, cookies: Vec<String>) {
        self.cookies = cookies;
    }

    /// Whether the most recent login (or cache restore) succeeded.
    pub fn is_logged_in(&self) -> bool {
        self.login_successful
    }

    /// Records the login outcome.
    pub fn set_login_successful(&mut self, successful: bool) {
        self.login_successful = successful;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_connection_is_unauthenticated() {
        let connection = PortalConnection::new();
        assert!(!connection.is_logged_in());
        assert!(connection.cookies().is_empty());
    }

    #[test]
    fn cookies_preserve_order() {
        let mut connection = PortalConnection::new();
        connection.set_cookies(vec!["a=1".into(), "b=2".into()]);
        assert_eq!(connection.cookies(), ["a=1".to_string(), "b=2".to_string()]);
    }
}
