//! Scriptable portal client for tests.
//!
//! Lets tests choose the login outcome, seed order payloads per tracking
//! number, and force transport failures, while counting every remote call
//! the service makes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::{ChannelConfig, PortalConnection, RawOrderData};
use crate::ports::{LoginResult, PortalClient, PortalError};

/// What the mock's `login` should do.
#[derive(Debug, Clone)]
pub enum LoginBehavior {
    /// Login succeeds and issues these cookies.
    Succeed(Vec<String>),
    /// Portal rejects the credentials (no transport error).
    Reject,
    /// Transport-level failure with this message.
    Fail(String),
}

/// Scriptable test double for the portal API.
pub struct MockPortalClient {
    login_behavior: RwLock<LoginBehavior>,
    order_statuses: RwLock<HashMap<String, RawOrderData>>,
    cancelled_orders: RwLock<HashMap<String, RawOrderData>>,
    lookups_fail: AtomicBool,
    login_calls: AtomicUsize,
    order_status_calls: AtomicUsize,
    cancelled_order_calls: AtomicUsize,
}

impl MockPortalClient {
    /// Creates a mock whose login succeeds with a single session cookie.
    pub fn new() -> Self {
        Self {
            login_behavior: RwLock::new(LoginBehavior::Succeed(vec!["session=mock".to_string()])),
            order_statuses: RwLock::new(HashMap::new()),
            cancelled_orders: RwLock::new(HashMap::new()),
            lookups_fail: AtomicBool::new(false),
            login_calls: AtomicUsize::new(0),
            order_status_calls: AtomicUsize::new(0),
            cancelled_order_calls: AtomicUsize::new(0),
        }
    }

    /// Scripts the next login outcomes.
    pub async fn set_login_behavior(&self, behavior: LoginBehavior) {
        *self.login_behavior.write().await = behavior;
    }

    /// Seeds the primary lookup for a tracking number.
    pub async fn insert_order_status(&self, tracking_number: &str, data: RawOrderData) {
        self.order_statuses
            .write()
            .await
            .insert(tracking_number.to_string(), data);
    }

    /// Seeds the cancelled-orders lookup for a tracking number.
    pub async fn insert_cancelled_order(&self, tracking_number: &str, data: RawOrderData) {
        self.cancelled_orders
            .write()
            .await
            .insert(tracking_number.to_string(), data);
    }

    /// Makes both lookups fail at the transport level.
    pub fn fail_lookups(&self, fail: bool) {
        self.lookups_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of login calls observed.
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    /// Number of primary lookups observed.
    pub fn order_status_calls(&self) -> usize {
        self.order_status_calls.load(Ordering::SeqCst)
    }

    /// Number of cancelled-order lookups observed.
    pub fn cancelled_order_calls(&self) -> usize {
        self.cancelled_order_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPortalClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortalClient for MockPortalClient {
    async fn login(&self, _config: &ChannelConfig) -> Result<LoginResult, PortalError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        match &*self.login_behavior.read().await {
            LoginBehavior::Succeed(cookies) => Ok(LoginResult {
                successful: true,
                cookies: cookies.clone(),
            }),
            LoginBehavior::Reject => Ok(LoginResult::default()),
            LoginBehavior::Fail(message) => Err(PortalError::Network(message.clone())),
        }
    }

    async fn get_order_status(
        &self,
        _connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError> {
        self.order_status_calls.fetch_add(1, Ordering::SeqCst);
        if self.lookups_fail.load(Ordering::SeqCst) {
            return Err(PortalError::Network("lookup failed".into()));
        }
        Ok(self
            .order_statuses
            .read()
            .await
            .get(tracking_number)
            .cloned()
            .unwrap_or_else(RawOrderData::empty))
    }

    async fn get_cancelled_order(
        &self,
        _connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError> {
        self.cancelled_order_calls.fetch_add(1, Ordering::SeqCst);
        if self.lookups_fail.load(Ordering::SeqCst) {
            return Err(PortalError::Network("lookup failed".into()));
        }
        Ok(self
            .cancelled_orders
            .read()
            .await
            .get(tracking_number)
            .cloned()
            .unwrap_or_else(RawOrderData::empty))
    }
}
