//! End-to-end wiring of the portal service against in-memory adapters.

use std::sync::Arc;

use portal_bridge::adapters::cache::InMemorySessionCache;
use portal_bridge::adapters::config_store::InMemoryConfigStore;
use portal_bridge::adapters::portal::{LoginBehavior, MockPortalClient};
use portal_bridge::application::PortalService;
use portal_bridge::domain::{ChannelConfig, ConfigId, OrderStatus, RawOrderData, SalesChannelId, ServiceError};
use portal_bridge::resilience::{
    CircuitBreakerConfig, ResilienceConfig, ResiliencePolicy, RetryConfig,
};

struct Harness {
    service: PortalService,
    configs: Arc<InMemoryConfigStore>,
    portal: Arc<MockPortalClient>,
}

fn harness(resilience: ResilienceConfig) -> Harness {
    let configs = Arc::new(InMemoryConfigStore::new());
    let cache = Arc::new(InMemorySessionCache::new());
    let portal = Arc::new(MockPortalClient::new());
    let policy = Arc::new(ResiliencePolicy::new(resilience));
    let service = PortalService::new(configs.clone(), cache, portal.clone(), policy);
    Harness {
        service,
        configs,
        portal,
    }
}

fn fast_resilience() -> ResilienceConfig {
    ResilienceConfig {
        retry: RetryConfig {
            max_attempts: 1,
            initial_backoff_millis: 1,
            backoff_multiplier: 1.0,
            max_backoff_millis: 1,
        },
        ..ResilienceConfig::default()
    }
}

fn channel_config() -> ChannelConfig {
    ChannelConfig::new(
        ConfigId::new(),
        SalesChannelId::new(),
        "merchant-42",
        "integration-user",
        "integration-pass",
    )
}

#[tokio::test]
async fn full_flow_from_config_to_order_classification() {
    let h = harness(fast_resilience());
    let config = channel_config();
    h.configs.insert(config.clone()).await;
    h.portal
        .set_login_behavior(LoginBehavior::Succeed(vec!["sid=e2e".to_string()]))
        .await;
    h.portal
        .insert_order_status("TRK-100", RawOrderData::with_status("41"))
        .await;
    h.portal
        .insert_cancelled_order("TRK-200", RawOrderData::with_status("86"))
        .await;

    let resolved = h.service.get_config(&config.sales_channel).await.unwrap();
    assert_eq!(resolved.id, config.id);

    let connection = h.service.connect(&resolved).await.unwrap();
    assert!(connection.is_logged_in());
    assert_eq!(h.portal.login_calls(), 1);

    // The session is cached now; a second connect performs no login.
    let reconnected = h.service.connect(&resolved).await.unwrap();
    assert!(reconnected.is_logged_in());
    assert_eq!(reconnected.cookies(), connection.cookies());
    assert_eq!(h.portal.login_calls(), 1);

    let pending = h.service.validate_order(&connection, "TRK-100").await.unwrap();
    assert_eq!(pending, OrderStatus::Pending);

    // Known only to the cancelled-orders view, with an inactive status.
    let cancelled = h.service.validate_order(&connection, "TRK-200").await.unwrap();
    assert_eq!(cancelled, OrderStatus::Cancelled);

    let missing = h.service.validate_order(&connection, "TRK-999").await.unwrap();
    assert_eq!(missing, OrderStatus::NotFound);
}

#[tokio::test]
async fn repeated_lookup_failures_trip_the_breaker_for_everyone() {
    let h = harness(ResilienceConfig {
        circuit_breaker: CircuitBreakerConfig {
            minimum_calls: 2,
            sliding_window_size: 2,
            recovery_timeout_secs: 3600,
            ..CircuitBreakerConfig::default()
        },
        ..fast_resilience()
    });
    let connection = portal_bridge::domain::PortalConnection::new();
    h.portal.fail_lookups(true);

    for _ in 0..2 {
        let err = h
            .service
            .check_order_status(&connection, "TRK-1")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }
    let lookups_so_far = h.portal.order_status_calls();

    // The circuit is open now: rejection happens before the portal is hit,
    // and connect is affected too since the policy group is shared.
    let err = h
        .service
        .check_order_status(&connection, "TRK-1")
        .await
        .unwrap_err();
    match err {
        ServiceError::ServiceUnavailable(message) => {
            assert!(message.contains("not available"));
        }
        other => panic!("expected ServiceUnavailable, got {:?}", other),
    }
    assert_eq!(h.portal.order_status_calls(), lookups_so_far);

    let err = h.service.connect(&channel_config()).await.unwrap_err();
    assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    assert_eq!(h.portal.login_calls(), 0);
}

#[tokio::test]
async fn login_failure_degrades_but_next_success_populates_cache() {
    let h = harness(fast_resilience());
    let config = channel_config();

    h.portal
        .set_login_behavior(LoginBehavior::Fail("gateway timeout".into()))
        .await;
    let degraded = h.service.connect(&config).await.unwrap();
    assert!(!degraded.is_logged_in());

    h.portal
        .set_login_behavior(LoginBehavior::Succeed(vec!["sid=recovered".to_string()]))
        .await;
    let recovered = h.service.connect(&config).await.unwrap();
    assert!(recovered.is_logged_in());
    assert_eq!(recovered.cookies(), ["sid=recovered".to_string()]);

    // Third connect rides the cache written by the recovery.
    let logins_before = h.portal.login_calls();
    let cached = h.service.connect(&config).await.unwrap();
    assert!(cached.is_logged_in());
    assert_eq!(h.portal.login_calls(), logins_before);
}

#[tokio::test]
async fn concurrent_connects_share_one_valid_session() {
    let h = harness(fast_resilience());
    let config = channel_config();
    h.portal
        .set_login_behavior(LoginBehavior::Succeed(vec!["sid=shared".to_string()]))
        .await;

    let service = Arc::new(h.service);
    let mut tasks = Vec::new();
    for _ in 0..4 {
        let service = service.clone();
        let config = config.clone();
        tasks.push(tokio::spawn(async move {
            service.connect(&config).await
        }));
    }

    for task in tasks {
        let connection = task.await.unwrap().unwrap();
        assert!(connection.is_logged_in());
        assert_eq!(connection.cookies(), ["sid=shared".to_string()]);
    }
}
