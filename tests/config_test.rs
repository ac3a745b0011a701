use braintree_bridge::config::{BridgeConfig, PendingPolicy};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

// ── 41. config_defaults ────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = BridgeConfig::from_lookup(lookup(&[("BRIDGE_APPLICATION_ID", "com.example.shop")]))
        .unwrap();

    assert_eq!(config.application_id, "com.example.shop");
    assert_eq!(config.deep_link_scheme(), "com.example.shop.braintree");
    assert!(config.app_link_return_url.is_none());
    assert_eq!(config.return_markers, vec!["onetouch", "braintree"]);
    assert_eq!(config.pending_policy, PendingPolicy::Replace);
}

// ── 42. config_overrides ───────────────────────────────────────────────────

#[test]
fn config_overrides() {
    let config = BridgeConfig::from_lookup(lookup(&[
        ("BRIDGE_APPLICATION_ID", "com.example.shop"),
        ("BRIDGE_APP_LINK_RETURN_URL", "https://shop.example/pay/return"),
        ("BRIDGE_RETURN_MARKERS", " onetouch , ,checkout "),
        ("BRIDGE_PENDING_POLICY", "reject"),
    ]))
    .unwrap();

    let urls = config.return_urls();
    assert_eq!(urls.app_link_return_url.as_deref(), Some("https://shop.example/pay/return"));
    assert_eq!(urls.deep_link_scheme, "com.example.shop.braintree");
    assert_eq!(config.return_markers, vec!["onetouch", "checkout"]);
    assert_eq!(config.pending_policy, PendingPolicy::Reject);
}

// ── 43. config_errors ──────────────────────────────────────────────────────

#[test]
fn config_errors() {
    let missing = BridgeConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(missing.code(), "CONFIGURATION_ERROR");

    let blank = BridgeConfig::from_lookup(lookup(&[("BRIDGE_APPLICATION_ID", "  ")])).unwrap_err();
    assert_eq!(blank.code(), "CONFIGURATION_ERROR");

    let policy = BridgeConfig::from_lookup(lookup(&[
        ("BRIDGE_APPLICATION_ID", "com.example.shop"),
        ("BRIDGE_PENDING_POLICY", "queue"),
    ]))
    .unwrap_err();
    assert!(policy.detail().contains("queue"));

    assert_eq!(PendingPolicy::try_from("replace").unwrap(), PendingPolicy::Replace);
}
