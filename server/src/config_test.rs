use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("NEARU_BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("NEARU_BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, HostConfig::default());
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = HostConfig::from_lookup(lookup(&[("NEARU_BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "70000".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: '70000' is not a port number");
}

#[test]
fn rejects_bad_bind_addr() {
    let err = HostConfig::from_lookup(lookup(&[("NEARU_BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}
