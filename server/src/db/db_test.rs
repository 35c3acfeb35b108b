use super::*;

#[test]
fn pool_settings_defaults_when_unset() {
    let settings = PoolSettings::from_values(None, None);
    assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert_eq!(settings.acquire_timeout, Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS));
}

#[test]
fn pool_settings_reads_values() {
    let settings = PoolSettings::from_values(Some("12"), Some("30"));
    assert_eq!(settings.max_connections, 12);
    assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
}

#[test]
fn pool_settings_rejects_garbage_and_zero() {
    let settings = PoolSettings::from_values(Some("lots"), Some("0"));
    assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert_eq!(settings.acquire_timeout, Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS));
}
