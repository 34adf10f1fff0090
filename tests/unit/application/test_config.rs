use placemark_client::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, SyncConfig,
};

fn sample_config() -> Config {
    Config {
        credentials: Credentials {
            username: "test_user".to_string(),
            password: "test_pass".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: "https://api.example.com/api/v1".to_string(),
            timeout: 30,
            with_credentials: true,
        },
        sync: SyncConfig {
            feed_refresh_seconds: 600,
            refresh_margin_seconds: 3600,
            page_size: 20,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 60,
            period_seconds: 60,
            burst_size: 20,
        },
    }
}

#[test]
fn test_credentials_clone() {
    let creds = Credentials {
        username: "test_user".to_string(),
        password: "test_pass".to_string(),
    };

    let cloned = creds.clone();
    assert_eq!(creds.username, cloned.username);
    assert_eq!(creds.password, cloned.password);
}

#[test]
fn test_config_serialization_round_trip() {
    let config = sample_config();

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(config.rest_api.base_url, deserialized.rest_api.base_url);
    assert_eq!(
        config.rest_api.with_credentials,
        deserialized.rest_api.with_credentials
    );
    assert_eq!(
        config.sync.feed_refresh_seconds,
        deserialized.sync.feed_refresh_seconds
    );
}

#[test]
fn test_rest_api_config_clone() {
    let config = RestApiConfig {
        base_url: "https://api.example.com".to_string(),
        timeout: 30,
        with_credentials: false,
    };

    let cloned = config.clone();
    assert_eq!(config.base_url, cloned.base_url);
    assert_eq!(config.timeout, cloned.timeout);
    assert!(!cloned.with_credentials);
}

#[test]
fn test_rate_limiter_config_clone() {
    let config = RateLimiterConfig {
        max_requests: 10,
        period_seconds: 60,
        burst_size: 5,
    };

    let cloned = config.clone();
    assert_eq!(config.max_requests, cloned.max_requests);
    assert_eq!(config.period_seconds, cloned.period_seconds);
    assert_eq!(config.burst_size, cloned.burst_size);
}
