use serde::Deserialize;
use serde_with::{serde_as, DurationMilliSeconds, DurationSeconds};
use std::time::Duration;

#[serde_as]
#[derive(Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct HttpClientSettings {
    #[serde(rename = "tcp_keepalive_sec", default = "HttpClientSettings::default_tcp_keepalive")]
    #[serde_as(as = "DurationSeconds")]
    pub tcp_keepalive: Duration,
    #[serde(
        rename = "pool_idle_timeout_sec",
        default = "HttpClientSettings::default_pool_idle_timeout"
    )]
    #[serde_as(as = "DurationSeconds")]
    pub pool_idle_timeout: Duration,
    /// Upper bound for a single GET attempt, connect included.
    #[serde(
        rename = "request_timeout_sec",
        default = "HttpClientSettings::default_request_timeout"
    )]
    #[serde_as(as = "DurationSeconds")]
    pub request_timeout: Duration,
    #[serde(default = "HttpClientSettings::default_retries")]
    pub retries: u32,
    /// Linear backoff base: attempt `n` sleeps `backoff_base * n` before the next try.
    #[serde(rename = "backoff_base_ms", default = "HttpClientSettings::default_backoff_base")]
    #[serde_as(as = "DurationMilliSeconds")]
    pub backoff_base: Duration,
}

impl From<&HttpClientSettings> for reqwest::Client {
    fn from(settings: &HttpClientSettings) -> Self {
        reqwest::ClientBuilder::new()
            .tcp_keepalive(Some(settings.tcp_keepalive))
            .pool_idle_timeout(Some(settings.pool_idle_timeout))
            .timeout(settings.request_timeout)
            .build()
            .expect("Client must be built")
    }
}

impl HttpClientSettings {
    fn default_tcp_keepalive() -> Duration {
        Duration::from_secs(20)
    }

    fn default_pool_idle_timeout() -> Duration {
        Duration::from_secs(20)
    }

    fn default_request_timeout() -> Duration {
        Duration::from_secs(15)
    }

    fn default_retries() -> u32 {
        3
    }

    fn default_backoff_base() -> Duration {
        Duration::from_millis(150)
    }
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            tcp_keepalive: Self::default_tcp_keepalive(),
            pool_idle_timeout: Self::default_pool_idle_timeout(),
            request_timeout: Self::default_request_timeout(),
            retries: Self::default_retries(),
            backoff_base: Self::default_backoff_base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_config() {
        let settings: HttpClientSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, HttpClientSettings::default());
        assert_eq!(settings.request_timeout, Duration::from_secs(15));
        assert_eq!(settings.retries, 3);
        assert_eq!(settings.backoff_base, Duration::from_millis(150));
    }

    #[test]
    fn overrides_use_renamed_fields() {
        let settings: HttpClientSettings =
            serde_json::from_str(r#"{"request_timeout_sec": 2, "retries": 5, "backoff_base_ms": 10}"#).unwrap();

        assert_eq!(settings.request_timeout, Duration::from_secs(2));
        assert_eq!(settings.retries, 5);
        assert_eq!(settings.backoff_base, Duration::from_millis(10));
    }
}
