// crates/citypref-core/src/locate.rs

//! # Location Guess Resolver
//!
//! Best-effort guess of the user's city from their IP address. The trait is
//! the seam the service depends on; [`HttpLocationResolver`] is the real
//! implementation and tests inject their own.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PrefError, Result};
use crate::text::non_empty;

/// Something that can guess the user's city.
///
/// Futures are `Send` on native targets and local on wasm32, where the
/// browser fetch API is single-threaded.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait LocationResolver: Send + Sync {
    /// Returns the guessed city name as reported by the source.
    async fn locate(&self) -> Result<String>;
}

/// Resolver that never produces a city. Used by non-interactive hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolver;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LocationResolver for NoopResolver {
    async fn locate(&self) -> Result<String> {
        Err(PrefError::Network("location lookup disabled".into()))
    }
}

/// Extracts the `city` field from a geolocation response body.
///
/// Anything that is not a JSON object with a non-empty string `city` is a
/// [`PrefError::MalformedResponse`]. All other fields are ignored.
pub fn parse_city(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| PrefError::MalformedResponse(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(PrefError::MalformedResponse(
            "response is not a JSON object".into(),
        ));
    };

    match fields.get("city") {
        Some(Value::String(city)) => non_empty(city)
            .map(str::to_owned)
            .ok_or_else(|| PrefError::MalformedResponse("empty `city` field".into())),
        Some(Value::Null) | None => {
            Err(PrefError::MalformedResponse("missing `city` field".into()))
        }
        Some(other) => Err(PrefError::MalformedResponse(format!(
            "`city` is not a string: {other}"
        ))),
    }
}

#[cfg(feature = "http")]
pub use http::HttpLocationResolver;

#[cfg(feature = "http")]
mod http {
    use super::*;
    use crate::config::PrefConfig;
    use log::debug;

    /// One `GET` against an IP-geolocation endpoint.
    #[derive(Debug, Clone)]
    pub struct HttpLocationResolver {
        client: reqwest::Client,
        url: String,
    }

    impl HttpLocationResolver {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                url: url.into(),
            }
        }

        /// Resolver built from the config's endpoint and optional timeout.
        pub fn from_config(config: &PrefConfig) -> Result<Self> {
            #[allow(unused_mut)]
            let mut builder = reqwest::Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            if let Some(timeout) = config.geolocation_timeout() {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|e| PrefError::Config(e.to_string()))?;
            Ok(Self {
                client,
                url: config.geolocation_url.clone(),
            })
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl LocationResolver for HttpLocationResolver {
        async fn locate(&self) -> Result<String> {
            debug!("requesting location guess from {}", self.url);
            let body = self
                .client
                .get(&self.url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            parse_city(&body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_and_ignores_other_fields() {
        let body = r#"{"ip":"203.0.113.7","city":"Ottawa","region":"Ontario","latitude":45.4}"#;
        assert_eq!(parse_city(body).unwrap(), "Ottawa");
    }

    #[test]
    fn missing_or_unusable_city_is_malformed() {
        for body in [
            r#"{"ip":"203.0.113.7"}"#,
            r#"{"city":""}"#,
            r#"{"city":null}"#,
            r#"{"city":42}"#,
            r#"["Ottawa"]"#,
            "<html>rate limited</html>",
        ] {
            let err = parse_city(body).unwrap_err();
            assert!(
                matches!(err, PrefError::MalformedResponse(_)),
                "body {body} gave {err:?}"
            );
        }
    }

    #[test]
    fn positional_city_in_array_is_rejected() {
        for body in [r#"["Ottawa"]"#, r#"[{"city":"Ottawa"}]"#, r#""Ottawa""#] {
            assert!(
                matches!(parse_city(body), Err(PrefError::MalformedResponse(_))),
                "body {body} was accepted"
            );
        }
    }

    #[tokio::test]
    async fn noop_resolver_always_fails() {
        assert!(NoopResolver.locate().await.is_err());
    }
}
