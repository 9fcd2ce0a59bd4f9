use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// Fault code the remote side returns when a session token is no longer
/// valid. Swallowed by the dispatcher for close operations only.
pub const SESSION_EXPIRED_CODE: &str = "SESSION_EXPIRED";

/// Failure surfaced by a transport: either the remote side rejected the
/// call or the call itself never completed.
#[derive(Debug, Clone)]
pub struct Fault {
    pub code: String,
    pub message: String,
}

impl Fault {
    /// Fault for failures below the RPC layer (connection refused, bad
    /// payload), where the remote never assigned a code.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: "TRANSPORT".to_string(),
            message: message.into(),
        }
    }
}

/// Seam between the dispatcher and whatever carries the bytes. The core
/// never looks past this trait; failures surface as a `Fault` with a
/// message and a code.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(
        &self,
        operation: &str,
        arguments: &[Value],
    ) -> std::result::Result<Value, Fault>;
}

/// Bundled transport: posts `{"method", "params"}` JSON to a single
/// endpoint and maps `{"fault": {...}}` replies onto `Fault`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(
        &self,
        operation: &str,
        arguments: &[Value],
    ) -> std::result::Result<Value, Fault> {
        let body = json!({
            "method": operation,
            "params": arguments,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Fault::transport(e.to_string()))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Fault::transport(e.to_string()))?;

        if let Some(fault) = payload.get("fault") {
            let code = fault
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = fault
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("remote fault without message")
                .to_string();
            return Err(Fault { code, message });
        }

        Ok(payload.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_faults_carry_a_fixed_code() {
        let fault = Fault::transport("connection refused");
        assert_eq!(fault.code, "TRANSPORT");
        assert_eq!(fault.message, "connection refused");
    }
}
