use anyhow::Result;
use async_trait::async_trait;
use registrar_bridge::rpc::{
    Credentials, Dispatcher, Fault, RpcTransport, SessionState, SESSION_EXPIRED_CODE,
};
use registrar_bridge::BridgeError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Transport double that records every call and can be scripted to fail
/// specific operations. Clones share state so tests can inspect calls
/// after handing the transport to a dispatcher.
#[derive(Clone)]
struct MockTransport {
    inner: Arc<MockState>,
}

struct MockState {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    faults: Mutex<HashMap<String, Fault>>,
}

impl MockTransport {
    fn new() -> Self {
        Self {
            inner: Arc::new(MockState {
                calls: Mutex::new(Vec::new()),
                faults: Mutex::new(HashMap::new()),
            }),
        }
    }

    fn fail_operation(&self, operation: &str, code: &str, message: &str) {
        self.inner.faults.lock().unwrap().insert(
            operation.to_string(),
            Fault {
                code: code.to_string(),
                message: message.to_string(),
            },
        );
    }

    fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn calls_named(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(name, _)| name == operation)
            .count()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(
        &self,
        operation: &str,
        arguments: &[Value],
    ) -> std::result::Result<Value, Fault> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .push((operation.to_string(), arguments.to_vec()));

        if let Some(fault) = self.inner.faults.lock().unwrap().get(operation) {
            return Err(fault.clone());
        }

        match operation {
            "login" => Ok(Value::String("tok-123".to_string())),
            "logout" => Ok(Value::Null),
            _ => Ok(json!({ "ok": true })),
        }
    }
}

fn credentials() -> Credentials {
    Credentials {
        account: "ab1234".to_string(),
        password: "secret".to_string(),
        language: "en".to_string(),
    }
}

#[tokio::test]
async fn business_dispatch_while_disconnected_opens_exactly_once() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher
        .dispatch("domainInfo", vec![json!("example.net")])
        .await?;

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "login");
    assert_eq!(calls[1].0, "domainInfo");
    assert_eq!(dispatcher.session_state(), SessionState::Connected);
    Ok(())
}

#[tokio::test]
async fn open_while_connected_performs_zero_remote_calls() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher.open().await?;
    dispatcher.open().await?;
    dispatcher.dispatch("login", Vec::new()).await?;

    assert_eq!(transport.calls_named("login"), 1);
    Ok(())
}

#[tokio::test]
async fn close_while_disconnected_performs_zero_remote_calls() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher.close().await?;
    dispatcher.dispatch("logout", Vec::new()).await?;

    assert!(transport.calls().is_empty());
    assert_eq!(dispatcher.session_state(), SessionState::Disconnected);
    Ok(())
}

#[tokio::test]
async fn close_releases_the_token_and_later_dispatch_reopens() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher.open().await?;
    dispatcher.close().await?;
    assert_eq!(dispatcher.session_state(), SessionState::Disconnected);

    dispatcher.dispatch("accountBalance", Vec::new()).await?;

    assert_eq!(transport.calls_named("login"), 2);
    // The logout call carried the token issued at open.
    let calls = transport.calls();
    let logout = calls.iter().find(|(name, _)| name == "logout").unwrap();
    assert_eq!(logout.1, vec![json!("tok-123")]);
    Ok(())
}

#[tokio::test]
async fn session_token_is_prepended_to_business_arguments() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher
        .dispatch("contactInfo", vec![json!("XY123-HANDLE")])
        .await?;

    let calls = transport.calls();
    let (_, arguments) = calls
        .iter()
        .find(|(name, _)| name == "contactInfo")
        .unwrap();
    assert_eq!(arguments[0], json!("tok-123"));
    assert_eq!(arguments[1], json!("XY123-HANDLE"));
    Ok(())
}

#[tokio::test]
async fn diagnostics_track_business_operations_only() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport, credentials());

    dispatcher
        .dispatch("domainInfo", vec![json!("example.net")])
        .await?;
    let first_request = dispatcher.diagnostics().last_request_id;
    assert_eq!(
        dispatcher.diagnostics().last_operation.as_deref(),
        Some("domainInfo")
    );
    assert_eq!(
        dispatcher.diagnostics().last_arguments,
        Some(vec![json!("example.net")])
    );
    assert!(dispatcher.diagnostics().last_error.is_none());
    assert!(first_request.is_some());

    // Close must not overwrite the caller's business context.
    dispatcher.close().await?;
    assert_eq!(
        dispatcher.diagnostics().last_operation.as_deref(),
        Some("domainInfo")
    );
    assert_eq!(dispatcher.diagnostics().last_request_id, first_request);
    Ok(())
}

#[tokio::test]
async fn stale_session_fault_on_close_is_swallowed() -> Result<()> {
    let transport = MockTransport::new();
    transport.fail_operation("logout", SESSION_EXPIRED_CODE, "session unknown");
    let mut dispatcher = Dispatcher::new(transport, credentials());

    dispatcher.open().await?;
    dispatcher.close().await?;

    assert_eq!(dispatcher.session_state(), SessionState::Disconnected);
    Ok(())
}

#[tokio::test]
async fn stale_session_fault_on_business_operations_is_surfaced() -> Result<()> {
    let transport = MockTransport::new();
    transport.fail_operation("domainInfo", SESSION_EXPIRED_CODE, "session unknown");
    let mut dispatcher = Dispatcher::new(transport, credentials());

    let result = dispatcher
        .dispatch("domainInfo", vec![json!("example.net")])
        .await;

    match result {
        Err(BridgeError::Transport { code, .. }) => assert_eq!(code, SESSION_EXPIRED_CODE),
        other => panic!("expected transport fault, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn business_faults_are_wrapped_and_recorded() -> Result<()> {
    let transport = MockTransport::new();
    transport.fail_operation("contactCreate", "INVALID_HANDLE", "handle rejected");
    let mut dispatcher = Dispatcher::new(transport, credentials());

    let result = dispatcher.dispatch("contactCreate", Vec::new()).await;

    match result {
        Err(BridgeError::Transport { code, message }) => {
            assert_eq!(code, "INVALID_HANDLE");
            assert_eq!(message, "handle rejected");
        }
        other => panic!("expected transport fault, got {:?}", other),
    }
    assert_eq!(
        dispatcher.diagnostics().last_error.as_deref(),
        Some("INVALID_HANDLE: handle rejected")
    );
    assert!(dispatcher.diagnostics().last_response.is_none());
    Ok(())
}

#[tokio::test]
async fn failed_login_surfaces_and_leaves_the_session_closed() -> Result<()> {
    let transport = MockTransport::new();
    transport.fail_operation("login", "BAD_CREDENTIALS", "unknown account");
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    let result = dispatcher.dispatch("accountBalance", Vec::new()).await;

    assert!(matches!(result, Err(BridgeError::Transport { .. })));
    assert_eq!(dispatcher.session_state(), SessionState::Disconnected);
    // The business operation never reached the transport.
    assert_eq!(transport.calls_named("accountBalance"), 0);
    Ok(())
}

#[tokio::test]
async fn set_preference_passes_through_as_a_business_operation() -> Result<()> {
    let transport = MockTransport::new();
    let mut dispatcher = Dispatcher::new(transport.clone(), credentials());

    dispatcher.set_preference("lang", json!("fr")).await?;

    let calls = transport.calls();
    let (_, arguments) = calls
        .iter()
        .find(|(name, _)| name == "setPreference")
        .unwrap();
    assert_eq!(arguments[1], json!("lang"));
    assert_eq!(arguments[2], json!("fr"));
    Ok(())
}
