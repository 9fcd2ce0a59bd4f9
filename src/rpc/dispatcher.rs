use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::rpc::operation::{Operation, CLOSE_OPERATION, OPEN_OPERATION};
use crate::rpc::session::{Session, SessionState};
use crate::rpc::transport::{Fault, RpcTransport, SESSION_EXPIRED_CODE};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Login parameters for the open operation.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account: String,
    pub password: String,
    pub language: String,
}

impl Credentials {
    pub fn from_config(config: &Config) -> Self {
        Self {
            account: config.account.clone(),
            password: config.password.clone(),
            language: config.language.clone(),
        }
    }
}

/// Last business dispatch, kept for observability. Session bookkeeping
/// (open/close) never overwrites it.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub last_operation: Option<String>,
    pub last_arguments: Option<Vec<Value>>,
    pub last_response: Option<Value>,
    pub last_error: Option<String>,
    pub last_request_id: Option<Uuid>,
}

/// Invokes named remote operations over an authenticated session.
///
/// Holds exactly one session token; `dispatch` takes `&mut self`, so one
/// dispatcher can never have two calls in flight. Callers that need
/// parallelism create one dispatcher per logical caller.
pub struct Dispatcher<T: RpcTransport> {
    transport: T,
    credentials: Credentials,
    session: Session,
    diagnostics: Diagnostics,
}

impl<T: RpcTransport> Dispatcher<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            session: Session::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Invokes a named remote operation with positional arguments.
    ///
    /// Open and close are idempotent; a business operation issued while
    /// disconnected first performs exactly one open. The session token is
    /// prepended to business arguments, never supplied by the caller.
    #[instrument(skip(self, arguments), fields(operation = %operation))]
    pub async fn dispatch(&mut self, operation: &str, arguments: Vec<Value>) -> Result<Value> {
        match Operation::resolve(operation) {
            Operation::Open => {
                if self.session.is_connected() {
                    debug!("session already open, skipping login");
                    return Ok(Value::Null);
                }
                self.open_session().await?;
                Ok(Value::Null)
            }
            Operation::Close => {
                if !self.session.is_connected() {
                    debug!("session already closed, skipping logout");
                    return Ok(Value::Null);
                }
                self.close_session().await?;
                Ok(Value::Null)
            }
            Operation::Business(name) => {
                if !self.session.is_connected() {
                    self.open_session().await?;
                }
                self.call_business(&name, arguments).await
            }
        }
    }

    /// Opens the session explicitly. Idempotent.
    pub async fn open(&mut self) -> Result<()> {
        self.dispatch(OPEN_OPERATION, Vec::new()).await.map(|_| ())
    }

    /// Releases the session token. Idempotent. This is the supported
    /// release path; relying on drop-time cleanup leaks the remote
    /// concurrency slot until the remote side times it out.
    pub async fn close(&mut self) -> Result<()> {
        self.dispatch(CLOSE_OPERATION, Vec::new()).await.map(|_| ())
    }

    /// Session-scoped setting, passed through to the remote side without
    /// local interpretation.
    pub async fn set_preference(&mut self, key: &str, value: Value) -> Result<Value> {
        self.dispatch(
            "setPreference",
            vec![Value::String(key.to_string()), value],
        )
        .await
    }

    /// Exactly one login call; never triggered by another meta operation.
    async fn open_session(&mut self) -> Result<()> {
        let arguments = vec![
            Value::String(self.credentials.account.clone()),
            Value::String(self.credentials.password.clone()),
            Value::String(self.credentials.language.clone()),
        ];

        let response = self
            .transport
            .call(OPEN_OPERATION, &arguments)
            .await
            .map_err(wrap_fault)?;

        let token = response.as_str().ok_or_else(|| {
            BridgeError::MissingField("session token in login response".to_string())
        })?;
        self.session.connect(token.to_string());
        debug!(account = %self.credentials.account, "session opened");
        Ok(())
    }

    async fn close_session(&mut self) -> Result<()> {
        let token = self.session.token().unwrap_or_default().to_string();
        let arguments = vec![Value::String(token)];

        match self.transport.call(CLOSE_OPERATION, &arguments).await {
            Ok(_) => {
                self.session.disconnect();
                debug!("session closed");
                Ok(())
            }
            // The remote side already dropped the session; nothing left to
            // release.
            Err(fault) if fault.code == SESSION_EXPIRED_CODE => {
                self.session.disconnect();
                debug!("session already expired remotely, treated as closed");
                Ok(())
            }
            Err(fault) => Err(wrap_fault(fault)),
        }
    }

    async fn call_business(&mut self, name: &str, arguments: Vec<Value>) -> Result<Value> {
        let token = self.session.token().ok_or_else(|| {
            BridgeError::MissingField("session token for business operation".to_string())
        })?;

        let mut wire_arguments = Vec::with_capacity(arguments.len() + 1);
        wire_arguments.push(Value::String(token.to_string()));
        wire_arguments.extend(arguments.iter().cloned());

        let request_id = Uuid::new_v4();
        self.diagnostics.last_operation = Some(name.to_string());
        self.diagnostics.last_arguments = Some(arguments);
        self.diagnostics.last_request_id = Some(request_id);

        debug!(%request_id, operation = %name, "invoking remote operation");
        match self.transport.call(name, &wire_arguments).await {
            Ok(response) => {
                self.diagnostics.last_response = Some(response.clone());
                self.diagnostics.last_error = None;
                Ok(response)
            }
            Err(fault) => {
                self.diagnostics.last_response = None;
                self.diagnostics.last_error =
                    Some(format!("{}: {}", fault.code, fault.message));
                Err(wrap_fault(fault))
            }
        }
    }
}

impl<T: RpcTransport> Drop for Dispatcher<T> {
    fn drop(&mut self) {
        if self.session.is_connected() {
            warn!("dispatcher dropped with an open session; call close() to release the remote slot");
        }
    }
}

fn wrap_fault(fault: Fault) -> BridgeError {
    BridgeError::Transport {
        code: fault.code,
        message: fault.message,
    }
}
