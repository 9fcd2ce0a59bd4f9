//! Session-managed command dispatch for the registrar RPC interface.
//!
//! The dispatcher guarantees an authenticated channel before any business
//! operation executes; callers only ever say "invoke this named operation
//! with these arguments".

pub mod dispatcher;
pub mod operation;
pub mod session;
pub mod transport;

pub use dispatcher::{Credentials, Diagnostics, Dispatcher};
pub use operation::{Operation, CLOSE_OPERATION, OPEN_OPERATION};
pub use session::{Session, SessionState};
pub use transport::{Fault, HttpTransport, RpcTransport, SESSION_EXPIRED_CODE};
