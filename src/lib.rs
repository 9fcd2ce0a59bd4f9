pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod rpc;
pub mod tables;
pub mod text;

pub use catalog::RegistrarClient;
pub use config::Config;
pub use error::{BridgeError, Result};
pub use normalize::{BodyForm, Language, NormalizedContact, RawContact};
pub use rpc::{Credentials, Dispatcher, HttpTransport, RpcTransport};
