//! Representative typed wrappers over the dispatcher, in the shape the
//! billing host calls it. The production catalog is ~80 such operations;
//! this slice covers the contact, domain and session families. Wrappers
//! carry no logic beyond argument marshaling.

use crate::error::Result;
use crate::normalize::NormalizedContact;
use crate::rpc::{Credentials, Dispatcher, RpcTransport};
use serde_json::Value;

pub struct RegistrarClient<T: RpcTransport> {
    dispatcher: Dispatcher<T>,
}

impl<T: RpcTransport> RegistrarClient<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, credentials),
        }
    }

    pub fn dispatcher(&mut self) -> &mut Dispatcher<T> {
        &mut self.dispatcher
    }

    /// Registers a new contact handle from an already-normalized record.
    pub async fn contact_create(&mut self, contact: &NormalizedContact) -> Result<Value> {
        self.dispatcher
            .dispatch("contactCreate", contact.to_args())
            .await
    }

    pub async fn contact_info(&mut self, handle: &str) -> Result<Value> {
        self.dispatcher
            .dispatch("contactInfo", vec![Value::String(handle.to_string())])
            .await
    }

    pub async fn contact_update(
        &mut self,
        handle: &str,
        contact: &NormalizedContact,
    ) -> Result<Value> {
        let mut arguments = vec![Value::String(handle.to_string())];
        arguments.extend(contact.to_args());
        self.dispatcher.dispatch("contactUpdate", arguments).await
    }

    pub async fn domain_info(&mut self, domain: &str) -> Result<Value> {
        self.dispatcher
            .dispatch("domainInfo", vec![Value::String(domain.to_string())])
            .await
    }

    /// Reassigns a domain to another contact handle.
    pub async fn domain_contact_change(&mut self, domain: &str, handle: &str) -> Result<Value> {
        self.dispatcher
            .dispatch(
                "domainChangeContact",
                vec![
                    Value::String(domain.to_string()),
                    Value::String(handle.to_string()),
                ],
            )
            .await
    }

    pub async fn account_balance(&mut self) -> Result<Value> {
        self.dispatcher.dispatch("accountBalance", Vec::new()).await
    }

    pub async fn set_preference(&mut self, key: &str, value: Value) -> Result<Value> {
        self.dispatcher.set_preference(key, value).await
    }

    pub async fn close(&mut self) -> Result<()> {
        self.dispatcher.close().await
    }
}
