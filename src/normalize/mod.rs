//! Field-level normalizers that turn free-text contact data into the
//! canonical tokens the remote API requires, plus the contact record that
//! composes them.
//!
//! Lookup misses degrade silently to a policy-defined fallback instead of
//! raising; callers that need validation must compare normalized output
//! against their own expectations.

pub mod contact;
pub mod country;
pub mod phone;
pub mod state;

pub use contact::{BodyForm, Language, NormalizedContact, RawContact};
pub use country::normalize_country;
pub use phone::normalize_phone;
pub use state::normalize_state;
