//! # Comptrack Validation
//!
//! The boundary that rejects malformed submissions before they reach the
//! salary store. Two entry points exist on purpose and behave differently:
//!
//! - `validate_form`: for interactive input (the CLI `add` command). Aborts
//!   at the first failing rule and surfaces exactly that one message.
//! - `validate_api`: for the programmatic `POST /api/salaries` endpoint.
//!   Checks every rule and joins all issues into one comma-separated
//!   message.
//!
//! Both produce the same `SalaryPayload` on success; only their error
//! reporting differs, because their call sites differ.

pub mod error;
pub mod rules;

// Re-export the key components to create a clean, public-facing API.
pub use error::ValidationError;
pub use rules::{FormInput, validate_api, validate_form};
