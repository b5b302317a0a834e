//! Endpoint facades, one `impl PayWhirl` block per resource group.
//!
//! Every method maps to exactly one request. Paths are the service's and must
//! not change; optional arguments passed as `None` are left out of the
//! request rather than sent empty.

mod account;
mod customers;
mod invoices;
mod payments;
mod plans;
mod promos;
mod subscriptions;

pub use subscriptions::DEFAULT_SUBSCRIPTION_STATUS;
