//! Domain services
//!
//! Each service is a set of async functions over the injected pool. They
//! validate input, call the repositories and translate `RepoError` into the
//! `ServiceError` taxonomy; no raw storage error reaches a handler.

pub mod directory;
pub mod intent;
pub mod ledger;
pub mod worksheets;
