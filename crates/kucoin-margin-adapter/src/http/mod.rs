/*
[INPUT]:  Client configuration, credentials and endpoint parameters
[OUTPUT]: Raw response envelopes from the margin borrow-and-lend API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod borrow;
pub mod client;
pub mod error;
pub mod lend;
pub mod market;
pub mod signature;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{MarginError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, MarginClient};
pub use transport::{ApiRequest, HttpTransport, Params, Transport};
