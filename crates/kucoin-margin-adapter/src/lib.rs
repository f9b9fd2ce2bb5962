/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public KuCoin margin borrow-and-lend adapter surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ClientConfig,
    Credentials,
    HttpTransport,
    MarginClient,
    MarginError,
    Params,
    RequestSigner,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;
