pub mod activation;
pub mod error;
pub mod id;
pub mod nonce;
pub mod options;
pub mod outcome;
pub mod request;
pub mod vendor;
