pub mod continuation;
pub mod deep_link;
pub mod payments;
