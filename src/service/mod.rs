//! Payload validation ahead of the store.

mod validation;
pub use validation::RequestValidator;
