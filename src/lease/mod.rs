//! Lease term data structures and validation

mod terms;

pub use terms::{LeaseTerms, ValidationError, DEFAULT_DISCOUNT_RATE};
