//! Lease Projection - financial projection engine for hospital lease structures
//!
//! This library provides:
//! - Year-by-year rent schedules combining minimum-guarantee (MG) rent and
//!   revenue-share rent, taking the greater of the two each year
//! - Investment metrics over the lease term (IRR, NPV, break-even year)
//! - Explicit input validation over the slider ranges of the source model
//! - CSV export/import of the rent schedule

pub mod lease;
pub mod projection;
pub mod export;

// Re-export commonly used types
pub use lease::{LeaseTerms, ValidationError};
pub use projection::{project, ProjectionEngine, ProjectionResult, YearRecord};
