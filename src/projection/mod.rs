//! Projection engine for lease rent schedules and investment metrics

mod engine;
mod irr;
mod schedule;

pub use engine::{project, ProjectionEngine};
pub use irr::{calculate_irr, net_present_value};
pub use schedule::{ProjectionResult, YearRecord};
