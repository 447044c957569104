//! Rent schedule output structures for lease projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one lease year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRecord {
    /// Lease year, 1-based
    pub year: u32,

    /// Minimum-guarantee rent: capex * mg_yield, escalated annually
    pub mg_rent: f64,

    /// Projected hospital revenue for the year
    pub revenue: f64,

    /// Revenue-share rent: revenue * revenue_share rate
    pub revenue_share: f64,

    /// Rent actually owed: max(mg_rent, revenue_share)
    pub final_rent: f64,
}

/// Complete projection result for one set of lease terms
///
/// The schedule is year-ascending and has exactly `term_years` rows.
/// Nothing here is mutated after the engine produces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Year-by-year rent schedule
    pub schedule: Vec<YearRecord>,

    /// Internal rate of return of [-capex, final_rent_1, ..], None when
    /// root finding did not converge to a real rate
    pub irr: Option<f64>,

    /// Net present value of the same cash flows at the terms' discount rate
    pub npv: f64,

    /// Sum of final_rent over the whole term
    pub total_rent_collected: f64,

    /// First year whose cumulative final_rent strictly exceeds capex,
    /// None when break-even falls beyond the lease term
    pub break_even_year: Option<u32>,
}

impl ProjectionResult {
    /// Lease term length covered by the schedule
    pub fn term_years(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Final-rent series in year order (for charting or cash-flow reuse)
    pub fn final_rents(&self) -> Vec<f64> {
        self.schedule.iter().map(|r| r.final_rent).collect()
    }

    /// First year in which the revenue share overtakes the MG rent, if any
    ///
    /// With revenue growth above the MG escalation the share eventually
    /// crosses the MG floor; this reports where the schedule switches.
    pub fn crossover_year(&self) -> Option<u32> {
        self.schedule
            .iter()
            .find(|r| r.revenue_share > r.mg_rent)
            .map(|r| r.year)
    }
}
