//! Lease term structures and input validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default discount rate for NPV (12% annual)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.12;

/// Validation failure for a lease term input
///
/// Sliders enforced these ranges in the original interactive model; in
/// library form the same ranges are checked explicitly before any
/// computation runs. Out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("capex must be strictly positive, got {0}")]
    NonPositiveCapex(f64),

    #[error("starting revenue must be strictly positive, got {0}")]
    NonPositiveRevenue(f64),

    #[error("{name} must be a fraction in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("lease term must be at least 1 year, got {0}")]
    ZeroTerm(u32),
}

/// Commercial lease terms for a single hospital facility
///
/// Monetary fields are in the base currency unit; rate fields are fractions
/// (0.05 = 5%). A set of terms is immutable input to the projection engine
/// and is validated as a whole by [`LeaseTerms::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// Capital expenditure invested by the lessor at inception
    pub capex: f64,

    /// Minimum-guarantee yield on capex in year 1 (e.g. 0.20)
    pub mg_yield: f64,

    /// Annual escalation applied to the MG rent (compounds yearly)
    pub annual_escalation: f64,

    /// Annual hospital revenue growth (compounds yearly)
    pub revenue_growth: f64,

    /// Share of hospital revenue owed as rent (e.g. 0.06)
    pub revenue_share: f64,

    /// Hospital revenue in year 1
    pub starting_revenue: f64,

    /// Lease term in whole years
    pub term_years: u32,

    /// Annual discount rate used for NPV
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

fn default_discount_rate() -> f64 {
    DEFAULT_DISCOUNT_RATE
}

impl LeaseTerms {
    /// Create terms with the default 12% discount rate
    pub fn new(
        capex: f64,
        mg_yield: f64,
        annual_escalation: f64,
        revenue_growth: f64,
        revenue_share: f64,
        starting_revenue: f64,
        term_years: u32,
    ) -> Self {
        Self {
            capex,
            mg_yield,
            annual_escalation,
            revenue_growth,
            revenue_share,
            starting_revenue,
            term_years,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }

    /// Check every field against its declared domain
    ///
    /// Fails fast on the first violation; nothing is computed from invalid
    /// terms. Rates use the closed interval [0, 1], so 0.0 and 1.0 are
    /// both accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.capex > 0.0) {
            return Err(ValidationError::NonPositiveCapex(self.capex));
        }
        if !(self.starting_revenue > 0.0) {
            return Err(ValidationError::NonPositiveRevenue(self.starting_revenue));
        }

        let rates = [
            ("mg_yield", self.mg_yield),
            ("annual_escalation", self.annual_escalation),
            ("revenue_growth", self.revenue_growth),
            ("revenue_share", self.revenue_share),
            ("discount_rate", self.discount_rate),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::RateOutOfRange { name, value });
            }
        }

        if self.term_years < 1 {
            return Err(ValidationError::ZeroTerm(self.term_years));
        }

        Ok(())
    }
}
