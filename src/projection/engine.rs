//! Core projection engine for annual lease rent schedules

use crate::lease::{LeaseTerms, ValidationError};
use super::irr::{calculate_irr, net_present_value};
use super::schedule::{ProjectionResult, YearRecord};

/// Main projection engine
///
/// Holds a validated set of lease terms; construction fails on any
/// out-of-range input, so `run` itself cannot fail.
pub struct ProjectionEngine {
    terms: LeaseTerms,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given terms
    ///
    /// Validates the terms up front; invalid terms are rejected before
    /// anything is computed.
    pub fn new(terms: LeaseTerms) -> Result<Self, ValidationError> {
        terms.validate()?;
        Ok(Self { terms })
    }

    /// Get reference to the lease terms driving this engine
    pub fn terms(&self) -> &LeaseTerms {
        &self.terms
    }

    /// Run the full projection: rent schedule plus summary metrics
    pub fn run(&self) -> ProjectionResult {
        let t = &self.terms;

        let schedule: Vec<YearRecord> = (0..t.term_years)
            .map(|i| {
                let mg_rent = t.capex * t.mg_yield * (1.0 + t.annual_escalation).powi(i as i32);
                let revenue = t.starting_revenue * (1.0 + t.revenue_growth).powi(i as i32);
                let revenue_share = revenue * t.revenue_share;

                YearRecord {
                    year: i + 1,
                    mg_rent,
                    revenue,
                    revenue_share,
                    final_rent: mg_rent.max(revenue_share),
                }
            })
            .collect();

        // Cash flows: capex outflow at inception, then one rent inflow per year
        let mut cashflows = Vec::with_capacity(schedule.len() + 1);
        cashflows.push(-t.capex);
        cashflows.extend(schedule.iter().map(|r| r.final_rent));

        let irr = calculate_irr(&cashflows);
        let npv = net_present_value(&cashflows, t.discount_rate);
        let total_rent_collected: f64 = schedule.iter().map(|r| r.final_rent).sum();

        // Nominal break-even: cumulative rent vs raw capex, undiscounted
        let mut cumulative = 0.0;
        let break_even_year = schedule.iter().find_map(|r| {
            cumulative += r.final_rent;
            (cumulative > t.capex).then_some(r.year)
        });

        ProjectionResult {
            schedule,
            irr,
            npv,
            total_rent_collected,
            break_even_year,
        }
    }
}

/// Run a one-shot projection for the given lease terms
pub fn project(terms: &LeaseTerms) -> Result<ProjectionResult, ValidationError> {
    Ok(ProjectionEngine::new(terms.clone())?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Reference terms: 100 Cr capex, 20% MG yield with 5% escalation,
    /// 120 Cr year-1 revenue growing 8%, 6% revenue share, 15-year term
    fn reference_terms() -> LeaseTerms {
        LeaseTerms::new(1_000_000_000.0, 0.20, 0.05, 0.08, 0.06, 1_200_000_000.0, 15)
    }

    #[test]
    fn test_invalid_terms_rejected_before_computation() {
        let mut terms = reference_terms();
        terms.mg_yield = 1.2;
        assert!(ProjectionEngine::new(terms).is_err());
    }

    #[test]
    fn test_schedule_length_and_ordering() {
        let result = project(&reference_terms()).unwrap();
        assert_eq!(result.schedule.len(), 15);
        for (i, row) in result.schedule.iter().enumerate() {
            assert_eq!(row.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_reference_year_one_values() {
        let result = project(&reference_terms()).unwrap();
        let first = &result.schedule[0];
        assert_relative_eq!(first.mg_rent, 200_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(first.revenue, 1_200_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(first.revenue_share, 72_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(first.final_rent, 200_000_000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_final_rent_is_max_of_components() {
        let result = project(&reference_terms()).unwrap();
        for row in &result.schedule {
            assert!(row.final_rent >= row.mg_rent);
            assert!(row.final_rent >= row.revenue_share);
            assert!(row.final_rent == row.mg_rent || row.final_rent == row.revenue_share);
        }
    }

    #[test]
    fn test_mg_dominates_entire_reference_term() {
        // At a 0.36 share-to-MG starting ratio, 8% vs 5% growth does not
        // close the gap within 15 years
        let result = project(&reference_terms()).unwrap();
        for row in &result.schedule {
            assert_eq!(row.final_rent, row.mg_rent);
        }
        assert_eq!(result.crossover_year(), None);
    }

    #[test]
    fn test_crossover_year_is_deterministic() {
        // Same rates over a longer term: the share overtakes MG in year 38
        let mut terms = reference_terms();
        terms.term_years = 40;
        let result = project(&terms).unwrap();
        assert_eq!(result.crossover_year(), Some(38));
        // Re-running produces the identical schedule
        let again = project(&terms).unwrap();
        assert_eq!(again.crossover_year(), Some(38));
        for (a, b) in result.schedule.iter().zip(&again.schedule) {
            assert_eq!(a.final_rent, b.final_rent);
        }
    }

    #[test]
    fn test_reference_break_even_year() {
        // Cumulative MG rent 200 * (1.05^y - 1)/0.05 crosses 1000 at y = 5
        let result = project(&reference_terms()).unwrap();
        assert_eq!(result.break_even_year, Some(5));

        let through_four: f64 = result.schedule[..4].iter().map(|r| r.final_rent).sum();
        let through_five: f64 = result.schedule[..5].iter().map(|r| r.final_rent).sum();
        assert!(through_four <= 1_000_000_000.0);
        assert!(through_five > 1_000_000_000.0);
    }

    #[test]
    fn test_zero_escalation_gives_constant_mg_rent() {
        let mut terms = reference_terms();
        terms.annual_escalation = 0.0;
        let result = project(&terms).unwrap();
        for row in &result.schedule {
            assert_relative_eq!(row.mg_rent, 200_000_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_growth_gives_constant_revenue() {
        let mut terms = reference_terms();
        terms.revenue_growth = 0.0;
        let result = project(&terms).unwrap();
        for row in &result.schedule {
            assert_relative_eq!(row.revenue, 1_200_000_000.0, epsilon = 1e-6);
            assert_relative_eq!(row.revenue_share, 72_000_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_total_rent_matches_schedule_sum() {
        let result = project(&reference_terms()).unwrap();
        let summed: f64 = result.schedule.iter().map(|r| r.final_rent).sum();
        assert_relative_eq!(result.total_rent_collected, summed, epsilon = 1e-6);
    }

    #[test]
    fn test_share_dominant_scenario() {
        // MG yield low enough that the revenue share leads from year 1
        let mut terms = reference_terms();
        terms.mg_yield = 0.05;
        let result = project(&terms).unwrap();
        for row in &result.schedule {
            assert_eq!(row.final_rent, row.revenue_share);
        }
        assert_eq!(result.crossover_year(), Some(1));

        // Metrics reduce to the share-driven cash-flow case
        let mut cashflows = vec![-terms.capex];
        cashflows.extend(result.schedule.iter().map(|r| r.revenue_share));
        let npv = net_present_value(&cashflows, terms.discount_rate);
        assert_relative_eq!(result.npv, npv, epsilon = 1e-6);
    }

    #[test]
    fn test_single_year_term_closed_form_irr() {
        let mut terms = reference_terms();
        terms.term_years = 1;
        let result = project(&terms).unwrap();
        assert_eq!(result.schedule.len(), 1);

        // Single period: IRR = (final_rent - capex) / capex = -0.8
        let expected = (result.schedule[0].final_rent - terms.capex) / terms.capex;
        let irr = result.irr.unwrap();
        assert_relative_eq!(irr, expected, epsilon = 1e-6);
        assert_relative_eq!(irr, -0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_npv_at_default_discount_rate() {
        let result = project(&reference_terms()).unwrap();
        let mut cashflows = vec![-1_000_000_000.0];
        cashflows.extend(result.schedule.iter().map(|r| r.final_rent));
        let expected: f64 = cashflows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf / 1.12_f64.powi(t as i32))
            .sum();
        assert_relative_eq!(result.npv, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_reference_irr_zeroes_npv() {
        let result = project(&reference_terms()).unwrap();
        let irr = result.irr.unwrap();
        let mut cashflows = vec![-1_000_000_000.0];
        cashflows.extend(result.schedule.iter().map(|r| r.final_rent));
        let at_irr = net_present_value(&cashflows, irr);
        assert!(at_irr.abs() < 1.0, "NPV at IRR was {at_irr}");
    }

    #[test]
    fn test_all_zero_rent_degenerate_case() {
        // Zero MG yield and zero revenue share: no rent is ever owed
        let mut terms = reference_terms();
        terms.mg_yield = 0.0;
        terms.revenue_share = 0.0;
        let result = project(&terms).unwrap();

        assert_eq!(result.irr, None);
        assert_relative_eq!(result.npv, -terms.capex, epsilon = 1e-6);
        assert_eq!(result.total_rent_collected, 0.0);
        assert_eq!(result.break_even_year, None);
    }

    #[test]
    fn test_break_even_beyond_term() {
        // Tiny rents never recover a large capex within the term
        let mut terms = reference_terms();
        terms.mg_yield = 0.01;
        terms.revenue_share = 0.0;
        terms.annual_escalation = 0.0;
        let result = project(&terms).unwrap();
        assert_eq!(result.break_even_year, None);
    }
}
