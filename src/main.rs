//! Lease Projection CLI
//!
//! Command-line interface for running hospital lease rent projections

use anyhow::Context;
use clap::Parser;
use lease_projection::export::write_schedule_csv;
use lease_projection::{LeaseTerms, ProjectionEngine};
use std::path::PathBuf;

/// Crore of the base currency unit, the display convention of the model
const CRORE: f64 = 1e7;

/// Project a hospital lease rent schedule and its investment metrics
#[derive(Debug, Parser)]
#[command(name = "lease_projection", version, about)]
struct Cli {
    /// CapEx investment (base currency units)
    #[arg(long, default_value_t = 1_000_000_000.0)]
    capex: f64,

    /// MG yield on capex in year 1, as a fraction
    #[arg(long, default_value_t = 0.20)]
    mg_yield: f64,

    /// Annual MG escalation, as a fraction
    #[arg(long, default_value_t = 0.05)]
    annual_escalation: f64,

    /// Annual hospital revenue growth, as a fraction
    #[arg(long, default_value_t = 0.08)]
    revenue_growth: f64,

    /// Revenue share owed as rent, as a fraction
    #[arg(long, default_value_t = 0.06)]
    revenue_share: f64,

    /// Year-1 hospital revenue (base currency units)
    #[arg(long, default_value_t = 1_200_000_000.0)]
    starting_revenue: f64,

    /// Lease term in years
    #[arg(long, default_value_t = 15)]
    term_years: u32,

    /// Annual discount rate for NPV, as a fraction
    #[arg(long, default_value_t = 0.12)]
    discount_rate: f64,

    /// Write the schedule as CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of the table view
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn terms(&self) -> LeaseTerms {
        LeaseTerms {
            capex: self.capex,
            mg_yield: self.mg_yield,
            annual_escalation: self.annual_escalation,
            revenue_growth: self.revenue_growth,
            revenue_share: self.revenue_share,
            starting_revenue: self.starting_revenue,
            term_years: self.term_years,
            discount_rate: self.discount_rate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let terms = cli.terms();

    let engine = ProjectionEngine::new(terms.clone()).context("invalid lease terms")?;
    let result = engine.run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Hospital Lease Financial Model");
        println!("==============================\n");

        println!("Terms:");
        println!("  CapEx:            {:.2} Cr", terms.capex / CRORE);
        println!("  MG Yield:         {:.1}%", terms.mg_yield * 100.0);
        println!("  Escalation:       {:.1}%", terms.annual_escalation * 100.0);
        println!("  Revenue Growth:   {:.1}%", terms.revenue_growth * 100.0);
        println!("  Revenue Share:    {:.1}%", terms.revenue_share * 100.0);
        println!("  Year 1 Revenue:   {:.2} Cr", terms.starting_revenue / CRORE);
        println!("  Term:             {} years\n", terms.term_years);

        println!("Year-wise Rent Summary (Cr):");
        println!(
            "{:>4} {:>12} {:>12} {:>14} {:>12}",
            "Year", "MG Rent", "Revenue", "RevenueShare", "FinalRent"
        );
        println!("{}", "-".repeat(58));
        for row in &result.schedule {
            println!(
                "{:>4} {:>12.2} {:>12.2} {:>14.2} {:>12.2}",
                row.year,
                row.mg_rent / CRORE,
                row.revenue / CRORE,
                row.revenue_share / CRORE,
                row.final_rent / CRORE,
            );
        }

        println!("\nKey Financial Metrics:");
        match result.irr {
            Some(irr) => println!("  IRR:                  {:.2}%", irr * 100.0),
            None => println!("  IRR:                  undefined"),
        }
        println!(
            "  NPV (at {:.0}% discount): {:.2} Cr",
            terms.discount_rate * 100.0,
            result.npv / CRORE
        );
        println!(
            "  Total Rent Collected: {:.2} Cr",
            result.total_rent_collected / CRORE
        );
        match result.break_even_year {
            Some(year) => println!("  Break-even Year:      {year}"),
            None => println!("  Break-even Year:      Beyond Term"),
        }
    }

    if let Some(path) = &cli.output {
        write_schedule_csv(path, &result.schedule)
            .with_context(|| format!("writing schedule to {}", path.display()))?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}
