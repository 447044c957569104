//! Internal Rate of Return (IRR) and Net Present Value (NPV) calculations
//!
//! Operates on annual cash flows where index 0 is the inception outflow.

/// Calculate the Internal Rate of Return (IRR) for a series of annual cash
/// flows using the Newton-Raphson method, with a bisection fallback.
///
/// # Arguments
/// * `cashflows` - Annual cash flows (positive = inflow, negative = outflow),
///   index = year offset from inception
///
/// # Returns
/// * `Option<f64>` - Annual IRR as a decimal (e.g. 0.05 for 5%), or None if
///   no real root is found within the iteration bound
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    // IRR only exists when the series changes sign at least once
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.05; // Initial guess: 5% annual
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (value, derivative) = npv_and_derivative(cashflows, rate);

        if derivative.abs() < 1e-20 {
            // Flat slope, a Newton-Raphson step would blow up
            log::debug!("IRR derivative vanished at rate {rate}, switching to bisection");
            return calculate_irr_bisection(cashflows);
        }

        let new_rate = (rate - value / derivative).clamp(-0.99, 10.0);

        if (new_rate - rate).abs() < tolerance {
            return Some(new_rate);
        }

        rate = new_rate;
    }

    log::debug!("IRR Newton-Raphson did not converge, switching to bisection");
    calculate_irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        value += cf / discount;
        if t > 0 {
            derivative -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (value, derivative)
}

/// Fallback IRR calculation using bisection on [-99%, 1000%]
fn calculate_irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = net_present_value(cashflows, low);
    let npv_high = net_present_value(cashflows, high);

    // No root bracketed in this interval
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = net_present_value(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * net_present_value(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Calculate the net present value of annual cash flows at a given annual
/// discount rate
///
/// `sum(cf[t] / (1 + rate)^t)` for t = 0..n; index 0 is undiscounted.
pub fn net_present_value(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}
