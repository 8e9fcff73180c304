use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

/// Day-over-day fractional returns of a price series.
///
/// `r_i = (p_i - p_{i-1}) / p_{i-1}`; windows with a zero base price are skipped.
pub fn daily_returns(prices: &[BigDecimal]) -> Vec<BigDecimal> {
    let mut returns = Vec::new();
    for window in prices.windows(2) {
        let prev = &window[0];
        let curr = &window[1];
        if !prev.is_zero() {
            returns.push((curr - prev) / prev);
        }
    }
    returns
}

/// Population standard deviation of a series of values.
pub fn population_std_dev(values: &[BigDecimal]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sum: BigDecimal = values.iter().cloned().sum();
    let mean = &sum / &BigDecimal::from(values.len() as i32);
    let variance_sum: BigDecimal = values
        .iter()
        .map(|x| {
            let diff = x - &mean;
            &diff * &diff
        })
        .sum();
    let variance = &variance_sum / &BigDecimal::from(values.len() as i32);

    // Square root via f64; scoring tiers consume a plain float anyway
    variance.to_f64().unwrap_or(0.0).sqrt()
}

/// Volatility of a daily price series: population standard deviation of its
/// day-over-day returns. Empty or single-point series yield 0.
pub fn volatility(prices: &[BigDecimal]) -> f64 {
    let returns = daily_returns(prices);
    if returns.is_empty() {
        return 0.0;
    }
    population_std_dev(&returns)
}

/// Ratio of two decimal quantities as f64, None when the denominator is zero.
pub fn safe_ratio(numerator: &BigDecimal, denominator: &BigDecimal) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    (numerator / denominator).to_f64()
}
