use clap::ValueEnum;

///The concentration metrics available for ranking.
///Each metric maps the per-target occurrence counts of one group to a single
///non-negative number. All three are permutation-invariant, so callers may
///pass counts in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Size-dampened Gini coefficient of the count distribution
    InequalityScore,
    /// Share of the group held by its most frequent target
    MaxProportion,
    /// Herfindahl-style sum of squared proportions
    SumSquaredProportion,
}

impl Metric {
    ///Human-readable label, as shown in summaries and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::InequalityScore => "Inequality Score",
            Metric::MaxProportion => "Max Proportion",
            Metric::SumSquaredProportion => "Sum of Squared Proportions",
        }
    }

    ///The scoring function backing this metric.
    fn func(&self) -> fn(&[u64]) -> f64 {
        match self {
            Metric::InequalityScore => inequality_score,
            Metric::MaxProportion => max_proportion,
            Metric::SumSquaredProportion => sum_squared_proportion,
        }
    }

    ///Apply this metric to a group's count distribution.
    pub fn score(&self, counts: &[u64]) -> f64 {
        self.func()(counts)
    }
}

///Gini coefficient of `counts`, dampened for small totals.
///
///The raw Gini is 0 for a perfectly balanced distribution and approaches 1
///as one target dominates. Totals below 5 give unreliable scores, so the
///result is scaled by `min(5, total) / 5` and only reaches full weight once
///the group holds at least 5 occurrences. Returns 0 for an empty or all-zero
///distribution.
/// # Example
/// ```
/// use char_analysis::metrics::inequality_score;
/// // Total of exactly 5: damping factor is 1, plain Gini remains.
/// assert!((inequality_score(&[4, 1]) - 0.3).abs() < 1e-12);
/// // Balanced counts score 0 regardless of size.
/// assert_eq!(inequality_score(&[3, 3, 3]), 0.0);
/// ```
pub fn inequality_score(counts: &[u64]) -> f64 {
    let n = counts.len();
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let cumulative: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &c)| (2 * (i as i64 + 1) - n as i64 - 1) as f64 * c as f64)
        .sum();
    let gini = cumulative / (n as f64 * total as f64);
    let damping = total.min(5) as f64 / 5.0;
    gini * damping
}

///Share of the group held by its most frequent target: `max / sum`.
///Returns 0 for an empty or all-zero distribution.
pub fn max_proportion(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let max = counts.iter().copied().max().unwrap_or(0);
    max as f64 / total as f64
}

///Sum of squared proportions over the distribution. Equals 1 for a single
///target and approaches `1/n` as the counts flatten out. Returns 0 for an
///empty or all-zero distribution.
pub fn sum_squared_proportion(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn uniform_distribution() {
        // counts = [k, k, k]: perfectly balanced
        for k in [1_u64, 4, 100] {
            let counts = [k, k, k];
            assert!(inequality_score(&counts).abs() < EPS);
            assert!((max_proportion(&counts) - 1.0 / 3.0).abs() < EPS);
            assert!((sum_squared_proportion(&counts) - 1.0 / 3.0).abs() < EPS);
        }
    }

    #[test]
    fn single_element_distribution() {
        for k in [1_u64, 5, 42] {
            let counts = [k];
            assert_eq!(inequality_score(&counts), 0.0);
            assert_eq!(max_proportion(&counts), 1.0);
            assert_eq!(sum_squared_proportion(&counts), 1.0);
        }
    }

    #[test]
    fn damping_saturates_at_total_of_five() {
        // Total of exactly 5: the score equals the undamped Gini.
        // sorted [1, 4], cumulative = -1*1 + 1*4 = 3, gini = 3 / (2*5) = 0.3
        assert!((inequality_score(&[4, 1]) - 0.3).abs() < EPS);
    }

    #[test]
    fn damping_suppresses_small_totals() {
        // Total of 3: undamped Gini is 1/6, damping 3/5 brings it to 0.1.
        let damped = inequality_score(&[2, 1]);
        let undamped = 1.0 / 6.0;
        assert!((damped - 0.1).abs() < EPS);
        assert!(damped < undamped);
    }

    #[test]
    fn permutation_invariance() {
        let orderings: [&[u64]; 3] = [&[7, 2, 2, 1], &[1, 2, 7, 2], &[2, 1, 2, 7]];
        for metric in [
            Metric::InequalityScore,
            Metric::MaxProportion,
            Metric::SumSquaredProportion,
        ] {
            let first = metric.score(orderings[0]);
            for counts in &orderings[1..] {
                assert!((metric.score(counts) - first).abs() < EPS);
            }
        }
    }

    #[test]
    fn output_ranges() {
        let samples: [&[u64]; 4] = [&[1], &[1, 1], &[9, 1], &[5, 3, 2, 1, 1]];
        for counts in samples {
            let gini = inequality_score(counts);
            assert!((0.0..1.0).contains(&gini), "gini out of range: {gini}");
            let mp = max_proportion(counts);
            assert!(mp > 0.0 && mp <= 1.0, "max proportion out of range: {mp}");
            let ssp = sum_squared_proportion(counts);
            assert!(ssp > 0.0 && ssp <= 1.0, "ssp out of range: {ssp}");
        }
    }

    #[test]
    fn zero_sum_fallback() {
        // Cannot arise from a real group, but must not divide by zero.
        assert_eq!(inequality_score(&[]), 0.0);
        assert_eq!(max_proportion(&[]), 0.0);
        assert_eq!(sum_squared_proportion(&[]), 0.0);
        assert_eq!(inequality_score(&[0, 0]), 0.0);
        assert_eq!(max_proportion(&[0, 0]), 0.0);
        assert_eq!(sum_squared_proportion(&[0, 0]), 0.0);
    }

    #[test]
    fn skew_increases_every_metric() {
        // Same total, increasing dispersion.
        let flat: [u64; 2] = [5, 5];
        let skewed: [u64; 2] = [9, 1];
        assert!(inequality_score(&skewed) > inequality_score(&flat));
        assert!(max_proportion(&skewed) > max_proportion(&flat));
        assert!(sum_squared_proportion(&skewed) > sum_squared_proportion(&flat));
    }
}
