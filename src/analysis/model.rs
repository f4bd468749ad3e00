//! Win probability from the first ten minutes of a match.
//!
//! Fixed logistic regression over three inputs:
//!
//! `z = B0 + B1 * (gold_diff_10 / 1000) + B2 * kills_diff_10 + B3 * first_dragon`
//!
//! `P(win) = 1 / (1 + exp(-z))`

/// Intercept.
pub const B0: f64 = -0.39750995;
/// Per 1000 gold of 10-minute gold difference.
pub const B1: f64 = 1.00495136;
/// Per kill of 10-minute kill difference.
pub const B2: f64 = -0.06700415;
/// First dragon taken by this team.
pub const B3: f64 = 0.79456393;

pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

pub fn predict(gold_diff_10: f64, kills_diff_10: i64, first_dragon: bool) -> f64 {
    let gold_k = gold_diff_10 / 1000.0;
    let dragon = if first_dragon { 1.0 } else { 0.0 };

    let z = B0 + B1 * gold_k + B2 * kills_diff_10 as f64 + B3 * dragon;
    logistic(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_give_intercept_probability() {
        assert!((predict(0.0, 0, false) - logistic(B0)).abs() < 1e-9);
        assert!((logistic(B0) - 0.40192).abs() < 1e-4);
    }

    #[test]
    fn increasing_in_gold() {
        let mut prev = predict(-5000.0, 0, false);
        for gold in (-4500..=5000).step_by(500) {
            let p = predict(gold as f64, 0, false);
            assert!(p > prev, "gold {gold}: {p} <= {prev}");
            prev = p;
        }
    }

    #[test]
    fn decreasing_in_kills() {
        let mut prev = predict(1000.0, -10, true);
        for kills in -9..=10 {
            let p = predict(1000.0, kills, true);
            assert!(p < prev, "kills {kills}: {p} >= {prev}");
            prev = p;
        }
    }

    #[test]
    fn first_dragon_raises_probability() {
        for (gold, kills) in [(-3000.0, 4), (0.0, 0), (2500.0, -2)] {
            assert!(predict(gold, kills, true) > predict(gold, kills, false));
        }
    }

    #[test]
    fn stays_inside_open_interval() {
        for gold in [-3000.0, -1000.0, 0.0, 1000.0, 3000.0] {
            let p = predict(gold, 0, false);
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn known_values() {
        // z = B0 + B1 * 2 + B3
        let expected = logistic(B0 + 2.0 * B1 + B3);
        assert!((predict(2000.0, 0, true) - expected).abs() < 1e-12);
        assert!((expected - 0.9174).abs() < 1e-3);
    }
}
