//! Closed-form ordinary least squares for one predictor.
//!
//! Means are taken first, then a single pass accumulates the cross and
//! squared deviation terms:
//!
//! slope = Σ(xi − x̄)(yi − ȳ) / Σ(xi − x̄)²
//! intercept = ȳ − slope · x̄

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EstimationError {
    #[error("Mean of an empty sequence is undefined")]
    EmptyInput,

    #[error("Predictor and response lengths differ: {x_len} != {y_len}")]
    MismatchedLength { x_len: usize, y_len: usize },

    #[error("All predictor values are identical, slope is undefined")]
    DegenerateInput,
}

pub fn mean(values: &[f64]) -> Result<f64, EstimationError> {
    if values.is_empty() {
        return Err(EstimationError::EmptyInput);
    }

    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Returns `(slope, intercept)` of the least-squares line through `x`, `y`.
pub fn fit(x: &[f64], y: &[f64]) -> Result<(f64, f64), EstimationError> {
    if x.len() != y.len() {
        return Err(EstimationError::MismatchedLength { x_len: x.len(), y_len: y.len() });
    }

    let first = match x.first() {
        Some(first) => *first,
        None => return Err(EstimationError::EmptyInput),
    };

    // x̄ of repeated decimals like 0.1 is not exactly 0.1, so the squared
    // deviations need not sum to zero.
    if x.iter().all(|v| *v == first) {
        return Err(EstimationError::DegenerateInput);
    }

    let (slope, intercept): (f64, f64) =
        linreg::linear_regression(x, y).map_err(|err| match err {
            linreg::Error::InputLenDif => {
                EstimationError::MismatchedLength { x_len: x.len(), y_len: y.len() }
            }
            linreg::Error::Mean | linreg::Error::NoElements => EstimationError::EmptyInput,
            linreg::Error::TooSteep => EstimationError::DegenerateInput,
        })?;

    debug!("Fitted {} points: slope {}, intercept {}", x.len(), slope, intercept);
    Ok((slope, intercept))
}

pub fn slope(x: &[f64], y: &[f64]) -> Result<f64, EstimationError> {
    fit(x, y).map(|(slope, _)| slope)
}

pub fn intercept(x: &[f64], y: &[f64]) -> Result<f64, EstimationError> {
    fit(x, y).map(|(_, intercept)| intercept)
}

pub fn predict(slope: f64, intercept: f64, x: f64) -> f64 {
    slope * x + intercept
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 5] = [95.0, 85.0, 80.0, 70.0, 60.0];
    const Y: [f64; 5] = [85.0, 95.0, 70.0, 65.0, 70.0];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_mean_of_scores() {
        assert_eq!(mean(&X).unwrap(), 78.0);
        assert_eq!(mean(&Y).unwrap(), 77.0);
    }

    #[test]
    fn test_mean_of_single_value_is_the_value() {
        for v in [0.0, -3.5, 1e-300, 42.125] {
            assert_eq!(mean(&[v]).unwrap(), v);
        }
    }

    #[test]
    fn test_mean_of_empty_sequence_fails() {
        assert_eq!(mean(&[]), Err(EstimationError::EmptyInput));
    }

    #[test]
    fn test_slope_and_intercept_of_scores() {
        assert_eq!(slope(&X, &Y).unwrap(), 0.6438356164383562);
        assert_eq!(intercept(&X, &Y).unwrap(), 26.78082191780822);
    }

    #[test]
    fn test_prediction_of_scores() {
        let (s, i) = (slope(&X, &Y).unwrap(), intercept(&X, &Y).unwrap());
        assert_eq!(predict(s, i, 80.0), 78.2876712328767);
    }

    #[test]
    fn test_mismatched_lengths_fail_before_anything_else() {
        let expected = EstimationError::MismatchedLength { x_len: 5, y_len: 4 };
        assert_eq!(slope(&X, &Y[..4]), Err(expected));
        assert_eq!(intercept(&X, &Y[..4]), Err(expected));

        // An empty side is still a length problem, not an empty mean.
        assert_eq!(
            slope(&[], &[1.0]),
            Err(EstimationError::MismatchedLength { x_len: 0, y_len: 1 })
        );
    }

    #[test]
    fn test_every_length_mismatch_is_reported() {
        let values: Vec<f64> = (0..6).map(f64::from).collect();
        for x_len in 0..values.len() {
            for y_len in 0..values.len() {
                if x_len == y_len {
                    continue;
                }
                assert_eq!(
                    slope(&values[..x_len], &values[..y_len]),
                    Err(EstimationError::MismatchedLength { x_len, y_len })
                );
            }
        }
    }

    #[test]
    fn test_identical_predictors_are_degenerate() {
        assert_eq!(slope(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), Err(EstimationError::DegenerateInput));
        assert_eq!(intercept(&[7.0], &[1.0]), Err(EstimationError::DegenerateInput));
    }

    #[test]
    fn test_identical_inexact_decimals_are_degenerate() {
        let y = [1.0, 2.0, 4.0];
        for x in [[0.1; 3], [0.7; 3], [3.3; 3], [1.1; 3]] {
            assert_eq!(slope(&x, &y), Err(EstimationError::DegenerateInput), "x = {:?}", x);
            assert_eq!(intercept(&x, &y), Err(EstimationError::DegenerateInput), "x = {:?}", x);
        }
    }

    #[test]
    fn test_fit_returns_slope_and_intercept_together() {
        assert_eq!(fit(&X, &Y).unwrap(), (0.6438356164383562, 26.78082191780822));
    }

    #[test]
    fn test_empty_pair_is_empty_input() {
        assert_eq!(slope(&[], &[]), Err(EstimationError::EmptyInput));
    }

    #[test]
    fn test_should_recover_exact_line() {
        let x = [-2.0, 0.0, 1.0, 4.0, 10.0];
        let y: Vec<f64> = x.iter().map(|x| 2.0 * x + 3.0).collect();

        assert_close(slope(&x, &y).unwrap(), 2.0);
        assert_close(intercept(&x, &y).unwrap(), 3.0);
    }

    #[test]
    fn test_fitted_line_satisfies_normal_equations() {
        let x = [1.0, 2.0, 4.0, 7.0, 11.0, 16.0];
        let y = [2.3, 1.9, 5.2, 8.8, 10.1, 17.4];
        let (s, i) = (slope(&x, &y).unwrap(), intercept(&x, &y).unwrap());

        let residuals: Vec<f64> = x.iter().zip(y.iter()).map(|(x, y)| y - predict(s, i, *x)).collect();
        let residual_sum: f64 = residuals.iter().sum();
        let weighted_sum: f64 = residuals.iter().zip(x.iter()).map(|(r, x)| r * x).sum();

        assert!(residual_sum.abs() < 1e-9, "Σr = {}", residual_sum);
        assert!(weighted_sum.abs() < 1e-9, "Σxr = {}", weighted_sum);
    }

    #[test]
    fn test_line_passes_through_mean_point() {
        let (x_bar, y_bar) = (mean(&X).unwrap(), mean(&Y).unwrap());
        let (s, i) = (slope(&X, &Y).unwrap(), intercept(&X, &Y).unwrap());

        assert_eq!(predict(s, i, x_bar), y_bar);
    }
}
