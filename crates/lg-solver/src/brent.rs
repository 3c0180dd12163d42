//! Bounded scalar minimization by Brent's method.
//!
//! Golden-section steps guarantee progress; parabolic interpolation through
//! the three best points gives superlinear convergence near a smooth interior
//! minimum. Only function values are used. Iterates stay strictly inside the
//! bracket, so objectives that are singular at the endpoints are safe.

use crate::error::{SolverError, SolverResult};
use tracing::trace;

/// `(3 - sqrt(5)) / 2`, the golden-section step fraction.
const GOLDEN_FRACTION: f64 = 0.381_966_011_250_105_1;

/// Minimizer configuration.
///
/// `x_abs_tol` bounds the bracket width, not the distance to the true
/// minimizer. Where the objective is quadratic near its minimum, rounding in
/// `f` limits accuracy to about `sqrt(eps)` relative; at a quartic minimum
/// (the lattice-gas critical point) the floor rises to about `eps^(1/4)`, so
/// densities there are only good to a few `1e-5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentConfig {
    /// Absolute tolerance on the abscissa. The effective tolerance at `x` is
    /// `sqrt(eps) * |x| + x_abs_tol / 3`.
    pub x_abs_tol: f64,
    /// Maximum number of objective evaluations
    pub max_evaluations: usize,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            x_abs_tol: 1e-10,
            max_evaluations: 500,
        }
    }
}

/// Minimization result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentResult {
    /// Location of the minimum
    pub x: f64,
    /// Objective value at `x`
    pub fx: f64,
    /// Number of objective evaluations
    pub evaluations: usize,
}

/// Minimize `f` over the closed interval `[lower, upper]`.
///
/// A zero-width interval returns its single point after one evaluation.
pub fn minimize_bounded<F>(
    f: F,
    lower: f64,
    upper: f64,
    config: &BrentConfig,
) -> SolverResult<BrentResult>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(SolverError::InvalidInput {
            what: format!("non-finite bracket [{lower}, {upper}]"),
        });
    }
    if lower > upper {
        return Err(SolverError::InvalidInput {
            what: format!("reversed bracket [{lower}, {upper}]"),
        });
    }
    if lower == upper {
        return Ok(BrentResult {
            x: lower,
            fx: f(lower),
            evaluations: 1,
        });
    }

    let sqrt_eps = f64::EPSILON.sqrt();
    let (mut a, mut b) = (lower, upper);

    // x: best point so far, w: second best, v: previous w
    let mut x = a + GOLDEN_FRACTION * (b - a);
    let mut fx = f(x);
    let (mut w, mut fw) = (x, fx);
    let (mut v, mut fv) = (x, fx);
    let mut evaluations = 1;

    // step taken on the last iteration and the one before
    let mut step = 0.0_f64;
    let mut prev_step = 0.0_f64;

    let mut mid = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * x.abs() + config.x_abs_tol / 3.0;
    let mut tol2 = 2.0 * tol1;

    while (x - mid).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        if prev_step.abs() > tol1 {
            // Fit a parabola through (x, fx), (w, fw), (v, fv)
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let older = prev_step;
            prev_step = step;

            if p.abs() < (0.5 * q * older).abs() && p > q * (a - x) && p < q * (b - x) {
                golden = false;
                step = p / q;
                let u = x + step;
                // Do not evaluate too close to the bracket ends
                if (u - a) < tol2 || (b - u) < tol2 {
                    step = tol1 * sign_or_one(mid - x);
                }
            }
        }

        if golden {
            prev_step = if x >= mid { a - x } else { b - x };
            step = GOLDEN_FRACTION * prev_step;
        }

        let u = x + sign_or_one(step) * step.abs().max(tol1);
        let fu = f(u);
        evaluations += 1;

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            (v, fv) = (w, fw);
            (w, fw) = (x, fx);
            (x, fx) = (u, fu);
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                (v, fv) = (w, fw);
                (w, fw) = (u, fu);
            } else if fu <= fv || v == x || v == w {
                (v, fv) = (u, fu);
            }
        }

        mid = 0.5 * (a + b);
        tol1 = sqrt_eps * x.abs() + config.x_abs_tol / 3.0;
        tol2 = 2.0 * tol1;

        if evaluations >= config.max_evaluations {
            return Err(SolverError::ConvergenceFailed {
                what: format!(
                    "Maximum evaluations {} reached on [{lower}, {upper}], bracket width = {}",
                    config.max_evaluations,
                    b - a
                ),
            });
        }
    }

    trace!(x, fx, evaluations, lower, upper, "bounded minimization converged");

    Ok(BrentResult { x, fx, evaluations })
}

/// Sign of `v`, treating zero as positive.
#[inline]
fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}
