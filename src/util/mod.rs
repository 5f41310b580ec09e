use anyhow::Result;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod diag;
pub mod error;

/// Installs the global `tracing` subscriber used by binaries built on this crate: UTC wall-clock
/// timestamps, source locations, no targets.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// Scalar helpers shared by every vector and matrix type.
pub mod gg_float {
    pub const PI: f32 = std::f32::consts::PI;
    pub const TAU: f32 = std::f32::consts::TAU;

    /// Converts radians to degrees.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert!((gg_float::deg(gg_float::PI) - 180.0).abs() < 1e-4);
    /// ```
    pub fn deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    /// Converts degrees to radians.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert!((gg_float::rad(180.0) - gg_float::PI).abs() < 1e-6);
    /// ```
    pub fn rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    pub fn min(a: f32, b: f32) -> f32 {
        if a > b { b } else { a }
    }
    pub fn max(a: f32, b: f32) -> f32 {
        if a < b { b } else { a }
    }

    /// Clamps `value` to `[lo, hi]`.
    ///
    /// Unlike [`f32::clamp`] this never panics on `lo > hi` and passes `NaN` through unchanged,
    /// so callers can decide what a `NaN` interpolation parameter should mean.
    pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
        if value < lo {
            lo
        } else if value > hi {
            hi
        } else {
            value
        }
    }

    /// Approximates `1 / sqrt(x)` with the bit-level initial guess followed by two Newton steps.
    /// Relative error is below 5e-6 for positive normal inputs.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert!((gg_float::isqrt(4.0) - 0.5).abs() < 1e-5);
    /// ```
    pub fn isqrt(x: f32) -> f32 {
        const THREE_HALFS: f32 = 1.5;
        let x2 = x * 0.5;
        let mut y = f32::from_bits(0x5f37_59df - (x.to_bits() >> 1));
        y *= THREE_HALFS - x2 * y * y;
        y *= THREE_HALFS - x2 * y * y;
        y
    }

    /// Euclidean norm of `components`.
    ///
    /// Squares that underflow or overflow are avoided by rescaling by the largest magnitude, so
    /// any finite non-zero input has a finite non-zero norm.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::util::gg_float;
    /// assert_eq!(gg_float::norm(&[3.0, 4.0]), 5.0);
    /// assert!((gg_float::norm(&[3e30, 4e30]) / 5e30 - 1.0).abs() < 1e-6);
    /// ```
    pub fn norm(components: &[f32]) -> f32 {
        let len_squared: f32 = components.iter().map(|c| c * c).sum();
        if len_squared.is_normal() {
            return len_squared.sqrt();
        }
        let scale = components.iter().fold(0.0, |acc, c| max(acc, c.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return len_squared.sqrt();
        }
        let scaled: f32 = components
            .iter()
            .map(|c| {
                let c = c / scale;
                c * c
            })
            .sum();
        scale * scaled.sqrt()
    }
}

/// Helpers that turn a failed operation into a report plus a fallback value.
pub mod gg_err {
    use crate::util::diag;
    use crate::util::error::MathError;
    use tracing::error;

    pub fn log_error(e: &anyhow::Error) {
        error!("{}", e);
        e.chain()
            .skip(1)
            .for_each(|cause| error!("caused by: {}", cause));
    }

    pub fn log_err_and_ignore<T>(result: anyhow::Result<T>) {
        if let Err(e) = result {
            log_error(&e);
        }
    }

    /// Unwraps `result`, or reports the error to the current diagnostic sink and returns
    /// `default`.
    pub fn report_or<T>(default: T, result: Result<T, MathError>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                diag::report(e);
                default
            }
        }
    }

    /// As [`report_or`], but only computes the fallback when it is needed.
    pub fn report_or_else<T>(result: Result<T, MathError>, default: impl FnOnce() -> T) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                diag::report(e);
                default()
            }
        }
    }
}
