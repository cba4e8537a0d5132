//! ΔT (TT - UT) model for converting dynamical time to civil time.
//!
//! Piecewise polynomial fits to the historical record with the standard
//! long-range extrapolation, covering 1900-2150. Minute-level solar-term
//! work only needs ΔT to a few seconds.
//!
//! Source: Espenak & Meeus polynomial expressions (NASA eclipse
//! publications), public domain.

/// ΔT = TT - UT in seconds for a decimal year.
///
/// Total over the supported range; years outside the fitted segments fall
/// into the long-range parabola.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}
