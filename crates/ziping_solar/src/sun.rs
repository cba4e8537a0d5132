//! Apparent solar longitude from the low-precision solar theory.
//!
//! Mean longitude and mean anomaly polynomials plus the equation of center,
//! corrected for aberration and nutation in longitude. Accurate to roughly
//! 0.01 degree over 1900-2100, which places solar-term moments within a few
//! minutes of wall-clock time.
//!
//! Source: standard low-accuracy solar theory (VSOP87 truncation),
//! public domain.

/// Mean solar motion in degrees per day, used for Newton steps.
pub const MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_647_3;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
///
/// `jd_tt` is a Julian Date in Terrestrial Time.
pub fn apparent_solar_longitude(jd_tt: f64) -> f64 {
    // Julian centuries since J2000.0
    let t = (jd_tt - 2_451_545.0) / 36_525.0;
    let t2 = t * t;

    // Geometric mean longitude and mean anomaly (deg)
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();

    // Equation of center (deg)
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    // Apparent longitude: aberration and nutation in longitude
    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = l0 + c - 0.005_69 - 0.004_78 * omega.sin();

    normalize_360(lambda)
}
