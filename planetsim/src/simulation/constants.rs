//! Physical constants (SI units) and time conversions used by the driver

/// Gravitational constant, m^3 / (kg s^2)
pub const G: f64 = 6.6743e-11;

pub const M_EARTH: f64 = 5.972e24; // kg
pub const R_EARTH: f64 = 6.371e6; // m
pub const M_SUN: f64 = 1.9885e30; // kg
pub const R_SUN: f64 = 6.9551e8; // m
pub const D_EARTH_SUN: f64 = 1.496e11; // mean distance, m
pub const D_EARTH_MOON: f64 = 3.844e8; // m
pub const V_EARTH: f64 = 29780.0; // mean orbital speed, m/s

pub const DAYS_TO_SEC: f64 = 24.0 * 60.0 * 60.0;
pub const DAYS_TO_YEARS: f64 = 1.0 / 365.25;
