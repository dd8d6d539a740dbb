#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion of single latitude or longitude ordinates between decimal
//! degrees, degrees-minutes-seconds ([`Dms`]) and degrees-decimal-minutes
//! ([`Gps`]).
//!
//! ```
//! use ordinate_convert::{decimal_to_gps, gps_to_decimal, Gps, OrdinateType};
//!
//! let gps = decimal_to_gps(45.5, OrdinateType::Lat).unwrap();
//! assert_eq!(gps, Gps::new(45.0, 30.0));
//!
//! assert_eq!(gps_to_decimal(&gps, OrdinateType::Lat).unwrap(), 45.5);
//! assert!(gps_to_decimal(&Gps::new(95.0, 30.0), OrdinateType::Lat).is_err());
//! ```

use thiserror::Error;

pub mod convert;
pub mod ordinate;
pub mod utility;
mod validate;

pub use convert::{ConvertOptions, Converter, FieldPresence, NegativeSplit};
pub use coords::{dms::Dms, gps::Gps};
pub use ordinate::OrdinateType;

pub mod coords {
    pub mod dms;
    pub mod gps;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Ordinate is not valid: {0}")]
    InvalidOrdinate(String),
    #[error("Unknown ordinate type: {0}")]
    InvalidOrdinateType(String),
}

/// Converts a decimal ordinate to [`Dms`] using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the value is NaN or outside the range of `kind`.
pub fn decimal_to_dms(decimal: f64, kind: OrdinateType) -> Result<Dms, Error> {
    Converter::default().decimal_to_dms(decimal, kind)
}

/// Converts a decimal ordinate to [`Gps`] using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the value is NaN or outside the range of `kind`.
pub fn decimal_to_gps(decimal: f64, kind: OrdinateType) -> Result<Gps, Error> {
    Converter::default().decimal_to_gps(decimal, kind)
}

/// Converts a [`Dms`] ordinate to decimal degrees using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the ordinate fails [`validate_dms`].
pub fn dms_to_decimal(dms: &Dms, kind: OrdinateType) -> Result<f64, Error> {
    Converter::default().dms_to_decimal(dms, kind)
}

/// Converts a [`Dms`] ordinate to [`Gps`] using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the ordinate fails [`validate_dms`].
pub fn dms_to_gps(dms: &Dms, kind: OrdinateType) -> Result<Gps, Error> {
    Converter::default().dms_to_gps(dms, kind)
}

/// Converts a [`Gps`] ordinate to decimal degrees using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the ordinate fails [`validate_gps`].
pub fn gps_to_decimal(gps: &Gps, kind: OrdinateType) -> Result<f64, Error> {
    Converter::default().gps_to_decimal(gps, kind)
}

/// Converts a [`Gps`] ordinate to [`Dms`] using the default [`ConvertOptions`].
///
/// # Errors
///
/// Returns [`Error::InvalidOrdinate`] if the ordinate fails [`validate_gps`].
pub fn gps_to_dms(gps: &Gps, kind: OrdinateType) -> Result<Dms, Error> {
    Converter::default().gps_to_dms(gps, kind)
}

/// Checks a decimal ordinate against the range of `kind` using the default [`ConvertOptions`].
pub fn validate_decimal(decimal: f64, kind: OrdinateType) -> bool {
    Converter::default().validate_decimal(decimal, kind)
}

/// Checks a [`Dms`] ordinate using the default [`ConvertOptions`].
pub fn validate_dms(dms: &Dms, kind: OrdinateType) -> bool {
    Converter::default().validate_dms(dms, kind)
}

/// Checks a [`Gps`] ordinate using the default [`ConvertOptions`].
pub fn validate_gps(gps: &Gps, kind: OrdinateType) -> bool {
    Converter::default().validate_gps(gps, kind)
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
