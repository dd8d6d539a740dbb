//! Conversions between decimal, [`Dms`] and [`Gps`] ordinates.
//!
//! Every conversion validates its input first. Conversions without a direct
//! path pivot through [`Dms`].

use log::trace;

use crate::{
    utility::{dms, OrdinateMath, SECONDS_PRECISION},
    Dms, Error, Gps, OrdinateType,
};

/// How the validators decide whether a DMS/GPS field is present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldPresence {
    /// Any number is present. Only NaN counts as missing.
    #[default]
    Numeric,
    /// Zero and NaN both count as missing, so ordinates with exactly zero minutes
    /// or seconds are rejected. Kept for compatibility with older formatters.
    Truthy,
}

/// How a negative decimal ordinate is split into degrees, minutes and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NegativeSplit {
    /// Split the magnitude and carry the sign on the degrees, so `-45.5` becomes
    /// `-45° 30' 0"`. Degrees of `-0.0` mark negative ordinates under one degree.
    #[default]
    SignMagnitude,
    /// Floor the value toward negative infinity, so `-45.5` becomes `-46° 30' 0"`.
    /// Kept for compatibility with older formatters.
    Floor,
}

/// Behaviour switches for a [`Converter`]. The default fixes both known quirks.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Which DMS/GPS field values count as missing.
    pub presence: FieldPresence,
    /// How negative decimals are split into degrees, minutes and seconds.
    pub negative_split: NegativeSplit,
}

impl ConvertOptions {
    /// Options reproducing the zero-as-missing validation and floored negative
    /// split of older formatters. Seconds are still rounded to 3 decimal places
    /// rather than to whole seconds, so results are not identical to them.
    pub const fn legacy() -> ConvertOptions {
        ConvertOptions {
            presence: FieldPresence::Truthy,
            negative_split: NegativeSplit::Floor,
        }
    }
}

/// Stateless ordinate converter. The crate-root functions use
/// `Converter::default()`.
///
/// # Usage
///
/// ```
/// use ordinate_convert::{Converter, Dms, OrdinateType};
///
/// let converter = Converter::default();
/// let dms = converter.decimal_to_dms(-45.5, OrdinateType::Lat).unwrap();
/// assert_eq!(dms, Dms::new(-45.0, 30.0, 0.0));
///
/// let legacy = Converter::legacy();
/// let dms = legacy.decimal_to_dms(-45.5, OrdinateType::Lat).unwrap();
/// assert_eq!(dms, Dms::new(-46.0, 30.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub const fn new(options: ConvertOptions) -> Converter {
        Converter { options }
    }

    /// Creates a converter using [`ConvertOptions::legacy`].
    pub const fn legacy() -> Converter {
        Converter::new(ConvertOptions::legacy())
    }

    #[inline]
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Converts a decimal ordinate to [`Dms`]. Seconds are rounded to 3 decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `decimal` is NaN or outside the range of `kind`.
    pub fn decimal_to_dms(&self, decimal: f64, kind: OrdinateType) -> Result<Dms, Error> {
        self.check_decimal(decimal, kind)?;
        trace!("Converting {kind} {decimal} to DMS");

        if decimal.is_integral() {
            return Ok(Dms::new(decimal, 0., 0.));
        }

        Ok(match self.options.negative_split {
            NegativeSplit::Floor => split_floor(decimal),
            NegativeSplit::SignMagnitude => {
                let dms = split_floor(decimal.abs());
                Dms::new(dms.degrees.copysign(decimal), dms.minutes, dms.seconds)
            }
        })
    }

    /// Converts a decimal ordinate to [`Gps`], pivoting through [`Dms`] when the
    /// value has a fractional part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `decimal` is NaN or outside the range of
    /// `kind`, or if the intermediate [`Dms`] is rejected.
    pub fn decimal_to_gps(&self, decimal: f64, kind: OrdinateType) -> Result<Gps, Error> {
        self.check_decimal(decimal, kind)?;

        if decimal.is_integral() {
            return Ok(Gps::new(decimal, 0.));
        }

        let dms = self.decimal_to_dms(decimal, kind)?;
        self.dms_to_gps(&dms, kind)
    }

    /// Converts a [`Dms`] ordinate to decimal degrees. The sign of the degrees is
    /// applied to the minutes and seconds, and the degrees are truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `ord` is rejected by [`Converter::validate_dms`].
    pub fn dms_to_decimal(&self, ord: &Dms, kind: OrdinateType) -> Result<f64, Error> {
        self.check_dms(ord, kind)?;
        trace!("Converting {kind} {ord:?} to decimal");

        let signed_zero = self.options.negative_split == NegativeSplit::SignMagnitude;
        let sign = ord.degrees.sign(signed_zero);
        let minutes = ord.minutes * sign;
        let seconds = ord.seconds * sign;

        Ok(ord.degrees.trunc() + minutes / f64::from(dms::DM) + seconds / f64::from(dms::DS))
    }

    /// Converts a [`Dms`] ordinate to [`Gps`] by folding the seconds into the minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `ord` is rejected by [`Converter::validate_dms`].
    pub fn dms_to_gps(&self, ord: &Dms, kind: OrdinateType) -> Result<Gps, Error> {
        self.check_dms(ord, kind)?;
        trace!("Converting {kind} {ord:?} to GPS");

        Ok(Gps::new(ord.degrees, ord.minutes + ord.seconds / f64::from(dms::MS)))
    }

    /// Converts a [`Gps`] ordinate to decimal degrees through [`Dms`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `ord` is rejected by [`Converter::validate_gps`],
    /// or if the intermediate [`Dms`] is rejected.
    pub fn gps_to_decimal(&self, ord: &Gps, kind: OrdinateType) -> Result<f64, Error> {
        self.check_gps(ord, kind)?;

        let dms = self.gps_to_dms(ord, kind)?;
        self.dms_to_decimal(&dms, kind)
    }

    /// Converts a [`Gps`] ordinate to [`Dms`] by splitting the decimal minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `ord` is rejected by [`Converter::validate_gps`].
    pub fn gps_to_dms(&self, ord: &Gps, kind: OrdinateType) -> Result<Dms, Error> {
        self.check_gps(ord, kind)?;
        trace!("Converting {kind} {ord:?} to DMS");

        let minutes = ord.minutes.floor();
        let seconds = (ord.minutes - minutes) * f64::from(dms::MS);

        Ok(Dms::new(ord.degrees, minutes, seconds))
    }
}

// Floors each unit in turn. Only matches sign-magnitude notation for
// non-negative values.
fn split_floor(decimal: f64) -> Dms {
    let degrees = decimal.floor();
    let fractional_minutes = f64::from(dms::DM) * (decimal - degrees);
    let minutes = fractional_minutes.floor();
    let seconds = (f64::from(dms::MS) * (fractional_minutes - minutes)).round_to(SECONDS_PRECISION);

    Dms::new(degrees, minutes, seconds)
}
