use crate::{convert::Converter, coords::gps::Gps, Error, OrdinateType};

/// Degrees, minutes and seconds representation of a single ordinate. The sign
/// of the ordinate is carried on `degrees`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    #[cfg_attr(feature = "serde", serde(alias = "deg"))]
    pub(crate) degrees: f64,
    #[cfg_attr(feature = "serde", serde(alias = "min"))]
    pub(crate) minutes: f64,
    #[cfg_attr(feature = "serde", serde(alias = "sec"))]
    pub(crate) seconds: f64,
}

impl Dms {
    /// Creates a DMS ordinate without checking it. Use [`Dms::create`] or
    /// [`Dms::is_valid`] when the values come from outside.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Dms {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Tries to create a DMS ordinate, checking it against the range of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if the degrees are out of range, minutes or
    /// seconds exceed 60, or any field is NaN.
    ///
    /// # Usage
    ///
    /// ```
    /// use ordinate_convert::{Dms, OrdinateType};
    ///
    /// let dms = Dms::create(40.0, 44.0, 54.0, OrdinateType::Lat);
    /// assert!(dms.is_ok());
    ///
    /// let too_far_north = Dms::create(91.0, 0.0, 0.0, OrdinateType::Lat);
    /// assert!(too_far_north.is_err());
    ///
    /// let too_many_seconds = Dms::create(10.0, 0.0, 61.0, OrdinateType::Long);
    /// assert!(too_many_seconds.is_err());
    /// ```
    pub fn create(degrees: f64, minutes: f64, seconds: f64, kind: OrdinateType) -> Result<Dms, Error> {
        let dms = Dms::new(degrees, minutes, seconds);
        Converter::default().check_dms(&dms, kind)?;
        Ok(dms)
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    #[inline]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn is_valid(&self, kind: OrdinateType) -> bool {
        Converter::default().validate_dms(self, kind)
    }

    /// Converts a decimal ordinate to [`Dms`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if the decimal is outside the range of `kind`.
    ///
    /// # Usage
    ///
    /// ```
    /// use ordinate_convert::{Dms, OrdinateType};
    ///
    /// let dms = Dms::from_decimal(-73.5, OrdinateType::Long).unwrap();
    /// assert_eq!(dms, Dms::new(-73.0, 30.0, 0.0));
    /// ```
    pub fn from_decimal(decimal: f64, kind: OrdinateType) -> Result<Dms, Error> {
        Converter::default().decimal_to_dms(decimal, kind)
    }

    /// Converts to a decimal ordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `self` is not valid for `kind`.
    ///
    /// # Usage
    ///
    /// ```
    /// use ordinate_convert::{Dms, OrdinateType};
    ///
    /// let dms = Dms::new(40.0, 44.0, 54.0);
    /// let decimal = dms.to_decimal(OrdinateType::Lat).unwrap();
    ///
    /// assert!((decimal - 40.748333).abs() < 1e-6);
    /// ```
    pub fn to_decimal(&self, kind: OrdinateType) -> Result<f64, Error> {
        Converter::default().dms_to_decimal(self, kind)
    }

    /// Converts from [`Gps`] to [`Dms`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `gps` is not valid for `kind`.
    pub fn from_gps(gps: &Gps, kind: OrdinateType) -> Result<Dms, Error> {
        Converter::default().gps_to_dms(gps, kind)
    }

    /// Converts from [`Dms`] to [`Gps`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `self` is not valid for `kind`.
    ///
    /// # Usage
    ///
    /// ```
    /// use ordinate_convert::{Dms, Gps, OrdinateType};
    ///
    /// let gps = Dms::new(12.0, 15.0, 30.0).to_gps(OrdinateType::Long).unwrap();
    /// assert_eq!(gps, Gps::new(12.0, 15.5));
    /// ```
    pub fn to_gps(&self, kind: OrdinateType) -> Result<Gps, Error> {
        Converter::default().dms_to_gps(self, kind)
    }
}
