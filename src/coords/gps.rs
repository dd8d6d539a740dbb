use crate::{convert::Converter, coords::dms::Dms, Error, OrdinateType};

/// Degrees and decimal minutes representation of a single ordinate, as shown by
/// most GPS receivers. The minutes absorb the seconds as a fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gps {
    #[cfg_attr(feature = "serde", serde(alias = "deg"))]
    pub(crate) degrees: f64,
    #[cfg_attr(feature = "serde", serde(alias = "min"))]
    pub(crate) minutes: f64,
}

impl Gps {
    /// Creates a GPS ordinate without checking it.
    pub fn new(degrees: f64, minutes: f64) -> Gps {
        Self { degrees, minutes }
    }

    /// Tries to create a GPS ordinate, checking it against the range of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if the degrees are out of range, the minutes
    /// exceed 60, or either field is NaN.
    ///
    /// # Usage
    ///
    /// ```
    /// use ordinate_convert::{Gps, OrdinateType};
    ///
    /// assert!(Gps::create(-122.0, 25.1234, OrdinateType::Long).is_ok());
    /// assert!(Gps::create(-122.0, 25.1234, OrdinateType::Lat).is_err());
    /// ```
    pub fn create(degrees: f64, minutes: f64, kind: OrdinateType) -> Result<Gps, Error> {
        let gps = Gps::new(degrees, minutes);
        Converter::default().check_gps(&gps, kind)?;
        Ok(gps)
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn is_valid(&self, kind: OrdinateType) -> bool {
        Converter::default().validate_gps(self, kind)
    }

    /// Converts a decimal ordinate to [`Gps`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if the decimal is outside the range of `kind`.
    pub fn from_decimal(decimal: f64, kind: OrdinateType) -> Result<Gps, Error> {
        Converter::default().decimal_to_gps(decimal, kind)
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
    /// use ordinate_convert::{Gps, OrdinateType};
    ///
    /// let decimal = Gps::new(45.0, 30.0).to_decimal(OrdinateType::Lat).unwrap();
    /// assert_eq!(decimal, 45.5);
    /// ```
    pub fn to_decimal(&self, kind: OrdinateType) -> Result<f64, Error> {
        Converter::default().gps_to_decimal(self, kind)
    }

    /// Converts from [`Dms`] to [`Gps`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `dms` is not valid for `kind`.
    pub fn from_dms(dms: &Dms, kind: OrdinateType) -> Result<Gps, Error> {
        Converter::default().dms_to_gps(dms, kind)
    }

    /// Converts from [`Gps`] to [`Dms`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrdinate`] if `self` is not valid for `kind`.
    pub fn to_dms(&self, kind: OrdinateType) -> Result<Dms, Error> {
        Converter::default().gps_to_dms(self, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_checks_range() {
        assert!(Gps::create(90.0, 0.0, OrdinateType::Lat).is_ok());
        assert!(Gps::create(0.0, 60.0, OrdinateType::Lat).is_ok());
        assert!(Gps::create(0.0, 60.01, OrdinateType::Lat).is_err());
        assert!(Gps::create(f64::NAN, 1.0, OrdinateType::Long).is_err());
    }

    #[test]
    fn decimal_methods() {
        let gps = Gps::from_decimal(10.25, OrdinateType::Long).unwrap();
        assert_eq!(gps, Gps::new(10.0, 15.0));
        assert_eq!(gps.to_decimal(OrdinateType::Long), Ok(10.25));
        assert!(Gps::from_decimal(180.5, OrdinateType::Long).is_err());
    }

    #[test]
    fn dms_methods() {
        let gps = Gps::new(12.0, 15.5);
        let dms = gps.to_dms(OrdinateType::Long).unwrap();
        assert_eq!(dms, Dms::new(12.0, 15.0, 30.0));
        assert_eq!(Gps::from_dms(&dms, OrdinateType::Long), Ok(gps));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let gps = Gps::new(-45.0, 12.5);
        let json = serde_json::to_string(&gps).unwrap();
        assert_eq!(json, r#"{"degrees":-45.0,"minutes":12.5}"#);
        assert_eq!(serde_json::from_str::<Gps>(&json).unwrap(), gps);
    }
}
