//! Range and presence checks for the three ordinate representations.
//!
//! Each check distinguishes a missing field from an out-of-range one through
//! [`Rejection`]. The public validators collapse both into `false`, and the
//! converters into [`Error::InvalidOrdinate`].

use log::debug;

use crate::{
    convert::{Converter, FieldPresence},
    utility::dms,
    Dms, Error, Gps, OrdinateType,
};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub(crate) enum Rejection {
    #[error("{field} is missing")]
    Absent { field: &'static str },
    #[error("{field} {value} outside of valid {kind} range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        kind: OrdinateType,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} {value} exceeds {max}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

impl From<Rejection> for Error {
    fn from(value: Rejection) -> Self {
        Error::InvalidOrdinate(value.to_string())
    }
}

impl FieldPresence {
    #[allow(clippy::float_cmp)]
    fn is_present(self, value: f64) -> bool {
        match self {
            FieldPresence::Numeric => !value.is_nan(),
            FieldPresence::Truthy => !value.is_nan() && value != 0.,
        }
    }
}

fn check_degrees(field: &'static str, value: f64, kind: OrdinateType) -> Result<(), Rejection> {
    if kind.contains(value) {
        Ok(())
    } else {
        Err(Rejection::OutOfRange {
            field,
            kind,
            value,
            min: kind.min_degrees(),
            max: kind.max_degrees(),
        })
    }
}

// Only the upper bound applies to minutes and seconds.
fn check_sexagesimal(field: &'static str, value: f64) -> Result<(), Rejection> {
    let max = f64::from(dms::DM);
    if value <= max {
        Ok(())
    } else {
        Err(Rejection::TooLarge { field, value, max })
    }
}

fn logged(result: Result<(), Rejection>) -> Result<(), Rejection> {
    if let Err(rejection) = &result {
        debug!("Rejected ordinate: {rejection}");
    }
    result
}

impl Converter {
    fn check_present(&self, fields: &[(&'static str, f64)]) -> Result<(), Rejection> {
        match fields
            .iter()
            .find(|(_, value)| !self.options().presence.is_present(*value))
        {
            Some(&(field, _)) => Err(Rejection::Absent { field }),
            None => Ok(()),
        }
    }

    fn dms_fields(&self, ord: &Dms, kind: OrdinateType) -> Result<(), Rejection> {
        self.check_present(&[
            ("degrees", ord.degrees),
            ("minutes", ord.minutes),
            ("seconds", ord.seconds),
        ])?;
        check_degrees("degrees", ord.degrees, kind)?;
        check_sexagesimal("minutes", ord.minutes)?;
        check_sexagesimal("seconds", ord.seconds)
    }

    fn gps_fields(&self, ord: &Gps, kind: OrdinateType) -> Result<(), Rejection> {
        self.check_present(&[("degrees", ord.degrees), ("minutes", ord.minutes)])?;
        check_degrees("degrees", ord.degrees, kind)?;
        check_sexagesimal("minutes", ord.minutes)
    }

    // Decimal presence does not depend on the options.
    #[allow(clippy::unused_self)]
    pub(crate) fn check_decimal(&self, decimal: f64, kind: OrdinateType) -> Result<(), Rejection> {
        logged(if decimal.is_nan() {
            Err(Rejection::Absent { field: "decimal" })
        } else {
            check_degrees("decimal", decimal, kind)
        })
    }

    pub(crate) fn check_dms(&self, ord: &Dms, kind: OrdinateType) -> Result<(), Rejection> {
        logged(self.dms_fields(ord, kind))
    }

    pub(crate) fn check_gps(&self, ord: &Gps, kind: OrdinateType) -> Result<(), Rejection> {
        logged(self.gps_fields(ord, kind))
    }

    /// Returns whether `decimal` is a number within the degree range of `kind`.
    ///
    /// ```
    /// use ordinate_convert::{Converter, OrdinateType};
    ///
    /// let converter = Converter::default();
    /// assert!(!converter.validate_decimal(91.0, OrdinateType::Lat));
    /// assert!(converter.validate_decimal(91.0, OrdinateType::Long));
    /// ```
    pub fn validate_decimal(&self, decimal: f64, kind: OrdinateType) -> bool {
        self.check_decimal(decimal, kind).is_ok()
    }

    /// Returns whether all fields of `ord` are present, its degrees lie within the
    /// range of `kind`, and its minutes and seconds do not exceed 60. Negative
    /// minutes and seconds are not rejected.
    pub fn validate_dms(&self, ord: &Dms, kind: OrdinateType) -> bool {
        self.check_dms(ord, kind).is_ok()
    }

    /// Returns whether both fields of `ord` are present, its degrees lie within the
    /// range of `kind`, and its minutes do not exceed 60.
    pub fn validate_gps(&self, ord: &Gps, kind: OrdinateType) -> bool {
        self.check_gps(ord, kind).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertOptions;

    const LAT: OrdinateType = OrdinateType::Lat;
    const LONG: OrdinateType = OrdinateType::Long;

    #[test]
    fn decimal_bounds() {
        let conv = Converter::default();
        assert!(!conv.validate_decimal(91.0, LAT));
        assert!(conv.validate_decimal(91.0, LONG));
        assert!(conv.validate_decimal(-180.0, LONG));
        assert!(!conv.validate_decimal(-181.0, LONG));
        assert!(conv.validate_decimal(-90.0, LAT));
        assert!(!conv.validate_decimal(f64::NAN, LONG));
        assert!(!conv.validate_decimal(f64::NEG_INFINITY, LONG));
    }

    #[test]
    fn decimal_is_the_same_in_legacy_mode() {
        let conv = Converter::legacy();
        assert!(conv.validate_decimal(0.0, LAT));
        assert!(!conv.validate_decimal(91.0, LAT));
    }

    #[test]
    fn dms_zero_fields_accepted_by_default() {
        let conv = Converter::default();
        assert!(conv.validate_dms(&Dms::new(45.0, 30.0, 0.0), LAT));
        assert!(conv.validate_dms(&Dms::new(0.0, 0.0, 0.0), LAT));
    }

    #[test]
    fn dms_zero_fields_rejected_in_legacy_mode() {
        let conv = Converter::new(ConvertOptions {
            presence: FieldPresence::Truthy,
            ..ConvertOptions::default()
        });
        assert!(!conv.validate_dms(&Dms::new(45.0, 30.0, 0.0), LAT));
        assert!(!conv.validate_dms(&Dms::new(0.0, 30.0, 10.0), LAT));
        assert!(conv.validate_dms(&Dms::new(45.0, 30.0, 1.0), LAT));
    }

    #[test]
    fn dms_bounds() {
        let conv = Converter::default();
        assert!(conv.validate_dms(&Dms::new(-180.0, 60.0, 60.0), LONG));
        assert!(!conv.validate_dms(&Dms::new(-91.0, 1.0, 1.0), LAT));
        assert!(!conv.validate_dms(&Dms::new(10.0, 61.0, 1.0), LAT));
        assert!(!conv.validate_dms(&Dms::new(10.0, 1.0, 60.5), LAT));
        assert!(!conv.validate_dms(&Dms::new(10.0, f64::NAN, 1.0), LAT));
    }

    #[test]
    fn dms_negative_minutes_not_rejected() {
        let conv = Converter::default();
        assert!(conv.validate_dms(&Dms::new(10.0, -5.0, -70.0), LAT));
    }

    #[test]
    fn gps_bounds() {
        let conv = Converter::default();
        assert!(conv.validate_gps(&Gps::new(45.0, 0.0), LAT));
        assert!(conv.validate_gps(&Gps::new(180.0, 59.999), LONG));
        assert!(!conv.validate_gps(&Gps::new(180.5, 1.0), LONG));
        assert!(!conv.validate_gps(&Gps::new(1.0, 60.001), LONG));
        assert!(!Converter::legacy().validate_gps(&Gps::new(45.0, 0.0), LAT));
    }

    #[test]
    fn rejections_are_distinguished() {
        let conv = Converter::default();
        assert_eq!(
            conv.check_dms(&Dms::new(10.0, 5.0, f64::NAN), LAT),
            Err(Rejection::Absent { field: "seconds" })
        );
        assert_eq!(
            conv.check_gps(&Gps::new(95.0, 5.0), LAT),
            Err(Rejection::OutOfRange {
                field: "degrees",
                kind: LAT,
                value: 95.0,
                min: -90.0,
                max: 90.0,
            })
        );
        assert_eq!(
            conv.check_gps(&Gps::new(5.0, 75.0), LAT),
            Err(Rejection::TooLarge { field: "minutes", value: 75.0, max: 60.0 })
        );
    }

    #[test]
    fn rejection_is_an_error_source() {
        let rejection: Box<dyn std::error::Error> = Box::new(Rejection::Absent { field: "minutes" });
        assert_eq!(rejection.to_string(), "minutes is missing");
        assert_eq!(
            Error::from(Rejection::Absent { field: "minutes" }),
            Error::InvalidOrdinate("minutes is missing".to_string())
        );
    }

    #[test]
    fn rejection_message() {
        let err = Error::from(Rejection::OutOfRange {
            field: "decimal",
            kind: LAT,
            value: 200.0,
            min: -90.0,
            max: 90.0,
        });
        assert_eq!(
            err.to_string(),
            "Ordinate is not valid: decimal 200 outside of valid lat range [-90, 90]"
        );
    }
}
