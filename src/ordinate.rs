use std::{fmt::Display, str::FromStr};

use crate::{utility::dms, Error, ThisOrThat};

/// Which half of a coordinate pair an ordinate belongs to. Determines the
/// valid degree range: `[-90, 90]` for latitude and `[-180, 180]` for longitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrdinateType {
    #[cfg_attr(feature = "serde", serde(rename = "lat", alias = "latitude"))]
    Lat,
    #[cfg_attr(feature = "serde", serde(rename = "long", alias = "lon", alias = "lng", alias = "longitude"))]
    Long,
}

impl OrdinateType {
    #[inline]
    pub fn is_lat(&self) -> bool {
        matches!(self, OrdinateType::Lat)
    }

    /// Upper bound of the degree range.
    ///
    /// ```
    /// use ordinate_convert::OrdinateType;
    ///
    /// assert_eq!(OrdinateType::Lat.max_degrees(), 90.0);
    /// assert_eq!(OrdinateType::Long.max_degrees(), 180.0);
    /// ```
    pub fn max_degrees(&self) -> f64 {
        f64::from(self.is_lat().ternary(dms::QD, dms::HD))
    }

    /// Lower bound of the degree range.
    pub fn min_degrees(&self) -> f64 {
        -self.max_degrees()
    }

    /// Returns whether `degrees` lies within the inclusive range for this type.
    /// NaN is never contained.
    ///
    /// ```
    /// use ordinate_convert::OrdinateType;
    ///
    /// assert!(OrdinateType::Long.contains(-180.0));
    /// assert!(!OrdinateType::Lat.contains(91.0));
    /// assert!(!OrdinateType::Lat.contains(f64::NAN));
    /// ```
    pub fn contains(&self, degrees: f64) -> bool {
        (self.min_degrees()..=self.max_degrees()).contains(&degrees)
    }
}

impl FromStr for OrdinateType {
    type Err = Error;

    /// Parses the ordinate type name. Accepts `lat`/`latitude` and
    /// `long`/`lon`/`lng`/`longitude`, ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(OrdinateType::Lat),
            "long" | "lon" | "lng" | "longitude" => Ok(OrdinateType::Long),
            _ => Err(Error::InvalidOrdinateType(value.to_string())),
        }
    }
}

impl Display for OrdinateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.is_lat().ternary("lat", "long"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("lat".parse::<OrdinateType>(), Ok(OrdinateType::Lat));
        assert_eq!("Latitude".parse::<OrdinateType>(), Ok(OrdinateType::Lat));
        assert_eq!("long".parse::<OrdinateType>(), Ok(OrdinateType::Long));
        assert_eq!(" LNG ".parse::<OrdinateType>(), Ok(OrdinateType::Long));
        assert_eq!("lon".parse::<OrdinateType>(), Ok(OrdinateType::Long));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "altitude".parse::<OrdinateType>(),
            Err(Error::InvalidOrdinateType("altitude".to_string()))
        );
        assert!("".parse::<OrdinateType>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for kind in [OrdinateType::Lat, OrdinateType::Long] {
            assert_eq!(kind.to_string().parse::<OrdinateType>(), Ok(kind));
        }
    }

    #[test]
    fn ranges() {
        assert_eq!(OrdinateType::Lat.min_degrees(), -90.0);
        assert_eq!(OrdinateType::Long.min_degrees(), -180.0);
        assert!(OrdinateType::Lat.contains(90.0));
        assert!(OrdinateType::Lat.contains(-90.0));
        assert!(!OrdinateType::Lat.contains(-90.000_001));
        assert!(!OrdinateType::Long.contains(f64::INFINITY));
    }
}
