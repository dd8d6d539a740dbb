pub mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

/// Decimal places kept on seconds produced from a decimal ordinate.
pub const SECONDS_PRECISION: i32 = 3;

pub(crate) trait OrdinateMath {
    fn is_integral(&self) -> bool;
    fn round_to(&self, places: i32) -> Self;
    fn sign(&self, signed_zero: bool) -> Self;
}

impl OrdinateMath for f64 {
    /// True for finite values without a fractional part.
    #[allow(clippy::float_cmp)]
    fn is_integral(&self) -> bool {
        self.fract() == 0.0
    }

    fn round_to(&self, places: i32) -> f64 {
        let scale = 10_f64.powi(places);
        (*self * scale).round() / scale
    }

    /// `-1` for negative values, `1` otherwise. With `signed_zero`, a zero
    /// carrying the sign bit (`-0.0`) also counts as negative.
    fn sign(&self, signed_zero: bool) -> f64 {
        let negative = if signed_zero {
            self.is_sign_negative()
        } else {
            *self < 0.
        };

        if negative { -1. } else { 1. }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral() {
        assert!(45_f64.is_integral());
        assert!((-180_f64).is_integral());
        assert!(0_f64.is_integral());
        assert!(!45.5_f64.is_integral());
        assert!(!(-0.25_f64).is_integral());
        assert!(!f64::NAN.is_integral());
    }

    #[test]
    fn rounding() {
        assert_eq!(53.999_88_f64.round_to(3), 54.0);
        assert_eq!(12.345_4_f64.round_to(3), 12.345);
        assert_eq!(12.345_6_f64.round_to(3), 12.346);
        assert_eq!(53.998_8_f64.round_to(3), 53.999);
        assert_eq!(12.6_f64.round_to(0), 13.0);
    }

    #[test]
    fn signs() {
        assert_eq!((-3_f64).sign(false), -1.);
        assert_eq!(3_f64.sign(false), 1.);
        assert_eq!((-0_f64).sign(false), 1.);
        assert_eq!((-0_f64).sign(true), -1.);
        assert_eq!(0_f64.sign(true), 1.);
    }
}
