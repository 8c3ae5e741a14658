//! dB/linear conversions shared by the cascade math

/// Convert a value in dB to its linear equivalent
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert a linear value to dB
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

/// Round to 2 decimal places, the reporting precision for dB quantities
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_linear_identity_points() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
        assert!((db_to_linear(10.0) - 10.0).abs() < 1e-12);
        assert!((db_to_linear(-10.0) - 0.1).abs() < 1e-12);
        assert!((linear_to_db(1.0)).abs() < 1e-12);
        assert!((linear_to_db(100.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        for db in [-7.3, -0.5, 0.0, 3.0, 19.5] {
            assert!((linear_to_db(db_to_linear(db)) - db).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.4999), 3.5);
        assert_eq!(round2(-1.234), -1.23);
        assert_eq!(round2(2.0), 2.0);
    }
}
