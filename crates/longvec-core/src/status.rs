use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LongVecError {
    #[error("Index out of range: {index} is not a lane of a {len}-lane vector")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Float conversion failed: lane {lane} holds {value}, which is not representable as i64")]
    FloatConversion { lane: usize, value: f64 },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, LongVecError>;

impl LongVecError {
    /// Shorthand for a lane access past the end of an `len`-lane vector.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        LongVecError::IndexOutOfRange { index, len }
    }
}

/// Checks `index` against the lane count of a vector.
#[inline]
pub fn check_lane(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LongVecError::index_out_of_range(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lane() {
        assert!(check_lane(0, 2).is_ok());
        assert!(check_lane(1, 2).is_ok());
        assert_eq!(
            check_lane(2, 2),
            Err(LongVecError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LongVecError::index_out_of_range(5, 3);
        assert!(matches!(err, LongVecError::IndexOutOfRange { index: 5, len: 3 }));
        assert_eq!(
            err.to_string(),
            "Index out of range: 5 is not a lane of a 3-lane vector"
        );

        let err = LongVecError::FloatConversion { lane: 1, value: f64::INFINITY };
        assert!(err.to_string().contains("lane 1"));

        let err = LongVecError::InvalidParameter("null pointer".into());
        assert_eq!(err.to_string(), "Invalid parameter: null pointer");
    }
}
