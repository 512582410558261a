//! Input validation functions
//!
//! Applied when weight history enters the system. The statistics
//! derivation itself accepts any series and never fails.

use crate::errors::ValidationError;
use crate::models::WeightSample;

/// Lowest plausible body weight in kg
pub const MIN_WEIGHT_KG: f64 = 20.0;

/// Highest plausible body weight in kg
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), ValidationError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(ValidationError::NotFinite);
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(ValidationError::OutOfRange {
            value: weight_kg,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        });
    }
    Ok(())
}

/// Validate a sample label
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::EmptyLabel);
    }
    Ok(())
}

/// Validate a weight sample before it joins a series
pub fn validate_weight_sample(sample: &WeightSample) -> Result<(), ValidationError> {
    validate_label(&sample.label)?;
    validate_weight(sample.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
    }

    #[test]
    fn test_invalid_weight() {
        assert!(matches!(
            validate_weight(19.9),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_weight(500.1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(validate_weight(f64::NAN), Err(ValidationError::NotFinite));
        assert_eq!(validate_weight(f64::INFINITY), Err(ValidationError::NotFinite));
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(validate_label("  "), Err(ValidationError::EmptyLabel));
        assert!(validate_label("1").is_ok());
    }

    #[test]
    fn test_validate_weight_sample() {
        assert!(validate_weight_sample(&WeightSample::new("3", 72.5)).is_ok());
        assert_eq!(
            validate_weight_sample(&WeightSample::new("", 72.5)),
            Err(ValidationError::EmptyLabel)
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = validate_weight(600.0).unwrap_err();
        assert_eq!(err.to_string(), "Weight must be between 20 and 500 kg, got 600");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every weight inside the plausible range is accepted
        #[test]
        fn prop_in_range_weights_accepted(weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG) {
            prop_assert!(validate_weight(weight).is_ok());
        }
    }
}
