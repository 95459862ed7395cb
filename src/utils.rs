use crate::errors::ArborError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Format fractions as percentages with two decimals, comma separated.
pub fn fmt_vec_output(v: &[f64]) -> String {
    v.iter()
        .map(|x| format!("{:.2}%", x * 100.0))
        .collect::<Vec<_>>()
        .join(", ")
}

// Validation
/// Check that `value` lies strictly between 0 and 1.
pub fn validate_ratio_parameter(value: f64, parameter: &str) -> Result<(), ArborError> {
    if value.is_nan() || value <= 0.0 || value >= 1.0 {
        Err(ArborError::InvalidParameter(
            parameter.to_string(),
            "real value strictly between 0 and 1".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_min_usize_parameter(value: usize, min: usize, parameter: &str) -> Result<(), ArborError> {
    if value < min {
        Err(ArborError::InvalidParameter(
            parameter.to_string(),
            format!("integer of at least {}", min),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_finite_float_parameter(value: f64, parameter: &str) -> Result<(), ArborError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArborError::InvalidParameter(
            parameter.to_string(),
            "finite real value".to_string(),
            value.to_string(),
        ))
    }
}
