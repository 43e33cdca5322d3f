use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_DEVICE_ID: &str = "default_device";
pub const MAX_DEVICE_ID_LENGTH: usize = 64;

/// Device ids double as storage keys, so only a filename-safe subset is allowed.
pub fn validate_device_id(device_id: &str) -> Result<(), CoreError> {
    let valid = !device_id.is_empty()
        && device_id.len() <= MAX_DEVICE_ID_LENGTH
        && device_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(CoreError::Invalid(format!("invalid device id: {:?}", device_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_device_id() {
        assert!(validate_device_id(DEFAULT_DEVICE_ID).is_ok());
        assert!(validate_device_id("a1-B2_c3").is_ok());
        assert!(validate_device_id("").is_err());
        assert!(validate_device_id("../etc/passwd").is_err());
        assert!(validate_device_id(&"x".repeat(MAX_DEVICE_ID_LENGTH + 1)).is_err());
    }
}
