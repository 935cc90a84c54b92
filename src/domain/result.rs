//! Result type alias for kanilog

use super::errors::KanilogError;

/// Result type alias for kanilog operations
///
/// # Examples
///
/// ```
/// use kanilog::domain::result::Result;
/// use kanilog::domain::errors::KanilogError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(KanilogError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KanilogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(KanilogError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
