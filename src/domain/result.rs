//! Result type alias for the exporter

use super::errors::ExportError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use hanrei_export::domain::result::Result;
/// use hanrei_export::domain::errors::ExportError;
///
/// fn example_function() -> Result<usize> {
///     Ok(42)
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Schema("missing column: soten".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
