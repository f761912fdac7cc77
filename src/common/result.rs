use crate::common::error::VimodError;

/// Result alias used throughout the crate.
///
/// # Examples
///
/// ```
/// use vimod::common::result::VimodResult;
///
/// fn example_function() -> VimodResult<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type VimodResult<T> = Result<T, VimodError>;
