//! Result type alias for the connector
//!
//! This module provides a convenient Result type alias that uses
//! [`ConnectorError`] as the error type.

use super::errors::ConnectorError;

/// Result type alias for connector operations
///
/// # Examples
///
/// ```
/// use skubridge::domain::result::Result;
/// use skubridge::domain::errors::ConnectorError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ConnectorError::Configuration("missing value".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ConnectorError>;
