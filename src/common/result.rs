use crate::common::error::BootstrapError;

/// クレート全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use bootstrap_manifest::common::result::BootstrapResult;
/// use bootstrap_manifest::common::error::BootstrapError;
///
/// fn example_with_error() -> BootstrapResult<()> {
///     Err(BootstrapError::config_error("exclusion list missing", None))
/// }
///
/// assert!(example_with_error().is_err());
/// ```
pub type BootstrapResult<T> = Result<T, BootstrapError>;
