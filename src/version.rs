//! API version handling and path-prefix resolution.
//!
//! Shopify releases new Admin API versions quarterly (January, April, July,
//! October). The version string chosen at client construction determines the
//! URL path prefix every request is sent under.

/// The sentinel version string for the unstable (development) API.
pub const UNSTABLE_API_VERSION: &str = "unstable";

/// The path prefix used when no valid API version is configured.
pub const DEFAULT_API_PATH_PREFIX: &str = "admin";

/// Resolves the URL path prefix for the given API version string.
///
/// An empty string resolves to the default prefix. A version matching the
/// quarterly `YYYY-MM` release format (months 01, 04, 07 or 10) or the
/// `unstable` sentinel resolves to `admin/api/<version>`. Anything else is
/// ignored and the default prefix is kept; a warning is logged but
/// construction never fails on a bad version string.
///
/// # Example
///
/// ```rust
/// use shopify_admin::version::api_path_prefix;
///
/// assert_eq!(api_path_prefix("2024-10"), "admin/api/2024-10");
/// assert_eq!(api_path_prefix("unstable"), "admin/api/unstable");
/// assert_eq!(api_path_prefix(""), "admin");
/// assert_eq!(api_path_prefix("not-a-version"), "admin");
/// ```
#[must_use]
pub fn api_path_prefix(version: &str) -> String {
    if version.is_empty() {
        return DEFAULT_API_PATH_PREFIX.to_string();
    }

    if version == UNSTABLE_API_VERSION || is_valid_version_format(version) {
        return format!("admin/api/{version}");
    }

    tracing::warn!(
        version,
        "ignoring invalid API version, using default path prefix"
    );
    DEFAULT_API_PATH_PREFIX.to_string()
}

/// Checks whether a string matches the quarterly `YYYY-MM` release format.
fn is_valid_version_format(s: &str) -> bool {
    // Format: YYYY-MM
    if s.len() != 7 {
        return false;
    }

    let Some((year, month)) = s.split_once('-') else {
        return false;
    };

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // Shopify only releases in January, April, July and October
    matches!(month, "01" | "04" | "07" | "10")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_version_resolves_to_default_prefix() {
        assert_eq!(api_path_prefix(""), "admin");
    }

    #[test]
    fn test_quarterly_versions_resolve_to_versioned_prefix() {
        assert_eq!(api_path_prefix("2024-01"), "admin/api/2024-01");
        assert_eq!(api_path_prefix("2024-04"), "admin/api/2024-04");
        assert_eq!(api_path_prefix("2024-07"), "admin/api/2024-07");
        assert_eq!(api_path_prefix("2024-10"), "admin/api/2024-10");
        assert_eq!(api_path_prefix("2026-01"), "admin/api/2026-01");
    }

    #[test]
    fn test_unstable_version_resolves_to_versioned_prefix() {
        assert_eq!(api_path_prefix("unstable"), "admin/api/unstable");
    }

    #[test]
    fn test_invalid_versions_fall_back_to_default_prefix() {
        assert_eq!(api_path_prefix("9999-99b"), "admin");
        assert_eq!(api_path_prefix("2024"), "admin");
        assert_eq!(api_path_prefix("2024-1"), "admin");
        assert_eq!(api_path_prefix("2024-02"), "admin"); // February is not a release month
        assert_eq!(api_path_prefix("24-01"), "admin");
        assert_eq!(api_path_prefix("abcd-01"), "admin");
        assert_eq!(api_path_prefix("UNSTABLE"), "admin");
    }

    #[test]
    fn test_version_format_check() {
        assert!(is_valid_version_format("2025-10"));
        assert!(!is_valid_version_format("2025-10 "));
        assert!(!is_valid_version_format("2025_10"));
        assert!(!is_valid_version_format(""));
    }
}
