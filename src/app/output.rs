//! Rendering of the stdout result and exit code policy.

use crate::config::{ExitPolicy, EXIT_FAILURE, EXIT_USAGE};
use crate::error_handling::ErrorKind;
use crate::geoip::IpInfo;

/// Pretty-prints a resolved record with two-space indentation.
pub fn render_success(info: &IpInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}

/// Renders a soft failure as a compact `{"error":"..."}` object.
pub fn render_error(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Maps the outcome of a run to a process exit code.
///
/// `failure` is `None` on success.
pub fn exit_code(policy: ExitPolicy, failure: Option<ErrorKind>) -> i32 {
    match (policy, failure) {
        (_, None) => 0,
        (ExitPolicy::Compatible, Some(_)) => 0,
        (ExitPolicy::Strict, Some(ErrorKind::Usage)) => EXIT_USAGE,
        (ExitPolicy::Strict, Some(_)) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_render_error_is_compact() {
        assert_eq!(
            render_error("Usage: ./CheckIP <ip-address>"),
            r#"{"error":"Usage: ./CheckIP <ip-address>"}"#
        );
    }

    #[test]
    fn test_render_error_escapes_quotes() {
        assert_eq!(
            render_error(r#"bad "input""#),
            r#"{"error":"bad \"input\""}"#
        );
    }

    #[test]
    fn test_render_success_uses_two_space_indent() {
        let info = IpInfo {
            query: "8.8.8.8".into(),
            country: "United States".into(),
            region_name: "Virginia".into(),
            city: "Ashburn".into(),
            isp: "Google LLC".into(),
            org: "Google Public DNS".into(),
            asn: "AS15169 Google LLC".into(),
            timezone: "America/New_York".into(),
            lat: 39.03,
            lon: -77.5,
            status: "success".into(),
            message: String::new(),
            last_updated: 1_700_000_000,
        };
        let out = render_success(&info).unwrap();
        assert!(out.starts_with("{\n  \"query\": \"8.8.8.8\",\n  \"country\""));
        assert!(out.contains("\n  \"as\": \"AS15169 Google LLC\","));
        assert!(out.ends_with("\n  \"lastUpdated\": 1700000000\n}"));
    }

    #[test]
    fn test_compatible_policy_always_exits_zero() {
        assert_eq!(exit_code(ExitPolicy::Compatible, None), 0);
        for kind in ErrorKind::iter() {
            assert_eq!(exit_code(ExitPolicy::Compatible, Some(kind)), 0, "{kind:?}");
        }
    }

    #[test]
    fn test_strict_policy_exit_codes() {
        assert_eq!(exit_code(ExitPolicy::Strict, None), 0);
        assert_eq!(exit_code(ExitPolicy::Strict, Some(ErrorKind::Usage)), 2);
        assert_eq!(exit_code(ExitPolicy::Strict, Some(ErrorKind::NonRoutable)), 1);
        assert_eq!(
            exit_code(ExitPolicy::Strict, Some(ErrorKind::ServiceFailure)),
            1
        );
        assert_eq!(
            exit_code(ExitPolicy::Strict, Some(ErrorKind::RequestFailure)),
            1
        );
    }
}
