//! Security header name constants and checklists.
//!
//! Header names are lowercase because the fetch layer canonicalizes response
//! header keys to lowercase before analysis.

/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";
/// X-XSS-Protection header (legacy)
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";
/// Expect-CT header (legacy)
pub const HEADER_EXPECT_CT: &str = "expect-ct";
/// Public-Key-Pins header (legacy, deprecated)
pub const HEADER_PUBLIC_KEY_PINS: &str = "public-key-pins";

/// The modern security headers every response should carry.
///
/// Declaration order is significant: findings are reported in this order.
pub const CORE_CHECKLIST: &[&str] = &[
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];

/// The core checklist plus legacy headers still seen in the wild.
pub const EXTENDED_CHECKLIST: &[&str] = &[
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
    HEADER_X_XSS_PROTECTION,
    HEADER_EXPECT_CT,
    HEADER_PUBLIC_KEY_PINS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_is_superset_of_core() {
        for name in CORE_CHECKLIST {
            assert!(
                EXTENDED_CHECKLIST.contains(name),
                "extended checklist should contain {name}"
            );
        }
    }

    #[test]
    fn test_extended_preserves_core_order() {
        // The extended checklist is the core checklist with legacy headers appended
        assert_eq!(&EXTENDED_CHECKLIST[..CORE_CHECKLIST.len()], CORE_CHECKLIST);
    }

    #[test]
    fn test_no_duplicate_entries() {
        for checklist in [CORE_CHECKLIST, EXTENDED_CHECKLIST] {
            let mut seen = std::collections::HashSet::new();
            for name in checklist {
                assert!(seen.insert(name), "duplicate checklist entry: {name}");
            }
        }
    }

    #[test]
    fn test_names_are_lowercase() {
        for name in EXTENDED_CHECKLIST {
            assert_eq!(*name, name.to_lowercase(), "checklist names must be lowercase");
        }
    }
}
