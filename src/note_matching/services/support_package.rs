/// Structured form of a vendor support-package identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportPackageInfo {
    /// Three-character numeric release, preserved as-is ("750", not 750)
    pub release: String,
    /// Support-package level with the leading zero stripped ("05" -> 5)
    pub sp_level: u32,
    /// Normalized component code ("SAPBASIS" -> "SAP_BASIS")
    pub component: String,
}

/// Parses a vendor support-package string like `SAPK-75005INSAPBASIS`
///
/// The expected pattern is `SAPK-<3-digit release><2-digit sp level>IN<component code>`
/// where the component code is `[A-Z0-9_]+`. Component codes starting with
/// the literal prefix `SAP` are normalized to `SAP_` (`SAPBASIS` ->
/// `SAP_BASIS`, `SAPHR` -> `SAP_HR`); other codes pass through unchanged.
///
/// # Returns
/// `Some(SupportPackageInfo)` on a full match, `None` for anything else.
/// Never panics; the caller decides the fallback for unparseable input.
///
/// # Examples
/// ```
/// use sapnote_check::note_matching::services::parse_support_package;
///
/// let info = parse_support_package("SAPK-75005INSAPBASIS").unwrap();
/// assert_eq!(info.release, "750");
/// assert_eq!(info.sp_level, 5);
/// assert_eq!(info.component, "SAP_BASIS");
///
/// assert!(parse_support_package("garbage").is_none());
/// ```
pub fn parse_support_package(raw: &str) -> Option<SupportPackageInfo> {
    let rest = raw.strip_prefix("SAPK-")?;

    // Five digits: three for the release, two for the SP level
    let (digits, rest) = rest.split_at_checked(5)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let code = rest.strip_prefix("IN")?;
    if code.is_empty()
        || !code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
    {
        return None;
    }

    let release = digits[..3].to_string();
    let sp_level: u32 = digits[3..].parse().ok()?;

    let component = match code.strip_prefix("SAP") {
        Some(suffix) => format!("SAP_{}", suffix),
        None => code.to_string(),
    };

    Some(SupportPackageInfo {
        release,
        sp_level,
        component,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basis_package() {
        let info = parse_support_package("SAPK-75005INSAPBASIS").unwrap();
        assert_eq!(info.release, "750");
        assert_eq!(info.sp_level, 5);
        assert_eq!(info.component, "SAP_BASIS");
    }

    #[test]
    fn test_parse_hr_package() {
        let info = parse_support_package("SAPK-61716INSAPHR").unwrap();
        assert_eq!(info.release, "617");
        assert_eq!(info.sp_level, 16);
        assert_eq!(info.component, "SAP_HR");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_support_package("garbage").is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_support_package("").is_none());
    }

    #[test]
    fn test_parse_leading_zero_sp_level_stripped() {
        let info = parse_support_package("SAPK-75001INSAPBASIS").unwrap();
        assert_eq!(info.sp_level, 1);
    }

    #[test]
    fn test_parse_release_preserved_as_string() {
        let info = parse_support_package("SAPK-01005INSAPBASIS").unwrap();
        assert_eq!(info.release, "010");
    }

    #[test]
    fn test_parse_non_sap_component_passes_through() {
        let info = parse_support_package("SAPK-75005INST_PI").unwrap();
        assert_eq!(info.component, "ST_PI");
    }

    #[test]
    fn test_parse_component_with_digits() {
        let info = parse_support_package("SAPK-10405INS4CORE").unwrap();
        assert_eq!(info.release, "104");
        assert_eq!(info.sp_level, 5);
        assert_eq!(info.component, "S4CORE");
    }

    #[test]
    fn test_parse_rejects_lowercase_component() {
        assert!(parse_support_package("SAPK-75005INsapbasis").is_none());
    }

    #[test]
    fn test_parse_rejects_short_digit_block() {
        assert!(parse_support_package("SAPK-7500INSAPBASIS").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_in_separator() {
        assert!(parse_support_package("SAPK-75005SAPBASIS").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_component() {
        assert!(parse_support_package("SAPK-75005IN").is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        assert!(parse_support_package("SAPKB-75005INSAPBASIS").is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_support_package("SAPK-75005INSAPBASIS");
        let b = parse_support_package("SAPK-75005INSAPBASIS");
        assert_eq!(a, b);
    }
}
