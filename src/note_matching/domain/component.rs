use crate::shared::Result;

/// Maximum length for component names (matches the upstream catalog schema)
const MAX_COMPONENT_NAME_LENGTH: usize = 255;

/// Maximum length for release strings (matches the upstream catalog schema)
const MAX_RELEASE_LENGTH: usize = 100;

/// NewType wrapper for an SAP software component name with validation
///
/// Component names are vendor codes such as "SAP_BASIS", "SAP_HR" or
/// "S4CORE". Matching against validity rules is exact and case-sensitive,
/// so the value is preserved byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }

        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            anyhow::bail!(
                "Component name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_COMPONENT_NAME_LENGTH
            );
        }

        // Vendor component codes are alphanumeric with underscores, hyphens
        // and slashes (namespaced add-ons like "/SAPSLL/..." use slashes)
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '/')
        {
            anyhow::bail!(
                "Component name contains invalid characters. Only alphanumeric, underscores, hyphens, and slashes are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a release string with validation
///
/// Releases are kept as strings, never parsed to integers: "750" and
/// "0750" are different releases, and leading digits are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseId(String);

impl ReleaseId {
    pub fn new(release: String) -> Result<Self> {
        if release.is_empty() {
            anyhow::bail!("Release cannot be empty");
        }

        if release.len() > MAX_RELEASE_LENGTH {
            anyhow::bail!(
                "Release is too long ({} bytes). Maximum allowed: {} bytes",
                release.len(),
                MAX_RELEASE_LENGTH
            );
        }

        if !release
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
        {
            anyhow::bail!(
                "Release contains invalid characters. Only alphanumeric, dots, and hyphens are allowed."
            );
        }

        Ok(Self(release))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An installed software component of a client system
///
/// Invariant: `sp_level` is always resolved before matching, either parsed
/// from the raw `support_package` string or provided explicitly. The raw
/// string is retained for audit only and plays no part in matching.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledComponent {
    name: ComponentName,
    release: ReleaseId,
    support_package: Option<String>,
    sp_level: u32,
}

impl InstalledComponent {
    pub fn new(name: String, release: String, sp_level: u32) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            release: ReleaseId::new(release)?,
            support_package: None,
            sp_level,
        })
    }

    /// Attaches the raw vendor support-package string for audit purposes
    pub fn with_support_package(mut self, raw: String) -> Self {
        self.support_package = Some(raw);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn release(&self) -> &str {
        self.release.as_str()
    }

    pub fn support_package(&self) -> Option<&str> {
        self.support_package.as_deref()
    }

    pub fn sp_level(&self) -> u32 {
        self.sp_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_new_valid() {
        let name = ComponentName::new("SAP_BASIS".to_string()).unwrap();
        assert_eq!(name.as_str(), "SAP_BASIS");
    }

    #[test]
    fn test_component_name_new_empty() {
        let result = ComponentName::new("".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_component_name_namespaced() {
        let name = ComponentName::new("/SAPSLL/LEGAL".to_string()).unwrap();
        assert_eq!(name.as_str(), "/SAPSLL/LEGAL");
    }

    #[test]
    fn test_component_name_invalid_characters() {
        let result = ComponentName::new("SAP BASIS".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_release_new_valid() {
        let release = ReleaseId::new("750".to_string()).unwrap();
        assert_eq!(release.as_str(), "750");
    }

    #[test]
    fn test_release_preserves_leading_zero() {
        let release = ReleaseId::new("0750".to_string()).unwrap();
        assert_eq!(release.as_str(), "0750");
        assert_ne!(release, ReleaseId::new("750".to_string()).unwrap());
    }

    #[test]
    fn test_release_new_empty() {
        let result = ReleaseId::new("".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_installed_component_new_valid() {
        let component =
            InstalledComponent::new("SAP_BASIS".to_string(), "750".to_string(), 5).unwrap();
        assert_eq!(component.name(), "SAP_BASIS");
        assert_eq!(component.release(), "750");
        assert_eq!(component.sp_level(), 5);
        assert_eq!(component.support_package(), None);
    }

    #[test]
    fn test_installed_component_with_support_package() {
        let component = InstalledComponent::new("SAP_BASIS".to_string(), "750".to_string(), 5)
            .unwrap()
            .with_support_package("SAPK-75005INSAPBASIS".to_string());
        assert_eq!(component.support_package(), Some("SAPK-75005INSAPBASIS"));
    }

    #[test]
    fn test_installed_component_empty_name() {
        let result = InstalledComponent::new("".to_string(), "750".to_string(), 5);
        assert!(result.is_err());
    }
}
