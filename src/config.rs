use std::fmt;

/// Host version the expansion targets, as `major.minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
}

/// First host version with a native public declaration
pub const PUBLIC_KEYWORD_SINCE: HostVersion = HostVersion::new(1, 11);

impl HostVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a `major.minor` string, e.g. `1.11`
    pub fn parse(text: &str) -> Option<Self> {
        let (major, minor) = text.split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Whether this host can express a public declaration natively
    pub fn supports_public_keyword(&self) -> bool {
        *self >= PUBLIC_KEYWORD_SINCE
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host_version: HostVersion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_version: PUBLIC_KEYWORD_SINCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(HostVersion::new(1, 11).supports_public_keyword());
        assert!(HostVersion::new(1, 12).supports_public_keyword());
        assert!(HostVersion::new(2, 0).supports_public_keyword());
        assert!(!HostVersion::new(1, 10).supports_public_keyword());
        assert!(!HostVersion::new(0, 7).supports_public_keyword());
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!(HostVersion::parse("1.11"), Some(HostVersion::new(1, 11)));
        assert_eq!(HostVersion::parse("10.2"), Some(HostVersion::new(10, 2)));
        assert_eq!(HostVersion::parse("1"), None);
        assert_eq!(HostVersion::parse("1.x"), None);
        assert_eq!(HostVersion::parse(""), None);
    }
}
