//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// The version is part of every request path:
/// `https://{shop}/admin/api/{version}/{resource}.json`. Shopify releases a
/// version each quarter; `Custom` carries any well-formed version this crate
/// does not name, and `Unstable` targets the preview API.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2020-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2020_07);
/// assert_eq!(version.to_string(), "2020-07");
/// assert_eq!(ApiVersion::latest(), ApiVersion::V2020_10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2019-07 (July 2019)
    V2019_07,
    /// API version 2019-10 (October 2019)
    V2019_10,
    /// API version 2020-01 (January 2020)
    V2020_01,
    /// API version 2020-04 (April 2020)
    V2020_04,
    /// API version 2020-07 (July 2020)
    V2020_07,
    /// API version 2020-10 (October 2020)
    V2020_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for versions not listed above.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest version this crate names.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2020_10
    }

    /// Returns `true` for the named quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns every named stable version, oldest first.
    #[must_use]
    pub fn stable_versions() -> Vec<Self> {
        vec![
            Self::V2019_07,
            Self::V2019_10,
            Self::V2020_01,
            Self::V2020_04,
            Self::V2020_07,
            Self::V2020_10,
        ]
    }

    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2019_07 => 1,
            Self::V2019_10 => 2,
            Self::V2020_01 => 3,
            Self::V2020_04 => 4,
            Self::V2020_07 => 5,
            Self::V2020_10 => 6,
            Self::Unstable => 100,
            Self::Custom(_) => 101,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            // Shopify only releases in January, April, July and October.
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2019_07 => "2019-07",
            Self::V2019_10 => "2019-10",
            Self::V2020_01 => "2020-01",
            Self::V2020_04 => "2020-04",
            Self::V2020_07 => "2020-07",
            Self::V2020_10 => "2020-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        // Accept the "api/2020-10" path form as well as the bare version.
        let s = lowered.strip_prefix("api/").unwrap_or(&lowered);

        match s {
            "2019-07" => Ok(Self::V2019_07),
            "2019-10" => Ok(Self::V2019_10),
            "2020-01" => Ok(Self::V2020_01),
            "2020-04" => Ok(Self::V2020_04),
            "2020-07" => Ok(Self::V2020_07),
            "2020-10" => Ok(Self::V2020_10),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
