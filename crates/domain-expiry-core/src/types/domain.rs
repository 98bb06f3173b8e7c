//! Domain names and registry suffix matching.

use std::fmt;

/// Label delimiter
const DELIMITER: char = '.';

/// A normalised domain name.
///
/// Normalisation trims whitespace, drops a single trailing root dot and
/// lowercases every label. Internationalised labels are kept in whatever
/// form they were given (Unicode or `xn--` punycode).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    name: String,
}

impl DomainName {
    /// Parse a domain name, returning `None` for empty input or empty labels
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix(DELIMITER).unwrap_or(trimmed);
        if trimmed.is_empty() || trimmed.split(DELIMITER).any(str::is_empty) {
            return None;
        }

        Some(Self {
            name: trimmed.to_lowercase(),
        })
    }

    /// The normalised name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The rightmost label
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.name
            .rsplit(DELIMITER)
            .next()
            .unwrap_or(self.name.as_str())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Every accepted spelling of one registry's suffix.
///
/// A registry may operate the same suffix in several scripts, and each
/// internationalised spelling also has an ASCII (`xn--`) encoding. All of
/// them must be listed, lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixSet {
    spellings: &'static [&'static str],
}

impl SuffixSet {
    /// Create a suffix set. The first spelling is treated as the canonical one.
    #[must_use]
    pub const fn new(spellings: &'static [&'static str]) -> Self {
        Self { spellings }
    }

    /// Canonical (first) spelling
    #[must_use]
    pub fn canonical(&self) -> &'static str {
        self.spellings.first().copied().unwrap_or_default()
    }

    /// Returns true if `suffix` is one of the accepted spellings
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        let suffix = suffix.to_lowercase();
        self.spellings.iter().any(|s| *s == suffix)
    }

    /// Returns true if the domain's suffix is one of the accepted spellings
    #[must_use]
    pub fn matches(&self, domain: &DomainName) -> bool {
        self.contains(domain.suffix())
    }
}
