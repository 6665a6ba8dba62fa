//! Seed locations

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::{Error, Result};

/// Where a seed list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// An http(s) endpoint
    Http(Url),
    /// A JSON file on disk
    File(PathBuf),
}

impl SeedSource {
    /// Parse a seed location
    ///
    /// Supports formats:
    /// - https://example.com/assets/reviews.json
    /// - file:///srv/site/assets/reviews.json
    /// - assets/reviews.json (relative or absolute path)
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(Error::InvalidSource("empty seed location".to_string()));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(SeedSource::Http(Url::parse(location)?));
        }

        if location.starts_with("file://") {
            let url = Url::parse(location)?;
            let path = url
                .to_file_path()
                .map_err(|_| Error::InvalidSource(format!("not a local path: {}", location)))?;
            return Ok(SeedSource::File(path));
        }

        Ok(SeedSource::File(PathBuf::from(location)))
    }
}

impl FromStr for SeedSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Http(url) => write!(f, "{}", url),
            SeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
