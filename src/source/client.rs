//! Reads the raw transaction CSV from a local file or an HTTP(S) endpoint.

use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::DataError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fmt;
use std::path::PathBuf;

/// Where the dataset lives
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Local CSV file
    Path(PathBuf),
    /// Remote CSV served over HTTP(S)
    Url(String),
}

impl DataSource {
    /// Classify a user-supplied source string
    ///
    /// **Public** - used by the CLI to turn `--source` into a source
    ///
    /// Strings starting with `http://` or `https://` are URLs, everything
    /// else is treated as a filesystem path.
    pub fn parse(source: &str) -> Result<Self, DataError> {
        let source = source.trim();

        if source.is_empty() {
            return Err(DataError::DataUnavailable(
                "Source cannot be empty".to_string(),
            ));
        }

        if source.starts_with("http://") || source.starts_with("https://") {
            Ok(DataSource::Url(source.to_string()))
        } else {
            Ok(DataSource::Path(PathBuf::from(source)))
        }
    }

    /// Identity string used as the cache key
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Read the raw CSV text behind a source
///
/// **Public** - single blocking attempt, no retries
///
/// # Errors
/// * `DataError::DataUnavailable` - file missing/unreadable, transport
///   failure, or non-success HTTP status
pub fn read_source(source: &DataSource) -> Result<String, DataError> {
    match source {
        DataSource::Path(path) => {
            info!("Reading dataset from file: {}", path.display());
            std::fs::read_to_string(path).map_err(|e| {
                DataError::DataUnavailable(format!("{}: {}", path.display(), e))
            })
        }
        DataSource::Url(url) => fetch_url(url),
    }
}

/// Fetch a remote CSV with a blocking GET
///
/// **Private** - internal helper for read_source
fn fetch_url(url: &str) -> Result<String, DataError> {
    info!("Fetching dataset from: {}", url);

    let client = Client::builder().timeout(DEFAULT_FETCH_TIMEOUT).build()?;

    let response = client.get(url).send()?;

    // Check HTTP status
    if !response.status().is_success() {
        return Err(DataError::DataUnavailable(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    let body = response.text()?;
    debug!("Fetched {} bytes", body.len());

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_url_and_path() {
        assert_eq!(
            DataSource::parse("https://example.com/data.csv").unwrap(),
            DataSource::Url("https://example.com/data.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("data/creditcard.csv").unwrap(),
            DataSource::Path(PathBuf::from("data/creditcard.csv"))
        );
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(DataSource::parse("   ").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let source = DataSource::Path(PathBuf::from("/definitely/not/here.csv"));
        let err = read_source(&source).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable(_)));
    }

    #[test]
    fn test_parse_other_scheme_is_a_path() {
        assert_eq!(
            DataSource::parse("ftp://x").unwrap(),
            DataSource::Path(PathBuf::from("ftp://x"))
        );
    }

    #[test]
    fn test_unreachable_url_is_unavailable() {
        let source = DataSource::parse("http://127.0.0.1:1/creditcard.csv").unwrap();
        let err = read_source(&source).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable(_)));
    }

    #[test]
    fn test_read_local_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Time,Amount,Class\n0,1.0,0\n").unwrap();

        let source = DataSource::Path(file.path().to_path_buf());
        let text = read_source(&source).unwrap();
        assert!(text.starts_with("Time,Amount,Class"));
    }
}
