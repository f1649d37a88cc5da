use crate::utils::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Supplies the pool of candidate words.
pub trait WordSource {
    fn fetch(&self, count: usize) -> Result<Vec<String>>;
}

/// Random word list API, queried as `<url>?number=<count>`.
pub struct HttpWordSource {
    pub url: String,
}

impl WordSource for HttpWordSource {
    fn fetch(&self, count: usize) -> Result<Vec<String>> {
        debug!("Fetching {} words from {}", count, self.url);
        let words = reqwest::blocking::Client::new()
            .get(&self.url)
            .query(&[("number", count)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<String>>())
            .map_err(|e| Error::WordSourceUnavailable(e.to_string()))?;
        debug!("Received {} words", words.len());
        Ok(words)
    }
}

/// Newline separated word list on disk. Every word in the file is used.
pub struct FileWordSource {
    pub path: PathBuf,
}

impl WordSource for FileWordSource {
    fn fetch(&self, _count: usize) -> Result<Vec<String>> {
        debug!("Reading words from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::WordSourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "correct\n  horse \n\n\nbattery\r\nstaple").unwrap();
        let source = FileWordSource {
            path: file.path().to_path_buf(),
        };
        assert_eq!(
            source.fetch(1000).unwrap(),
            vec!["correct", "horse", "battery", "staple"]
        );
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileWordSource {
            path: dir.path().join("words.txt"),
        };
        assert!(matches!(
            source.fetch(10),
            Err(Error::WordSourceUnavailable(_))
        ));
    }

    #[test]
    fn bad_url_is_unavailable() {
        let source = HttpWordSource {
            url: String::from("not a url"),
        };
        assert!(matches!(
            source.fetch(10),
            Err(Error::WordSourceUnavailable(_))
        ));
    }
}
