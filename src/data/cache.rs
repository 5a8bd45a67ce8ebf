use std::{
    fs, io,
    path::{Path, PathBuf},
};

use sha1::{Digest, Sha1};

use crate::error::WeatherError;

/// On-disk store of raw forecast responses, one file per request.
///
/// Files are named by the SHA-1 of the request URL, so the same query always
/// lands on the same entry and a later write replaces the earlier one.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn key(request: &str) -> String {
        hex::encode(Sha1::digest(request.as_bytes()))
    }

    #[must_use]
    pub fn entry_path(&self, request: &str) -> PathBuf {
        self.dir.join(Self::key(request))
    }

    /// Returns the stored body, or `None` when nothing usable is cached.
    /// Empty entries count as misses.
    pub fn get(&self, request: &str) -> Result<Option<Vec<u8>>, WeatherError> {
        let path = self.entry_path(request);
        match fs::read(&path) {
            Ok(body) if body.is_empty() => Ok(None),
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(WeatherError::Cache { path, source }),
        }
    }

    pub fn put(&self, request: &str, body: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(request), body)
    }
}
