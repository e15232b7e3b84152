//! On-disk layout of the data directory.
//!
//! Two independent artifacts live side by side:
//! - `highscore.dat`: the best score as one big-endian `u32`
//! - `session.json`: the last [`GameSnapshot`] as JSON
//!
//! Every write goes to `<name>.tmp` first and is renamed into place, so a crash
//! mid-write leaves the previous file intact. Readers come in two flavors: the
//! `read_*` methods report exactly what went wrong, the `load_*` methods log it
//! and fall back to a default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_lines_core::GameSnapshot;

use crate::error::StoreError;

pub const HIGH_SCORE_FILE: &str = "highscore.dat";
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.dir.join(HIGH_SCORE_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// Read the high-score record. `Ok(None)` when there is none yet.
    pub fn read_high_score(&self) -> Result<Option<u64>, StoreError> {
        let path = self.high_score_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        let raw: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| StoreError::HighScoreLen {
                path: path.clone(),
                len: bytes.len(),
            })?;
        Ok(Some(u64::from(u32::from_be_bytes(raw))))
    }

    /// High score, or 0 when the record is missing or unreadable
    pub fn load_high_score(&self) -> u64 {
        match self.read_high_score() {
            Ok(Some(value)) => {
                log::info!("loaded high score {}", value);
                value
            }
            Ok(None) => 0,
            Err(e) => {
                log::warn!("ignoring high-score record: {}", e);
                0
            }
        }
    }

    /// Write the high-score record. Values above `u32::MAX` saturate.
    pub fn save_high_score(&self, value: u64) -> Result<(), StoreError> {
        let clamped = u32::try_from(value).unwrap_or(u32::MAX);
        self.write_atomic(&self.high_score_path(), &clamped.to_be_bytes())?;
        log::info!("saved high score {}", clamped);
        Ok(())
    }

    /// Read the session snapshot. `Ok(None)` when there is none.
    pub fn read_session(&self) -> Result<Option<GameSnapshot>, StoreError> {
        let path = self.session_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::SessionParse { path, source })
    }

    /// Session snapshot, or `None` when it is missing or unreadable
    pub fn load_session(&self) -> Option<GameSnapshot> {
        match self.read_session() {
            Ok(snap) => snap,
            Err(e) => {
                log::warn!("ignoring saved session: {}", e);
                None
            }
        }
    }

    pub fn save_session(&self, snap: &GameSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_vec(snap)?;
        self.write_atomic(&self.session_path(), &json)?;
        log::info!("saved session (score {})", snap.score);
        Ok(())
    }

    /// Delete the session snapshot. A missing file is not an error.
    pub fn remove_session(&self) -> Result<(), StoreError> {
        let path = self.session_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("removed finished session");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove { path, source }),
        }
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, bytes).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_are_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        assert!(matches!(store.read_high_score(), Ok(None)));
        assert!(matches!(store.read_session(), Ok(None)));
        assert_eq!(store.load_high_score(), 0);
        assert!(store.load_session().is_none());
        assert!(store.remove_session().is_ok());
    }

    #[test]
    fn test_high_score_is_big_endian_u32() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store.save_high_score(258).unwrap();

        let bytes = fs::read(store.high_score_path()).unwrap();
        assert_eq!(bytes, vec![0, 0, 1, 2]);
        assert_eq!(store.load_high_score(), 258);
    }

    #[test]
    fn test_high_score_saturates() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store.save_high_score(u64::from(u32::MAX) + 10).unwrap();
        assert_eq!(store.load_high_score(), u64::from(u32::MAX));
    }

    #[test]
    fn test_truncated_high_score_falls_back_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::write(store.high_score_path(), [0, 7]).unwrap();

        assert!(matches!(
            store.read_high_score(),
            Err(StoreError::HighScoreLen { len: 2, .. })
        ));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_write_creates_directory_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("data"));
        store.save_session(&GameSnapshot::empty(9, 3)).unwrap();

        assert!(store.session_path().exists());
        assert!(!store.dir().join("session.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_session_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::write(store.session_path(), "{\"board\": [[").unwrap();

        assert!(matches!(
            store.read_session(),
            Err(StoreError::SessionParse { .. })
        ));
        assert!(store.load_session().is_none());
    }

    #[test]
    fn test_remove_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store.save_session(&GameSnapshot::empty(9, 3)).unwrap();
        store.remove_session().unwrap();
        assert!(!store.session_path().exists());
    }
}
