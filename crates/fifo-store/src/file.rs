//! 檔案儲存：每個鍵一個 `<key>.json`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;
use crate::{Result, StoreError};

/// 目錄式檔案儲存
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 開啟儲存目錄（不存在時建立）
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!("開啟檔案儲存: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 鍵對應的檔案路徑
    ///
    /// 只允許英數字、`-` 與 `_`，避免跳出儲存目錄。
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("ledger")).unwrap();

        assert_eq!(store.get("editable-summary").unwrap(), None);
        store.set("editable-summary", "{}".to_string()).unwrap();
        assert!(dir.path().join("ledger/editable-summary.json").exists());
        assert_eq!(store.get("editable-summary").unwrap().as_deref(), Some("{}"));

        assert!(store.remove("editable-summary").unwrap());
        assert!(!store.remove("editable-summary").unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("a/b")]
    #[case("with space")]
    fn test_invalid_keys(#[case] key: &str) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
    }
}
