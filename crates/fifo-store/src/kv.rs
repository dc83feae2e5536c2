//! 鍵值儲存介面

use std::collections::HashMap;

use crate::Result;

/// 以字串鍵存放整份文件的儲存介面
pub trait KeyValueStore {
    /// 讀取鍵值，不存在時回傳 `None`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 寫入鍵值（覆寫）
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// 刪除鍵值，回傳是否原本存在
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// 記憶體儲存
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("fifo-inventory").unwrap(), None);

        store.set("fifo-inventory", "[]".to_string()).unwrap();
        assert!(store.contains("fifo-inventory"));
        assert_eq!(store.get("fifo-inventory").unwrap().as_deref(), Some("[]"));

        store.set("fifo-inventory", "[1]".to_string()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("fifo-inventory").unwrap().as_deref(), Some("[1]"));

        assert!(store.remove("fifo-inventory").unwrap());
        assert!(!store.remove("fifo-inventory").unwrap());
    }
}
