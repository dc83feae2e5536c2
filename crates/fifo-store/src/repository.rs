//! 帳本資料存取

use fifo_core::{EditableSummary, InventoryBook, RationSheet, StorageKeys};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;
use crate::Result;

/// 帳本存取層
///
/// 每份文件以 JSON 整份存放在固定鍵下。
pub struct LedgerRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> LedgerRepository<S> {
    /// 使用預設鍵
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, raw)
    }

    /// 讀取品項清單，鍵不存在時回傳 `None`
    pub fn load_items(&self) -> Result<Option<InventoryBook>> {
        let book: Option<InventoryBook> = self.load(&self.keys.items)?;
        if let Some(book) = &book {
            tracing::info!("載入品項 {} 筆", book.len());
        }
        Ok(book)
    }

    /// 讀取品項清單，從未儲存過時使用範例資料
    ///
    /// 已儲存的空清單會原樣回傳，不會被範例資料取代。
    pub fn load_items_or_sample(&self) -> Result<InventoryBook> {
        match self.load_items()? {
            Some(book) => Ok(book),
            None => {
                tracing::info!("尚無已儲存的品項，使用範例資料");
                Ok(InventoryBook::sample())
            }
        }
    }

    /// 儲存品項清單（空清單也寫入）
    pub fn save_items(&mut self, book: &InventoryBook) -> Result<()> {
        let key = self.keys.items.clone();
        self.save(&key, book)?;
        tracing::info!("儲存品項 {} 筆", book.len());
        Ok(())
    }

    /// 讀取補充摘要，不存在時回傳預設值
    pub fn load_editable_summary(&self) -> Result<EditableSummary> {
        Ok(self
            .load(&self.keys.editable_summary)?
            .unwrap_or_default())
    }

    pub fn save_editable_summary(&mut self, summary: &EditableSummary) -> Result<()> {
        let key = self.keys.editable_summary.clone();
        self.save(&key, summary)?;
        tracing::info!("儲存補充摘要");
        Ok(())
    }

    /// 讀取口糧與出勤數字，不存在時回傳預設值
    pub fn load_ration_sheet(&self) -> Result<RationSheet> {
        Ok(self
            .load(&self.keys.ration_attendance)?
            .unwrap_or_default())
    }

    pub fn save_ration_sheet(&mut self, sheet: &RationSheet) -> Result<()> {
        let key = self.keys.ration_attendance.clone();
        self.save(&key, sheet)?;
        tracing::info!("儲存口糧與出勤數字");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore, StoreError};
    use fifo_core::InventoryItem;
    use rust_decimal::Decimal;

    #[test]
    fn test_sample_seeded_when_missing() {
        let repo = LedgerRepository::new(MemoryStore::new());
        assert!(repo.load_items().unwrap().is_none());

        let book = repo.load_items_or_sample().unwrap();
        assert_eq!(book, InventoryBook::sample());
        // 讀取不會寫入
        assert!(repo.store().is_empty());
    }

    #[test]
    fn test_empty_list_persists() {
        let mut repo = LedgerRepository::new(MemoryStore::new());
        let mut book = InventoryBook::sample();
        let ids: Vec<u64> = book.items().iter().map(|item| item.id).collect();
        for id in ids {
            book.remove(id).unwrap();
        }
        repo.save_items(&book).unwrap();

        assert_eq!(
            repo.store().get("fifo-inventory").unwrap().as_deref(),
            Some("[]")
        );
        assert!(repo.load_items_or_sample().unwrap().is_empty());
    }

    #[test]
    fn test_items_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = LedgerRepository::new(FileStore::open(dir.path()).unwrap());

        let mut book = InventoryBook::sample();
        book.add(InventoryItem::new(0, "Sugar", "KG"));
        repo.save_items(&book).unwrap();

        let reopened = LedgerRepository::new(FileStore::open(dir.path()).unwrap());
        assert_eq!(reopened.load_items().unwrap(), Some(book));
    }

    #[test]
    fn test_settings_defaults_and_round_trip() {
        let mut repo = LedgerRepository::new(MemoryStore::new());
        assert_eq!(repo.load_editable_summary().unwrap(), EditableSummary::default());
        assert_eq!(repo.load_ration_sheet().unwrap(), RationSheet::default());

        let summary = EditableSummary {
            prev_month_fresh: Decimal::from(100),
            this_month_purchased: Decimal::from(50),
            expenditures_month: Decimal::from(75),
        };
        repo.save_editable_summary(&summary).unwrap();
        assert_eq!(repo.load_editable_summary().unwrap(), summary);

        let mut sheet = RationSheet::default();
        sheet.ration.bara_khana = Decimal::from(1200);
        sheet.attendance.less_ri_attendance = 12;
        repo.save_ration_sheet(&sheet).unwrap();
        assert_eq!(repo.load_ration_sheet().unwrap(), sheet);
    }

    #[test]
    fn test_custom_keys() {
        let keys = StorageKeys {
            items: "mess-a-items".to_string(),
            ..StorageKeys::default()
        };
        let mut repo = LedgerRepository::with_keys(MemoryStore::new(), keys);
        repo.save_items(&InventoryBook::new()).unwrap();

        let store = repo.into_store();
        assert!(store.contains("mess-a-items"));
        assert!(!store.contains("fifo-inventory"));
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let mut store = MemoryStore::new();
        store.set("fifo-inventory", "not json".to_string()).unwrap();
        let repo = LedgerRepository::new(store);

        assert!(matches!(
            repo.load_items(),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_negative_batch_rejected_on_load() {
        let mut store = MemoryStore::new();
        let blob = r#"[{"id":1,"name":"Rice","unit":"KG",
            "prevMonth":{"batches":[{"id":1,"qty":-5,"rate":10}]}}]"#;
        store.set("fifo-inventory", blob.to_string()).unwrap();
        let repo = LedgerRepository::new(store);

        assert!(repo.load_items().is_err());
    }

    #[test]
    fn test_overflowing_batch_rejected_on_load() {
        let mut store = MemoryStore::new();
        let blob = r#"[{"id":1,"name":"Rice","unit":"KG",
            "receivedThisMonth":{"batches":[{"id":1,"qty":100000000000000,"rate":1000000000000000}]}}]"#;
        store.set("fifo-inventory", blob.to_string()).unwrap();
        let repo = LedgerRepository::new(store);

        assert!(matches!(
            repo.load_items(),
            Err(StoreError::Serialization(_))
        ));
    }
}
