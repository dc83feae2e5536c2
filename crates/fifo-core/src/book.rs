//! 品項集合

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;
use crate::{LedgerError, Result};

/// 庫存帳簿（整份品項清單）
///
/// 由應用層持有；計算引擎只借用，不保留參照。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryBook {
    items: Vec<InventoryItem>,
}

impl InventoryBook {
    /// 創建空帳簿
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 從既有品項建立
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// 範例資料帳簿
    pub fn sample() -> Self {
        Self::from_items(crate::sample::sample_items())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 下一個可用的品項ID
    pub fn next_id(&self) -> u64 {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// 新增品項，回傳實際使用的ID
    ///
    /// 若ID為 0 或與既有品項重複，改配新的ID。
    pub fn add(&mut self, mut item: InventoryItem) -> u64 {
        if item.id == 0 || self.get(item.id).is_some() {
            item.id = self.next_id();
        }
        let id = item.id;
        self.items.push(item);
        id
    }

    /// 以相同ID的新內容整筆取代
    pub fn update(&mut self, item: InventoryItem) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(LedgerError::ItemNotFound(item.id))?;
        *slot = item;
        Ok(())
    }

    /// 刪除品項（連同其批次）
    pub fn remove(&mut self, id: u64) -> Result<InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(LedgerError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_add_assigns_fresh_id() {
        let mut book = InventoryBook::new();
        assert_eq!(book.add(InventoryItem::new(0, "Rice", "KG")), 1);
        assert_eq!(book.add(InventoryItem::new(0, "Oil", "L")), 2);

        // 重複ID改配新號
        assert_eq!(book.add(InventoryItem::new(1, "Flour", "KG")), 3);

        // 指定且未使用的ID照用
        assert_eq!(book.add(InventoryItem::new(10, "Salt", "KG")), 10);
        assert_eq!(book.next_id(), 11);
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn test_update_and_remove() {
        let mut book = InventoryBook::new();
        let id = book.add(InventoryItem::new(0, "Rice", "KG"));

        let mut edited = book.get(id).unwrap().clone();
        edited.name = "Basmati Rice".to_string();
        edited.set_expenditure(Decimal::from(5)).unwrap();
        book.update(edited).unwrap();
        assert_eq!(book.get(id).unwrap().name, "Basmati Rice");

        assert!(matches!(
            book.update(InventoryItem::new(99, "Ghost", "KG")),
            Err(LedgerError::ItemNotFound(99))
        ));

        let removed = book.remove(id).unwrap();
        assert_eq!(removed.name, "Basmati Rice");
        assert!(book.is_empty());
        assert!(book.remove(id).is_err());
    }

    #[test]
    fn test_book_serializes_as_array() {
        let book = InventoryBook::sample();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));

        let restored: InventoryBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
    }
}
