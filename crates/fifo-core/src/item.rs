//! 庫存品項模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::batch::{Batch, BatchEntry, BatchKind, BatchSet, Expenditure};
use crate::{LedgerError, Result};

/// 庫存品項
///
/// 批次由品項獨占擁有，複製品項即深拷貝其批次序列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// 品項ID（在品項集合中唯一）
    pub id: u64,

    /// 品名
    pub name: String,

    /// 顯示單位（如 "KG"）
    pub unit: String,

    /// 上月結存批次
    #[serde(default)]
    pub prev_month: BatchSet,

    /// 本月進貨批次
    #[serde(default)]
    pub received_this_month: BatchSet,

    /// 本月支出
    #[serde(default)]
    pub expenditure_this_month: Expenditure,
}

impl InventoryItem {
    /// 創建新的品項（無批次、無支出）
    pub fn new(id: u64, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            prev_month: BatchSet::default(),
            received_this_month: BatchSet::default(),
            expenditure_this_month: Expenditure::default(),
        }
    }

    /// 建構器模式：設置上月結存批次
    pub fn with_prev_month(mut self, batches: Vec<Batch>) -> Self {
        self.prev_month = BatchSet::new(batches);
        self
    }

    /// 建構器模式：設置本月進貨批次
    pub fn with_received_this_month(mut self, batches: Vec<Batch>) -> Self {
        self.received_this_month = BatchSet::new(batches);
        self
    }

    /// 建構器模式：設置本月支出
    pub fn with_expenditure(mut self, expenditure: Expenditure) -> Self {
        self.expenditure_this_month = expenditure;
        self
    }

    /// 本月支出數量
    pub fn expenditure_qty(&self) -> Decimal {
        self.expenditure_this_month.qty()
    }

    /// 取得指定欄位的批次
    pub fn batches(&self, kind: BatchKind) -> &[Batch] {
        &self.batch_set(kind).batches
    }

    fn batch_set(&self, kind: BatchKind) -> &BatchSet {
        match kind {
            BatchKind::PrevMonth => &self.prev_month,
            BatchKind::ReceivedThisMonth => &self.received_this_month,
        }
    }

    fn batch_set_mut(&mut self, kind: BatchKind) -> &mut BatchSet {
        match kind {
            BatchKind::PrevMonth => &mut self.prev_month,
            BatchKind::ReceivedThisMonth => &mut self.received_this_month,
        }
    }

    /// 檢查是否有任何批次
    pub fn has_batches(&self) -> bool {
        !self.prev_month.is_empty() || !self.received_this_month.is_empty()
    }

    /// 下一個可用的批次ID（兩個欄位共用編號）
    pub fn next_batch_id(&self) -> u64 {
        self.prev_month
            .batches
            .iter()
            .chain(self.received_this_month.batches.iter())
            .map(Batch::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// 新增批次（附加於序列尾端）
    pub fn push_batch(&mut self, kind: BatchKind, entry: BatchEntry) -> Result<&Batch> {
        let batch = entry.into_batch(self.next_batch_id())?;
        let set = self.batch_set_mut(kind);
        set.batches.push(batch);
        let index = set.batches.len() - 1;
        Ok(&set.batches[index])
    }

    /// 以新數值取代指定位置的批次（保留原ID）
    pub fn replace_batch(&mut self, kind: BatchKind, index: usize, entry: BatchEntry) -> Result<()> {
        let set = self.batch_set_mut(kind);
        let len = set.batches.len();
        let slot = set
            .batches
            .get_mut(index)
            .ok_or(LedgerError::BatchIndexOutOfRange { index, len })?;
        *slot = entry.into_batch(slot.id())?;
        Ok(())
    }

    /// 移除指定位置的批次
    pub fn remove_batch(&mut self, kind: BatchKind, index: usize) -> Result<Batch> {
        let set = self.batch_set_mut(kind);
        let len = set.batches.len();
        if index >= len {
            return Err(LedgerError::BatchIndexOutOfRange { index, len });
        }
        Ok(set.batches.remove(index))
    }

    /// 設置本月支出數量
    pub fn set_expenditure(&mut self, qty: Decimal) -> Result<()> {
        self.expenditure_this_month = Expenditure::new(qty)?;
        Ok(())
    }
}
