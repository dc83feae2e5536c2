//! 報表列展開
//!
//! 把單一品項的五個批次序列（上月、本月進貨、收入合計、支出、結存）
//! 依位置對齊成固定欄位的報表列，供表格顯示與匯出共用。

use fifo_core::{Batch, InventoryItem};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::fifo::FifoCalculator;
use crate::format::fixed;

/// 報表列中的一格
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// 該位置有批次
    Present(Batch),
    /// 該位置沒有批次（顯示為空白，不同於 0）
    Blank,
    /// 品項完全沒有批次時的零值
    Zero,
}

impl Slot {
    fn at(batches: &[Batch], index: usize) -> Self {
        batches
            .get(index)
            .cloned()
            .map_or(Slot::Blank, Slot::Present)
    }

    /// 轉為顯示文字
    pub fn render(&self) -> CellText {
        match self {
            Slot::Present(batch) => CellText {
                qty: fixed(batch.qty()),
                rate: fixed(batch.rate()),
                amount: fixed(batch.amount()),
            },
            Slot::Blank => CellText::default(),
            Slot::Zero => CellText {
                qty: fixed(Decimal::ZERO),
                rate: fixed(Decimal::ZERO),
                amount: fixed(Decimal::ZERO),
            },
        }
    }
}

/// 數量 / 單價 / 金額 文字
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellText {
    pub qty: String,
    pub rate: String,
    pub amount: String,
}

/// 以批次為單位的報表列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializedRow {
    /// 序號、品名、單位只出現在品項的第一列
    pub sl_no: Option<usize>,
    pub item_name: Option<String>,
    pub unit: Option<String>,
    pub prev_month: Slot,
    pub received_this_month: Slot,
    pub total_received: Slot,
    pub expenditure: Slot,
    pub balance: Slot,
}

impl MaterializedRow {
    /// 轉為文字列
    pub fn render(&self) -> BatchRow {
        BatchRow {
            sl_no: self.sl_no.map(|n| n.to_string()).unwrap_or_default(),
            item_name: self.item_name.clone().unwrap_or_default(),
            unit: self.unit.clone().unwrap_or_default(),
            prev_month: self.prev_month.render(),
            received_this_month: self.received_this_month.render(),
            total_received: self.total_received.render(),
            expenditure: self.expenditure.render(),
            balance: self.balance.render(),
        }
    }
}

/// 已格式化的報表列（表格與匯出共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub sl_no: String,
    pub item_name: String,
    pub unit: String,
    pub prev_month: CellText,
    pub received_this_month: CellText,
    pub total_received: CellText,
    pub expenditure: CellText,
    pub balance: CellText,
}

impl BatchRow {
    /// 攤平成 18 欄
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.sl_no.clone(), self.item_name.clone(), self.unit.clone()];
        for group in [
            &self.prev_month,
            &self.received_this_month,
            &self.total_received,
            &self.expenditure,
            &self.balance,
        ] {
            cells.push(group.qty.clone());
            cells.push(group.rate.clone());
            cells.push(group.amount.clone());
        }
        cells
    }
}

/// 報表列展開器
pub struct RowMaterializer;

impl RowMaterializer {
    /// 展開單一品項
    ///
    /// 列數 = max(1, 五個序列中最長者)。第 i 列的各欄分別取各序列的第 i 筆；
    /// 收入合計欄取串接佇列的第 i 筆，並非該列上月與本月兩欄相加。
    pub fn materialize(item: &InventoryItem, display_index: usize) -> Vec<MaterializedRow> {
        let prev = &item.prev_month.batches;
        let received = &item.received_this_month.batches;
        let total = FifoCalculator::queue(item);
        let expenditure = FifoCalculator::expenditure_allocation(item).batches;
        let balance = FifoCalculator::balance_allocation(item).batches;

        let columns = [
            prev.as_slice(),
            received.as_slice(),
            total.as_slice(),
            expenditure.as_slice(),
            balance.as_slice(),
        ];
        let depth = columns.iter().map(|c| c.len()).max().unwrap_or(0);

        if depth == 0 {
            return vec![MaterializedRow {
                sl_no: Some(display_index),
                item_name: Some(item.name.clone()),
                unit: Some(item.unit.clone()),
                prev_month: Slot::Zero,
                received_this_month: Slot::Zero,
                total_received: Slot::Zero,
                expenditure: Slot::Zero,
                balance: Slot::Zero,
            }];
        }

        (0..depth)
            .map(|i| {
                let first = i == 0;
                MaterializedRow {
                    sl_no: first.then_some(display_index),
                    item_name: first.then(|| item.name.clone()),
                    unit: first.then(|| item.unit.clone()),
                    prev_month: Slot::at(prev, i),
                    received_this_month: Slot::at(received, i),
                    total_received: Slot::at(&total, i),
                    expenditure: Slot::at(&expenditure, i),
                    balance: Slot::at(&balance, i),
                }
            })
            .collect()
    }

    /// 展開整份清單（序號從 1 開始）
    pub fn materialize_all(items: &[InventoryItem]) -> Vec<MaterializedRow> {
        items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| Self::materialize(item, index + 1))
            .collect()
    }

    /// 展開並格式化整份清單
    pub fn render_all(items: &[InventoryItem]) -> Vec<BatchRow> {
        Self::materialize_all(items)
            .iter()
            .map(MaterializedRow::render)
            .collect()
    }
}
