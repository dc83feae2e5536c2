//! 報表表格

use fifo_calc::format::fixed;
use fifo_calc::{RowMaterializer, SummaryCalculator, Totals};
use fifo_core::{InventoryItem, LedgerConfig};
use serde::Serialize;

/// 資料欄數：序號、品名、單位 + 五組 數量/單價/金額
pub const COLUMN_COUNT: usize = 18;

const GROUP_HEADERS: [&str; 5] = [
    "Previous Month",
    "Received This Month",
    "Total Received",
    "Expenditure This Month",
    "Balance Next Month",
];

/// 組裝完成的表格（列 × 儲存格文字）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// 表頭列數（標題、月份、空白、兩列欄名）
    pub const HEADER_ROWS: usize = 5;

    /// 資料列（不含表頭與總計）
    pub fn data_rows(&self) -> &[Vec<String>] {
        let end = self.rows.len().saturating_sub(2);
        self.rows.get(Self::HEADER_ROWS..end).unwrap_or(&[])
    }

    /// 最後一列（總計）
    pub fn totals_row(&self) -> Option<&Vec<String>> {
        self.rows.last()
    }
}

/// 表格組裝器
pub struct SheetBuilder<'a> {
    config: &'a LedgerConfig,
}

impl<'a> SheetBuilder<'a> {
    pub fn new(config: &'a LedgerConfig) -> Self {
        Self { config }
    }

    /// 組裝整份報表
    pub fn build(&self, items: &[InventoryItem]) -> Sheet {
        let mut rows = vec![
            vec![self.config.title.clone()],
            vec!["Month:".to_string(), self.config.month_label()],
            blank_row(),
            group_header_row(),
            unit_header_row(),
        ];

        rows.extend(RowMaterializer::render_all(items).iter().map(|row| row.cells()));

        let summary = SummaryCalculator::summarize(items);
        rows.push(blank_row());
        let mut totals = vec!["GRAND TOTALS".to_string(), String::new(), String::new()];
        for group in [
            &summary.prev_month_total,
            &summary.received_this_month_total,
            &summary.total_received_total,
            &summary.total_expenditure_total,
            &summary.balance_next_month_total,
        ] {
            totals.extend(total_cells(group));
        }
        rows.push(totals);

        tracing::debug!("報表表格組裝完成：共 {} 列", rows.len());

        Sheet {
            name: "Inventory".to_string(),
            rows,
        }
    }
}

fn blank_row() -> Vec<String> {
    vec![String::new(); COLUMN_COUNT]
}

fn group_header_row() -> Vec<String> {
    let mut row: Vec<String> = ["Sl No", "Item Name", "Unit"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for header in GROUP_HEADERS {
        row.push(header.to_string());
        row.push(String::new());
        row.push(String::new());
    }
    row
}

fn unit_header_row() -> Vec<String> {
    let mut row = vec![String::new(); 3];
    for _ in GROUP_HEADERS {
        row.extend(["Qty", "Rate", "Amount"].iter().map(|s| s.to_string()));
    }
    row
}

/// 總計只列數量與金額，單價留白
fn total_cells(totals: &Totals) -> [String; 3] {
    [fixed(totals.qty), String::new(), fixed(totals.amount)]
}
