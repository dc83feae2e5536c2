//! # FIFO Calculation Engine
//!
//! 先進先出批次計算、彙總與報表列展開

pub mod fifo;
pub mod format;
pub mod ration;
pub mod rows;
pub mod summary;

// Re-export 主要類型
pub use fifo::{BatchValuation, ExpenditureAllocation, FifoCalculator, ItemStatement, Valuation};
pub use ration::{AttendanceReport, RationCalculator, RationReport};
pub use rows::{BatchRow, CellText, MaterializedRow, RowMaterializer, Slot};
pub use summary::{Summary, SummaryCalculator, Totals};

use serde::Serialize;

/// 帳本警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerWarning {
    pub item_id: u64,
    pub message: String,
    pub severity: WarningSeverity,
}

impl LedgerWarning {
    pub fn new(item_id: u64, message: String, severity: WarningSeverity) -> Self {
        Self {
            item_id,
            message,
            severity,
        }
    }

    pub fn warning(item_id: u64, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Warning)
    }

    pub fn error(item_id: u64, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Warning,
    Error,
}
