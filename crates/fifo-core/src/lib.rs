//! # FIFO Core
//!
//! 核心資料模型與類型定義

pub mod batch;
pub mod book;
pub mod config;
pub mod item;
pub mod sample;
pub mod settings;

// Re-export 主要類型
pub use batch::{Batch, BatchEntry, BatchKind, BatchSet, Expenditure};
pub use book::InventoryBook;
pub use config::{LedgerConfig, StorageKeys};
pub use item::InventoryItem;
pub use settings::{AttendanceInputs, EditableSummary, RationInputs, RationSheet};

use rust_decimal::Decimal;

/// 帳本錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("數量不可為負數: {0}")]
    NegativeQuantity(Decimal),

    #[error("單價不可為負數: {0}")]
    NegativeRate(Decimal),

    #[error("{field} 必須大於 0，收到 {value}")]
    NonPositiveEntry { field: &'static str, value: Decimal },

    #[error("金額超出可表示範圍: {qty} × {rate}")]
    AmountOverflow { qty: Decimal, rate: Decimal },

    #[error("找不到品項: {0}")]
    ItemNotFound(u64),

    #[error("批次索引超出範圍: {index}（共 {len} 筆）")]
    BatchIndexOutOfRange { index: usize, len: usize },

    #[error("無效的月份: {0}")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
