//! # FIFO Export
//!
//! 報表表格組裝與匯出

pub mod csv_writer;
pub mod naming;
pub mod sheet;

// Re-export 主要類型
pub use csv_writer::CsvExporter;
pub use naming::export_file_name;
pub use sheet::{Sheet, SheetBuilder};

/// 匯出錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV 寫入失敗: {0}")]
    Csv(#[from] csv::Error),

    #[error("檔案寫入失敗: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// 匯出格式
///
/// 目前只實作 CSV 寫出；其他格式僅決定檔名。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    /// 副檔名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}
