//! # FIFO Ledger
//!
//! 先進先出庫存帳：批次模型、FIFO 計算、儲存與報表匯出

pub use fifo_calc;
pub use fifo_core;
pub use fifo_export;
pub use fifo_store;

use fifo_calc::{
    AttendanceReport, BatchRow, LedgerWarning, RationCalculator, RationReport, RowMaterializer,
    Summary, SummaryCalculator,
};
use fifo_core::{EditableSummary, InventoryBook, LedgerConfig, RationSheet};
use fifo_store::{KeyValueStore, LedgerRepository};

/// 單月完整報表
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub month_label: String,
    pub rows: Vec<BatchRow>,
    pub summary: Summary,
    pub warnings: Vec<LedgerWarning>,
    pub editable: EditableSummary,
    pub ration: RationReport,
    pub attendance: AttendanceReport,
}

impl MonthlyReport {
    /// 由帳簿與補充數字計算報表
    pub fn compute(
        book: &InventoryBook,
        editable: EditableSummary,
        sheet: &RationSheet,
        config: &LedgerConfig,
    ) -> Self {
        tracing::info!("計算 {} 報表：品項 {} 筆", config.month_label(), book.len());

        let items = book.items();
        let summary = SummaryCalculator::summarize(items);
        let ration = RationCalculator::ration(&summary, &editable, sheet);
        let attendance = RationCalculator::attendance(&ration, sheet, config);

        Self {
            month_label: config.month_label(),
            rows: RowMaterializer::render_all(items),
            summary,
            warnings: SummaryCalculator::warnings(items),
            editable,
            ration,
            attendance,
        }
    }

    /// 從儲存載入全部資料後計算
    pub fn load<S: KeyValueStore>(
        repo: &LedgerRepository<S>,
        config: &LedgerConfig,
    ) -> fifo_store::Result<Self> {
        let book = repo.load_items_or_sample()?;
        let editable = repo.load_editable_summary()?;
        let sheet = repo.load_ration_sheet()?;
        Ok(Self::compute(&book, editable, &sheet, config))
    }
}
