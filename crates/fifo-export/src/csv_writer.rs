//! CSV 匯出

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use fifo_core::{InventoryItem, LedgerConfig};

use crate::naming::export_file_name;
use crate::sheet::{Sheet, SheetBuilder};
use crate::{ExportFormat, Result};

/// CSV 匯出器
pub struct CsvExporter;

impl CsvExporter {
    /// 將表格寫入任意輸出
    ///
    /// 各列欄數不同（標題列只有一格），因此使用 flexible 模式。
    pub fn write_sheet<W: Write>(sheet: &Sheet, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(writer);

        for row in &sheet.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// 轉為字串
    pub fn render(sheet: &Sheet) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_sheet(sheet, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// 組裝報表並寫入目錄，回傳檔案路徑
    pub fn export_to_dir(
        dir: &Path,
        config: &LedgerConfig,
        items: &[InventoryItem],
    ) -> Result<PathBuf> {
        let sheet = SheetBuilder::new(config).build(items);
        let path = dir.join(export_file_name(&config.month_label(), ExportFormat::Csv));

        let file = File::create(&path)?;
        Self::write_sheet(&sheet, file)?;

        tracing::info!("匯出報表: {}（{} 列）", path.display(), sheet.rows.len());
        Ok(path)
    }
}
