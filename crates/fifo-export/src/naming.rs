//! 匯出檔名

use crate::ExportFormat;

/// 匯出檔名：`FIFO_Inventory_<月份標籤>.<副檔名>`
///
/// 標籤中每段連續空白換成一個 `_`。
pub fn export_file_name(label: &str, format: ExportFormat) -> String {
    let mut name = String::from("FIFO_Inventory_");
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push('.');
    name.push_str(format.extension());
    name
}
