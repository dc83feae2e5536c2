//! 顯示格式（僅用於呈現，計算過程不進位）

use rust_decimal::{Decimal, RoundingStrategy};

/// 顯示小數位數
pub const DISPLAY_SCALE: u32 = 2;

/// 四捨五入至兩位小數並補零，如 `10.5` → `"10.50"`
pub fn fixed(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}
