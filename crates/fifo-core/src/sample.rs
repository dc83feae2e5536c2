//! 範例資料（首次使用時的預設品項）

use rust_decimal::Decimal;

use crate::batch::{Batch, Expenditure};
use crate::item::InventoryItem;

/// 以 (id, 數量, 單價×10) 建立批次；範例資料皆為合法非負數
fn batches(rows: &[(u64, i64, i64)]) -> Vec<Batch> {
    rows.iter()
        .filter_map(|&(id, qty, rate_tenths)| {
            Batch::new(id, Decimal::from(qty), Decimal::new(rate_tenths, 1)).ok()
        })
        .collect()
}

fn expenditure(qty: i64) -> Expenditure {
    Expenditure::new(Decimal::from(qty)).unwrap_or_default()
}

/// 範例品項：Basmati Rice、Olive Oil、Wheat Flour
pub fn sample_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(1, "Basmati Rice", "KG")
            .with_prev_month(batches(&[
                (1, 100, 100),
                (2, 50, 120),
                (3, 75, 110),
                (4, 60, 105),
                (5, 40, 115),
            ]))
            .with_received_this_month(batches(&[(6, 80, 110), (7, 90, 112), (8, 70, 108)]))
            .with_expenditure(expenditure(320)),
        InventoryItem::new(2, "Olive Oil", "L")
            .with_prev_month(batches(&[(1, 150, 150), (2, 100, 155)]))
            .with_received_this_month(batches(&[(3, 100, 160), (4, 50, 155), (5, 75, 162)]))
            .with_expenditure(expenditure(280)),
        InventoryItem::new(3, "Wheat Flour", "KG")
            .with_prev_month(batches(&[(1, 75, 80), (2, 60, 82), (3, 50, 78)]))
            .with_received_this_month(batches(&[(4, 125, 85)]))
            .with_expenditure(expenditure(210)),
    ]
}
