//! 全帳彙總

use fifo_core::InventoryItem;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::fifo::{rate_of, FifoCalculator, ItemStatement, Valuation};
use crate::LedgerWarning;

/// 數量與金額合計（單價不累加）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub qty: Decimal,
    pub amount: Decimal,
}

impl Totals {
    /// 顯示用單價，每次由金額 / 數量重新計算
    pub fn rate(&self) -> Decimal {
        rate_of(self.amount, self.qty)
    }

    fn accumulate(&mut self, valuation: &Valuation) {
        self.qty += valuation.qty;
        self.amount += valuation.amount;
    }
}

/// 五欄總計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub prev_month_total: Totals,
    pub received_this_month_total: Totals,
    pub total_received_total: Totals,
    /// qty 累加的是申請的支出數量
    pub total_expenditure_total: Totals,
    pub balance_next_month_total: Totals,
}

impl Summary {
    fn absorb(&mut self, statement: &ItemStatement) {
        self.prev_month_total.accumulate(&statement.prev_month);
        self.received_this_month_total.accumulate(&statement.received_this_month);
        self.total_received_total.accumulate(&statement.total_received);
        self.total_expenditure_total.accumulate(&statement.expenditure);
        self.balance_next_month_total.accumulate(&statement.balance);
    }
}

/// 彙總計算器
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 彙總所有品項
    ///
    /// 每次呼叫都從品項集合重新計算，不保留任何快取。
    pub fn summarize(items: &[InventoryItem]) -> Summary {
        tracing::debug!("開始彙總：品項 {} 筆", items.len());

        let summary = items.iter().fold(Summary::default(), |mut summary, item| {
            let statement = FifoCalculator::statement(item);
            tracing::debug!(
                "品項 {}: 收入 {} / 支出 {} / 結存 {}",
                item.name,
                statement.total_received.qty,
                statement.expenditure.qty,
                statement.balance.qty
            );
            summary.absorb(&statement);
            summary
        });

        tracing::debug!(
            "彙總完成：支出金額 {}，結存金額 {}",
            summary.total_expenditure_total.amount,
            summary.balance_next_month_total.amount
        );

        summary
    }

    /// 檢查品項資料，回傳報表可能失真的警告
    ///
    /// 警告不影響總計。
    pub fn warnings(items: &[InventoryItem]) -> Vec<LedgerWarning> {
        let mut warnings = Vec::new();

        for item in items {
            let requested = item.expenditure_qty();
            if requested.is_zero() {
                continue;
            }

            if !item.has_batches() {
                warnings.push(LedgerWarning::error(
                    item.id,
                    format!("品項 {} 沒有任何批次，但支出為 {}", item.name, requested),
                ));
                continue;
            }

            let allocation = FifoCalculator::expenditure_allocation(item);
            if allocation.has_shortfall() {
                tracing::warn!(
                    "品項 {} ({}) 支出 {} 超過可用數量，未分配 {}",
                    item.id,
                    item.name,
                    requested,
                    allocation.shortfall
                );
                warnings.push(LedgerWarning::warning(
                    item.id,
                    format!(
                        "品項 {} 支出 {} 超過可用數量 {}，支出與結存合計將不等於收入",
                        item.name,
                        requested,
                        allocation.allocated_qty()
                    ),
                ));
            }
        }

        warnings
    }
}
