//! 先進先出批次耗用計算

use fifo_core::{Batch, InventoryItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// 數量、單價、金額三元組
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Valuation {
    pub qty: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

impl Valuation {
    /// 由數量與金額建立，單價 = 金額 / 數量（數量為 0 時單價為 0）
    pub fn from_qty_amount(qty: Decimal, amount: Decimal) -> Self {
        Self {
            qty,
            rate: rate_of(amount, qty),
            amount,
        }
    }
}

/// 金額除以數量；數量為 0 時回傳 0
pub(crate) fn rate_of(amount: Decimal, qty: Decimal) -> Decimal {
    if qty.is_zero() {
        return Decimal::ZERO;
    }
    amount.checked_div(qty).unwrap_or(Decimal::ZERO)
}

/// 批次序列及其評價
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchValuation {
    pub batches: Vec<Batch>,
    pub valuation: Valuation,
}

/// 支出分配結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenditureAllocation {
    /// 依先進先出耗用的批次（沿用原批次ID與單價）
    pub batches: Vec<Batch>,

    /// qty 為「申請」的支出數量，而非實際可分配數量
    pub valuation: Valuation,

    /// 供應不足而未能分配的數量
    pub shortfall: Decimal,
}

impl ExpenditureAllocation {
    /// 實際分配到批次的數量
    pub fn allocated_qty(&self) -> Decimal {
        self.batches.iter().map(Batch::qty).sum()
    }

    pub fn has_shortfall(&self) -> bool {
        self.shortfall > Decimal::ZERO
    }
}

/// 單一品項的五欄評價
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemStatement {
    pub prev_month: Valuation,
    pub received_this_month: Valuation,
    pub total_received: Valuation,
    pub expenditure: Valuation,
    pub balance: Valuation,
}

/// 一次走訪的結果：耗用部分、剩餘部分、未滿足數量
struct Walk {
    consumed: Vec<Batch>,
    residual: Vec<Batch>,
    remaining: Decimal,
}

/// 先進先出計算器
///
/// 所有運算皆為純函數：相同輸入必得相同輸出，不做任何進位。
pub struct FifoCalculator;

impl FifoCalculator {
    /// 加權平均單價：sum(qty*rate) / sum(qty)
    pub fn aggregate_rate(batches: &[Batch]) -> Decimal {
        Self::valuation(batches).rate
    }

    /// 任意批次序列的評價
    pub fn valuation(batches: &[Batch]) -> Valuation {
        let qty: Decimal = batches.iter().map(Batch::qty).sum();
        let amount: Decimal = batches.iter().map(Batch::amount).sum();
        Valuation::from_qty_amount(qty, amount)
    }

    /// 本月可用佇列：上月結存在前，本月進貨在後
    pub fn queue(item: &InventoryItem) -> Vec<Batch> {
        item.prev_month
            .batches
            .iter()
            .chain(item.received_this_month.batches.iter())
            .cloned()
            .collect()
    }

    /// 收入合計
    pub fn total_received(item: &InventoryItem) -> BatchValuation {
        let batches = Self::queue(item);
        let valuation = Self::valuation(&batches);
        BatchValuation { batches, valuation }
    }

    /// 支出分配
    pub fn expenditure_allocation(item: &InventoryItem) -> ExpenditureAllocation {
        let requested = item.expenditure_qty();
        let walk = Self::walk(&Self::queue(item), requested);

        let amount: Decimal = walk.consumed.iter().map(Batch::amount).sum();
        let shortfall = walk.remaining.max(Decimal::ZERO);
        if shortfall > Decimal::ZERO {
            tracing::debug!(
                "品項 {} ({}) 支出 {} 超過可用數量，未分配 {}",
                item.id,
                item.name,
                requested,
                shortfall
            );
        }

        ExpenditureAllocation {
            batches: walk.consumed,
            valuation: Valuation::from_qty_amount(requested, amount),
            shortfall,
        }
    }

    /// 下月結存分配
    pub fn balance_allocation(item: &InventoryItem) -> BatchValuation {
        let walk = Self::walk(&Self::queue(item), item.expenditure_qty());
        let valuation = Self::valuation(&walk.residual);
        BatchValuation {
            batches: walk.residual,
            valuation,
        }
    }

    /// 品項五欄評價
    pub fn statement(item: &InventoryItem) -> ItemStatement {
        ItemStatement {
            prev_month: Self::valuation(&item.prev_month.batches),
            received_this_month: Self::valuation(&item.received_this_month.batches),
            total_received: Self::total_received(item).valuation,
            expenditure: Self::expenditure_allocation(item).valuation,
            balance: Self::balance_allocation(item).valuation,
        }
    }

    /// 依序走訪佇列並耗用 `qty`
    ///
    /// - 剩餘需求 <= 0：該批次（含之後所有批次）整筆進入剩餘序列
    /// - 否則取用 min(批次數量, 剩餘需求)，每個批次最多產生一筆耗用
    /// - 部分耗用的批次，其餘量 > 0 時才進入剩餘序列
    fn walk(queue: &[Batch], qty: Decimal) -> Walk {
        let mut remaining = qty;
        let mut consumed = Vec::new();
        let mut residual = Vec::new();

        for batch in queue {
            if remaining <= Decimal::ZERO {
                residual.push(batch.clone());
                continue;
            }

            let (taken, leftover) = batch.consume(remaining);
            remaining -= taken.qty();
            consumed.push(taken);

            if leftover.qty() > Decimal::ZERO {
                residual.push(leftover);
            }
        }

        Walk {
            consumed,
            residual,
            remaining,
        }
    }
}
