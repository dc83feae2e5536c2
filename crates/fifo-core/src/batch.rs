//! 批次模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result};

/// 成本批次
///
/// 數量與單價皆不可為負；金額一律由 `qty * rate` 推導，不另外儲存。
/// 建立後不可修改，編輯時以新紀錄整筆取代。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BatchRecord")]
pub struct Batch {
    id: u64,
    qty: Decimal,
    rate: Decimal,
}

/// 反序列化用的原始紀錄，轉換時檢查非負約束
#[derive(Deserialize)]
struct BatchRecord {
    id: u64,
    qty: Decimal,
    rate: Decimal,
}

impl TryFrom<BatchRecord> for Batch {
    type Error = LedgerError;

    fn try_from(record: BatchRecord) -> Result<Self> {
        Batch::new(record.id, record.qty, record.rate)
    }
}

impl Batch {
    /// 創建新的批次
    pub fn new(id: u64, qty: Decimal, rate: Decimal) -> Result<Self> {
        if qty < Decimal::ZERO {
            return Err(LedgerError::NegativeQuantity(qty));
        }
        if rate < Decimal::ZERO {
            return Err(LedgerError::NegativeRate(rate));
        }
        // 金額 = qty * rate，建立時即確認不會溢位
        if qty.checked_mul(rate).is_none() {
            return Err(LedgerError::AmountOverflow { qty, rate });
        }
        Ok(Self { id, qty, rate })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn qty(&self) -> Decimal {
        self.qty
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// 批次金額
    pub fn amount(&self) -> Decimal {
        self.qty * self.rate
    }

    /// 從本批次取用 `wanted` 數量
    ///
    /// 回傳（已取用部分, 剩餘部分），兩者皆沿用原批次的 id 與單價。
    /// 取用量會被限制在 `[0, qty]` 之間。
    pub fn consume(&self, wanted: Decimal) -> (Batch, Batch) {
        let taken = wanted.max(Decimal::ZERO).min(self.qty);
        let consumed = Batch {
            id: self.id,
            qty: taken,
            rate: self.rate,
        };
        let leftover = Batch {
            id: self.id,
            qty: self.qty - taken,
            rate: self.rate,
        };
        (consumed, leftover)
    }
}

/// 批次序列（依先進先出順序排列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSet {
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl BatchSet {
    pub fn new(batches: Vec<Batch>) -> Self {
        Self { batches }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// 總數量
    pub fn total_qty(&self) -> Decimal {
        self.batches.iter().map(Batch::qty).sum()
    }

    /// 總金額
    pub fn total_amount(&self) -> Decimal {
        self.batches.iter().map(Batch::amount).sum()
    }
}

/// 批次所屬欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchKind {
    /// 上月結存
    PrevMonth,
    /// 本月進貨
    ReceivedThisMonth,
}

/// 本月支出（單一數量，不分批次）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpenditureRecord")]
pub struct Expenditure {
    qty: Decimal,
}

#[derive(Deserialize)]
struct ExpenditureRecord {
    qty: Decimal,
}

impl TryFrom<ExpenditureRecord> for Expenditure {
    type Error = LedgerError;

    fn try_from(record: ExpenditureRecord) -> Result<Self> {
        Expenditure::new(record.qty)
    }
}

impl Expenditure {
    pub fn new(qty: Decimal) -> Result<Self> {
        if qty < Decimal::ZERO {
            return Err(LedgerError::NegativeQuantity(qty));
        }
        Ok(Self { qty })
    }

    pub fn qty(&self) -> Decimal {
        self.qty
    }
}

/// 使用者輸入的批次資料（介面邊界驗證）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub qty: Decimal,
    pub rate: Decimal,
}

impl BatchEntry {
    pub fn new(qty: Decimal, rate: Decimal) -> Self {
        Self { qty, rate }
    }

    /// 數量與單價皆須大於 0
    pub fn validate(&self) -> Result<()> {
        if self.qty <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveEntry {
                field: "qty",
                value: self.qty,
            });
        }
        if self.rate <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveEntry {
                field: "rate",
                value: self.rate,
            });
        }
        Ok(())
    }

    /// 驗證後建立批次
    pub fn into_batch(self, id: u64) -> Result<Batch> {
        self.validate()?;
        Batch::new(id, self.qty, self.rate)
    }
}
