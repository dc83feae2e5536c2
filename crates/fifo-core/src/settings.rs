//! 補充數字（摘要、口糧、出勤）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 可編輯的補充摘要（生鮮口糧金額）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableSummary {
    /// 上月生鮮收入
    pub prev_month_fresh: Decimal,

    /// 本月生鮮採購
    pub this_month_purchased: Decimal,

    /// 本月支出
    pub expenditures_month: Decimal,
}

impl Default for EditableSummary {
    fn default() -> Self {
        Self {
            prev_month_fresh: Decimal::from(9000),
            this_month_purchased: Decimal::from(8000),
            expenditures_month: Decimal::from(12000),
        }
    }
}

impl EditableSummary {
    /// 生鮮採購合計
    pub fn total_fresh_purchased(&self) -> Decimal {
        self.prev_month_fresh + self.this_month_purchased
    }

    /// 下月結餘
    pub fn balance_next_month(&self) -> Decimal {
        self.total_fresh_purchased() - self.expenditures_month
    }
}

/// 口糧扣除項目
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RationInputs {
    pub casual_diet: Decimal,
    pub ri_person: Decimal,
    pub bara_khana: Decimal,
}

/// 出勤與伙食費輸入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInputs {
    pub total_attendance: u32,
    pub less_casual_attendance: u32,
    pub less_ri_attendance: u32,

    /// 每月伙食津貼（RMA）
    pub rma_per_month: Decimal,

    pub recovery_from_jawans: Decimal,
}

impl Default for AttendanceInputs {
    fn default() -> Self {
        Self {
            total_attendance: 450,
            less_casual_attendance: 0,
            less_ri_attendance: 0,
            rma_per_month: Decimal::from(5000),
            recovery_from_jawans: Decimal::ZERO,
        }
    }
}

/// 口糧與出勤（同一份文件儲存）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RationSheet {
    pub ration: RationInputs,
    pub attendance: AttendanceInputs,
}
