//! 口糧與出勤計算

use fifo_core::{EditableSummary, LedgerConfig, RationSheet};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::fifo::rate_of;
use crate::summary::Summary;

/// 口糧耗用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RationReport {
    /// 乾糧耗用（= 庫存支出金額合計）
    pub dry_ration_consumed: Decimal,
    /// 生鮮耗用（= 補充摘要的本月支出）
    pub fresh_ration_consumed: Decimal,
    pub total_ration_consumed: Decimal,
    /// 扣除 casual diet、RI person、bara khana 後的淨額
    pub net_amount: Decimal,
}

/// 出勤與伙食費
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    pub net_attendance: i64,
    pub total_days_month: u32,
    pub per_day_diet_amount: Decimal,
    pub total_ration_expenditure: Decimal,
    pub mess_profit: Decimal,
}

/// 口糧計算器
pub struct RationCalculator;

impl RationCalculator {
    /// 計算口糧耗用
    pub fn ration(summary: &Summary, editable: &EditableSummary, sheet: &RationSheet) -> RationReport {
        let dry = summary.total_expenditure_total.amount;
        let fresh = editable.expenditures_month;
        let total = dry + fresh;
        let deductions = sheet.ration.casual_diet + sheet.ration.ri_person + sheet.ration.bara_khana;

        RationReport {
            dry_ration_consumed: dry,
            fresh_ration_consumed: fresh,
            total_ration_consumed: total,
            net_amount: total - deductions,
        }
    }

    /// 計算出勤與伙食費
    ///
    /// 月份天數取自配置中的報表月份。
    pub fn attendance(
        ration: &RationReport,
        sheet: &RationSheet,
        config: &LedgerConfig,
    ) -> AttendanceReport {
        let attendance = &sheet.attendance;
        let net_attendance = i64::from(attendance.total_attendance)
            - i64::from(attendance.less_casual_attendance)
            - i64::from(attendance.less_ri_attendance);
        let days = config.days_in_month();

        AttendanceReport {
            net_attendance,
            total_days_month: days,
            per_day_diet_amount: rate_of(attendance.rma_per_month, Decimal::from(days)),
            total_ration_expenditure: ration.net_amount,
            mess_profit: attendance.recovery_from_jawans - ration.net_amount,
        }
    }
}
