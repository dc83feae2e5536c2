//! 帳本配置

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result};

/// 帳本配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// 報表月份（固定為該月 1 日）
    pub month: NaiveDate,

    /// 報表標題
    pub title: String,

    /// 貨幣符號（僅供顯示）
    pub currency_symbol: String,

    /// 儲存鍵值
    pub storage: StorageKeys,
}

impl LedgerConfig {
    /// 創建新的配置
    pub fn new(month: NaiveDate) -> Self {
        Self {
            month: month.with_day(1).unwrap_or(month),
            title: "FIFO INVENTORY MANAGEMENT SYSTEM".to_string(),
            currency_symbol: "₹".to_string(),
            storage: StorageKeys::default(),
        }
    }

    /// 從年月建立
    pub fn from_year_month(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::new)
            .ok_or_else(|| LedgerError::InvalidMonth(format!("{}-{:02}", year, month)))
    }

    /// 從 `YYYY-MM` 格式建立（月份輸入欄位的格式）
    ///
    /// # 範例
    /// ```
    /// # use fifo_core::LedgerConfig;
    /// let config = LedgerConfig::for_month("2026-10").unwrap();
    /// assert_eq!(config.month_label(), "October 2026");
    /// ```
    pub fn for_month(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
            .map(Self::new)
            .map_err(|_| LedgerError::InvalidMonth(value.to_string()))
    }

    /// 建構器模式：設置報表標題
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 建構器模式：設置貨幣符號
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// 建構器模式：設置儲存鍵值
    pub fn with_storage_keys(mut self, storage: StorageKeys) -> Self {
        self.storage = storage;
        self
    }

    /// 月份顯示名稱，如 "October 2026"
    pub fn month_label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    /// 報表月份的天數
    pub fn days_in_month(&self) -> u32 {
        let month = self.month.month();
        self.month
            .iter_days()
            .take_while(|day| day.month() == month)
            .count() as u32
    }
}

/// 鍵值儲存使用的固定鍵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// 品項清單
    pub items: String,

    /// 補充摘要數字
    pub editable_summary: String,

    /// 口糧與出勤數字
    pub ration_attendance: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            items: "fifo-inventory".to_string(),
            editable_summary: "editable-summary".to_string(),
            ration_attendance: "ration-attendance".to_string(),
        }
    }
}
