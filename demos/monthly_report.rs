//! 月報表示例：範例資料 → 彙總 → 報表列 → CSV

use fifo_calc::format::fixed;
use fifo_core::{BatchEntry, BatchKind, LedgerConfig};
use fifo_export::CsvExporter;
use fifo_ledger::MonthlyReport;
use fifo_store::{LedgerRepository, MemoryStore};
use rust_decimal::Decimal;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("=== FIFO 庫存月報表示例 ===\n");

    let config = LedgerConfig::for_month("2026-10")?;
    let mut repo = LedgerRepository::new(MemoryStore::new());

    // 首次載入使用範例資料，新增一筆本月進貨後存回
    let mut book = repo.load_items_or_sample()?;
    if let Some(mut flour) = book.get(3).cloned() {
        flour.push_batch(
            BatchKind::ReceivedThisMonth,
            BatchEntry::new(Decimal::from(40), Decimal::new(86, 1)),
        )?;
        book.update(flour)?;
    }
    repo.save_items(&book)?;

    let report = MonthlyReport::load(&repo, &config)?;

    println!("{} / {}\n", config.title, report.month_label);
    for row in &report.rows {
        println!("{}", row.cells().join(" | "));
    }

    let summary = &report.summary;
    println!("\n總計:");
    for (label, totals) in [
        ("上月", &summary.prev_month_total),
        ("本月進貨", &summary.received_this_month_total),
        ("收入合計", &summary.total_received_total),
        ("支出", &summary.total_expenditure_total),
        ("結存", &summary.balance_next_month_total),
    ] {
        println!(
            "  {label}: 數量 {}，單價 {}{}，金額 {}{}",
            fixed(totals.qty),
            config.currency_symbol,
            fixed(totals.rate()),
            config.currency_symbol,
            fixed(totals.amount)
        );
    }

    println!("\n口糧:");
    println!("  乾糧耗用: {}", fixed(report.ration.dry_ration_consumed));
    println!("  生鮮耗用: {}", fixed(report.ration.fresh_ration_consumed));
    println!("  淨額: {}", fixed(report.ration.net_amount));
    println!(
        "  出勤 {} 人，{} 天，每日伙食 {}",
        report.attendance.net_attendance,
        report.attendance.total_days_month,
        fixed(report.attendance.per_day_diet_amount)
    );

    for warning in &report.warnings {
        println!("  [{:?}] {}", warning.severity, warning.message);
    }

    let dir = tempfile::tempdir()?;
    let path = CsvExporter::export_to_dir(dir.path(), &config, book.items())?;
    println!("\n已匯出: {}", path.display());

    Ok(())
}
