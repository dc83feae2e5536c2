//! 性質測試

use fifo_calc::{FifoCalculator, RowMaterializer, SummaryCalculator, Totals};
use fifo_core::{Batch, Expenditure, InventoryItem};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn batches_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..500, 0u32..5_000), 0..6)
}

fn item_strategy() -> impl Strategy<Value = InventoryItem> {
    (batches_strategy(), batches_strategy(), 0u32..3_000).prop_map(|(prev, received, spent)| {
        let mut next_id = 0;
        let mut build = |raw: Vec<(u32, u32)>| -> Vec<Batch> {
            raw.into_iter()
                .map(|(qty, cents)| {
                    next_id += 1;
                    Batch::new(next_id, Decimal::from(qty), Decimal::new(i64::from(cents), 2)).unwrap()
                })
                .collect()
        };
        let prev = build(prev);
        let received = build(received);
        InventoryItem::new(1, "Item", "KG")
            .with_prev_month(prev)
            .with_received_this_month(received)
            .with_expenditure(Expenditure::new(Decimal::from(spent)).unwrap())
    })
}

proptest! {
    #[test]
    fn summary_equals_sum_of_items(items in prop::collection::vec(item_strategy(), 0..8)) {
        let summary = SummaryCalculator::summarize(&items);

        let mut prev = Totals::default();
        let mut received = Totals::default();
        let mut total = Totals::default();
        let mut expenditure = Totals::default();
        let mut balance = Totals::default();
        for item in &items {
            let prev_value = FifoCalculator::valuation(&item.prev_month.batches);
            prev.qty += prev_value.qty;
            prev.amount += prev_value.amount;

            let received_value = FifoCalculator::valuation(&item.received_this_month.batches);
            received.qty += received_value.qty;
            received.amount += received_value.amount;

            let total_value = FifoCalculator::total_received(item).valuation;
            total.qty += total_value.qty;
            total.amount += total_value.amount;

            let spent = FifoCalculator::expenditure_allocation(item);
            expenditure.qty += item.expenditure_qty();
            expenditure.amount += spent.batches.iter().map(Batch::amount).sum::<Decimal>();

            let left = FifoCalculator::balance_allocation(item);
            balance.qty += left.batches.iter().map(Batch::qty).sum::<Decimal>();
            balance.amount += left.batches.iter().map(Batch::amount).sum::<Decimal>();
        }

        prop_assert_eq!(summary.prev_month_total, prev);
        prop_assert_eq!(summary.received_this_month_total, received);
        prop_assert_eq!(summary.total_received_total, total);
        prop_assert_eq!(summary.total_expenditure_total, expenditure);
        prop_assert_eq!(summary.balance_next_month_total, balance);
        prop_assert_eq!(
            summary.total_received_total.qty,
            summary.prev_month_total.qty + summary.received_this_month_total.qty
        );
    }

    #[test]
    fn conservation_within_supply(item in item_strategy()) {
        let total = FifoCalculator::total_received(&item).valuation;
        prop_assume!(item.expenditure_qty() <= total.qty);

        let spent = FifoCalculator::expenditure_allocation(&item);
        let balance = FifoCalculator::balance_allocation(&item).valuation;

        prop_assert!(spent.shortfall.is_zero());
        prop_assert_eq!(spent.valuation.qty + balance.qty, total.qty);
        prop_assert_eq!(spent.valuation.amount + balance.amount, total.amount);
    }

    #[test]
    fn aggregate_rate_reproduces_amount(raw in batches_strategy()) {
        let batches: Vec<Batch> = raw
            .into_iter()
            .enumerate()
            .map(|(i, (qty, cents))| {
                Batch::new(i as u64 + 1, Decimal::from(qty), Decimal::new(i64::from(cents), 2)).unwrap()
            })
            .collect();
        let valuation = FifoCalculator::valuation(&batches);
        let rate = FifoCalculator::aggregate_rate(&batches);

        if valuation.qty.is_zero() {
            prop_assert_eq!(rate, Decimal::ZERO);
        } else {
            let diff = (rate * valuation.qty - valuation.amount).abs();
            prop_assert!(diff < Decimal::new(1, 6), "diff = {}", diff);
        }
    }

    #[test]
    fn row_count_covers_every_column(item in item_strategy()) {
        let rows = RowMaterializer::materialize(&item, 1);
        let queue = FifoCalculator::queue(&item);

        prop_assert!(!rows.is_empty());
        prop_assert!(rows.len() >= queue.len());
        prop_assert!(rows.len() >= item.prev_month.len());
        prop_assert!(rows.len() >= item.received_this_month.len());
    }
}
