//! Property tests for the streak calculators.

use habitstreak_core::{
    compute_aggregate_streak, compute_streak, CadencePolicy, CompletionRecord, DayKey, HabitId,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn today() -> DayKey {
    "2024-06-12".parse().unwrap()
}

fn records_from_offsets(offsets: &[i64]) -> Vec<CompletionRecord> {
    offsets
        .iter()
        .map(|offset| CompletionRecord::done("h", today().add_days(-offset)))
        .collect()
}

fn policy_strategy() -> impl Strategy<Value = CadencePolicy> {
    prop_oneof![
        Just(CadencePolicy::Daily),
        (1u8..=7).prop_map(|n| CadencePolicy::weekly(n).unwrap()),
    ]
}

fn offsets_and_shuffle() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::vec(0i64..90, 0..40)
        .prop_flat_map(|offsets| (Just(offsets.clone()), Just(offsets).prop_shuffle()))
}

proptest! {
    #[test]
    fn longest_is_never_below_current(
        policy in policy_strategy(),
        offsets in prop::collection::vec(0i64..90, 0..40),
    ) {
        let result = compute_streak(policy, &records_from_offsets(&offsets), today());
        prop_assert!(result.longest_streak >= result.current_streak);
    }

    #[test]
    fn same_input_same_result(
        policy in policy_strategy(),
        offsets in prop::collection::vec(0i64..90, 0..40),
    ) {
        let records = records_from_offsets(&offsets);
        prop_assert_eq!(
            compute_streak(policy, &records, today()),
            compute_streak(policy, &records, today())
        );
    }

    #[test]
    fn record_order_does_not_matter(
        policy in policy_strategy(),
        (offsets, shuffled) in offsets_and_shuffle(),
    ) {
        prop_assert_eq!(
            compute_streak(policy, &records_from_offsets(&offsets), today()),
            compute_streak(policy, &records_from_offsets(&shuffled), today())
        );
    }

    #[test]
    fn daily_streak_broken_when_latest_older_than_yesterday(
        offsets in prop::collection::vec(2i64..90, 1..40),
    ) {
        let result = compute_streak(CadencePolicy::Daily, &records_from_offsets(&offsets), today());
        prop_assert_eq!(result.current_streak, 0);
        prop_assert!(result.longest_streak >= 1);
    }

    #[test]
    fn weekly_streak_broken_when_latest_week_older_than_last_week(
        times in 1u8..=7,
        offsets in prop::collection::vec(0i64..60, 1..40),
    ) {
        // shift every record to before the start of last week
        let cutoff = today().week_start().prev_week_start();
        let gap = cutoff.days_since(today()).abs() + 1;
        let shifted: Vec<i64> = offsets.iter().map(|o| o + gap).collect();
        let policy = CadencePolicy::weekly(times).unwrap();
        let result = compute_streak(policy, &records_from_offsets(&shifted), today());
        prop_assert_eq!(result.current_streak, 0);
    }

    #[test]
    fn daily_current_never_exceeds_distinct_days(
        offsets in prop::collection::vec(0i64..30, 0..40),
    ) {
        let distinct: HashSet<i64> = offsets.iter().copied().collect();
        let result = compute_streak(CadencePolicy::Daily, &records_from_offsets(&offsets), today());
        prop_assert!(result.longest_streak as usize <= distinct.len());
        prop_assert_eq!(result.total_completions as usize, offsets.len());
    }

    #[test]
    fn aggregate_is_order_independent_and_bounded(
        entries in prop::collection::vec((0usize..3, 0i64..30), 0..60)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let (ordered, shuffled) = entries;
        let ids = ["a", "b", "c"];
        let active: HashSet<HabitId> = ids.iter().map(|id| HabitId::from(*id)).collect();
        let to_records = |entries: &[(usize, i64)]| -> Vec<CompletionRecord> {
            entries
                .iter()
                .map(|(habit, offset)| {
                    CompletionRecord::done(ids[*habit], today().add_days(-offset))
                })
                .collect()
        };
        let first = compute_aggregate_streak(&active, &to_records(&ordered), today());
        let second = compute_aggregate_streak(&active, &to_records(&shuffled), today());
        prop_assert_eq!(first, second);
        prop_assert!(first.longest_streak >= first.current_streak);
    }
}
