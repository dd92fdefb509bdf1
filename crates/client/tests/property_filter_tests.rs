//! Property-based tests for the filter/search engine.
//!
//! This module uses proptest to verify:
//! - A filtered view is an order-preserving subsequence of its input
//! - Every kept record matches the query and every predicate
//! - Every dropped record fails the query or some predicate
//! - Filtering is idempotent
//! - `All` categories and the empty query are no-ops

use gateway_client::filter::{
    AccountStatusFilter, AckFilter, FilterCategory, LinkStatusFilter, Predicate, SeverityFilter,
    filter_indices, filter_records, matches_query,
};
use gateway_client::models::{Alarm, Device};
use gateway_client::testing::{arb_alarms, arb_categorical, arb_devices, arb_query, arb_users};
use proptest::prelude::*;

fn arb_ack_filter() -> impl Strategy<Value = AckFilter> {
    prop::sample::select(AckFilter::ALL.to_vec())
}

fn arb_severity_filter() -> impl Strategy<Value = SeverityFilter> {
    prop_oneof![
        Just(SeverityFilter::All),
        arb_categorical().prop_map(SeverityFilter::Only),
    ]
}

fn arb_link_filter() -> impl Strategy<Value = LinkStatusFilter> {
    prop_oneof![
        Just(LinkStatusFilter::All),
        arb_categorical().prop_map(LinkStatusFilter::Only),
    ]
}

proptest! {
    #[test]
    fn prop_indices_are_strictly_increasing(devices in arb_devices(), query in arb_query()) {
        let indices = filter_indices(&devices, &query, &[]);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < devices.len()));
    }

    #[test]
    fn prop_kept_and_dropped_partition_correctly(
        alarms in arb_alarms(),
        query in arb_query(),
        ack in arb_ack_filter(),
        severity in arb_severity_filter(),
    ) {
        let predicates: [&dyn Predicate<Alarm>; 2] = [&ack, &severity];
        let indices = filter_indices(&alarms, &query, &predicates);
        for (i, alarm) in alarms.iter().enumerate() {
            let expected = matches_query(alarm, &query) && ack.matches(alarm) && severity.matches(alarm);
            prop_assert_eq!(indices.contains(&i), expected);
        }
    }

    #[test]
    fn prop_filtering_is_idempotent(
        devices in arb_devices(),
        query in arb_query(),
        status in arb_link_filter(),
    ) {
        let once: Vec<Device> = filter_records(&devices, &query, &[&status])
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Device> = filter_records(&once, &query, &[&status])
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_all_and_empty_query_keep_everything(
        alarms in arb_alarms(),
        users in arb_users(),
    ) {
        let predicates: [&dyn Predicate<Alarm>; 2] = [&AckFilter::All, &SeverityFilter::All];
        prop_assert_eq!(filter_indices(&alarms, "", &predicates).len(), alarms.len());
        prop_assert_eq!(
            filter_indices(&users, "", &[&AccountStatusFilter::All]).len(),
            users.len()
        );
    }

    #[test]
    fn prop_query_case_does_not_matter(devices in arb_devices(), query in arb_query()) {
        let lower = filter_indices(&devices, &query.to_lowercase(), &[]);
        let upper = filter_indices(&devices, &query.to_uppercase(), &[]);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn prop_category_cycle_returns_to_start(start in arb_link_filter()) {
        let mut current = start.next();
        let mut steps = 1;
        while current != start {
            current = current.next();
            steps += 1;
            prop_assert!(steps <= 4);
        }
    }
}
