//! Property tests for date-to-shift resolution.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shiftcal_core::{resolve, Group, ShiftResolver, ShiftType, CYCLE_LEN, DEFAULT_EPOCH};

fn any_group() -> impl Strategy<Value = Group> {
    prop::sample::select(Group::ALL.to_vec())
}

/// Days from the epoch, covering several centuries either side.
fn any_offset() -> impl Strategy<Value = i64> {
    -200_000i64..200_000
}

fn day(offset: i64) -> NaiveDate {
    DEFAULT_EPOCH + Duration::days(offset)
}

proptest! {
    #[test]
    fn resolve_is_deterministic(group in any_group(), offset in any_offset()) {
        let r = ShiftResolver::default();
        let d = day(offset);
        prop_assert_eq!(r.resolve(group, d), r.resolve(group, d));
        prop_assert_eq!(r.resolve(group, d), resolve(group, d));
    }

    #[test]
    fn resolve_repeats_every_cycle(group in any_group(), offset in any_offset(), cycles in -20i64..20) {
        let r = ShiftResolver::default();
        let d = day(offset);
        let later = d + Duration::days(CYCLE_LEN as i64 * cycles);
        prop_assert_eq!(r.resolve(group, d), r.resolve(group, later));
    }

    #[test]
    fn cycle_index_is_in_range(offset in any_offset()) {
        let r = ShiftResolver::default();
        let idx = r.cycle_index(day(offset));
        prop_assert!(idx < CYCLE_LEN);
        prop_assert_eq!(idx as i64, offset.rem_euclid(CYCLE_LEN as i64));
    }

    #[test]
    fn resolve_reads_the_pattern_slot(group in any_group(), offset in any_offset()) {
        let r = ShiftResolver::default();
        let pattern = r.patterns().get(group).unwrap();
        let d = day(offset);
        prop_assert_eq!(r.resolve(group, d), pattern.get(r.cycle_index(d)));
    }
}

#[test]
fn epoch_and_day_before() {
    let r = ShiftResolver::default();
    let before = DEFAULT_EPOCH - Duration::days(1);
    for group in Group::ALL {
        let pattern = r.patterns().get(group).unwrap();
        assert_eq!(r.resolve(group, DEFAULT_EPOCH), pattern.get(0));
        assert_eq!(r.resolve(group, before), pattern.get(CYCLE_LEN - 1));
    }
}

#[test]
fn group_a_reference_dates() {
    let d = |m, dd| NaiveDate::from_ymd_opt(2026, m, dd).unwrap();
    assert_eq!(resolve(Group::A, d(1, 1)), ShiftType::Rest);
    assert_eq!(resolve(Group::A, d(1, 5)), ShiftType::Morning);
    assert_eq!(resolve(Group::A, d(2, 5)), resolve(Group::A, d(1, 1)));
    // Day before the epoch reads the last slot of A: Night.
    assert_eq!(
        resolve(Group::A, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
        ShiftType::Night
    );
}

#[test]
fn every_day_some_group_works_nights() {
    let r = ShiftResolver::default();
    for offset in 0..CYCLE_LEN as i64 {
        let roster = r.roster(day(offset));
        assert!(
            roster.iter().any(|(_, s)| *s == ShiftType::Night),
            "no night cover on {}",
            day(offset)
        );
    }
}
