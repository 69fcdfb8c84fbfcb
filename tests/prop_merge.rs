#![forbid(unsafe_code)]
//! Invariants de génération et de fusion vérifiés sur des plages arbitraires.

use chrono::{Days, NaiveDate};
use permanence::{
    scheduler::ScheduleOptions, EmployeeId, EventId, EventRequest, OverrideMode,
    OverrideRequest, Scheduler,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

fn scheduler() -> Scheduler {
    Scheduler::with_options(ScheduleOptions::with_offset_hours(0).unwrap())
}

fn event_request(employee: u32, start: u64, len: u64) -> EventRequest {
    EventRequest {
        employee_id: EmployeeId::new(employee),
        start_date: day(start),
        end_date: Some(day(start + len)),
        start_time: chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        duration_hours: 8.0,
    }
}

fn forward(employee: u32, start: u64, len: u64) -> OverrideRequest {
    OverrideRequest {
        event_id: EventId::new(1),
        mode: OverrideMode::TodayForward,
        employee_id: EmployeeId::new(employee),
        start_date: day(start),
        end_date: Some(day(start + len)),
        start_time: None,
        duration_hours: None,
    }
}

proptest! {
    #[test]
    fn generated_range_is_contiguous(start in 0u64..1000, len in 0u64..400) {
        let mut s = scheduler();
        let id = s.schedule_event(event_request(1, start, len)).unwrap();
        let shifts = s.schedule().shifts_for(id);

        prop_assert_eq!(shifts.len() as u64, len + 1);
        for (i, shift) in shifts.iter().enumerate() {
            prop_assert_eq!(shift.date, day(start + i as u64));
        }
    }

    #[test]
    fn forward_override_covers_the_union_once(
        old_start in 0u64..120,
        old_len in 0u64..60,
        new_start in 0u64..120,
        new_len in 0u64..60,
    ) {
        let mut s = scheduler();
        let id = s.schedule_event(event_request(1, old_start, old_len)).unwrap();
        s.override_event(forward(2, new_start, new_len)).unwrap();

        let shifts = s.schedule().shifts_for(id);
        let dates: BTreeSet<NaiveDate> = shifts.iter().map(|sh| sh.date).collect();
        prop_assert_eq!(dates.len(), shifts.len());

        let old: BTreeSet<NaiveDate> = (old_start..=old_start + old_len).map(day).collect();
        let new: BTreeSet<NaiveDate> = (new_start..=new_start + new_len).map(day).collect();
        let union: BTreeSet<NaiveDate> = old.union(&new).copied().collect();
        prop_assert_eq!(&dates, &union);

        for shift in shifts {
            let expected = if new.contains(&shift.date) { 2 } else { 1 };
            prop_assert_eq!(shift.employee_id, EmployeeId::new(expected));
        }
    }

    #[test]
    fn repeated_forward_overrides_keep_one_shift_per_date(
        ranges in prop::collection::vec((0u64..200, 0u64..40), 1..6),
    ) {
        let mut s = scheduler();
        let id = s.schedule_event(event_request(1, 50, 10)).unwrap();
        let mut expected: BTreeSet<NaiveDate> = (50..=60).map(day).collect();

        for (i, (start, len)) in ranges.iter().enumerate() {
            s.override_event(forward(10 + i as u32, *start, *len)).unwrap();
            expected.extend((*start..=*start + *len).map(day));
        }

        let shifts = s.schedule().shifts_for(id);
        let dates: BTreeSet<NaiveDate> = shifts.iter().map(|sh| sh.date).collect();
        prop_assert_eq!(dates.len(), shifts.len());
        prop_assert_eq!(dates, expected);

        let (last_start, last_len) = *ranges.last().unwrap();
        let last_employee = EmployeeId::new(10 + ranges.len() as u32 - 1);
        for offset in last_start..=last_start + last_len {
            let shift = s.schedule().shift_on(id, day(offset)).unwrap();
            prop_assert_eq!(shift.employee_id, last_employee);
        }
    }
}
