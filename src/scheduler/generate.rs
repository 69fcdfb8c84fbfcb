use super::{ScheduleOptions, SchedError};
use crate::model::{EmployeeId, Event, EventId, Shift};
use crate::time;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Construit un Event : heure de fin calculée, chaînes d'affichage figées avec
/// le décalage des options.
pub(super) fn build_event(
    id: EventId,
    start: NaiveTime,
    duration_hours: f64,
    opts: ScheduleOptions,
) -> Event {
    let end = time::end_time(start, duration_hours);
    Event {
        id,
        start,
        start_time: time::format_display_time(start, opts.utc_offset),
        end_time: time::format_display_time(end, opts.utc_offset),
        duration_hours,
    }
}

pub(super) fn check_duration(hours: f64, opts: ScheduleOptions) -> Result<(), SchedError> {
    if !hours.is_finite() || hours <= 0.0 || hours > opts.max_duration_hours {
        return Err(SchedError::InvalidDuration(hours));
    }
    Ok(())
}

/// Une permanence par jour calendaire de `start` à `end` inclus (31 décembre
/// de l'année de `start` si `end` est absente). Une plage vide est une erreur.
pub fn generate_shifts(
    event: &Event,
    employee_id: EmployeeId,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<Vec<Shift>, SchedError> {
    let end = match end {
        Some(end) => end,
        None => year_end(start)?,
    };
    if end < start {
        return Err(SchedError::InvalidInput(format!(
            "end date {end} is before start date {start}"
        )));
    }

    let mut shifts = Vec::new();
    let mut current = start;
    while current <= end {
        shifts.push(shift_for(event, employee_id, current));
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(shifts)
}

pub(super) fn shift_for(event: &Event, employee_id: EmployeeId, date: NaiveDate) -> Shift {
    Shift {
        event_id: event.id,
        employee_id,
        start_time: event.start_time.clone(),
        end_time: event.end_time.clone(),
        duration_hours: event.duration_hours,
        date,
    }
}

fn year_end(date: NaiveDate) -> Result<NaiveDate, SchedError> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .ok_or_else(|| SchedError::InvalidInput(format!("no year end for {date}")))
}
