use crate::model::{Schedule, Shift};
use crate::time;
use chrono::{Days, NaiveDate};
use std::fmt::Write;

pub const NO_EVENTS: &str = "No events in schedule.";

/// Permet de customiser le rendu d'une ligne de permanence.
pub trait ShiftFormatter {
    fn format(&self, shift: &Shift) -> String;
}

/// Ligne pipe-délimitée :
/// `Event 1 | Date: 2023-03-05 | Shift Time: 08:00:00 -07:00 - 16:00:00 -07:00 | 8 hrs | Employee 1`
#[derive(Debug, Default, Clone, Copy)]
pub struct PipeFormatter;

impl ShiftFormatter for PipeFormatter {
    fn format(&self, shift: &Shift) -> String {
        format!(
            "Event {event} | Date: {date} | Shift Time: {start} - {end} | {duration} hrs | Employee {employee}",
            event = shift.event_id,
            date = shift.date,
            start = shift.start_time,
            end = shift.end_time,
            duration = time::format_duration(shift.duration_hours),
            employee = shift.employee_id,
        )
    }
}

/// Planning jour par jour sur `num_days` jours à partir de `start`.
///
/// Pour chaque jour ayant au moins une permanence : séparateur, une ligne par
/// événement (ordre des événements), ligne vide. Les jours sans permanence
/// sont omis ; une fenêtre entièrement vide donne [`NO_EVENTS`].
pub fn render_range(
    schedule: &Schedule,
    start: NaiveDate,
    num_days: u32,
    formatter: &dyn ShiftFormatter,
) -> String {
    let mut body = String::new();

    for offset in 0..num_days {
        let Some(date) = start.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        let shifts: Vec<&Shift> = schedule
            .events()
            .iter()
            .filter_map(|event| schedule.shift_on(event.id, date))
            .collect();
        if shifts.is_empty() {
            continue;
        }

        let _ = writeln!(body, "{bar} {date} {bar}", bar = "=".repeat(10));
        for shift in shifts {
            let _ = writeln!(body, "{}", formatter.format(shift));
        }
        body.push('\n');
    }

    if body.is_empty() {
        return NO_EVENTS.to_string();
    }

    let end = start
        .checked_add_days(Days::new(u64::from(num_days)))
        .unwrap_or(NaiveDate::MAX);
    format!("Printing the schedule for {start} to {end}\n{body}")
}

/// Planning complet : pour chaque événement, ses permanences dans l'ordre du
/// registre.
pub fn render_full(schedule: &Schedule, formatter: &dyn ShiftFormatter) -> String {
    let mut out = String::new();
    for event in schedule.events() {
        let _ = writeln!(out, "Printing the schedule for Event {}", event.id);
        for shift in schedule.shifts_for(event.id) {
            let _ = writeln!(out, "{}", formatter.format(shift));
        }
        out.push('\n');
    }
    out
}
