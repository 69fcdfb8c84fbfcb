//! Conversions date/heure : parsing des entrées `YYYY-MM-DD` / `HH:MM`,
//! calcul de l'heure de fin et chaînes d'affichage.

use crate::scheduler::SchedError;
use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};

/// Parse une date `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, SchedError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| SchedError::InvalidInput(format!("invalid date: {raw}")))
}

/// Parse une heure `HH:MM`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, SchedError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| SchedError::InvalidInput(format!("invalid time: {raw}")))
}

/// Heure de fin : `start + duration`, modulo 24 h.
pub fn end_time(start: NaiveTime, duration_hours: f64) -> NaiveTime {
    let minutes = ((duration_hours * 60.0).round() as i64).rem_euclid(24 * 60);
    let (end, _) = start.overflowing_add_signed(Duration::minutes(minutes));
    end
}

/// Variante texte de [`end_time`] : `"HH:MM"` -> `"HH:MM"`.
pub fn compute_end_time(start: &str, duration_hours: f64) -> Result<String, SchedError> {
    if !duration_hours.is_finite() {
        return Err(SchedError::InvalidDuration(duration_hours));
    }
    let start = parse_time(start)?;
    Ok(end_time(start, duration_hours).format("%H:%M").to_string())
}

/// `HH:MM:SS -0H:00`. Le signe est toujours `-`, seule la magnitude du
/// décalage est affichée (format historique conservé tel quel).
pub fn format_display_time(time: NaiveTime, offset: FixedOffset) -> String {
    let hours = offset.local_minus_utc().abs() / 3600;
    format!("{} -{:02}:00", time.format("%H:%M:%S"), hours)
}

/// `8.0` -> `"8"`, `6.5` -> `"6.5"`.
pub fn format_duration(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}
