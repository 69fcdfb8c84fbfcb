use crate::model::{EmployeeId, EventId};
use crate::time;
use chrono::{FixedOffset, Local, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Options du planificateur
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOptions {
    /// Décalage UTC capturé une fois, utilisé pour les chaînes d'affichage.
    pub utc_offset: FixedOffset,
    pub max_duration_hours: f64,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            utc_offset: *Local::now().offset(),
            max_duration_hours: 24.0,
        }
    }
}

impl ScheduleOptions {
    pub fn with_offset_hours(hours: i32) -> Result<Self, SchedError> {
        let utc_offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| SchedError::InvalidInput(format!("invalid utc offset: {hours}")))?;
        Ok(Self {
            utc_offset,
            ..Self::default()
        })
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid duration: {0} hrs")]
    InvalidDuration(f64),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Portée d'un override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideMode {
    /// Une seule date, remplacée sur place.
    TodayOnly,
    /// Une plage de dates, fusionnée avec les permanences existantes.
    TodayForward,
}

impl FromStr for OverrideMode {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TODAY_ONLY" => Ok(Self::TodayOnly),
            "TODAY_FORWARD" => Ok(Self::TodayForward),
            other => Err(SchedError::InvalidInput(format!(
                "unknown override mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for OverrideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TodayOnly => "TODAY_ONLY",
            Self::TodayForward => "TODAY_FORWARD",
        })
    }
}

/// Demande de création d'un événement et de ses permanences initiales.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRequest {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    /// Absente : 31 décembre de l'année de `start_date`.
    pub end_date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
}

impl EventRequest {
    /// Construit la demande à partir des chaînes `YYYY-MM-DD` / `HH:MM`.
    pub fn parse(
        employee_id: u32,
        start_date: &str,
        end_date: Option<&str>,
        start_time: &str,
        duration_hours: f64,
    ) -> Result<Self, SchedError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id),
            start_date: time::parse_date(start_date)?,
            end_date: end_date.map(time::parse_date).transpose()?,
            start_time: time::parse_time(start_time)?,
            duration_hours,
        })
    }
}

/// Demande d'override. Les champs optionnels absents reprennent les valeurs
/// courantes de l'événement ; `end_date` est ignorée en `TodayOnly`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRequest {
    pub event_id: EventId,
    pub mode: OverrideMode,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub duration_hours: Option<f64>,
}

impl OverrideRequest {
    pub fn parse(
        event_id: u32,
        mode: &str,
        employee_id: u32,
        start_date: &str,
        end_date: Option<&str>,
        start_time: Option<&str>,
        duration_hours: Option<f64>,
    ) -> Result<Self, SchedError> {
        Ok(Self {
            event_id: EventId::new(event_id),
            mode: mode.parse()?,
            employee_id: EmployeeId::new(employee_id),
            start_date: time::parse_date(start_date)?,
            end_date: end_date.map(time::parse_date).transpose()?,
            start_time: start_time.map(time::parse_time).transpose()?,
            duration_hours,
        })
    }
}
