use crate::model::{Event, Schedule, Shift};
use crate::scheduler::{EventRequest, OverrideRequest};
use crate::time;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Une ligne de plan : création d'événement ou override.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanStep {
    Schedule(EventRequest),
    Override(OverrideRequest),
}

/// Import d'un plan depuis CSV:
/// header `op,event_id,mode,employee_id,start_date,end_date,start_time,duration`.
/// Une cellule vide vaut « absent ».
pub fn import_plan_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PlanStep>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // +2 : ligne d'en-tête et numérotation à partir de 1
        let line = idx + 2;
        let step = parse_step(&rec).with_context(|| format!("invalid plan row at line {line}"))?;
        out.push(step);
    }
    Ok(out)
}

fn parse_step(rec: &StringRecord) -> anyhow::Result<PlanStep> {
    let op = cell(rec, 0).context("missing op")?;
    let employee = parse_u32(cell(rec, 3).context("missing employee_id")?)?;
    let start_date = cell(rec, 4).context("missing start_date")?;
    let end_date = cell(rec, 5);
    let duration = cell(rec, 7).map(parse_hours).transpose()?;

    match op.to_ascii_lowercase().as_str() {
        "schedule" => {
            let start_time = cell(rec, 6).context("missing start_time")?;
            let duration = duration.context("missing duration")?;
            let req = EventRequest::parse(employee, start_date, end_date, start_time, duration)?;
            Ok(PlanStep::Schedule(req))
        }
        "override" => {
            let event_id = parse_u32(cell(rec, 1).context("missing event_id")?)?;
            let mode = cell(rec, 2).context("missing mode")?;
            let req = OverrideRequest::parse(
                event_id,
                mode,
                employee,
                start_date,
                end_date,
                cell(rec, 6),
                duration,
            )?;
            Ok(PlanStep::Override(req))
        }
        other => bail!("unknown op: {other}"),
    }
}

fn cell(rec: &StringRecord, idx: usize) -> Option<&str> {
    rec.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_u32(raw: &str) -> anyhow::Result<u32> {
    raw.parse()
        .with_context(|| format!("expected a positive integer, got {raw}"))
}

fn parse_hours(raw: &str) -> anyhow::Result<f64> {
    raw.parse()
        .with_context(|| format!("expected a number of hours, got {raw}"))
}

#[derive(Serialize)]
struct EventExport<'a> {
    event: &'a Event,
    shifts: &'a [Shift],
}

/// Export JSON du planning (événements dans l'ordre, avec leurs permanences)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let export: Vec<EventExport<'_>> = schedule
        .events()
        .iter()
        .map(|event| EventExport {
            event,
            shifts: schedule.shifts_for(event.id),
        })
        .collect();
    let s = serde_json::to_string_pretty(&export)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des permanences:
/// header `event_id,date,employee_id,start_time,end_time,duration`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "event_id",
        "date",
        "employee_id",
        "start_time",
        "end_time",
        "duration",
    ])?;
    for event in schedule.events() {
        for s in schedule.shifts_for(event.id) {
            w.write_record([
                s.event_id.to_string().as_str(),
                s.date.to_string().as_str(),
                s.employee_id.to_string().as_str(),
                s.start_time.as_str(),
                s.end_time.as_str(),
                time::format_duration(s.duration_hours).as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
