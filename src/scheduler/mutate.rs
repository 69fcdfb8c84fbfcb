use super::{
    generate, merge, util, EventRequest, OverrideMode, OverrideRequest, SchedError, Scheduler,
};
use crate::model::EventId;

pub(super) fn schedule_event(
    scheduler: &mut Scheduler,
    req: EventRequest,
) -> Result<EventId, SchedError> {
    generate::check_duration(req.duration_hours, scheduler.opts)?;

    let id = EventId::new(scheduler.schedule.next_event_id);
    let event = generate::build_event(id, req.start_time, req.duration_hours, scheduler.opts);
    let shifts = generate::generate_shifts(&event, req.employee_id, req.start_date, req.end_date)?;

    #[cfg(feature = "logging")]
    tracing::debug!(event = %id, shifts = shifts.len(), "event scheduled");

    scheduler.schedule.events.push(event);
    scheduler.schedule.ledger.insert(id, shifts);
    scheduler.schedule.next_event_id += 1;
    Ok(id)
}

pub(super) fn override_event(
    scheduler: &mut Scheduler,
    req: OverrideRequest,
) -> Result<(), SchedError> {
    let Some(pos) = util::find_event_index(&scheduler.schedule.events, req.event_id) else {
        return Err(SchedError::NotFound(format!("event {}", req.event_id)));
    };

    let current = &scheduler.schedule.events[pos];
    let start = req.start_time.unwrap_or(current.start);
    let duration = req.duration_hours.unwrap_or(current.duration_hours);
    generate::check_duration(duration, scheduler.opts)?;

    let event = generate::build_event(req.event_id, start, duration, scheduler.opts);
    let existing = scheduler.schedule.shifts_for(req.event_id);

    let updated = match req.mode {
        OverrideMode::TodayOnly => {
            let shift = generate::shift_for(&event, req.employee_id, req.start_date);
            let mut shifts = existing.to_vec();
            if let Err(err) = merge::replace_on_date(&mut shifts, shift) {
                #[cfg(feature = "logging")]
                tracing::warn!(event = %req.event_id, date = %req.start_date, "no shift to override");
                return Err(err);
            }
            shifts
        }
        OverrideMode::TodayForward => {
            let incoming =
                generate::generate_shifts(&event, req.employee_id, req.start_date, req.end_date)?;
            merge::merge_forward(existing, incoming)?
        }
    };

    #[cfg(feature = "logging")]
    tracing::debug!(
        event = %req.event_id,
        mode = %req.mode,
        employee = %req.employee_id,
        shifts = updated.len(),
        "override applied"
    );

    scheduler.schedule.events[pos] = event;
    scheduler.schedule.ledger.insert(req.event_id, updated);
    Ok(())
}
