mod generate;
mod merge;
mod mutate;
mod types;
mod util;

pub use generate::generate_shifts;
pub use merge::{date_bounds, merge_forward, replace_on_date};
pub use types::{EventRequest, OverrideMode, OverrideRequest, ScheduleOptions, SchedError};

use crate::model::{EventId, Schedule};
use crate::render::{self, PipeFormatter};
use chrono::NaiveDate;

/// Scheduler : possède l'état (événements, registre, compteur) d'un processus
#[derive(Debug, Default)]
pub struct Scheduler {
    schedule: Schedule,
    opts: ScheduleOptions,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ScheduleOptions) -> Self {
        Self {
            schedule: Schedule::default(),
            opts,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn options(&self) -> ScheduleOptions {
        self.opts
    }

    /// Crée un événement (id tiré du compteur) et ses permanences initiales.
    pub fn schedule_event(&mut self, req: EventRequest) -> Result<EventId, SchedError> {
        mutate::schedule_event(self, req)
    }

    /// Réaffecte une date (`TodayOnly`) ou une plage (`TodayForward`).
    /// En cas d'erreur, l'état reste inchangé.
    pub fn override_event(&mut self, req: OverrideRequest) -> Result<(), SchedError> {
        mutate::override_event(self, req)
    }

    pub fn render_range(&self, start: NaiveDate, num_days: u32) -> String {
        render::render_range(&self.schedule, start, num_days, &PipeFormatter)
    }

    pub fn render_full(&self) -> String {
        render::render_full(&self.schedule, &PipeFormatter)
    }
}
