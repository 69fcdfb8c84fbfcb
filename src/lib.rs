#![forbid(unsafe_code)]
//! Permanence — planification de permanences quotidiennes, en mémoire.
//!
//! - Une permanence par jour et par événement, générée sur une plage de dates.
//! - Overrides `TODAY_ONLY` / `TODAY_FORWARD` fusionnés avec l'existant.
//! - Rendu texte déterministe, sur une fenêtre de dates ou complet.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod time;

pub use model::{EmployeeId, Event, EventId, Schedule, Shift};
pub use render::{render_full, render_range, PipeFormatter, ShiftFormatter, NO_EVENTS};
pub use scheduler::{
    EventRequest, OverrideMode, OverrideRequest, ScheduleOptions, SchedError, Scheduler,
};
