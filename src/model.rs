use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifiant fort pour Event (compteur croissant, jamais réutilisé)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventId(u32);

impl EventId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiant fort pour un employé
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Événement récurrent : une plage horaire quotidienne fixe.
///
/// `start_time` / `end_time` sont les chaînes d'affichage `HH:MM:SS -0H:00` ;
/// `start` garde l'heure brute pour reconstruire l'événement lors d'un override.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub id: EventId,
    pub start: NaiveTime,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
}

/// Permanence d'une journée : un employé affecté à un événement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    pub event_id: EventId,
    pub employee_id: EmployeeId,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    pub date: NaiveDate,
}

/// État complet : événements (ordre d'insertion), registre des permanences
/// par événement, et compteur d'identifiants.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub(crate) events: Vec<Event>,
    pub(crate) ledger: BTreeMap<EventId, Vec<Shift>>,
    pub(crate) next_event_id: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            ledger: BTreeMap::new(),
            next_event_id: 1,
        }
    }
}

impl Schedule {
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
    /// Permanences d'un événement, dans l'ordre du registre (pas forcément trié).
    pub fn shifts_for(&self, id: EventId) -> &[Shift] {
        self.ledger.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn shift_on(&self, id: EventId, date: NaiveDate) -> Option<&Shift> {
        self.shifts_for(id).iter().find(|s| s.date == date)
    }
    /// Prochain identifiant qui sera attribué.
    pub fn next_event_id(&self) -> EventId {
        EventId(self.next_event_id)
    }
}
