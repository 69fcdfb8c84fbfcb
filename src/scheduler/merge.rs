use super::SchedError;
use crate::model::Shift;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Plus petite et plus grande date présentes dans la liste.
pub fn date_bounds(shifts: &[Shift]) -> Option<(NaiveDate, NaiveDate)> {
    let min = shifts.iter().map(|s| s.date).min()?;
    let max = shifts.iter().map(|s| s.date).max()?;
    Some((min, max))
}

/// TODAY_ONLY : remplace sur place la permanence de même date.
/// Rien n'est modifié si aucune permanence ne tombe ce jour-là.
pub fn replace_on_date(shifts: &mut [Shift], shift: Shift) -> Result<(), SchedError> {
    let Some(pos) = shifts.iter().position(|s| s.date == shift.date) else {
        return Err(SchedError::NotFound(format!(
            "no shift on {} for event {}",
            shift.date, shift.event_id
        )));
    };
    shifts[pos] = shift;
    Ok(())
}

/// TODAY_FORWARD : réconcilie les nouvelles permanences avec l'existant.
///
/// Résultat, dans l'ordre :
/// 1. nouvelles permanences antérieures à la borne min de l'existant ;
/// 2. l'existant, chaque date recouverte remplacée sur place par la nouvelle ;
/// 3. nouvelles permanences dans les bornes mais sans date existante (trous) ;
/// 4. nouvelles permanences postérieures à la borne max.
///
/// Cet ordre est voulu : il suit les dates quand les deux plages se touchent,
/// là où un ajout groupé des dates hors bornes placerait les extensions en tête.
/// Aucun tri n'est garanti pour autant (cas 3).
///
/// Chaque nouvelle permanence est émise exactement une fois, ce qui garantit
/// une permanence par date sur l'union des deux plages.
pub fn merge_forward(existing: &[Shift], incoming: Vec<Shift>) -> Result<Vec<Shift>, SchedError> {
    if incoming.is_empty() {
        return Err(SchedError::InvalidInput(
            "override produced no shifts".to_string(),
        ));
    }

    let mut inside: BTreeMap<NaiveDate, Shift> =
        incoming.into_iter().map(|s| (s.date, s)).collect();

    let Some((min, max)) = date_bounds(existing) else {
        return Ok(inside.into_values().collect());
    };

    let after = match max.succ_opt() {
        Some(next) => inside.split_off(&next),
        None => BTreeMap::new(),
    };
    let rest = inside.split_off(&min);
    let before = std::mem::replace(&mut inside, rest);

    let mut merged = Vec::with_capacity(existing.len() + before.len() + after.len());
    merged.extend(before.into_values());
    for old in existing {
        match inside.remove(&old.date) {
            Some(new) => merged.push(new),
            None => merged.push(old.clone()),
        }
    }
    merged.extend(inside.into_values());
    merged.extend(after.into_values());
    Ok(merged)
}
