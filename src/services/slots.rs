//! The availability engine: which start times remain bookable for a worker
//! on a date.
//!
//! Candidates are walked on a fixed grid (the shop's slot interval) rather
//! than packed edge-to-edge against existing appointments, so every bookable
//! start time lines up with what the calendar renders. A candidate survives
//! iff its half-open interval clears every non-cancelled booking for that
//! worker and date. The sequence is recomputed fresh on every call.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::settings::DEFAULT_SLOT_INTERVAL;
use crate::domain::time::{overlaps, ClockTime};
use crate::domain::types::DurationMinutes;
use crate::repository::{BookingReader, SettingsReader, WorkerReader};
use crate::services::ServiceResult;

/// Ordered bookable start times for `(date, worker, duration)`. An unknown
/// worker id and a closed weekday both yield an empty sequence, never an
/// error: the caller's UI shows "no availability".
pub fn available_slots<R>(
    repo: &R,
    date: NaiveDate,
    worker_id: Uuid,
    duration: DurationMinutes,
) -> ServiceResult<Vec<ClockTime>>
where
    R: WorkerReader + BookingReader + SettingsReader + ?Sized,
{
    let Some(worker) = repo.get_worker_by_id(worker_id)? else {
        return Ok(Vec::new());
    };
    let Some((window_start, window_end)) = worker.window_for(date.weekday()) else {
        return Ok(Vec::new());
    };

    let interval = repo
        .get_settings()?
        .map(|s| s.effective_slot_interval())
        .unwrap_or(DEFAULT_SLOT_INTERVAL);

    let existing: Vec<(u32, u32)> = repo
        .list_bookings_for_worker(worker_id, date)?
        .into_iter()
        .filter(|b| b.status.blocks_slot())
        .map(|b| (u32::from(b.time.minutes()), b.duration_minutes()))
        .collect();

    let duration = duration.get();
    let window_end = u32::from(window_end.minutes());
    let mut slots = Vec::new();
    let mut candidate = u32::from(window_start.minutes());

    while candidate + duration <= window_end {
        let occupied = existing
            .iter()
            .any(|&(start, dur)| overlaps(candidate, duration, start, dur));
        if !occupied {
            slots.push(ClockTime::from_minutes(candidate as u16)?);
        }
        candidate += interval;
    }

    Ok(slots)
}

/// Union of slots across all active workers, ascending; the public widget's
/// "no preference" listing.
pub fn available_slots_any_worker<R>(
    repo: &R,
    date: NaiveDate,
    duration: DurationMinutes,
) -> ServiceResult<Vec<ClockTime>>
where
    R: WorkerReader + BookingReader + SettingsReader + ?Sized,
{
    let mut all = Vec::new();
    for worker in repo.list_active_workers()? {
        all.extend(available_slots(repo, date, worker.id, duration)?);
    }
    all.sort();
    all.dedup();
    Ok(all)
}
