//! Greedy interval selection and peak-overlap sweep.

use log::trace;

use crate::Shift;

/// Order used by the greedy scan: ascending end, ties by ascending start.
fn by_end_then_start(schedule: &[Shift]) -> Vec<Shift> {
    let mut sorted = schedule.to_vec();
    sorted.sort_by(|a, b| a.end.cmp(&b.end).then_with(|| a.start.cmp(&b.start)));
    sorted
}

/// The maximum set of mutually non-overlapping shifts, in selection order.
///
/// Shifts are scanned by ascending end (ties by start) and kept whenever
/// they start at or after the end of the last kept shift.
pub fn select_non_overlapping(schedule: &[Shift]) -> Vec<Shift> {
    let mut chosen = Vec::new();
    let mut last_end = i32::MIN;
    for shift in by_end_then_start(schedule) {
        if shift.start >= last_end {
            last_end = shift.end;
            chosen.push(shift);
        }
    }
    chosen
}

/// Number of ticket checkers to hire for `schedule`.
///
/// This is the size of the largest set of pairwise non-overlapping shifts.
/// An empty schedule hires nobody.
pub fn hire_ticket_checkers(schedule: &[Shift]) -> usize {
    if schedule.is_empty() {
        return 0;
    }
    let hired = select_non_overlapping(schedule).len();
    trace!("hire_ticket_checkers: {hired} of {} shifts", schedule.len());
    hired
}

/// Largest number of shifts running at the same instant.
///
/// Sweeps start/end events in time order, closing shifts before opening new
/// ones at the same instant so touching shifts do not count as concurrent.
/// Shifts with `end <= start` cover no time and are ignored.
pub fn peak_concurrency(schedule: &[Shift]) -> usize {
    // (time, delta): -1 sorts before +1 at equal times.
    let mut events: Vec<(i32, i8)> = Vec::with_capacity(schedule.len() * 2);
    for s in schedule.iter().filter(|s| s.end > s.start) {
        events.push((s.start, 1));
        events.push((s.end, -1));
    }
    events.sort_unstable();

    let mut active = 0usize;
    let mut peak = 0usize;
    for (_, delta) in events {
        if delta > 0 {
            active += 1;
            peak = peak.max(active);
        } else {
            active -= 1;
        }
    }
    peak
}
