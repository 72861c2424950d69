//! `mcm-schedule` — ticket-checker shift schedules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`shift`]     | `Shift` (a `[start, end]` interval)                        |
//! | [`interval`]  | `hire_ticket_checkers`, `select_non_overlapping`, `peak_concurrency` |
//! | [`loader`]    | `load_shifts_csv`, `load_shifts_reader`                    |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Two different answers
//!
//! [`hire_ticket_checkers`] counts the largest set of shifts that do not
//! overlap one another (classic activity selection).  That is *not* the
//! number of checkers needed to staff every shift at once; for that use
//! [`peak_concurrency`].  Touching shifts (`[a, b]` then `[b, c]`) never
//! overlap in either routine.

pub mod error;
pub mod interval;
pub mod loader;
pub mod shift;


pub use error::{ScheduleError, ScheduleResult};
pub use interval::{hire_ticket_checkers, peak_concurrency, select_non_overlapping};
pub use loader::{load_shifts_csv, load_shifts_reader};
pub use shift::Shift;
