//! Consecutive-run detection shared by the daily, weekly and aggregate paths.

use super::StreakResult;
use crate::calendar::{days_between, prev_week_start, DayKey};

/// Run lengths over keys sorted most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunScan {
    /// Length of the run that starts at the most recent key.
    pub leading: u32,
    /// Longest run anywhere in the history.
    pub longest: u32,
}

/// Walk adjacent pairs of `keys` (descending). `follows(newer, older)` says
/// whether `older` sits exactly one unit before `newer`.
pub(crate) fn scan_runs<T, F>(keys: &[T], follows: F) -> RunScan
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    if keys.is_empty() {
        return RunScan { leading: 0, longest: 0 };
    }

    let mut leading = 1u32;
    let mut leading_open = true;
    let mut best = 0u32;
    let mut run = 1u32;

    for pair in keys.windows(2) {
        if follows(pair[0], pair[1]) {
            run += 1;
            if leading_open {
                leading += 1;
            }
        } else {
            best = best.max(run);
            run = 1;
            leading_open = false;
        }
    }

    // The last run is never closed by a break inside the loop.
    RunScan {
        leading,
        longest: best.max(run),
    }
}

/// The current run only counts while its most recent key is within grace.
pub(crate) fn fold_streak(scan: RunScan, within_grace: bool) -> StreakResult {
    let current_streak = if within_grace { scan.leading } else { 0 };
    StreakResult {
        current_streak,
        longest_streak: scan.longest.max(current_streak),
    }
}

/// Daily run detection over distinct days sorted most recent first.
pub(crate) fn daily_runs(days: &[DayKey], today: DayKey) -> StreakResult {
    let Some(&latest) = days.first() else {
        return StreakResult::default();
    };
    let within_grace = days_between(today, latest) <= 1;
    let scan = scan_runs(days, |newer, older| days_between(newer, older) == 1);
    fold_streak(scan, within_grace)
}

/// Weekly run detection over satisfied week starts sorted most recent first.
pub(crate) fn weekly_runs(weeks: &[DayKey], today: DayKey) -> StreakResult {
    let Some(&latest) = weeks.first() else {
        return StreakResult::default();
    };
    let this_week = today.week_start();
    let last_week = prev_week_start(this_week);
    let within_grace = latest == this_week || latest == last_week;
    let scan = scan_runs(weeks, |newer, older| prev_week_start(newer) == older);
    fold_streak(scan, within_grace)
}
