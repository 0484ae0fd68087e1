// File: crates/chart-core/src/grid.rs
// Summary: Full-hour tick layout and local day start, daylight-saving aware.

use chrono::{DateTime, Duration, TimeZone, Timelike};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HourStep {
    Every,
    EverySecond,
}

/// Timestamps (epoch ms) of the full local hours strictly inside
/// `(min_ms, max_ms)`. With `EverySecond` only even hours are returned.
pub fn hour_ticks<Tz: TimeZone>(tz: &Tz, min_ms: f64, max_ms: f64, step: HourStep) -> Vec<f64> {
    let (Some(mut current), Some(max)) = (to_local(tz, min_ms), to_local(tz, max_ms)) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    loop {
        let next = match step {
            HourStep::Every => next_hour(&current),
            HourStep::EverySecond => next_even_hour(&current),
        };
        if next >= max {
            break;
        }
        ticks.push(next.timestamp_millis() as f64);
        current = next;
    }
    ticks
}

/// Short local time label, e.g. "14:00".
pub fn hour_label<Tz: TimeZone>(tz: &Tz, ms: f64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    to_local(tz, ms).map(|dt| dt.format("%H:%M").to_string()).unwrap_or_default()
}

fn to_local<Tz: TimeZone>(tz: &Tz, ms: f64) -> Option<DateTime<Tz>> {
    if !ms.is_finite() {
        return None;
    }
    tz.timestamp_millis_opt(ms as i64).single()
}

/// Start of the local hour containing `dt`.
fn hour_start<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let into_hour = Duration::seconds(i64::from(dt.minute()) * 60 + i64::from(dt.second()))
        + Duration::nanoseconds(i64::from(dt.nanosecond()));
    dt.clone() - into_hour
}

fn next_hour<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    advance(dt, 1)
}

fn next_even_hour<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let hours = if (dt.hour() + 1) % 2 == 0 { 1 } else { 2 };
    advance(dt, hours)
}

/// Move `hours` nominal hours past the start of the current hour. When the
/// clock falls back the hour-of-day can repeat; then jump two hours instead.
fn advance<Tz: TimeZone>(dt: &DateTime<Tz>, hours: i64) -> DateTime<Tz> {
    let start = hour_start(dt);
    let next = start.clone() + Duration::hours(hours);
    if next.hour() == dt.hour() {
        start + Duration::hours(2)
    } else {
        next
    }
}

/// Local midnight of `now`'s day in epoch ms.
pub fn start_of_day_ms<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| now.timezone().from_local_datetime(&naive).earliest());
    match midnight {
        Some(dt) => dt.timestamp_millis() as f64,
        // no local midnight that day (DST gap): count back the elapsed time
        None => {
            let elapsed = Duration::seconds(i64::from(now.num_seconds_from_midnight()));
            (now.clone() - elapsed).timestamp_millis() as f64
        }
    }
}
