use time::{Timespec, Tm};
use super::Timestamp;

const MICROS: u64 = 1_000_000;

/// Elapsed milliseconds between two microsecond timestamps, truncated.
pub fn duration_millis(start: Timestamp, end: Timestamp) -> u64 {
    end.saturating_sub(start) / 1000
}

pub fn clock(ts: Timestamp) -> String {
    format_clock(&time::at(timespec(ts)), ts)
}

pub fn clock_utc(ts: Timestamp) -> String {
    format_clock(&time::at_utc(timespec(ts)), ts)
}

pub fn date(ts: Timestamp) -> String {
    format_date(&time::at(timespec(ts)))
}

pub fn date_utc(ts: Timestamp) -> String {
    format_date(&time::at_utc(timespec(ts)))
}

fn timespec(ts: Timestamp) -> Timespec {
    let sec  = (ts / MICROS) as i64;
    let nsec = ((ts % MICROS) * 1000) as i32;
    Timespec::new(sec, nsec)
}

fn format_clock(tm: &Tm, ts: Timestamp) -> String {
    format!("{:02}:{:02}:{:02}.{:06}", tm.tm_hour, tm.tm_min, tm.tm_sec, ts % MICROS)
}

fn format_date(tm: &Tm) -> String {
    format!("{:02}/{:02}/{}", tm.tm_mday, tm.tm_mon + 1, tm.tm_year + 1900)
}
