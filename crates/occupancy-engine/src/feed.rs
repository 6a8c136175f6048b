//! Calendar feed (`.ics`) reader.
//!
//! Channel exports only need three properties per event:
//!
//! - `DTSTART` / `DTEND`: compact `YYYYMMDD` dates, optionally with
//!   parameters (`DTSTART;VALUE=DATE:20240101`) or a time part
//!   (`20240101T140000Z`, only the date is kept).
//! - `SUMMARY`: free text, used for classification under [`FeedPolicy::Auto`].
//!
//! Exports are often hand-edited or indented, so lines are trimmed first and
//! each `VEVENT` is handed to the `icalendar` parser on its own. An event that
//! does not parse, or lacks a start or an end, is dropped without affecting
//! the rest of the feed.

use std::path::Path;

use chrono::NaiveDate;
use icalendar::parser::{read_calendar, unfold};
use serde::{Deserialize, Serialize};

use crate::classify::classify_kind;
use crate::error::Result;
use crate::interval::{Interval, Kind};
use crate::read_if_exists;

/// How a feed's events are assigned a [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPolicy {
    /// Every event is a reservation.
    Reservation,
    /// Every event is a block.
    Block,
    /// Classify each event by its summary text.
    Auto,
}

impl FeedPolicy {
    /// Resolve the kind of one event under this policy.
    pub fn resolve(self, summary: Option<&str>) -> Kind {
        match self {
            FeedPolicy::Reservation => Kind::Reservation,
            FeedPolicy::Block => Kind::Block,
            FeedPolicy::Auto => classify_kind(summary),
        }
    }
}

/// Read a feed file and extract its events for `unit`.
///
/// A missing file yields an empty list. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn read_feed(path: &Path, unit: &str, policy: FeedPolicy) -> Result<Vec<Interval>> {
    let Some(bytes) = read_if_exists(path)? else {
        return Ok(Vec::new());
    };
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_feed(&text, unit, policy))
}

/// Extract every complete `VEVENT` in `text` as an interval on `unit`.
pub fn parse_feed(text: &str, unit: &str, policy: FeedPolicy) -> Vec<Interval> {
    let normalized = normalize_lines(text);
    let unfolded = unfold(&normalized);

    let mut events = Vec::new();
    let mut body: Option<Vec<&str>> = None;
    for line in unfolded.lines() {
        match line {
            "BEGIN:VEVENT" => body = Some(Vec::new()),
            "END:VEVENT" => {
                if let Some(lines) = body.take() {
                    events.extend(read_event(&lines, unit, policy));
                }
            }
            _ => {
                if let Some(lines) = body.as_mut() {
                    lines.push(line);
                }
            }
        }
    }

    events
}

/// Parse one event body and turn it into an interval.
fn read_event(lines: &[&str], unit: &str, policy: FeedPolicy) -> Option<Interval> {
    let mut source = String::from("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\n");
    for line in lines {
        source.push_str(line);
        source.push_str("\r\n");
    }
    source.push_str("END:VEVENT\r\nEND:VCALENDAR\r\n");

    let Ok(calendar) = read_calendar(&source) else {
        tracing::warn!(unit, "skipping calendar event that does not parse");
        return None;
    };
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    let raw_start = vevent.find_prop("DTSTART")?.val.as_ref().trim();
    let raw_end = vevent.find_prop("DTEND")?.val.as_ref().trim();
    let (Some(start), Some(end)) = (compact_date(raw_start), compact_date(raw_end)) else {
        tracing::warn!(
            unit,
            start = %raw_start,
            end = %raw_end,
            "skipping calendar event with unreadable dates"
        );
        return None;
    };

    let summary = vevent.find_prop("SUMMARY").map(|p| p.val.as_ref().trim());
    let kind = policy.resolve(summary);
    Some(Interval::new(unit, kind, start, end))
}

/// Parse the leading `YYYYMMDD` of a date or date-time value.
fn compact_date(value: &str) -> Option<NaiveDate> {
    let digits = value.get(0..8)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits[0..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether a trimmed line opens a new logical line and must never be folded.
fn starts_logical_line(line: &str) -> bool {
    ["BEGIN:", "END:", "DTSTART", "DTEND", "SUMMARY"]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Rewrite a loosely formatted feed into CRLF lines the parser accepts.
///
/// Indentation is stripped from every line except genuine continuations: a
/// whitespace-led line that follows a property inside an event and does not
/// itself start a property or component. Blank lines and event lines without
/// a `:` are dropped.
fn normalize_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_event = false;
    let mut after_property = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let continuation = in_event
            && after_property
            && raw.starts_with([' ', '\t'])
            && !starts_logical_line(line);
        if continuation {
            out.push_str(raw);
        } else if line.starts_with("BEGIN:") || line.starts_with("END:") {
            match line {
                "BEGIN:VEVENT" => in_event = true,
                "END:VEVENT" => in_event = false,
                _ => {}
            }
            after_property = false;
            out.push_str(line);
        } else if in_event && !line.contains(':') {
            continue;
        } else {
            after_property = true;
            out.push_str(raw.trim_start());
        }
        out.push_str("\r\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_date_reads_plain_and_datetime_values() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(compact_date("20240309"), expected);
        assert_eq!(compact_date("20240309T140000Z"), expected);
    }

    #[test]
    fn compact_date_rejects_short_or_invalid_values() {
        assert_eq!(compact_date("2024030"), None);
        assert_eq!(compact_date("2024-03-09"), None);
        assert_eq!(compact_date("20240230"), None);
        assert_eq!(compact_date(""), None);
    }

    #[test]
    fn normalize_strips_indentation_from_component_and_date_lines() {
        let text = "  BEGIN:VEVENT\n  DTSTART;VALUE=DATE:20240101\n\tDTEND:20240105\n  END:VEVENT  \n";
        assert_eq!(
            normalize_lines(text),
            "BEGIN:VEVENT\r\nDTSTART;VALUE=DATE:20240101\r\nDTEND:20240105\r\nEND:VEVENT\r\n"
        );
    }

    #[test]
    fn normalize_keeps_folded_summary_as_continuation() {
        let text = "BEGIN:VEVENT\r\nSUMMARY:Owner\r\n  block\r\nEND:VEVENT\r\n";
        assert_eq!(
            normalize_lines(text),
            "BEGIN:VEVENT\r\nSUMMARY:Owner\r\n  block\r\nEND:VEVENT\r\n"
        );
    }

    #[test]
    fn normalize_never_folds_outside_events() {
        let text = "BEGIN:VCALENDAR\n  X-WR-CALNAME:Unit A1\nEND:VCALENDAR\n";
        assert_eq!(
            normalize_lines(text),
            "BEGIN:VCALENDAR\r\nX-WR-CALNAME:Unit A1\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn normalize_never_folds_onto_a_component_line() {
        let text = "BEGIN:VEVENT\n  X-NOTE:first\nEND:VEVENT\n";
        assert_eq!(
            normalize_lines(text),
            "BEGIN:VEVENT\r\nX-NOTE:first\r\nEND:VEVENT\r\n"
        );
    }

    #[test]
    fn normalize_drops_blank_and_colonless_event_lines() {
        let text = "BEGIN:VEVENT\n\ngarbage\nDTEND:20240105\nEND:VEVENT\n";
        assert_eq!(
            normalize_lines(text),
            "BEGIN:VEVENT\r\nDTEND:20240105\r\nEND:VEVENT\r\n"
        );
    }
}
