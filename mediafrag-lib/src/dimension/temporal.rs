//! Validation of the temporal dimension (`t=start[,end]`).
//!
//! The value is tried against the NPT, SMPTE and wall-clock grammars, in that
//! order; the first grammar that accepts both ends of the range decides the
//! unit. Every grammar accepts an empty string, so either end may be open.
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::{Captures, Regex};

use crate::{Rejection, TemporalSelector, TemporalUnit};

static NPT_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((npt:)?[0-9]+(\.[0-9]+)?)?$").unwrap());

static NPT_HOURS_MINUTES_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((npt:)?[0-9]+:[0-9]{2}:[0-9]{2}(\.[0-9]+)?)?$").unwrap());

static SMPTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+:[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]{2})?)?)?$").unwrap());

static WALL_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^((?P<year>[0-9]{4})(-(?P<month>[0-9]{2})(-(?P<day>[0-9]{2})",
        r"(T(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})(:(?P<second>[0-9]{2})(\.(?P<fraction>[0-9]+))?)?",
        r"(Z|(?P<sign>[-+])(?P<offset_hour>[0-9]{2}):(?P<offset_minute>[0-9]{2}))?)?)?)?)?$",
    ))
    .unwrap()
});

const NPT_PREFIX: &str = "npt:";
const CLOCK_PREFIX: &str = "clock:";

/// Which units must have their start at or before their end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemporalOrdering {
    /// Only wall-clock ranges are checked; NPT and SMPTE ranges such as
    /// `t=20,10` are accepted as given
    #[default]
    Lax,
    /// Ranges of every unit are checked
    Strict,
}

impl From<bool> for TemporalOrdering {
    fn from(strict: bool) -> Self {
        if strict {
            TemporalOrdering::Strict
        } else {
            TemporalOrdering::Lax
        }
    }
}

/// Validate a decoded `t` value
pub(crate) fn validate(
    value: &str,
    ordering: TemporalOrdering,
) -> Result<TemporalSelector, Rejection> {
    let (start, end) = value.split_once(',').unwrap_or((value, ""));

    npt(value, start, end, ordering)
        .or_else(|| smpte(value, start, end, ordering))
        .or_else(|| clock(value, start, end))
        .unwrap_or(Err(Rejection::InvalidTemporal))
}

fn is_npt(time: &str) -> bool {
    NPT_SECONDS.is_match(time) || NPT_HOURS_MINUTES_SECONDS.is_match(time)
}

/// `None` if the range is not NPT
fn npt(
    value: &str,
    start: &str,
    end: &str,
    ordering: TemporalOrdering,
) -> Option<Result<TemporalSelector, Rejection>> {
    if !is_npt(start) || !is_npt(end) {
        return None;
    }
    let start = start.strip_prefix(NPT_PREFIX).unwrap_or(start);
    let end = end.strip_prefix(NPT_PREFIX).unwrap_or(end);

    if ordering == TemporalOrdering::Strict
        && is_closed(start, end)
        && npt_seconds(start) > npt_seconds(end)
    {
        return Some(Err(Rejection::StartAfterEnd));
    }
    Some(Ok(TemporalSelector::new(value, TemporalUnit::Npt, start, end)))
}

/// `None` if the range is not SMPTE.
///
/// The unit comes from the prefix of the start time, `smpte` if there is
/// none. The end time may repeat the same prefix.
fn smpte(
    value: &str,
    start: &str,
    end: &str,
    ordering: TemporalOrdering,
) -> Option<Result<TemporalSelector, Rejection>> {
    let (unit, start) = TemporalUnit::SMPTE
        .iter()
        .find_map(|unit| unit.strip_prefix(start).map(|time| (*unit, time)))
        .unwrap_or((TemporalUnit::Smpte, start));
    let end = unit.strip_prefix(end).unwrap_or(end);

    if !SMPTE.is_match(start) || !SMPTE.is_match(end) {
        return None;
    }
    if ordering == TemporalOrdering::Strict
        && is_closed(start, end)
        && smpte_components(start) > smpte_components(end)
    {
        return Some(Err(Rejection::StartAfterEnd));
    }
    Some(Ok(TemporalSelector::new(value, unit, start, end)))
}

/// `None` if the range is not wall-clock time.
///
/// Closed wall-clock ranges are always checked for their ordering.
fn clock(value: &str, start: &str, end: &str) -> Option<Result<TemporalSelector, Rejection>> {
    let start = start.strip_prefix(CLOCK_PREFIX).unwrap_or(start);
    let end = end.strip_prefix(CLOCK_PREFIX).unwrap_or(end);

    let start_captures = WALL_CLOCK.captures(start)?;
    let end_captures = WALL_CLOCK.captures(end)?;

    if is_closed(start, end) {
        let Some(start_instant) = instant(&start_captures) else {
            return Some(Err(Rejection::InvalidClockTime(start.to_owned())));
        };
        let Some(end_instant) = instant(&end_captures) else {
            return Some(Err(Rejection::InvalidClockTime(end.to_owned())));
        };
        if start_instant > end_instant {
            return Some(Err(Rejection::StartAfterEnd));
        }
    }
    Some(Ok(TemporalSelector::new(
        value,
        TemporalUnit::Clock,
        start,
        end,
    )))
}

const fn is_closed(start: &str, end: &str) -> bool {
    !start.is_empty() && !end.is_empty()
}

/// Seconds of a (prefix-free) NPT time, `ss[.f]` or `h:mm:ss[.f]`
fn npt_seconds(time: &str) -> f64 {
    time.split(':')
        .map(|part| part.parse::<f64>().unwrap_or(f64::INFINITY))
        .fold(0.0, |seconds, part| seconds * 60.0 + part)
}

/// `[hours, minutes, seconds, frames, subframes]` of a (prefix-free) SMPTE
/// timecode; absent fields are zero
fn smpte_components(time: &str) -> [u64; 5] {
    let mut components = [0; 5];
    let fields = time.split([':', '.']);
    for (component, field) in components.iter_mut().zip(fields) {
        *component = field.parse().unwrap_or(u64::MAX);
    }
    components
}

/// Resolve a wall-clock grammar match to an instant.
///
/// Missing month and day default to `01`, missing time of day to midnight
/// and a missing offset to UTC. Returns `None` for an empty match or for
/// fields that name no calendar instant.
fn instant(captures: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    let field = |name: &str, default: u32| -> Option<u32> {
        captures
            .name(name)
            .map_or(Some(default), |m| m.as_str().parse().ok())
    };

    let year: i32 = captures.name("year")?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field("month", 1)?, field("day", 1)?)?;

    // Digits beyond nanosecond precision are ignored
    let nanos = captures.name("fraction").map_or(Some(0), |m| {
        format!("{:0<9.9}", m.as_str()).parse::<u32>().ok()
    })?;
    let time = NaiveTime::from_hms_nano_opt(
        field("hour", 0)?,
        field("minute", 0)?,
        field("second", 0)?,
        nanos,
    )?;

    let offset_seconds = match captures.name("sign") {
        Some(sign) => {
            let hours = field("offset_hour", 0)?;
            let minutes = field("offset_minute", 0)?;
            let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
            if sign.as_str() == "-" { -seconds } else { seconds }
        }
        None => 0,
    };
    let offset = FixedOffset::east_opt(offset_seconds)?;
    offset.from_local_datetime(&date.and_time(time)).single()
}
