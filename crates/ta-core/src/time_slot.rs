//! Clock-time classification into periods and lateness.
//!
//! Both classifications are driven by fixed tables of closed intervals in
//! seconds since midnight. Period windows span a period plus roughly a
//! quarter hour on each side and overlap their neighbours, so the table is
//! scanned in ascending order and the earliest period wins. Lateness
//! windows start a few minutes after each period's nominal start.

use crate::types::{InputError, Lateness, TimeSlot};

/// A closed interval `[from, to]` of seconds since midnight tagged with a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: u32,
    pub to: u32,
    pub period: u8,
}

impl Window {
    const fn new(from: u32, to: u32, period: u8) -> Self {
        Self { from, to, period }
    }

    pub const fn contains(&self, seconds: u32) -> bool {
        self.from <= seconds && seconds <= self.to
    }
}

/// Period windows, ascending.
pub const PERIOD_WINDOWS: [Window; 8] = [
    Window::new(27_800, 35_100, 1),
    Window::new(33_900, 41_100, 2),
    Window::new(39_900, 47_100, 3),
    Window::new(46_700, 53_300, 4),
    Window::new(53_100, 60_300, 5),
    Window::new(59_100, 66_300, 6),
    Window::new(65_100, 72_300, 7),
    Window::new(70_700, 77_900, 8),
];

/// Lateness windows, ascending. Adjacent windows may share an endpoint.
pub const LATE_WINDOWS: [Window; 8] = [
    Window::new(29_000, 35_100, 1),
    Window::new(35_100, 41_100, 2),
    Window::new(41_100, 47_100, 3),
    Window::new(47_900, 53_300, 4),
    Window::new(54_300, 60_300, 5),
    Window::new(60_300, 66_300, 6),
    Window::new(66_300, 72_300, 7),
    Window::new(71_900, 77_900, 8),
];

/// Converts colon-separated clock tokens to seconds.
///
/// Three tokens are hours, minutes and seconds; two tokens are minutes and
/// seconds. Anything else is rejected.
pub fn parse_clock_tokens(tokens: &[&str]) -> Result<u32, InputError> {
    let number = |token: &str| {
        token
            .trim()
            .parse::<u32>()
            .map_err(|source| InputError::Number {
                value: tokens.join(":"),
                token: token.to_string(),
                source,
            })
    };

    let (hours, minutes, seconds) = match *tokens {
        [hours, minutes, seconds] => (number(hours)?, number(minutes)?, number(seconds)?),
        [minutes, seconds] => (0, number(minutes)?, number(seconds)?),
        _ => {
            return Err(InputError::ClockFormat {
                value: tokens.join(":"),
                count: tokens.len(),
            });
        }
    };

    hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| InputError::ClockRange {
            value: tokens.join(":"),
        })
}

/// Parses `HH:MM:SS` or `MM:SS` into seconds since midnight.
pub fn parse_clock(text: &str) -> Result<u32, InputError> {
    let tokens: Vec<&str> = text.split(':').collect();
    parse_clock_tokens(&tokens)
}

/// Returns the period whose window contains `seconds`, or `Consultation`.
pub fn classify_slot(seconds: u32) -> TimeSlot {
    PERIOD_WINDOWS
        .iter()
        .find(|w| w.contains(seconds))
        .map_or(TimeSlot::Consultation, |w| TimeSlot::Period(w.period))
}

/// Returns the lateness window containing `seconds`.
///
/// A time on a shared endpoint belongs to the later window.
pub fn late_window(seconds: u32) -> Option<&'static Window> {
    LATE_WINDOWS.iter().rev().find(|w| w.contains(seconds))
}

/// Classifies a join time as late or on time.
pub fn classify_lateness(seconds: u32) -> Lateness {
    if late_window(seconds).is_some() {
        Lateness::Late
    } else {
        Lateness::OnTime
    }
}
