//! The closed command set of the lamp firmware.
//!
//! Four commands exist: `help`, `set`, `pattern` and `clock`. The set is
//! fixed at build time; [`default_registry`] hands the dispatcher its
//! entries and [`COMMAND_NAMES`] is the canonical list `help` prints.
//!
//! Handlers reach the hardware only through [`LampContext`], so every one of
//! them runs unchanged on the host against mock strip and clock.

mod clock;
mod help;
mod pattern;
mod set;

use crate::dispatch::CommandEntry;
use crate::io::ConsoleOutput;
use crate::lamp::LampStrip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Every command name the registry resolves, in registry order.
pub const COMMAND_NAMES: [&str; 4] = ["help", "set", "pattern", "clock"];

const MINUTES_PER_DAY: u64 = 24 * 60;

/// The wall-clock anchor `clock set` records: what time the operator said it
/// was, and the monotonic instant they said it at.
#[derive(Clone, Copy)]
struct WallClockReference<I> {
    set_at: I,
    minutes_past_midnight: u64,
}

/// Everything the command handlers may touch: the LED strip, the platform
/// clock, and the wall-clock reference the `clock` command maintains.
///
/// One context value is constructed at startup and threaded through every
/// dispatch; no handler state is global.
pub struct LampContext<'t, I: TimeInstant, S: LampStrip, T: TimeSource<I>> {
    strip: S,
    time_source: &'t T,
    wall_clock: Option<WallClockReference<I>>,
}

impl<'t, I, S, T> LampContext<'t, I, S, T>
where
    I: TimeInstant,
    S: LampStrip,
    T: TimeSource<I>,
{
    /// Creates a context around the strip and the platform time source.
    pub fn new(strip: S, time_source: &'t T) -> Self {
        Self {
            strip,
            time_source,
            wall_clock: None,
        }
    }

    /// Returns the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns the strip mutably.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Returns true if `clock set` has recorded a reference.
    pub fn wall_clock_is_set(&self) -> bool {
        self.wall_clock.is_some()
    }

    fn set_wall_clock(&mut self, hours: u64, minutes: u64) {
        self.wall_clock = Some(WallClockReference {
            set_at: self.time_source.now(),
            minutes_past_midnight: hours * 60 + minutes,
        });
    }

    /// Current wall-clock time in minutes past midnight, wrapping at a day.
    fn wall_clock_minutes(&self) -> Option<u64> {
        let reference = self.wall_clock?;
        let elapsed_minutes = self
            .time_source
            .now()
            .duration_since(reference.set_at)
            .as_millis()
            / 60_000;
        Some((reference.minutes_past_midnight + elapsed_minutes) % MINUTES_PER_DAY)
    }
}

/// Returns the registry entries for the firmware's four commands.
pub fn default_registry<'t, I, S, T, O>() -> [CommandEntry<LampContext<'t, I, S, T>, O>; 4]
where
    I: TimeInstant,
    S: LampStrip,
    T: TimeSource<I>,
    O: ConsoleOutput,
{
    [
        CommandEntry {
            name: "help",
            handler: help::run,
        },
        CommandEntry {
            name: "set",
            handler: set::run,
        },
        CommandEntry {
            name: "pattern",
            handler: pattern::run,
        },
        CommandEntry {
            name: "clock",
            handler: clock::run,
        },
    ]
}

/// Parses a decimal number from raw argument bytes.
fn parse_number<N: core::str::FromStr>(word: &[u8]) -> Option<N> {
    core::str::from_utf8(word).ok()?.parse().ok()
}
