//! `clock` - wall-clock reference and an analog face on the ring.
//!
//! The lamp has no RTC. `clock set` anchors an operator-supplied time of day
//! against the platform's monotonic counter; `clock show` projects the
//! current time onto the pixel ring as quarter marks plus an hour and a
//! minute hand, and prints it.

use core::fmt::Write as _;

use super::{LampContext, parse_number};
use crate::MAX_WRITE_LEN;
use crate::command::Command;
use crate::dispatch::CommandError;
use crate::io::ConsoleOutput;
use crate::lamp::{LampStrip, Wrgb};
use crate::time::{TimeInstant, TimeSource};

const QUARTER_MARK: Wrgb = Wrgb::new(8, 0, 0, 0);
const HOUR_HAND: Wrgb = Wrgb::new(0, 48, 0, 0);
const MINUTE_HAND: Wrgb = Wrgb::new(0, 0, 0, 48);

const MINUTES_PER_HALF_DAY: u64 = 12 * 60;

fn print_usage(out: &mut impl ConsoleOutput) {
    out.line("Usage:");
    out.line("  clock set HOUR MINUTE");
    out.line("  clock show");
    out.line("  clock help");
}

pub(super) fn run<I, S, T, O>(
    command: &Command,
    context: &mut LampContext<'_, I, S, T>,
    out: &mut O,
) -> Result<(), CommandError>
where
    I: TimeInstant,
    S: LampStrip,
    T: TimeSource<I>,
    O: ConsoleOutput,
{
    if command.arg_count() == 3 && command.arg_is(0, "set") {
        let hours = command.arg(1).and_then(parse_number::<u64>);
        let minutes = command.arg(2).and_then(parse_number::<u64>);
        let (Some(hours), Some(minutes)) = (hours, minutes) else {
            print_usage(out);
            return Err(CommandError::InvalidArguments);
        };
        if hours >= 24 || minutes >= 60 {
            print_usage(out);
            return Err(CommandError::InvalidArguments);
        }
        context.set_wall_clock(hours, minutes);
        return Ok(());
    }

    if command.arg_count() == 1 {
        if command.arg_is(0, "show") {
            let Some(total_minutes) = context.wall_clock_minutes() else {
                out.line("Clock has not been set.");
                return Err(CommandError::InvalidArguments);
            };
            render_face(context.strip_mut(), total_minutes);

            let mut text = heapless::String::<MAX_WRITE_LEN>::new();
            let _ = write!(text, "Time: {:02}:{:02}", total_minutes / 60, total_minutes % 60);
            out.line(&text);
            return Ok(());
        }
        if command.arg_is(0, "help") {
            print_usage(out);
            return Ok(());
        }
    }

    print_usage(out);
    Err(CommandError::InvalidArguments)
}

/// Draws quarter marks, then the minute hand, then the hour hand on top.
fn render_face(strip: &mut impl LampStrip, minutes_past_midnight: u64) {
    let count = strip.len();
    if count == 0 {
        return;
    }

    strip.fill(Wrgb::OFF);
    for quarter in 0..4 {
        strip.set_pixel(quarter * count / 4, QUARTER_MARK);
    }

    let minute_pixel = (minutes_past_midnight % 60) as usize * count / 60;
    strip.set_pixel(minute_pixel, MINUTE_HAND);

    let half_day = (minutes_past_midnight % MINUTES_PER_HALF_DAY) as usize;
    let hour_pixel = half_day * count / MINUTES_PER_HALF_DAY as usize;
    strip.set_pixel(hour_pixel, HOUR_HAND);

    strip.show();
}
