//! `pattern` - whole-strip effects.

use super::LampContext;
use crate::command::Command;
use crate::dispatch::CommandError;
use crate::io::ConsoleOutput;
use crate::lamp::{LampStrip, Wrgb, hue};
use crate::time::{TimeInstant, TimeSource};

fn print_usage(out: &mut impl ConsoleOutput) {
    out.line("Usage:");
    out.line("  pattern rainbow");
    out.line("  pattern off");
    out.line("  pattern help");
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
    if command.arg_count() == 1 {
        if command.arg_is(0, "rainbow") {
            rainbow(context.strip_mut());
            return Ok(());
        }
        if command.arg_is(0, "off") {
            let strip = context.strip_mut();
            strip.fill(Wrgb::OFF);
            strip.show();
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

/// Paints one full hue wheel across the strip.
fn rainbow(strip: &mut impl LampStrip) {
    let count = strip.len();
    for index in 0..count {
        let angle = 360.0 * index as f32 / count as f32;
        strip.set_pixel(index, Wrgb::from_srgb(hue(angle)));
    }
    strip.show();
}
