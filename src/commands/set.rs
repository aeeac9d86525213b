//! `set` - paint the whole strip or one pixel with a WRGB value.

use super::{LampContext, parse_number};
use crate::command::Command;
use crate::dispatch::CommandError;
use crate::io::ConsoleOutput;
use crate::lamp::{LampStrip, Wrgb};
use crate::time::{TimeInstant, TimeSource};

struct SetRequest {
    color: Wrgb,
    pixel: Option<usize>,
}

enum Parsed {
    Apply(SetRequest),
    HelpRequested,
    Rejected,
}

/// Accepted shapes: `set help`, `set W R G B`, `set W R G B INDEX`.
fn parse_args(command: &Command, pixel_count: usize) -> Parsed {
    match command.arg_count() {
        1 if command.arg_is(0, "help") => Parsed::HelpRequested,
        4 | 5 => {
            let channels: [Option<u8>; 4] = [
                command.arg(0).and_then(parse_number),
                command.arg(1).and_then(parse_number),
                command.arg(2).and_then(parse_number),
                command.arg(3).and_then(parse_number),
            ];
            let [Some(white), Some(red), Some(green), Some(blue)] = channels else {
                return Parsed::Rejected;
            };

            let mut request = SetRequest {
                color: Wrgb::new(white, red, green, blue),
                pixel: None,
            };
            if command.arg_count() == 5 {
                match command.arg(4).and_then(parse_number::<usize>) {
                    Some(index) if index < pixel_count => request.pixel = Some(index),
                    _ => return Parsed::Rejected,
                }
            }
            Parsed::Apply(request)
        }
        _ => Parsed::Rejected,
    }
}

fn print_usage(out: &mut impl ConsoleOutput) {
    out.line("Usage:");
    out.line("  set WHITE RED GREEN BLUE");
    out.line("  set WHITE RED GREEN BLUE INDEX");
    out.line("  set help");
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
    let request = match parse_args(command, context.strip().len()) {
        Parsed::HelpRequested => {
            print_usage(out);
            return Ok(());
        }
        Parsed::Rejected => {
            print_usage(out);
            return Err(CommandError::InvalidArguments);
        }
        Parsed::Apply(request) => request,
    };

    let strip = context.strip_mut();
    match request.pixel {
        Some(index) => strip.set_pixel(index, request.color),
        None => strip.fill(request.color),
    }
    strip.show();

    Ok(())
}
