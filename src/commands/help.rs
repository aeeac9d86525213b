//! `help` - the welcome banner and command list.

use core::fmt::Write as _;

use super::{COMMAND_NAMES, LampContext};
use crate::MAX_WRITE_LEN;
use crate::command::Command;
use crate::dispatch::CommandError;
use crate::io::ConsoleOutput;
use crate::lamp::LampStrip;
use crate::time::{TimeInstant, TimeSource};

pub(super) fn run<I, S, T, O>(
    _command: &Command,
    _context: &mut LampContext<'_, I, S, T>,
    out: &mut O,
) -> Result<(), CommandError>
where
    I: TimeInstant,
    S: LampStrip,
    T: TimeSource<I>,
    O: ConsoleOutput,
{
    out.line("Welcome to the Lumen Lamp.");
    out.line("We'll keep the light on for ya.");
    out.line("Available commands:");
    for name in COMMAND_NAMES {
        let mut entry = heapless::String::<MAX_WRITE_LEN>::new();
        let _ = write!(entry, "  {name}");
        out.line(&entry);
    }
    out.line("");
    out.line("In general, type CMD help to see command specific help.");
    Ok(())
}
