#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RingBuffer`**: Fixed-capacity circular FIFO queue connecting the pipeline stages
//! - **`BoundedVec`**: Fixed-capacity growable sequence container backing lines and commands
//! - **`LineAssembler`**: Accumulates raw serial bytes into complete input lines
//! - **`CommandBuilder`**: Tokenizes one line into a structured `Command`
//! - **`CommandDispatcher`**: Resolves a command name against the registry and runs the handler
//! - **`Console`**: Owns the three stages and drives them, in fixed order, once per `poll()`
//! - **`CharSource` / `ConsoleOutput`**: Traits to implement for your serial hardware
//! - **`LampStrip`**: Trait to implement for your LED strip hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Handlers receive the `Command` by reference and reach the hardware only through
//! the context threaded into every dispatch, so the whole console is testable on
//! the host with mock implementations of the hardware traits.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod bounded;
pub mod command;
pub mod commands;
pub mod console;
pub mod dispatch;
pub mod io;
pub mod lamp;
pub mod line;
pub mod ring;
pub mod time;

pub use bounded::{BoundedVec, CapacityError};
pub use command::{Arg, Command, CommandBuilder, CommandSource};
pub use commands::{COMMAND_NAMES, LampContext, default_registry};
pub use console::{Console, ConsoleFault, ConsoleState};
pub use dispatch::{CommandDispatcher, CommandEntry, CommandError, CommandHandler};
pub use io::{CharSource, ConsoleOutput};
pub use lamp::{LampStrip, Wrgb};
pub use line::{Line, LineAssembler, LineSource};
pub use ring::RingBuffer;
pub use time::{TimeDuration, TimeInstant, TimeSource};

/// Maximum length of one input line; anything longer truncates.
pub const MAX_LINE_LEN: usize = 40;

/// Maximum length of a command name in bytes.
pub const MAX_NAME_LEN: usize = 8;

/// Maximum length of a single argument in bytes.
pub const MAX_ARG_LEN: usize = 8;

/// Maximum number of arguments per command; extra words are dropped.
pub const MAX_ARGS: usize = 5;

/// Storage size of the assembled-line queue (power of two).
pub const LINE_QUEUE_DEPTH: usize = 4;

/// Storage size of the tokenized-command queue (power of two).
pub const COMMAND_QUEUE_DEPTH: usize = 4;

/// Longest text an output sink must accept in a single write.
pub const MAX_WRITE_LEN: usize = 80;

/// Prompt redisplayed after every dispatched command.
pub const PROMPT: &str = "[lumen]$ ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_depths_are_powers_of_two() {
        assert!(LINE_QUEUE_DEPTH.is_power_of_two());
        assert!(COMMAND_QUEUE_DEPTH.is_power_of_two());
    }

    #[test]
    fn prompt_fits_one_write() {
        assert!(PROMPT.len() <= MAX_WRITE_LEN);
    }
}
