//! Command tokenizing: lines in, structured commands out.

use crate::bounded::BoundedVec;
use crate::console::ConsoleFault;
use crate::line::LineSource;
use crate::ring::RingBuffer;
use crate::{COMMAND_QUEUE_DEPTH, MAX_ARGS, MAX_ARG_LEN, MAX_NAME_LEN};

/// One command argument, capped at [`MAX_ARG_LEN`] bytes.
pub type Arg = BoundedVec<u8, MAX_ARG_LEN>;

/// A structured record parsed from one input line: a name plus up to
/// [`MAX_ARGS`] ordered arguments.
///
/// Constructed empty, populated field by field during tokenizing, then
/// copied whole into the dispatch queue. An empty line produces a command
/// with an empty name; the dispatcher treats that like any other unknown
/// name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Command {
    name: BoundedVec<u8, MAX_NAME_LEN>,
    args: BoundedVec<Arg, MAX_ARGS>,
}

impl Command {
    /// Returns the command name bytes.
    pub fn name(&self) -> &[u8] {
        self.name.as_slice()
    }

    /// Returns the number of arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Returns the bytes of argument `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&[u8]> {
        self.args.get(index).map(|arg| arg.as_slice())
    }

    /// Returns true if argument `index` exists and equals `expected`.
    pub fn arg_is(&self, index: usize, expected: &str) -> bool {
        self.arg(index) == Some(expected.as_bytes())
    }

    fn set_name(&mut self, word: &[u8]) {
        let take = word.len().min(MAX_NAME_LEN);
        // Cannot fail after the clamp.
        let _ = self.name.assign_from_slice(&word[..take]);
    }

    fn push_arg(&mut self, word: &[u8]) {
        let take = word.len().min(MAX_ARG_LEN);
        if let Ok(arg) = Arg::from_slice(&word[..take]) {
            let _ = self.args.push(arg);
        }
    }
}

/// Trait for anything that hands out tokenized commands.
pub trait CommandSource {
    /// Returns true if a call to `next_command` would yield a command.
    fn command_available(&self) -> bool;

    /// Removes and returns the oldest tokenized command, if any.
    fn next_command(&mut self) -> Option<Command>;
}

/// Splits a line into words and produces exactly one [`Command`] per line.
///
/// Second stage of the pipeline. Words are maximal runs of non-space bytes;
/// runs of spaces between words are skipped as a unit. Only the single ASCII
/// space separates - a tab is an ordinary word byte. The first word becomes
/// the name, following words become arguments in order; an over-long name or
/// argument truncates, and words past the argument limit are dropped.
///
/// No validation of the name happens here; unknown names are the
/// dispatcher's problem.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    commands: RingBuffer<Command, COMMAND_QUEUE_DEPTH>,
}

impl CommandBuilder {
    /// Creates a builder with an empty output queue.
    pub fn new() -> Self {
        Self {
            commands: RingBuffer::new(),
        }
    }

    /// Consumes at most one upstream line; called once per polling-loop
    /// iteration.
    ///
    /// # Errors
    /// Returns [`ConsoleFault::CommandQueueOverflow`] if the tokenized
    /// command cannot be queued. Unlike a dropped line this is fatal: under
    /// the fixed poll order the dispatcher drains this queue faster than one
    /// line per iteration can fill it, so overflow means the polling
    /// discipline itself is broken and the console must halt.
    pub fn update(&mut self, lines: &mut impl LineSource) -> Result<(), ConsoleFault> {
        let Some(line) = lines.next_line() else {
            return Ok(());
        };
        self.commands
            .enqueue(tokenize(&line))
            .map_err(|_| ConsoleFault::CommandQueueOverflow)
    }
}

impl CommandSource for CommandBuilder {
    fn command_available(&self) -> bool {
        !self.commands.is_empty()
    }

    fn next_command(&mut self) -> Option<Command> {
        self.commands.dequeue()
    }
}

fn tokenize(line: &[u8]) -> Command {
    let mut command = Command::default();
    let mut words = line.split(|&byte| byte == b' ').filter(|word| !word.is_empty());

    if let Some(word) = words.next() {
        command.set_name(word);
    }
    for word in words.take(MAX_ARGS) {
        command.push_arg(word);
    }
    command
}
