//! Command dispatch: registry lookup and handler invocation.

use core::fmt::Write as _;

use crate::MAX_WRITE_LEN;
use crate::command::{Command, CommandSource};
use crate::io::ConsoleOutput;

/// Why a command produced no useful effect.
///
/// Semantic failures are always non-fatal: they are reported once through
/// the output sink and the loop continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The name matched no registry entry.
    CommandNotFound,

    /// A handler rejected its arguments (wrong count, unparseable value,
    /// out-of-range index, missing precondition).
    InvalidArguments,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::CommandNotFound => write!(f, "command not found"),
            CommandError::InvalidArguments => write!(f, "invalid arguments"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

/// A registered function implementing one command's behavior.
///
/// Receives the command read-only; all side effects go through the context
/// `C` and the output sink `O`.
pub type CommandHandler<C, O> = fn(&Command, &mut C, &mut O) -> Result<(), CommandError>;

/// One (name, handler) pair in the registry.
pub struct CommandEntry<C, O> {
    pub name: &'static str,
    pub handler: CommandHandler<C, O>,
}

impl<C, O> Clone for CommandEntry<C, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, O> Copy for CommandEntry<C, O> {}

/// Resolves commands against a registry fixed at construction.
///
/// Final stage of the pipeline. The registry is an ordered array of
/// (name, handler) pairs probed linearly - the name set is closed and small,
/// so nothing fancier is warranted - and no entries are added or removed at
/// runtime. Lookup is an exact, case-sensitive, full-length match: both the
/// length and every byte must agree, with no prefix matching.
///
/// After every handled unit - success, reported error, or not-found - the
/// prompt is redisplayed to signal readiness for the next line.
///
/// # Type Parameters
/// * `C` - Handler context type (hardware access lives there)
/// * `O` - Output sink type
/// * `CMDS` - Number of registry entries
pub struct CommandDispatcher<C, O, const CMDS: usize> {
    entries: [CommandEntry<C, O>; CMDS],
    prompt: &'static str,
}

impl<C, O: ConsoleOutput, const CMDS: usize> CommandDispatcher<C, O, CMDS> {
    /// Creates a dispatcher over a fixed registry and prompt.
    pub const fn new(entries: [CommandEntry<C, O>; CMDS], prompt: &'static str) -> Self {
        Self { entries, prompt }
    }

    /// Returns the prompt string.
    pub const fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Consumes at most one upstream command; called once per polling-loop
    /// iteration.
    ///
    /// Nothing available is a silent no-op - no handler, no prompt. A
    /// handler's reported status never halts the dispatcher.
    pub fn update(&self, commands: &mut impl CommandSource, context: &mut C, out: &mut O) {
        let Some(command) = commands.next_command() else {
            return;
        };

        let status = match self.lookup(command.name()) {
            Some(handler) => handler(&command, context, out),
            None => Err(CommandError::CommandNotFound),
        };
        if let Err(error) = status {
            report(out, error);
        }

        out.write_text(self.prompt);
    }

    fn lookup(&self, name: &[u8]) -> Option<CommandHandler<C, O>> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_bytes() == name)
            .map(|entry| entry.handler)
    }
}

fn report(out: &mut impl ConsoleOutput, error: CommandError) {
    let mut message = heapless::String::<MAX_WRITE_LEN>::new();
    let _ = write!(message, "{error}");
    out.error(&message);
}
