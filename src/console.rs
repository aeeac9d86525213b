//! The polling-loop context that owns the whole pipeline.

use core::fmt::Write as _;

use crate::MAX_WRITE_LEN;
use crate::command::CommandBuilder;
use crate::dispatch::CommandDispatcher;
use crate::io::{CharSource, ConsoleOutput};
use crate::line::LineAssembler;

/// Whether the console is still making forward progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleState {
    /// Polling normally.
    Running,

    /// A fault latched the console; every further `poll` returns immediately.
    Halted,
}

/// A forward-progress-ending fault.
///
/// There is no supervisor to restart a battery device, so a fault is
/// terminal by design: the console reports it once and goes inert rather
/// than attempting uncertain recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleFault {
    /// The tokenized-command queue rejected an enqueue. Under the fixed poll
    /// order the dispatcher drains that queue at least as fast as the
    /// builder fills it, so this firing means the polling discipline was
    /// violated.
    CommandQueueOverflow,
}

impl core::fmt::Display for ConsoleFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConsoleFault::CommandQueueOverflow => write!(f, "command queue overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConsoleFault {}

/// Owns the input source, output sink, the three pipeline stages and the
/// handler context; constructed once at startup and polled forever.
///
/// Each `poll` drives, in fixed order: raw-input accumulation, command
/// building, dispatch. Data flows strictly forward; every queue has exactly
/// one producer and one consumer determined by that order, which is the
/// entire synchronization story - no locks, no atomics.
///
/// # Type Parameters
/// * `In` - Serial input implementation
/// * `Out` - Serial output implementation
/// * `C` - Handler context type
/// * `CMDS` - Number of registry entries
pub struct Console<In, Out, C, const CMDS: usize> {
    input: In,
    output: Out,
    assembler: LineAssembler,
    builder: CommandBuilder,
    dispatcher: CommandDispatcher<C, Out, CMDS>,
    context: C,
    state: ConsoleState,
}

impl<In, Out, C, const CMDS: usize> Console<In, Out, C, CMDS>
where
    In: CharSource,
    Out: ConsoleOutput,
{
    /// Creates a console around the given hardware and registry.
    pub fn new(input: In, output: Out, dispatcher: CommandDispatcher<C, Out, CMDS>, context: C) -> Self {
        Self {
            input,
            output,
            assembler: LineAssembler::new(),
            builder: CommandBuilder::new(),
            dispatcher,
            context,
            state: ConsoleState::Running,
        }
    }

    /// Prints the prompt once, eagerly, before any input has been read.
    ///
    /// Because the dispatcher also reprompts after every handled unit, the
    /// very first interaction shows the prompt twice. Quirk of the original
    /// device, kept on purpose.
    pub fn start(&mut self) {
        self.output.write_text(self.dispatcher.prompt());
    }

    /// Drives the three pipeline stages once, in fixed order.
    ///
    /// Never blocks; an iteration with no pending input does nothing. A
    /// [`ConsoleFault`] is reported once and latches the console into
    /// [`ConsoleState::Halted`].
    pub fn poll(&mut self) -> ConsoleState {
        if self.state == ConsoleState::Halted {
            return self.state;
        }

        self.assembler.update(&mut self.input);
        if let Err(fault) = self.builder.update(&mut self.assembler) {
            let mut message = heapless::String::<MAX_WRITE_LEN>::new();
            let _ = write!(message, "{fault}");
            self.output.error(&message);
            self.state = ConsoleState::Halted;
            return self.state;
        }
        self.dispatcher
            .update(&mut self.builder, &mut self.context, &mut self.output);

        self.state
    }

    /// Returns whether the console is running or latched halted.
    pub fn state(&self) -> ConsoleState {
        self.state
    }

    /// Returns how many finished input lines were dropped on backpressure.
    pub fn dropped_lines(&self) -> u32 {
        self.assembler.dropped_lines()
    }

    /// Returns the handler context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Returns the handler context mutably, for board-side access between
    /// polls.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Returns the output sink, for board-side reporting between polls.
    pub fn output_mut(&mut self) -> &mut Out {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::dispatch::{CommandEntry, CommandError};
    use crate::line::{Line, LineSource};

    struct Script {
        data: heapless::Vec<u8, 64>,
        cursor: usize,
    }

    impl Script {
        fn new(bytes: &[u8]) -> Self {
            Self {
                data: heapless::Vec::from_slice(bytes).unwrap(),
                cursor: 0,
            }
        }
    }

    impl CharSource for Script {
        fn poll_char(&mut self) -> Option<u8> {
            let byte = *self.data.get(self.cursor)?;
            self.cursor += 1;
            Some(byte)
        }
    }

    struct Recorder(heapless::String<512>);

    impl ConsoleOutput for Recorder {
        fn write_text(&mut self, text: &str) {
            let _ = self.0.push_str(text);
        }
    }

    struct Hits(u32);

    fn ping(_cmd: &Command, context: &mut Hits, _out: &mut Recorder) -> Result<(), CommandError> {
        context.0 += 1;
        Ok(())
    }

    fn console_for(input: &[u8]) -> Console<Script, Recorder, Hits, 1> {
        Console::new(
            Script::new(input),
            Recorder(heapless::String::new()),
            CommandDispatcher::new([CommandEntry { name: "ping", handler: ping }], "$ "),
            Hits(0),
        )
    }

    #[test]
    fn one_line_one_handler_call_one_reprompt() {
        let mut console = console_for(b"ping\n");
        console.start();
        assert_eq!(console.poll(), ConsoleState::Running);

        assert_eq!(console.context().0, 1);
        // Eager startup prompt plus the post-dispatch one.
        assert_eq!(console.output.0.as_str(), "$ $ ");
    }

    #[test]
    fn idle_polls_do_nothing() {
        let mut console = console_for(b"");
        console.start();
        for _ in 0..5 {
            console.poll();
        }
        assert_eq!(console.context().0, 0);
        assert_eq!(console.output.0.as_str(), "$ ");
    }

    #[test]
    fn unknown_command_keeps_the_console_running() {
        let mut console = console_for(b"bogus\nping\n");
        console.poll();
        console.poll();

        assert_eq!(console.state(), ConsoleState::Running);
        assert_eq!(console.context().0, 1);
        assert!(console.output.0.as_str().contains("command not found"));
    }

    #[test]
    fn fault_reports_once_and_latches_halt() {
        struct EndlessLines;
        impl LineSource for EndlessLines {
            fn line_available(&self) -> bool {
                true
            }
            fn next_line(&mut self) -> Option<Line> {
                Some(Line::from_slice(b"ping").unwrap())
            }
        }

        let mut console = console_for(b"ping\n");
        // Fill the command queue behind the dispatcher's back to violate the
        // single-consumer discipline the fixed poll order normally enforces.
        let mut stuffed = EndlessLines;
        console.builder.update(&mut stuffed).unwrap();
        console.builder.update(&mut stuffed).unwrap();
        console.builder.update(&mut stuffed).unwrap();

        assert_eq!(console.poll(), ConsoleState::Halted);
        assert_eq!(console.output.0.as_str(), "[!] command queue overflow\n");
        assert_eq!(console.context().0, 0);

        // Latched: further polls return immediately and touch nothing.
        assert_eq!(console.poll(), ConsoleState::Halted);
        assert_eq!(console.output.0.as_str(), "[!] command queue overflow\n");
        assert_eq!(console.context().0, 0);
    }

    #[test]
    fn dropped_lines_surface_through_the_console() {
        // Four finished lines in one drain against a queue that holds three.
        let mut console = console_for(b"a\nb\nc\nd\n");
        console.poll();
        assert_eq!(console.dropped_lines(), 1);
        assert_eq!(console.state(), ConsoleState::Running);
    }
}
