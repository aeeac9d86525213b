//! Raw-input accumulation: bytes in, complete lines out.

use crate::bounded::BoundedVec;
use crate::io::CharSource;
use crate::ring::RingBuffer;
use crate::{LINE_QUEUE_DEPTH, MAX_LINE_LEN};

/// One newline-terminated chunk of input text, capped at [`MAX_LINE_LEN`] bytes.
pub type Line = BoundedVec<u8, MAX_LINE_LEN>;

const LINE_TERMINATOR: u8 = b'\n';

/// Trait for anything that hands out assembled lines.
///
/// [`LineAssembler`] is the production implementor; tests substitute scripted
/// sources to drive the downstream stage directly.
pub trait LineSource {
    /// Returns true if a call to `next_line` would yield a line.
    fn line_available(&self) -> bool;

    /// Removes and returns the oldest assembled line, if any.
    fn next_line(&mut self) -> Option<Line>;
}

/// Accumulates raw characters into complete lines.
///
/// First stage of the pipeline. Each `update` drains whatever bytes the input
/// source has ready - never blocking - and appends them to the accumulator
/// until the line terminator arrives, at which point the finished line moves
/// into the output queue for the command builder.
///
/// Two overflows are tolerated here, by policy:
/// - an over-long line silently truncates at [`MAX_LINE_LEN`];
/// - a line finished while the output queue is full is dropped, and
///   [`dropped_lines`](LineAssembler::dropped_lines) counts it.
///
/// A dropped or truncated line costs the operator a retype; neither is worth
/// halting the device over. The accumulator always starts the next line empty.
#[derive(Debug, Default)]
pub struct LineAssembler {
    accumulator: Line,
    lines: RingBuffer<Line, LINE_QUEUE_DEPTH>,
    dropped: u32,
}

impl LineAssembler {
    /// Creates an assembler with an empty accumulator and queue.
    pub fn new() -> Self {
        Self {
            accumulator: Line::new(),
            lines: RingBuffer::new(),
            dropped: 0,
        }
    }

    /// Drains pending input bytes; called once per polling-loop iteration.
    ///
    /// Returns as soon as the source has nothing ready. Carriage returns are
    /// ignored so CRLF serial terminals behave like LF ones.
    pub fn update(&mut self, input: &mut impl CharSource) {
        while let Some(byte) = input.poll_char() {
            match byte {
                b'\r' => {}
                LINE_TERMINATOR => {
                    let line = self.accumulator;
                    self.accumulator.clear();
                    if self.lines.enqueue(line).is_err() {
                        self.dropped = self.dropped.saturating_add(1);
                    }
                }
                _ => {
                    // Over-long lines truncate; the tail bytes are discarded.
                    let _ = self.accumulator.push(byte);
                }
            }
        }
    }

    /// Returns how many finished lines were dropped on a full queue.
    pub fn dropped_lines(&self) -> u32 {
        self.dropped
    }
}

impl LineSource for LineAssembler {
    fn line_available(&self) -> bool {
        !self.lines.is_empty()
    }

    fn next_line(&mut self) -> Option<Line> {
        self.lines.dequeue()
    }
}
