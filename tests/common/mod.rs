//! Shared test infrastructure for lumen-console integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use lumen_console::{CharSource, ConsoleOutput, LampStrip, TimeDuration, TimeInstant, TimeSource, Wrgb};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockClock {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn advance_minutes(&self, minutes: u64) {
        self.advance(TestDuration(minutes * 60_000));
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Serial Link
// ============================================================================

/// Scripted input that hands out one queued byte per poll
pub struct ScriptedInput {
    data: heapless::Vec<u8, 256>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            data: heapless::Vec::from_slice(bytes).unwrap(),
            cursor: 0,
        }
    }

    /// Append more bytes behind whatever is still pending
    pub fn feed(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes).unwrap();
    }
}

impl CharSource for ScriptedInput {
    fn poll_char(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.cursor)?;
        self.cursor += 1;
        Some(byte)
    }
}

/// Output sink that records everything written for assertions
pub struct RecordingOutput {
    text: heapless::String<2048>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self {
            text: heapless::String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// How many times `needle` appears in the recorded output
    pub fn count(&self, needle: &str) -> usize {
        self.text.matches(needle).count()
    }
}

impl ConsoleOutput for RecordingOutput {
    fn write_text(&mut self, text: &str) {
        let _ = self.text.push_str(text);
    }
}

// ============================================================================
// Mock Lamp Strip
// ============================================================================

/// Mock strip that buffers pixels and counts `show` calls
pub struct MockStrip {
    pixels: heapless::Vec<Wrgb, 64>,
    show_count: usize,
}

impl MockStrip {
    pub fn new(pixel_count: usize) -> Self {
        let mut pixels = heapless::Vec::new();
        for _ in 0..pixel_count {
            pixels.push(Wrgb::OFF).unwrap();
        }
        Self {
            pixels,
            show_count: 0,
        }
    }

    pub fn pixels(&self) -> &[Wrgb] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Wrgb {
        self.pixels[index]
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }
}

impl LampStrip for MockStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Wrgb) {
        self.pixels[index] = color;
    }

    fn show(&mut self) {
        self.show_count += 1;
    }
}
