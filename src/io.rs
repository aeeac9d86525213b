//! Hardware seams for console input and output.
//!
//! The pipeline never talks to a UART directly. It pulls bytes through
//! [`CharSource`] and pushes text through [`ConsoleOutput`], so the whole
//! console runs on the host against mock implementations and a board crate
//! wires in the real serial driver.

/// Trait for abstracting the serial input side.
///
/// Implement this for your serial hardware. `poll_char` must never block;
/// returning `None` when no byte has arrived is the normal idle outcome.
/// Implementations may echo received bytes back for interactive display.
pub trait CharSource {
    /// Returns the next received byte, if one is ready.
    fn poll_char(&mut self) -> Option<u8>;
}

/// Trait for abstracting the serial output side.
///
/// Implementors only supply [`write_text`](ConsoleOutput::write_text); the
/// severity-prefixed helpers are provided on top of it. Each single call
/// stays at or below [`MAX_WRITE_LEN`](crate::MAX_WRITE_LEN) bytes, so a
/// fixed transmit buffer of that size is always sufficient. Handle any
/// hardware errors internally - writes cannot fail.
pub trait ConsoleOutput {
    /// Writes a fragment of text, without a trailing newline.
    fn write_text(&mut self, text: &str);

    /// Writes `text` followed by a newline.
    fn line(&mut self, text: &str) {
        self.write_text(text);
        self.write_text("\n");
    }

    /// Writes an error line, prefixed `[!] `.
    fn error(&mut self, text: &str) {
        self.write_text("[!] ");
        self.line(text);
    }

    /// Writes an informational line, prefixed `[*] `.
    fn info(&mut self, text: &str) {
        self.write_text("[*] ");
        self.line(text);
    }

    /// Writes a debug line, prefixed `[@] `.
    fn debug(&mut self, text: &str) {
        self.write_text("[@] ");
        self.line(text);
    }
}
