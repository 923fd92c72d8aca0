//! Byte-at-a-time terminal line editor.
//!
//! The editor reads one byte per keystroke from an unbuffered, unechoed input
//! stream and does its own echo. Editing is append-only: the cursor always sits
//! at the end of the buffer, and backspace removes the last character, crossing
//! line boundaries when needed.
//!
//! | Byte              | Effect                                   |
//! |-------------------|------------------------------------------|
//! | `0x11` (Ctrl-Q)   | finish and hand back the buffer          |
//! | `0x7F`, `0x08`    | remove the last character                |
//! | `\r`, `\n`        | append one newline each                  |
//! | anything else     | append literally                         |

use std::io::{self, Read, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;
use zeroize::Zeroizing;

use crate::error::{Result, TexcryptError};

/// Ctrl-Q.
pub const SAVE_KEY: u8 = 0x11;

/// DEL (what most terminals send for Backspace) and BS.
pub const BACKSPACE_KEYS: [u8; 2] = [0x7f, 0x08];

/// Raw-mode control for the terminal the editor reads from.
pub trait Terminal {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
}

/// The process's controlling terminal, switched with crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermTerminal;

impl Terminal for CrosstermTerminal {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

/// A terminal that is left as-is: piped input, tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookedTerminal;

impl Terminal for CookedTerminal {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Holds raw mode for its lifetime and restores the terminal on drop.
struct RawModeGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
    active: bool,
}

impl<'a, T: Terminal + ?Sized> RawModeGuard<'a, T> {
    fn acquire(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enable_raw_mode()?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the terminal now, reporting failure to the caller.
    fn release(mut self) -> io::Result<()> {
        self.active = false;
        self.terminal.disable_raw_mode()
    }
}

impl<T: Terminal + ?Sized> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = self.terminal.disable_raw_mode() {
                warn!("failed to restore terminal mode: {}", err);
            }
        }
    }
}

/// Where the editor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Finished,
}

/// Append-only text editor fed one byte at a time.
pub struct LineEditor {
    buffer: Zeroizing<String>,
    /// Bytes of a multi-byte UTF-8 character still being typed.
    pending: Zeroizing<Vec<u8>>,
    state: EditorState,
}

impl LineEditor {
    /// Create an editor seeded with previously decrypted text.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: Zeroizing::new(initial.to_owned()),
            pending: Zeroizing::new(Vec::new()),
            state: EditorState::Editing,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn into_text(self) -> Zeroizing<String> {
        self.buffer
    }

    /// Run the editor to completion.
    ///
    /// Raw mode is held from entry until the save key is read, and restored on
    /// every error path as well. The seeded text is echoed first.
    ///
    /// # Errors
    ///
    /// Returns [`TexcryptError::InputStream`] if raw mode cannot be entered,
    /// reading fails, or the input ends before the save key. Nothing typed so
    /// far is returned in that case.
    pub fn run<T, R, W>(mut self, terminal: &mut T, mut input: R, mut output: W) -> Result<Zeroizing<String>>
    where
        T: Terminal + ?Sized,
        R: Read,
        W: Write,
    {
        let guard =
            RawModeGuard::acquire(terminal).map_err(|source| TexcryptError::InputStream { source })?;
        debug!(seeded_len = self.buffer.len(), "editor started");

        write_text(&mut output, &self.buffer)?;
        output.flush()?;

        while self.state == EditorState::Editing {
            let byte = read_byte(&mut input)?;
            self.feed(byte, &mut output)?;
            output.flush()?;
        }

        guard
            .release()
            .map_err(|source| TexcryptError::InputStream { source })?;
        debug!(final_len = self.buffer.len(), "editor finished");
        Ok(self.into_text())
    }

    /// Apply one input byte, echoing its effect to `out`.
    pub fn feed<W: Write>(&mut self, byte: u8, out: &mut W) -> io::Result<EditorState> {
        if self.state == EditorState::Finished {
            return Ok(self.state);
        }

        match byte {
            SAVE_KEY => {
                self.flush_pending(out)?;
                self.state = EditorState::Finished;
            }
            b if BACKSPACE_KEYS.contains(&b) => {
                if self.pending.is_empty() {
                    self.backspace(out)?;
                } else {
                    // Half-typed character was never echoed.
                    self.pending.clear();
                }
            }
            b'\r' | b'\n' => {
                self.flush_pending(out)?;
                self.buffer.push('\n');
                out.write_all(b"\r\n")?;
            }
            b if b.is_ascii() => {
                self.flush_pending(out)?;
                self.buffer.push(char::from(b));
                out.write_all(&[b])?;
            }
            b => self.push_utf8_byte(b, out)?,
        }
        Ok(self.state)
    }

    fn push_utf8_byte<W: Write>(&mut self, byte: u8, out: &mut W) -> io::Result<()> {
        self.pending.push(byte);
        match std::str::from_utf8(&self.pending) {
            Ok(complete) => {
                self.buffer.push_str(complete);
                out.write_all(complete.as_bytes())?;
                self.pending.clear();
            }
            Err(err) if err.error_len().is_none() => {}
            Err(_) => self.flush_pending(out)?,
        }
        Ok(())
    }

    /// Turn an incomplete sequence into U+FFFD.
    fn flush_pending<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.pending.clear();
        self.buffer.push(char::REPLACEMENT_CHARACTER);
        write!(out, "{}", char::REPLACEMENT_CHARACTER)
    }

    fn backspace<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(removed) = self.buffer.pop() else {
            return Ok(());
        };

        if removed == '\n' {
            queue!(
                out,
                Clear(ClearType::CurrentLine),
                MoveUp(1),
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(self.last_line())
            )
        } else if let Some(width) = removed.width() {
            for _ in 0..width {
                out.write_all(b"\x08 \x08")?;
            }
            Ok(())
        } else {
            // Control characters have no reliable width; redraw the row.
            queue!(
                out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(self.last_line())
            )
        }
    }

    fn last_line(&self) -> &str {
        let start = self.buffer.rfind('\n').map_or(0, |idx| idx + 1);
        &self.buffer[start..]
    }
}

impl std::fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEditor")
            .field("len", &self.buffer.len())
            .field("state", &self.state)
            .finish()
    }
}

fn read_byte<R: Read>(input: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    input
        .read_exact(&mut byte)
        .map_err(|source| TexcryptError::InputStream { source })?;
    Ok(byte[0])
}

/// Echo text with newlines as `\r\n`, which raw mode needs.
fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.write_all(b"\r\n")?;
        }
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const BS: u8 = 0x7f;

    fn run_editor(initial: &str, keys: &[u8]) -> Result<(String, Vec<u8>)> {
        let mut output = Vec::new();
        let text = LineEditor::new(initial).run(&mut CookedTerminal, Cursor::new(keys), &mut output)?;
        Ok((text.to_string(), output))
    }

    #[derive(Default)]
    struct RecordingTerminal {
        enabled: usize,
        disabled: usize,
        fail_enable: bool,
    }

    impl Terminal for RecordingTerminal {
        fn enable_raw_mode(&mut self) -> io::Result<()> {
            if self.fail_enable {
                return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
            }
            self.enabled += 1;
            Ok(())
        }

        fn disable_raw_mode(&mut self) -> io::Result<()> {
            self.disabled += 1;
            Ok(())
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
        }
    }

    #[test]
    fn test_typing_then_save() {
        let (text, output) = run_editor("", b"hello\x11").unwrap();
        assert_eq!(text, "hello");
        assert_eq!(output, b"hello");
    }

    #[test]
    fn test_backspace_across_newline() {
        let (text, _) = run_editor("", &[b'a', b'b', b'\r', b'c', b'd', BS, BS, BS, SAVE_KEY]).unwrap();
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_backspace_across_newline_from_seeded_text() {
        let mut editor = LineEditor::new("ab\ncd");
        let mut out = Vec::new();

        editor.feed(BS, &mut out).unwrap();
        editor.feed(BS, &mut out).unwrap();
        assert_eq!(editor.text(), "ab\n");

        editor.feed(BS, &mut out).unwrap();
        assert_eq!(editor.text(), "ab");
    }

    #[test]
    fn test_newline_backspace_redraws_previous_line() {
        let mut editor = LineEditor::new("first\n");
        let mut out = Vec::new();

        editor.feed(BS, &mut out).unwrap();

        let echoed = String::from_utf8(out).unwrap();
        assert!(echoed.contains("\x1b[1A"), "cursor did not move up: {:?}", echoed);
        assert!(echoed.contains("\x1b[2K"), "line was not cleared: {:?}", echoed);
        assert!(echoed.ends_with("first"));
    }

    #[test]
    fn test_plain_backspace_erases_one_column() {
        let mut editor = LineEditor::new("ab");
        let mut out = Vec::new();

        editor.feed(0x08, &mut out).unwrap();

        assert_eq!(editor.text(), "a");
        assert_eq!(out, b"\x08 \x08");
    }

    #[test]
    fn test_wide_character_backspace_erases_two_columns() {
        let mut editor = LineEditor::new("日");
        let mut out = Vec::new();

        editor.feed(BS, &mut out).unwrap();

        assert_eq!(editor.text(), "");
        assert_eq!(out, b"\x08 \x08\x08 \x08");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let (text, output) = run_editor("", &[BS, BS, b'x', SAVE_KEY]).unwrap();
        assert_eq!(text, "x");
        assert_eq!(output, b"x");
    }

    #[test]
    fn test_cr_and_lf_each_append_a_newline() {
        let (text, _) = run_editor("", b"a\rb\nc\x11").unwrap();
        assert_eq!(text, "a\nb\nc");
    }

    #[test]
    fn test_lf_after_cr_is_its_own_newline() {
        // Enter followed by Ctrl-J.
        let (text, output) = run_editor("", b"a\r\nb\x11").unwrap();
        assert_eq!(text, "a\n\nb");
        assert_eq!(output, b"a\r\n\r\nb");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let (text, _) = run_editor("", b"a\r\rb\n\nc\x11").unwrap();
        assert_eq!(text, "a\n\nb\n\nc");
    }

    #[test]
    fn test_newline_echoes_crlf() {
        let (_, output) = run_editor("", b"a\nb\x11").unwrap();
        assert_eq!(output, b"a\r\nb");
    }

    #[test]
    fn test_seeded_text_is_echoed_and_extended() {
        let (text, output) = run_editor("hello\nworld", b"!\x11").unwrap();
        assert_eq!(text, "hello\nworld!");
        assert_eq!(output, b"hello\r\nworld!");
    }

    #[test]
    fn test_multibyte_input_is_assembled() {
        let mut keys = "héllo ✓".as_bytes().to_vec();
        keys.push(SAVE_KEY);
        let (text, _) = run_editor("", &keys).unwrap();
        assert_eq!(text, "héllo ✓");
    }

    #[test]
    fn test_invalid_utf8_becomes_replacement_character() {
        let (text, _) = run_editor("", &[b'a', 0xff, b'b', SAVE_KEY]).unwrap();
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn test_backspace_discards_half_typed_character() {
        // First byte of "é" followed by backspace.
        let (text, _) = run_editor("x", &[0xc3, BS, SAVE_KEY]).unwrap();
        assert_eq!(text, "x");
    }

    #[test]
    fn test_other_control_bytes_are_literal() {
        let (text, _) = run_editor("", &[b'a', 0x1b, b'[', b'A', SAVE_KEY]).unwrap();
        assert_eq!(text, "a\x1b[A");
    }

    #[test]
    fn test_bytes_after_save_are_ignored() {
        let mut editor = LineEditor::new("");
        let mut out = Vec::new();

        assert_eq!(editor.feed(SAVE_KEY, &mut out).unwrap(), EditorState::Finished);
        assert_eq!(editor.feed(b'z', &mut out).unwrap(), EditorState::Finished);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_end_of_input_before_save_is_input_error() {
        let result = run_editor("", b"unsaved");
        assert!(matches!(result, Err(TexcryptError::InputStream { .. })));
    }

    #[test]
    fn test_raw_mode_restored_after_save() {
        let mut terminal = RecordingTerminal::default();
        let text = LineEditor::new("")
            .run(&mut terminal, Cursor::new(b"ok\x11"), Vec::new())
            .unwrap();

        assert_eq!(text.as_str(), "ok");
        assert_eq!(terminal.enabled, 1);
        assert_eq!(terminal.disabled, 1);
    }

    #[test]
    fn test_raw_mode_restored_after_read_error() {
        let mut terminal = RecordingTerminal::default();
        let result = LineEditor::new("draft").run(&mut terminal, FailingReader, Vec::new());

        assert!(matches!(result, Err(TexcryptError::InputStream { .. })));
        assert_eq!(terminal.enabled, 1);
        assert_eq!(terminal.disabled, 1);
    }

    #[test]
    fn test_raw_mode_failure_aborts_before_reading() {
        let mut terminal = RecordingTerminal {
            fail_enable: true,
            ..Default::default()
        };
        let result = LineEditor::new("").run(&mut terminal, Cursor::new(b"x\x11"), Vec::new());

        assert!(matches!(result, Err(TexcryptError::InputStream { .. })));
        assert_eq!(terminal.disabled, 0);
    }

    #[test]
    fn test_debug_hides_contents() {
        let editor = LineEditor::new("secret text");
        let debug_output = format!("{:?}", editor);
        assert!(!debug_output.contains("secret"));
    }
}
