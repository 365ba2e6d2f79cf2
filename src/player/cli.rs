#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use crate::core::common::Dot;

use super::TargetInput;

/// Parse a `"x y"` line of 1-indexed coordinates into a 0-indexed [`Dot`].
///
/// Only the shape of the input is checked here; "0 0" or "9 9" parse fine and
/// are rejected by the board.
pub fn parse_target(input: &str) -> Result<Dot, String> {
    let parts: std::vec::Vec<&str> = input.split_whitespace().collect();
    let &[x, y] = parts.as_slice() else {
        return Err("Enter 2 coordinates!".to_string());
    };
    let parse = |s: &str| -> Result<i32, String> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err("Enter numbers!".to_string());
        }
        s.parse::<i32>()
            .map_err(|_| format!("Coordinate '{}' is too large", s))
    };
    Ok(Dot::new(parse(x)? - 1, parse(y)? - 1))
}

/// Reads human targets line by line, prompting on `out`.
pub struct LineInput<B, W> {
    read: B,
    out: W,
    buf: String,
}

impl<B: BufRead> LineInput<B, io::Stdout> {
    /// Read from `read`, prompting on stdout.
    pub fn new(read: B) -> Self {
        Self::with_output(read, io::stdout())
    }
}

impl<B: BufRead, W: Write> LineInput<B, W> {
    pub fn with_output(read: B, out: W) -> Self {
        Self {
            read,
            out,
            buf: String::new(),
        }
    }

    /// Prompt and read one line. Returns `Ok(false)` at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        write!(self.out, "Your move: ")?;
        self.out.flush()?;
        self.buf.clear();
        Ok(self.read.read_line(&mut self.buf)? != 0)
    }
}

impl<B: BufRead, W: Write> TargetInput for LineInput<B, W> {
    fn request_target(&mut self) -> Option<Dot> {
        loop {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    log::error!("failed to read move: {}", e);
                    return None;
                }
            }
            match parse_target(&self.buf) {
                Ok(dot) => return Some(dot),
                Err(msg) => {
                    // Prompt failures surface on the next read.
                    let _ = writeln!(self.out, " {} ", msg);
                }
            }
        }
    }
}
