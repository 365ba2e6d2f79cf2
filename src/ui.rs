#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;
use std::vec::Vec;

use crate::core::{
    board::Board,
    common::{Dot, ShotResult},
    game::{GameEvent, GameOutput, Side},
};

/// Render a board as text rows: a 1-indexed column header, then one line per row.
pub fn board_rows(board: &Board) -> Vec<String> {
    let size = board.size() as i32;
    let mut rows = Vec::with_capacity(board.size() + 1);
    let mut header = String::from("  |");
    for y in 1..=size {
        header.push_str(&format!(" {} |", y));
    }
    rows.push(header);
    for x in 0..size {
        let mut line = format!("{} |", x + 1);
        for y in 0..size {
            let ch = board.symbol(Dot::new(x, y)).unwrap_or(' ');
            line.push_str(&format!(" {} |", ch));
        }
        rows.push(line);
    }
    rows
}

/// Format a dot the way the human types it: 1-indexed "x y".
pub fn dot_to_string(dot: Dot) -> String {
    format!("{} {}", dot.x + 1, dot.y + 1)
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Human => "Player",
        Side::Automated => "Computer",
    }
}

/// Console output collaborator: boards side by side plus one line per event.
pub struct ConsoleOutput<W> {
    out: W,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the greeting and input format.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "-------------------")?;
        writeln!(self.out, "     welcome to    ")?;
        writeln!(self.out, "     sea battle    ")?;
        writeln!(self.out, "-------------------")?;
        writeln!(self.out, " input format: x y ")?;
        writeln!(self.out, " x - row number    ")?;
        writeln!(self.out, " y - column number ")?;
        Ok(())
    }

    fn write_boards(&mut self, human: &Board, automated: &Board) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(20))?;
        let left = board_rows(human);
        let right = board_rows(automated);
        let width = left.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        writeln!(self.out, "{:<width$}   {}", "Player board:", "Computer board:", width = width)?;
        for i in 0..left.len().max(right.len()) {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = right.get(i).map(String::as_str).unwrap_or("");
            let pad = width - l.chars().count();
            writeln!(self.out, "{}{}   {}", l, " ".repeat(pad), r)?;
        }
        Ok(())
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        match *event {
            GameEvent::Turn(side) => writeln!(self.out, "{} moves!", side_name(side)),
            GameEvent::Shot {
                side,
                target,
                result,
            } => {
                if side == Side::Automated {
                    writeln!(self.out, "Computer shoots: {}", dot_to_string(target))?;
                }
                let msg = match result {
                    ShotResult::Hit => "Ship hit!",
                    ShotResult::Sunk => "Ship sunk!",
                    ShotResult::Miss => "Miss!",
                };
                writeln!(self.out, "{}", msg)
            }
            GameEvent::Rejected { error, .. } => writeln!(self.out, "{}", error),
            GameEvent::Victory(side) => {
                writeln!(self.out, "{}", "-".repeat(20))?;
                writeln!(self.out, "{} wins!", side_name(side))
            }
        }
    }
}

impl<W: Write> GameOutput for ConsoleOutput<W> {
    fn event(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_event(event) {
            log::error!("failed to write game output: {}", e);
        }
    }

    fn boards(&mut self, human: &Board, automated: &Board) {
        if let Err(e) = self.write_boards(human, automated) {
            log::error!("failed to write boards: {}", e);
        }
    }
}
