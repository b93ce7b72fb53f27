use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use sweeper_core::Game;

use crate::command::Command;

/// Plays `game` with commands read from `input` until it ends, the player quits, or input runs out.
///
/// The board is printed once up front and again after every accepted move. Bad lines and rejected
/// moves print an error line and the session carries on.
pub fn run(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<()> {
    render(&mut output, game)?;

    for line in input.lines() {
        let line = line.context("failed reading input")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "error: {err:#}")?;
                continue;
            }
        };

        let Command::Move { x, y, kind } = command else {
            log::debug!("player quit");
            break;
        };

        match game.make_move(x, y, kind) {
            Ok(_) => render(&mut output, game)?,
            Err(err) => writeln!(output, "error: {err}")?,
        }

        if game.is_finished() {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

pub fn render(out: &mut impl Write, game: &Game) -> io::Result<()> {
    write!(out, "{}", game.view())?;

    let status = game.status();
    if status.has_won() {
        writeln!(out, "You won!")
    } else if status.has_lost() {
        let (x, y) = game.triggered_mine().unwrap_or_default();
        writeln!(out, "Boom, mine at ({x}, {y}). You lost.")
    } else {
        writeln!(
            out,
            "{}x{}, {} mines left, move (r X Y | f X Y | q):",
            game.width(),
            game.height(),
            game.mines_left()
        )
    }
}
