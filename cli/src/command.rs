use anyhow::{Context, Result, bail};
use sweeper_core::{Coord, MoveKind};

/// One line of player input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move { x: Coord, y: Coord, kind: MoveKind },
    Quit,
}

impl Command {
    /// Parses `r X Y`, `f X Y` or `q`, returns `None` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let kind = match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Some(Self::Quit)),
            "r" | "reveal" => MoveKind::Reveal,
            "f" | "flag" => MoveKind::Flag,
            other => bail!("unknown command {other:?}, expected r, f or q"),
        };

        let x = parse_coord(words.next(), "x")?;
        let y = parse_coord(words.next(), "y")?;
        if let Some(extra) = words.next() {
            bail!("unexpected trailing input {extra:?}");
        }

        Ok(Some(Self::Move { x, y, kind }))
    }
}

fn parse_coord(word: Option<&str>, axis: &str) -> Result<Coord> {
    let word = word.with_context(|| format!("missing {axis} coordinate"))?;
    word.parse()
        .with_context(|| format!("invalid {axis} coordinate {word:?}"))
}
