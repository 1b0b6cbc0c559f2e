use std::io::{self, Write};

use colored::Colorize;
use libgame::Game;

pub mod frame;

pub use frame::Glyphs;

pub struct Renderer<'a, W> {
    out: W,
    glyphs: Glyphs<'a>,
    styled: bool,
}

impl<'a, W> Renderer<'a, W>
where
    W: Write,
{
    pub fn new(out: W, glyphs: Glyphs<'a>, styled: bool) -> Self {
        Self { out, glyphs, styled }
    }

    pub fn draw(&mut self, game: &Game) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}\n", frame::header(game).bold().cyan())?;
            self.out.write_all(frame::board_text(game, self.glyphs).as_bytes())?;
        } else {
            self.out.write_all(frame::render_frame(game, self.glyphs).as_bytes())?;
        }

        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use libgame::board::GameBoard;

    use super::*;

    #[test]
    fn plain_output_matches_frame_text() {
        let glyphs = Glyphs {
            alive: "■",
            dead: ".",
        };
        let mut board = GameBoard::new(4, 3);
        board.apply_cells([(1, 1), (2, 3)]).unwrap();
        let game = Game::new(board);

        let mut renderer = Renderer::new(Vec::new(), glyphs, false);
        renderer.draw(&game).unwrap();

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written, "Generation: 0\n\n. . . . \n. ■ . . \n. . . ■ \n");
    }
}
