use libgame::{board::TileState, Game};

/// The two strings a cell is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs<'a> {
    pub alive: &'a str,
    pub dead: &'a str,
}

impl<'a> Glyphs<'a> {
    pub fn glyph(&self, tile: TileState) -> &'a str {
        match tile {
            TileState::Alive => self.alive,
            TileState::Dead => self.dead,
        }
    }
}

pub fn header(game: &Game) -> String {
    format!("Generation: {}", game.generation)
}

/// One line per board row, every glyph followed by a single space.
pub fn board_text(game: &Game, glyphs: Glyphs) -> String {
    let board = &game.board;
    let mut text = String::with_capacity(board.tiles.len() * (glyphs.alive.len() + 1) + board.height);

    for row in board.rows() {
        for tile in row {
            text.push_str(glyphs.glyph(*tile));
            text.push(' ');
        }
        text.push('\n');
    }

    text
}

/// Header, blank line, then the board.
pub fn render_frame(game: &Game, glyphs: Glyphs) -> String {
    format!("{}\n\n{}", header(game), board_text(game, glyphs))
}

#[cfg(test)]
mod tests {
    use libgame::board::GameBoard;

    use super::*;

    const GLYPHS: Glyphs<'static> = Glyphs {
        alive: "#",
        dead: ".",
    };

    #[test]
    fn renders_rows_with_trailing_spaces() {
        let mut board = GameBoard::new(3, 2);
        board.apply_cells([(0, 1), (1, 2)]).unwrap();
        let game = Game::new(board);

        assert_eq!(render_frame(&game, GLYPHS), "Generation: 0\n\n. # . \n. . # \n");
    }

    #[test]
    fn header_tracks_generation() {
        let mut game = Game::new(GameBoard::new(2, 2));
        game.tick();
        game.tick();

        assert!(render_frame(&game, GLYPHS).starts_with("Generation: 2\n\n"));
    }

    #[test]
    fn multibyte_glyphs() {
        let mut board = GameBoard::new(2, 1);
        board.apply_cells([(0, 0)]).unwrap();

        let glyphs = Glyphs {
            alive: "■",
            dead: ".",
        };

        assert_eq!(board_text(&Game::new(board), glyphs), "■ . \n");
    }
}
