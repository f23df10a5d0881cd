use crate::{
    search,
    Board,
    IllegalMove,
    Team,
};

/// The state of a [`Game`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// More moves can be made.
    InProgress,

    /// X holds a line.
    XWon,

    /// O holds a line.
    OWon,

    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    fn won(team: Team) -> Self {
        match team {
            Team::X => Self::XWon,
            Team::O => Self::OWon,
        }
    }

    /// Returns true if no more moves can be made.
    pub fn is_over(self) -> bool {
        self != Self::InProgress
    }

    /// Get the winning team, if there is one.
    pub fn winner(self) -> Option<Team> {
        match self {
            Self::XWon => Some(Team::X),
            Self::OWon => Some(Team::O),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// A single game of Tic-Tac-Toe.
///
/// X moves first and the teams alternate.
/// Once the game is over, no more moves are accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Team,
    status: GameStatus,
}

impl Game {
    /// Make a new [`Game`] with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Team::X,
            status: GameStatus::InProgress,
        }
    }

    /// Get the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the team whose turn it is.
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Get the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Place a mark for the team whose turn it is.
    ///
    /// # Errors
    /// Fails if the game is over, the index is out of range, or the tile is taken.
    /// Nothing changes on failure.
    pub fn play(&mut self, index: u8) -> Result<GameStatus, IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }

        let team = self.turn;
        self.board.place(index, team)?;

        self.status = if self.board.is_winner(team) {
            GameStatus::won(team)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        self.turn = team.inverse();

        Ok(self.status)
    }

    /// Let the search choose and play the move for the team whose turn it is.
    ///
    /// # Returns
    /// Returns the index of the tile that was played.
    pub fn play_computer(&mut self) -> Result<u8, IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }

        let index = search::best_move_for(&mut self.board, self.turn);
        self.play(index)?;

        Ok(index)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn x_wins() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.play(index), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.turn(), Team::X);
        assert_eq!(game.play(2), Ok(GameStatus::XWon));
        assert_eq!(game.status().winner(), Some(Team::X));

        let before = game;
        assert_eq!(game.play(8), Err(IllegalMove::GameOver));
        assert_eq!(game.play_computer(), Err(IllegalMove::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn draw() {
        // X O X
        // X O O
        // O X X
        let mut game = Game::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(game.play(index), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.play(8), Ok(GameStatus::Draw));
        assert!(game.status().is_over());
        assert_eq!(game.status().winner(), None);
    }

    #[test]
    fn illegal_moves_keep_turn() {
        let mut game = Game::new();
        game.play(4).expect("failed to play");

        assert_eq!(game.play(4), Err(IllegalMove::Occupied(4)));
        assert_eq!(game.play(9), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(game.turn(), Team::O);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn computer_vs_computer_draws() {
        let mut game = Game::new();
        while !game.status().is_over() {
            game.play_computer().expect("failed to play");
        }
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn computer_blocks() {
        let mut game = Game::new();
        game.play(0).expect("failed to play");
        assert_eq!(game.play_computer(), Ok(4));
        game.play(1).expect("failed to play");
        assert_eq!(game.play_computer(), Ok(2));
    }
}
