use crate::{
    InvalidCharError,
    Team,
    NUM_TILES,
};

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// A line of 3 tiles that wins the game if one team holds all of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WinLine {
    /// The tile indexes of the line, sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinLine {
    const fn new(i0: u8, i1: u8, i2: u8, win_type: WinType) -> Self {
        Self {
            tile_indexes: [i0, i1, i2],
            win_type,
        }
    }
}

/// Every winning line, rows first, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Horizontal Wins
    WinLine::new(0, 1, 2, WinType::Horizontal),
    WinLine::new(3, 4, 5, WinType::Horizontal),
    WinLine::new(6, 7, 8, WinType::Horizontal),
    // Vertical Wins
    WinLine::new(0, 3, 6, WinType::Vertical),
    WinLine::new(1, 4, 7, WinType::Vertical),
    WinLine::new(2, 5, 8, WinType::Vertical),
    // Diagonal win
    WinLine::new(0, 4, 8, WinType::Diagonal),
    // Anti-Diagonal win
    WinLine::new(2, 4, 6, WinType::AntiDiagonal),
];

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning team
    pub team: Team,

    /// The tile_indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

/// A move that cannot be made.
///
/// A failed move never changes the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalMove {
    /// The tile index is not in `0..=8`.
    #[error("tile {0} is out of range, it must be between 0 and 8")]
    OutOfRange(u8),

    /// The tile already has a mark on it.
    #[error("tile {0} is already occupied")]
    Occupied(u8),

    /// The game already has a winner or is a draw.
    #[error("the game is over")]
    GameOver,
}

/// Failed to parse a [`Board`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoardError {
    /// The wrong number of tiles was given.
    #[error("a Tic-Tac-Toe board needs exactly 9 tiles, got {0}")]
    InvalidLength(usize),

    /// A tile is not a team or an empty marker.
    #[error("invalid tile")]
    InvalidTile(#[from] InvalidCharError),
}

/// A Tic Tac Toe board
///
/// Tiles are stored row-major, so index `row * 3 + col`.
/// `None` is an empty tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    tiles: [Option<Team>; NUM_TILES as usize],
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            tiles: [None; NUM_TILES as usize],
        }
    }

    /// Get the team whos turn it is.
    ///
    /// X moves first, so it is X's turn whenever both teams have placed the same number of marks.
    pub fn get_turn(&self) -> Team {
        let num_x = self.count(Team::X);
        let num_o = self.count(Team::O);

        if num_x > num_o {
            Team::O
        } else {
            Team::X
        }
    }

    /// Count the marks placed by a team.
    fn count(&self, team: Team) -> usize {
        self.tiles.iter().filter(|tile| **tile == Some(team)).count()
    }

    /// Returns true if there are no empty tiles left.
    ///
    /// This does not check for wins.
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(Option::is_some)
    }

    /// Check if the given team holds any of the [`WIN_LINES`].
    pub fn is_winner(&self, team: Team) -> bool {
        WIN_LINES.iter().any(|line| self.holds_line(line, team))
    }

    /// Returns true if either team won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_winner(Team::X) || self.is_winner(Team::O) || self.is_full()
    }

    fn holds_line(&self, line: &WinLine, team: Team) -> bool {
        line.tile_indexes
            .iter()
            .all(|&index| self.tiles[usize::from(index)] == Some(team))
    }

    /// Get the winner if they exist
    pub fn winner(&self) -> Option<Team> {
        if self.is_winner(Team::X) {
            Some(Team::X)
        } else if self.is_winner(Team::O) {
            Some(Team::O)
        } else {
            None
        }
    }

    /// Get the winner info, if there is a winner.
    ///
    /// The first matching line in [`WIN_LINES`] order is reported.
    pub fn winner_info(&self) -> Option<WinnerInfo> {
        let team = self.winner()?;
        let line = WIN_LINES
            .iter()
            .find(|line| self.holds_line(line, team))?;

        Some(WinnerInfo {
            team,
            tile_indexes: line.tile_indexes,
            win_type: line.win_type,
        })
    }

    /// Place a mark for a team.
    ///
    /// # Errors
    /// Fails if the index >= 9 or the tile is not empty.
    /// The board is left unchanged on failure.
    pub fn place(&mut self, index: u8, team: Team) -> Result<(), IllegalMove> {
        let tile = self
            .tiles
            .get_mut(usize::from(index))
            .ok_or(IllegalMove::OutOfRange(index))?;

        if tile.is_some() {
            return Err(IllegalMove::Occupied(index));
        }

        *tile = Some(team);
        Ok(())
    }

    /// Overwrite the tile at the index, without any legality checks.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub(crate) fn set(&mut self, index: u8, tile: Option<Team>) {
        assert!(index < NUM_TILES);
        self.tiles[usize::from(index)] = tile;
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(&self, index: u8) -> Option<Team> {
        assert!(index < NUM_TILES);
        self.tiles[usize::from(index)]
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<Team>)> + '_ {
        (0..NUM_TILES).zip(self.tiles.iter().copied())
    }

    /// Get an iterator over the indexes of empty tiles, in ascending order.
    pub fn empty_tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter()
            .filter_map(|(index, tile)| tile.is_none().then_some(index))
    }
}

impl std::str::FromStr for Board {
    type Err = InvalidBoardError;

    /// Parse a board from 9 tiles in row-major order.
    ///
    /// `X` and `O` are marks, `_`, `.` and `-` are empty tiles.
    /// Whitespace, `|` and `/` are ignored so rows can be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .map(|c| match c {
                '_' | '.' | '-' => Ok(None),
                c => Team::from_char(c).map(Some),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tiles: [Option<Team>; NUM_TILES as usize] = tiles
            .try_into()
            .map_err(|tiles: Vec<_>| InvalidBoardError::InvalidLength(tiles.len()))?;

        Ok(Self { tiles })
    }
}
