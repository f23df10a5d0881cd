//! A Tic-Tac-Toe board and an exhaustive minimax search over it.

mod board;
mod game;
pub mod search;
mod team;

pub use self::{
    board::{
        Board,
        IllegalMove,
        InvalidBoardError,
        WinLine,
        WinType,
        WinnerInfo,
        WIN_LINES,
    },
    game::{
        Game,
        GameStatus,
    },
    search::{
        best_move,
        best_move_for,
        evaluate,
        Utility,
    },
    team::{
        InvalidCharError,
        InvalidStrError,
        Team,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;
