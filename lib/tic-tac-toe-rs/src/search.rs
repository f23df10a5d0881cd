use crate::{
    Board,
    Team,
    NUM_TILES,
};
use tracing::debug;

/// The value of a board.
///
/// O is the maximizing team, X the minimizing one.
pub type Utility = i8;

/// The utility of a board O has won.
pub const O_WIN: Utility = 1;

/// The utility of a draw.
pub const DRAW: Utility = 0;

/// The utility of a board X has won.
pub const X_WIN: Utility = -1;

/// Place a mark, run `f` on the resulting board, then clear the tile again.
fn with_mark<T, F>(board: &mut Board, index: u8, team: Team, f: F) -> T
where
    F: FnOnce(&mut Board) -> T,
{
    board.set(index, Some(team));
    let ret = f(board);
    board.set(index, None);
    ret
}

/// Run a full depth minimax on a board.
///
/// `maximizing` is true if it is O's turn.
/// The board is mutated while searching but is restored before this returns.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Utility {
    // A winning move may also fill the board, so wins are checked first.
    if board.is_winner(Team::O) {
        return O_WIN;
    }

    if board.is_winner(Team::X) {
        return X_WIN;
    }

    if board.is_full() {
        return DRAW;
    }

    let (team, mut value) = if maximizing {
        (Team::O, Utility::MIN)
    } else {
        (Team::X, Utility::MAX)
    };

    for index in 0..NUM_TILES {
        if board.get(index).is_some() {
            continue;
        }

        let child_value = with_mark(board, index, team, |board| {
            evaluate(board, !maximizing)
        });
        value = if maximizing {
            value.max(child_value)
        } else {
            value.min(child_value)
        };
    }

    value
}

/// Choose the best move for the given team.
///
/// Tiles are scanned in ascending order and only a strictly better utility replaces the current best,
/// so ties go to the lowest index.
/// The board must have an empty tile and no winner.
///
/// # Returns
/// Returns a tuple. The first element is the score. The second is the move.
pub fn minimax(board: &mut Board, team: Team) -> (Utility, u8) {
    debug_assert!(
        !board.is_terminal(),
        "minimax called on a finished board: {board:?}"
    );

    // Below and above every real utility respectively.
    let mut best_value = match team {
        Team::O => Utility::MIN,
        Team::X => Utility::MAX,
    };
    let mut best_index = 0;

    for index in 0..NUM_TILES {
        if board.get(index).is_some() {
            continue;
        }

        let value = with_mark(board, index, team, |board| {
            evaluate(board, team == Team::X)
        });

        let is_better = match team {
            Team::O => value > best_value,
            Team::X => value < best_value,
        };

        if is_better {
            best_value = value;
            best_index = index;
        }
    }

    debug!(%team, index = best_index, utility = best_value, "chose move");

    (best_value, best_index)
}

/// Get the best move for the given team.
pub fn best_move_for(board: &mut Board, team: Team) -> u8 {
    minimax(board, team).1
}

/// Get the best move for O, the maximizing team.
pub fn best_move(board: &mut Board) -> u8 {
    best_move_for(board, Team::O)
}
