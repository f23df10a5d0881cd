use crate::{
    cli_options::SolveOptions,
    renderer::render_board,
};
use anyhow::ensure;
use tic_tac_toe::search::{
    self,
    Utility,
};
use tracing::info;

/// Describe a utility in words.
fn describe_utility(utility: Utility) -> &'static str {
    match utility.signum() {
        1 => "O wins",
        -1 => "X wins",
        _ => "draw",
    }
}

/// Print the best move for a board.
pub fn exec(options: SolveOptions) -> anyhow::Result<()> {
    let mut board = options.board;

    ensure!(!board.is_terminal(), "the board is already finished");

    let team = options.team.unwrap_or_else(|| board.get_turn());
    let (utility, index) = search::minimax(&mut board, team);
    info!(%team, index, utility, "solved board");

    print!("{}", render_board(&board, true));
    println!("best move for {team}: {index}");
    println!("outcome with perfect play: {}", describe_utility(utility));

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tic_tac_toe::Team;

    #[test]
    fn describe() {
        assert_eq!(describe_utility(search::O_WIN), "O wins");
        assert_eq!(describe_utility(search::X_WIN), "X wins");
        assert_eq!(describe_utility(search::DRAW), "draw");
    }

    #[test]
    fn solve_finished_board() {
        let options = SolveOptions {
            board: "XXX/OO_/___".parse().expect("invalid board"),
            team: Some(Team::O),
        };
        assert!(exec(options).is_err());
    }
}
