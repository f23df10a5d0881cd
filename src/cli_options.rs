use camino::Utf8PathBuf;
use tic_tac_toe::{
    Board,
    Team,
};

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "play Tic-Tac-Toe against an unbeatable minimax AI")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "Utf8PathBuf::from(\"./config.toml\")"
    )]
    pub config: Utf8PathBuf,

    #[argh(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum Subcommand {
    Play(PlayOptions),
    Solve(SolveOptions),
}

/// This is the default if no subcommand is given.
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "play", description = "play a game in the console")]
pub struct PlayOptions {}

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "solve",
    description = "print the best move for a board"
)]
pub struct SolveOptions {
    #[argh(
        positional,
        description = "the board as 9 tiles of X, O or _ in row-major order, like \"XO_/_X_/__O\""
    )]
    pub board: Board,

    #[argh(
        option,
        description = "the team to find a move for, defaults to the team whose turn it is"
    )]
    pub team: Option<Team>,
}
