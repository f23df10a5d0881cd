use crate::{
    config::Config,
    renderer::render_board,
};
use anyhow::{
    bail,
    Context,
};
use std::{
    io::{
        BufRead,
        Write,
    },
    num::IntErrorKind,
};
use tic_tac_toe::{
    Board,
    Game,
    GameStatus,
    IllegalMove,
};
use tracing::{
    info,
    warn,
};

const PROMPT: &str = "Enter your move (0-8): ";
const NOT_A_NUMBER: &str = "Invalid input! Please enter a number between 0 and 8.";
const OUT_OF_RANGE: &str = "Invalid input! Enter a number between 0 and 8.";
const OCCUPIED: &str = "Cell already occupied! Try again.";

const HUMAN_WON: &str = "🎉 You win!";
const COMPUTER_WON: &str = "🤖 AI wins!";
const DRAW: &str = "🤝 It's a draw!";

/// Get the message for a finished game, from the human's point of view.
///
/// Returns `None` if the game is still in progress.
fn outcome_message(status: GameStatus, config: &Config) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(DRAW),
        status if status.winner() == Some(config.computer_team()) => Some(COMPUTER_WON),
        _ => Some(HUMAN_WON),
    }
}

/// Parse a line of user input into a tile index.
///
/// # Returns
/// Returns the message to show the user if the line is not a usable move.
/// Indexes that fit in a u8 are left to [`Game::play`] to range check.
fn parse_move(line: &[u8]) -> Result<u8, &'static str> {
    let line = std::str::from_utf8(line).map_err(|_| NOT_A_NUMBER)?;

    match line.trim().parse::<i64>() {
        Ok(index) => u8::try_from(index).map_err(|_| OUT_OF_RANGE),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(OUT_OF_RANGE),
            _ => Err(NOT_A_NUMBER),
        },
    }
}

/// Prompt until the user enters a move.
///
/// # Returns
/// Returns `None` if the input was closed.
fn read_move<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<Option<u8>>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush().context("failed to flush output")?;

        line.clear();
        let n = input
            .read_until(b'\n', &mut line)
            .context("failed to read move")?;
        if n == 0 {
            return Ok(None);
        }

        match parse_move(&line) {
            Ok(index) => return Ok(Some(index)),
            Err(message) => {
                writeln!(output, "{message}")?;
            }
        }
    }
}

/// Describe the line that won the game, if there is one.
fn winning_line_message(board: &Board) -> Option<String> {
    let info = board.winner_info()?;
    let [i0, i1, i2] = info.tile_indexes;
    Some(format!("Winning line: {i0}, {i1}, {i2}"))
}

/// Play a game on the console.
///
/// The board is printed after every mark.
/// Invalid moves are reported and the user is asked again.
///
/// # Returns
/// Returns the final status, or `None` if the input was closed before the game ended.
pub fn run<R, W>(mut input: R, mut output: W, config: &Config) -> anyhow::Result<Option<GameStatus>>
where
    R: BufRead,
    W: Write,
{
    let computer_team = config.computer_team();
    let show_tile_numbers = config.show_tile_numbers();

    writeln!(
        output,
        "Tic-Tac-Toe: You are {}, AI is {}",
        config.human_team(),
        computer_team
    )?;
    write!(output, "{}", render_board(&Board::new(), show_tile_numbers))?;

    let mut game = Game::new();
    loop {
        if game.turn() == computer_team {
            let index = game
                .play_computer()
                .context("the computer failed to move")?;
            info!(team = %computer_team, index, "computer moved");
        } else {
            let index = match read_move(&mut input, &mut output)? {
                Some(index) => index,
                None => {
                    info!("input closed, ending game");
                    return Ok(None);
                }
            };

            match game.play(index) {
                Ok(_status) => {
                    info!(team = %game.turn().inverse(), index, "human moved");
                }
                Err(IllegalMove::OutOfRange(_)) => {
                    writeln!(output, "{OUT_OF_RANGE}")?;
                    continue;
                }
                Err(IllegalMove::Occupied(_)) => {
                    writeln!(output, "{OCCUPIED}")?;
                    continue;
                }
                Err(e @ IllegalMove::GameOver) => {
                    bail!(e);
                }
            }
        }

        write!(output, "{}", render_board(game.board(), show_tile_numbers))?;

        if let Some(message) = outcome_message(game.status(), config) {
            writeln!(output, "{message}")?;
            if let Some(line) = winning_line_message(game.board()) {
                writeln!(output, "{line}")?;
            }
            output.flush().context("failed to flush output")?;

            match game.status().winner() {
                Some(team) => info!(%team, "game won"),
                None => info!("game drawn"),
            }

            return Ok(Some(game.status()));
        }
    }
}

/// Play a game on the stdin and stdout.
pub fn exec(config: &Config) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let status = run(stdin.lock(), stdout.lock(), config)?;
    if status.is_none() {
        warn!("the game was abandoned");
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn play(config: &Config, input: &[u8]) -> (Option<GameStatus>, String) {
        let mut output = Vec::new();
        let status = run(Cursor::new(input), &mut output, config).expect("failed to run game");
        let output = String::from_utf8(output).expect("output is not utf8");
        (status, output)
    }

    #[test]
    fn full_game_draws() {
        // The computer answers 0 with 4, 1 with 2, 6 with 3 and 5 with 7.
        let input = b"abc\n9\n-1\n300\n0\n0\n1\n6\n5\n8\n";
        let (status, output) = play(&Config::default(), input);

        assert_eq!(status, Some(GameStatus::Draw));
        assert!(output.starts_with("Tic-Tac-Toe: You are X, AI is O\n"));
        assert_eq!(output.matches(NOT_A_NUMBER).count(), 1);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 3);
        assert_eq!(output.matches(OCCUPIED).count(), 1);
        assert!(output.contains("| X | X | O |\n| O | O | X |\n| X | O | X |\n"));
        assert!(output.ends_with(&format!("{DRAW}\n")));
    }

    #[test]
    fn closed_input() {
        let (status, output) = play(&Config::default(), b"");
        assert_eq!(status, None);
        assert!(output.ends_with(PROMPT));
    }

    #[test]
    fn computer_moves_first() {
        let config = Config::load_from_str("computer_team = \"X\"").expect("invalid config");
        let (status, output) = play(&config, b"4\n");

        assert_eq!(status, None);
        assert!(output.starts_with(
            "Tic-Tac-Toe: You are O, AI is X\n|   |   |   |\n|   |   |   |\n|   |   |   |\n"
        ));
        assert!(output.contains("| X |   |   |\n|   |   |   |\n|   |   |   |\n"));
        assert!(output.contains("| X |   |   |\n|   | O |   |\n|   |   |   |\n"));
    }

    #[test]
    fn outcome_messages() {
        let config = Config::default();
        assert_eq!(outcome_message(GameStatus::InProgress, &config), None);
        assert_eq!(outcome_message(GameStatus::Draw, &config), Some(DRAW));
        assert_eq!(outcome_message(GameStatus::XWon, &config), Some(HUMAN_WON));
        assert_eq!(outcome_message(GameStatus::OWon, &config), Some(COMPUTER_WON));

        let config = Config::load_from_str("computer_team = \"X\"").expect("invalid config");
        assert_eq!(outcome_message(GameStatus::XWon, &config), Some(COMPUTER_WON));
        assert_eq!(outcome_message(GameStatus::OWon, &config), Some(HUMAN_WON));
    }

    #[test]
    fn computer_wins() {
        // The computer answers 0 with 4, 1 with 2 and 3 with 6, completing 2, 4, 6.
        let (status, output) = play(&Config::default(), b"0\n1\n3\n");

        assert_eq!(status, Some(GameStatus::OWon));
        assert!(output.ends_with(&format!("{COMPUTER_WON}\nWinning line: 2, 4, 6\n")));
    }

    #[test]
    fn invalid_utf8_asks_again() {
        let (status, output) = play(&Config::default(), b"\xff\xfe\n4\n");

        assert_eq!(status, None);
        assert_eq!(output.matches(NOT_A_NUMBER).count(), 1);
        assert!(output.contains("|   |   |   |\n|   | X |   |\n|   |   |   |\n"));
    }

    #[test]
    fn huge_numbers_are_out_of_range() {
        let (status, output) = play(
            &Config::default(),
            b"99999999999999999999\n-99999999999999999999\n",
        );

        assert_eq!(status, None);
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 2);
        assert_eq!(output.matches(NOT_A_NUMBER).count(), 0);
    }

    #[test]
    fn parse_moves() {
        assert_eq!(parse_move(b" 4 \n"), Ok(4));
        assert_eq!(parse_move(b"9\n"), Ok(9));
        assert_eq!(parse_move(b"-1\n"), Err(OUT_OF_RANGE));
        assert_eq!(parse_move(b"256\n"), Err(OUT_OF_RANGE));
        assert_eq!(parse_move(b"99999999999999999999\n"), Err(OUT_OF_RANGE));
        assert_eq!(parse_move(b"four\n"), Err(NOT_A_NUMBER));
        assert_eq!(parse_move(b"\n"), Err(NOT_A_NUMBER));
        assert_eq!(parse_move(b"\xff\n"), Err(NOT_A_NUMBER));
    }

    #[test]
    fn winning_lines() {
        let board: Board = "XO_/XO_/X__".parse().expect("invalid board");
        assert_eq!(
            winning_line_message(&board).as_deref(),
            Some("Winning line: 0, 3, 6")
        );

        let board: Board = "XO_/_X_/__O".parse().expect("invalid board");
        assert_eq!(winning_line_message(&board), None);
    }
}
