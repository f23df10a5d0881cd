use tic_tac_toe::Board;

/// Render a Tic-Tac-Toe board as text.
///
/// Each row is printed on its own line, like `| X | O |   |`.
/// If `show_tile_numbers` is set, empty tiles show their index instead of a space.
pub fn render_board(board: &Board, show_tile_numbers: bool) -> String {
    // 3 rows of "| _ | _ | _ |\n"
    let mut ret = String::with_capacity(3 * 14);

    for (index, tile) in board.iter() {
        if index % 3 == 0 {
            ret.push('|');
        }

        let c = match tile {
            Some(team) => team.as_char(),
            None if show_tile_numbers => char::from(b'0' + index),
            None => ' ',
        };
        ret.push(' ');
        ret.push(c);
        ret.push_str(" |");

        if index % 3 == 2 {
            ret.push('\n');
        }
    }

    ret
}
