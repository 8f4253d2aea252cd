//! 文本棋盘渲染

use std::fmt::Write;

use othello_core::{CellState, GameResult, GameState, Player, Position, BOARD_SIZE};

/// 合法落子提示符
const HINT_MARK: char = 'X';

fn cell_char(cell: CellState) -> char {
    match cell {
        CellState::Empty => '.',
        CellState::Black => '●',
        CellState::White => '○',
    }
}

/// 绘制棋盘，`show_hints` 时在当前走子方的合法落子处标记 `X`
pub fn render_board(state: &GameState, show_hints: bool) -> String {
    let hints = if show_hints {
        state.legal_moves()
    } else {
        Vec::new()
    };

    let mut out = String::new();
    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'a' + col as u8) as char);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{:>2}", row + 1);
        for col in 0..BOARD_SIZE {
            let pos = Position::new_unchecked(row as u8, col as u8);
            let mark = if hints.contains(&pos) {
                HINT_MARK
            } else {
                cell_char(state.board().get(pos))
            };
            out.push(' ');
            out.push(mark);
        }
        out.push('\n');
    }

    out
}

/// 比分与走子方
pub fn render_status(state: &GameState) -> String {
    let (black, white) = state.disc_counts();
    let mut out = format!(
        "{}: {}  {}: {}",
        Player::Black.display_name(),
        black,
        Player::White.display_name(),
        white
    );

    match state.winner() {
        Some(result) => {
            out.push_str("  ");
            out.push_str(&result_text(result));
        }
        None => {
            let _ = write!(out, "  轮到{}", state.current_player().display_name());
        }
    }

    out
}

/// 终局文字
pub fn result_text(result: GameResult) -> String {
    match result.winner() {
        Some(player) => format!("{}获胜！", player.display_name()),
        None => "和棋！".to_string(),
    }
}
