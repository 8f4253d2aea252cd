//! 局面记谱格式
//!
//! 类似 FEN：`<棋盘> <走子方>`
//!
//! - 棋盘从第 0 行（最上方）到第 7 行，行之间以 `/` 分隔
//! - `B` 黑子，`W` 白子，数字表示连续空格数，`.` 表示单个空格
//! - 走子方 `b` 或 `w`，省略时为黑方
//!
//! 示例（开局）：`8/8/8/3WB3/3BW3/8/8/8 b`
//!
//! 单个格子用列字母 + 行号表示，`(2, 3)` 记为 `d3`。

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::disc::{CellState, Player, Position};
use crate::error::{OthelloError, Result};

/// 开局局面
pub const INITIAL_POSITION: &str = "8/8/8/3WB3/3BW3/8/8/8 b";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 解析局面字符串
    pub fn parse(text: &str) -> Result<(Board, Player)> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some(board_part) = parts.first() else {
            return Err(invalid("Empty position string"));
        };

        let board = Self::parse_board(board_part)?;

        let player = match parts.get(1) {
            Some(side) => {
                let mut chars = side.chars();
                match (chars.next().and_then(Player::from_side_char), chars.next()) {
                    (Some(player), None) => player,
                    _ => return Err(invalid(format!("Invalid side to move: {}", side))),
                }
            }
            None => Player::Black,
        };

        Ok((board, player))
    }

    fn parse_board(board_str: &str) -> Result<Board> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(invalid(format!(
                "Expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;

            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(invalid(format!("Zero run length in row {}", row_idx)));
                    }
                    col += skip as usize;
                } else if let Some(cell) = CellState::from_char(c) {
                    if col < BOARD_SIZE {
                        board.set(Position::new_unchecked(row_idx as u8, col as u8), cell);
                    }
                    col += 1;
                } else {
                    return Err(invalid(format!("Invalid character '{}' in row {}", c, row_idx)));
                }

                if col > BOARD_SIZE {
                    return Err(invalid(format!("Row {} is too long", row_idx)));
                }
            }

            if col != BOARD_SIZE {
                return Err(invalid(format!(
                    "Row {} has {} cells, expected {}",
                    row_idx, col, BOARD_SIZE
                )));
            }
        }

        Ok(board)
    }

    /// 生成局面字符串
    pub fn to_string(board: &Board, player: Player) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE {
            let mut text = String::new();
            let mut empty_run = 0;

            for col in 0..BOARD_SIZE {
                let cell = board.get(Position::new_unchecked(row as u8, col as u8));
                if cell.is_empty() {
                    empty_run += 1;
                } else {
                    if empty_run > 0 {
                        text.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    text.push(cell.to_char());
                }
            }
            if empty_run > 0 {
                text.push_str(&empty_run.to_string());
            }

            rows.push(text);
        }

        format!("{} {}", rows.join("/"), player.to_side_char())
    }

    /// 格子名称，如 `(2, 3)` → `d3`
    pub fn position_name(pos: Position) -> String {
        format!("{}{}", (b'a' + pos.col) as char, pos.row + 1)
    }

    /// 解析格子：支持 `d3` 或数字行列 `2 3` / `2,3`
    pub fn parse_position(text: &str) -> Result<Position> {
        let text = text.trim();
        let mut chars = text.chars();

        if let Some(first) = chars.next() {
            if first.is_ascii_alphabetic() {
                let col = (first.to_ascii_lowercase() as u8 - b'a') as usize;
                let row = chars
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .and_then(|rank| rank.checked_sub(1))
                    .ok_or_else(|| invalid(format!("Invalid cell name: {}", text)))?;
                return Position::try_new(row, col);
            }
        }

        let numbers: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if numbers.len() != 2 {
            return Err(invalid(format!("Invalid cell: {}", text)));
        }

        let row = numbers[0]
            .parse::<usize>()
            .map_err(|_| invalid(format!("Invalid row: {}", numbers[0])))?;
        let col = numbers[1]
            .parse::<usize>()
            .map_err(|_| invalid(format!("Invalid column: {}", numbers[1])))?;
        Position::try_new(row, col)
    }
}

fn invalid(reason: impl Into<String>) -> OthelloError {
    OthelloError::InvalidNotation {
        reason: reason.into(),
    }
}
