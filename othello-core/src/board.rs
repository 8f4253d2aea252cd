//! 棋盘

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::disc::{CellState, Player, Position};
use crate::error::Result;

/// 棋盘
///
/// 8x8 行优先网格。使用定长数组存储，`clone()` 得到完全独立的副本，
/// 搜索时每个分支各自持有一份。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 创建开局棋盘
    ///
    /// 中央四子：(3,3) 白、(3,4) 黑、(4,3) 黑、(4,4) 白
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set(Position::new_unchecked(3, 3), CellState::White);
        board.set(Position::new_unchecked(3, 4), CellState::Black);
        board.set(Position::new_unchecked(4, 3), CellState::Black);
        board.set(Position::new_unchecked(4, 4), CellState::White);
        board
    }

    /// 获取指定位置的格子状态
    pub fn get(&self, pos: Position) -> CellState {
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// 设置指定位置的格子状态
    pub fn set(&mut self, pos: Position, cell: CellState) {
        self.squares[pos.row as usize][pos.col as usize] = cell;
    }

    /// 按行列读取（带边界检查）
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState> {
        let pos = Position::try_new(row, col)?;
        Ok(self.get(pos))
    }

    /// 按行列写入（带边界检查）
    pub fn set_cell(&mut self, row: usize, col: usize, cell: CellState) -> Result<()> {
        let pos = Position::try_new(row, col)?;
        self.set(pos, cell);
        Ok(())
    }

    /// 统计指定玩家的棋子数
    pub fn count_of(&self, player: Player) -> usize {
        self.count_cells(player.to_cell())
    }

    /// 统计空格数
    pub fn count_empty(&self) -> usize {
        self.count_cells(CellState::Empty)
    }

    /// 双方棋子数 (黑, 白)
    pub fn disc_counts(&self) -> (usize, usize) {
        (self.count_of(Player::Black), self.count_of(Player::White))
    }

    fn count_cells(&self, cell: CellState) -> usize {
        self.squares
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OthelloError;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.get(Position::new_unchecked(3, 3)), CellState::White);
        assert_eq!(board.get(Position::new_unchecked(3, 4)), CellState::Black);
        assert_eq!(board.get(Position::new_unchecked(4, 3)), CellState::Black);
        assert_eq!(board.get(Position::new_unchecked(4, 4)), CellState::White);

        assert_eq!(board.count_of(Player::Black), 2);
        assert_eq!(board.count_of(Player::White), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn test_checked_access_out_of_range() {
        let mut board = Board::initial();

        assert_eq!(board.cell(3, 4), Ok(CellState::Black));
        assert_eq!(
            board.cell(8, 0),
            Err(OthelloError::InvalidCoordinate { row: 8, col: 0 })
        );
        assert_eq!(
            board.set_cell(0, 8, CellState::Black),
            Err(OthelloError::InvalidCoordinate { row: 0, col: 8 })
        );
        // 失败的写入不改变棋盘
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::initial();
        let mut copy = original.clone();

        copy.set(Position::new_unchecked(0, 0), CellState::Black);
        copy.set(Position::new_unchecked(3, 3), CellState::Black);

        assert_eq!(original.get(Position::new_unchecked(0, 0)), CellState::Empty);
        assert_eq!(original.get(Position::new_unchecked(3, 3)), CellState::White);
        assert_eq!(copy.count_of(Player::Black), 4);
    }

    #[test]
    fn test_serde_roundtrip() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, board);
    }
}
