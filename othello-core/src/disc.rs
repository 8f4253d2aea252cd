//! 棋子、玩家与坐标定义

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{OthelloError, Result};

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// 空格
    #[default]
    Empty,
    /// 黑子
    Black,
    /// 白子
    White,
}

impl CellState {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// 获取格子上棋子的所属玩家
    pub fn owner(&self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }

    /// 记谱字符
    pub fn to_char(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Black => 'B',
            CellState::White => 'W',
        }
    }

    /// 从记谱字符解析（`.` 表示空格）
    pub fn from_char(c: char) -> Option<CellState> {
        match c {
            '.' => Some(CellState::Empty),
            'B' => Some(CellState::Black),
            'W' => Some(CellState::White),
            _ => None,
        }
    }
}

/// 玩家（黑方先行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 黑方（先手）
    Black,
    /// 白方（后手）
    White,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 转换为对应的格子状态
    pub fn to_cell(&self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Player::Black => "黑方",
            Player::White => "白方",
        }
    }

    /// 记谱中表示走子方的字符
    pub fn to_side_char(&self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    /// 从走子方字符解析
    pub fn from_side_char(c: char) -> Option<Player> {
        match c {
            'b' | 'B' => Some(Player::Black),
            'w' | 'W' => Some(Player::White),
            _ => None,
        }
    }
}

impl FromStr for Player {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err(OthelloError::UnknownValue {
                kind: "player",
                value: s.to_string(),
            }),
        }
    }
}

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)，0 为最上方
    pub row: u8,
    /// 列 (0-7)，0 为最左侧
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新位置，越界时返回 `InvalidCoordinate`
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OthelloError::InvalidCoordinate { row, col })
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的位置，出界返回 None
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && (row as usize) < BOARD_SIZE && col >= 0 && (col as usize) < BOARD_SIZE {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 按行优先顺序遍历全部 64 个位置
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Position {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_cell_owner() {
        for player in [Player::Black, Player::White] {
            assert_eq!(player.to_cell().owner(), Some(player));
        }
        assert_eq!(CellState::Empty.owner(), None);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("black".parse::<Player>(), Ok(Player::Black));
        assert_eq!(" W ".parse::<Player>(), Ok(Player::White));
        assert!("red".parse::<Player>().is_err());
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
        assert_eq!(
            Position::try_new(3, 9),
            Err(OthelloError::InvalidCoordinate { row: 3, col: 9 })
        );
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new_unchecked(0, 7);
        assert_eq!(pos.offset(1, -1), Some(Position::new_unchecked(1, 6)));
        assert_eq!(pos.offset(-1, 0), None);
        assert_eq!(pos.offset(0, 1), None);
    }

    #[test]
    fn test_position_all_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new_unchecked(0, 0));
        assert_eq!(all[8], Position::new_unchecked(1, 0));
        assert_eq!(all[63], Position::new_unchecked(7, 7));
    }
}
