//! 落子规则：合法性判定与翻转

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{EIGHT_WAY_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::disc::{CellState, Player, Position};
use crate::error::{OthelloError, Result};

/// 夹吃方向集
///
/// `Orthogonal` 只检查上下左右四个方向，为默认值；
/// `EightWay` 为常规黑白棋规则，额外包含四个斜向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DirectionSet {
    /// 上、下、左、右
    #[default]
    Orthogonal,
    /// 八个方向
    EightWay,
}

impl DirectionSet {
    /// 方向向量 (行偏移, 列偏移)
    pub fn vectors(&self) -> &'static [(i8, i8)] {
        match self {
            DirectionSet::Orthogonal => &ORTHOGONAL_DIRECTIONS,
            DirectionSet::EightWay => &EIGHT_WAY_DIRECTIONS,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            DirectionSet::Orthogonal => "四方向",
            DirectionSet::EightWay => "八方向",
        }
    }
}

impl FromStr for DirectionSet {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthogonal" | "four" | "4" => Ok(DirectionSet::Orthogonal),
            "eight-way" | "eightway" | "eight" | "8" => Ok(DirectionSet::EightWay),
            _ => Err(OthelloError::UnknownValue {
                kind: "direction set",
                value: s.to_string(),
            }),
        }
    }
}

/// 规则引擎
///
/// 所有坐标都来自 `Position`，在 8x8 范围内构造，内部不再做越界检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rules {
    directions: DirectionSet,
}

impl Rules {
    /// 使用指定方向集创建规则
    pub fn new(directions: DirectionSet) -> Self {
        Self { directions }
    }

    /// 当前方向集
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// 判断落子是否合法：目标为空格，且至少一个方向能夹住对方棋子
    pub fn is_legal_move(&self, board: &Board, player: Player, pos: Position) -> bool {
        if !board.get(pos).is_empty() {
            return false;
        }

        self.directions
            .vectors()
            .iter()
            .any(|&(dr, dc)| Self::captures_in_direction(board, player, pos, dr, dc))
    }

    /// 执行落子并翻转（不重新检查合法性，由调用方保证）
    ///
    /// 返回被翻转的位置。
    pub fn apply_move(&self, board: &mut Board, player: Player, pos: Position) -> Vec<Position> {
        let flips = self.flips_for(board, player, pos);

        board.set(pos, player.to_cell());
        for &flipped in &flips {
            board.set(flipped, player.to_cell());
        }

        flips
    }

    /// 计算在 `pos` 落子会翻转的棋子（不修改棋盘）
    pub fn flips_for(&self, board: &Board, player: Player, pos: Position) -> Vec<Position> {
        let mut flips = Vec::new();

        for &(dr, dc) in self.directions.vectors() {
            let run = Self::bounded_run(board, player, pos, dr, dc);
            flips.extend(run);
        }

        flips
    }

    /// 指定玩家是否存在合法落子
    pub fn has_any_legal_move(&self, board: &Board, player: Player) -> bool {
        Position::all().any(|pos| self.is_legal_move(board, player, pos))
    }

    /// 指定玩家的全部合法落子（行优先）
    pub fn legal_moves(&self, board: &Board, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.is_legal_move(board, player, pos))
            .collect()
    }

    /// 终局判定：双方都无子可下
    ///
    /// 只有一方无子可下时不算终局，该方需要停一手。
    pub fn is_game_over(&self, board: &Board) -> bool {
        !self.has_any_legal_move(board, Player::Black)
            && !self.has_any_legal_move(board, Player::White)
    }

    /// 单方向是否能夹住对方棋子
    fn captures_in_direction(board: &Board, player: Player, pos: Position, dr: i8, dc: i8) -> bool {
        let opponent = player.opponent().to_cell();
        let mut seen_opponent = false;
        let mut current = pos.offset(dr, dc);

        while let Some(next) = current {
            let cell = board.get(next);
            if cell == opponent {
                seen_opponent = true;
            } else if cell == player.to_cell() {
                return seen_opponent;
            } else {
                return false;
            }
            current = next.offset(dr, dc);
        }

        false
    }

    /// 单方向被夹住的对方棋子；遇到空格或出界则该方向不翻转
    fn bounded_run(board: &Board, player: Player, pos: Position, dr: i8, dc: i8) -> Vec<Position> {
        let opponent = player.opponent().to_cell();
        let mut run = Vec::new();
        let mut current = pos.offset(dr, dc);

        while let Some(next) = current {
            match board.get(next) {
                cell if cell == opponent => run.push(next),
                CellState::Empty => return Vec::new(),
                _ => return run,
            }
            current = next.offset(dr, dc);
        }

        Vec::new()
    }
}
