//! 黑白棋（Othello）规则库
//!
//! 包含:
//! - 棋盘、格子、玩家、坐标等核心数据结构
//! - 合法落子判定与翻转规则（方向集可配置）
//! - 对局状态：轮换、强制停一手、终局判定
//! - 局面记谱格式

mod board;
mod constants;
mod disc;
mod error;
mod notation;
mod rules;
mod state;

pub use board::Board;
pub use constants::*;
pub use disc::{CellState, Player, Position};
pub use error::{OthelloError, Result};
pub use notation::{Notation, INITIAL_POSITION};
pub use rules::{DirectionSet, Rules};
pub use state::{GameResult, GameState, MoveReport, Rejection, SubmitOutcome};
