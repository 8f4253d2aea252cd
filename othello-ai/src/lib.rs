//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 棋子数差评估函数
//! - 固定视角的 Minimax + Alpha-Beta 搜索
//! - 难度与搜索深度映射
//! - 供前端调用的对局接口

mod api;
mod evaluate;
mod search;

pub use api::{
    is_terminal, legal_moves, new_game, request_computer_move, submit_human_move, winner,
    ComputerMove, HumanMove,
};
pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty, FixedPerspective, INFINITY};
