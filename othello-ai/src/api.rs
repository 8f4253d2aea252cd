//! 对局接口
//!
//! 前端只通过这组同步函数驱动对局：状态按值传递，每次落子返回新的状态。

use othello_core::{GameResult, GameState, Position, Rejection, Result, SubmitOutcome};

use crate::search::{AiEngine, Difficulty};

/// 玩家落子的结果
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanMove {
    /// 落子成功，附带新的对局状态
    Accepted(GameState),
    /// 非法落子，前端忽略即可
    Rejected(Rejection),
}

/// AI 落子的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    Move(Position),
    /// 无合法落子，调用方应停一手
    Pass,
}

/// 新对局（标准开局，黑方先行）
pub fn new_game() -> GameState {
    GameState::new()
}

/// 玩家在 (row, col) 落子；坐标越界直接返回错误
pub fn submit_human_move(state: &GameState, row: usize, col: usize) -> Result<HumanMove> {
    let pos = Position::try_new(row, col)?;
    let mut next = state.clone();

    Ok(match next.submit_move(pos) {
        SubmitOutcome::Accepted(_) => HumanMove::Accepted(next),
        SubmitOutcome::Rejected(reason) => HumanMove::Rejected(reason),
    })
}

/// 按难度为当前走子方计算落子
pub fn request_computer_move(state: &GameState, difficulty: Difficulty) -> ComputerMove {
    let mut engine = AiEngine::from_difficulty(difficulty);
    match engine.search(state) {
        Some(pos) => ComputerMove::Move(pos),
        None => ComputerMove::Pass,
    }
}

pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

pub fn winner(state: &GameState) -> Option<GameResult> {
    state.winner()
}

/// 当前走子方的合法落子，用于界面标记
pub fn legal_moves(state: &GameState) -> Vec<Position> {
    state.legal_moves()
}
