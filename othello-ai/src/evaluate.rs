//! 局面评估函数

use othello_core::{Board, Player};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 子数差：己方棋子数 - 对方棋子数
    pub fn score(board: &Board, player: Player) -> i32 {
        board.count_of(player) as i32 - board.count_of(player.opponent()) as i32
    }
}
