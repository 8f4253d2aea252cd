//! 对局状态：走子方轮换、强制停一手与终局判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::disc::{Player, Position};
use crate::rules::Rules;

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// 黑方胜
    BlackWin,
    /// 白方胜
    WhiteWin,
    /// 和棋
    Draw,
}

impl GameResult {
    /// 根据双方棋子数判定
    pub fn from_counts(black: usize, white: usize) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::BlackWin,
            std::cmp::Ordering::Less => GameResult::WhiteWin,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// 获胜方（和棋为 None）
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::BlackWin => Some(Player::Black),
            GameResult::WhiteWin => Some(Player::White),
            GameResult::Draw => None,
        }
    }
}

/// 落子被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// 游戏已结束
    GameOver,
    /// 目标格已有棋子
    Occupied,
    /// 没有任何方向能夹吃
    NoCapture,
    /// 仍有合法落子，不能停一手
    HasLegalMove,
}

/// 一次成功落子的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// 落子方
    pub player: Player,
    /// 落子位置
    pub position: Position,
    /// 被翻转的棋子
    pub flipped: Vec<Position>,
    /// 因无子可下而被跳过的一方
    pub passed: Option<Player>,
}

/// 提交落子的结果
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Accepted(MoveReport),
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// 完整的对局状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    terminal: bool,
    rules: Rules,
}

impl GameState {
    /// 标准开局，黑方先行，四方向规则
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// 标准开局，指定规则
    pub fn with_rules(rules: Rules) -> Self {
        Self::from_board(Board::initial(), Player::Black, rules)
    }

    /// 从任意局面创建状态
    ///
    /// 只计算终局标志，不会自动替走子方停一手。
    pub fn from_board(board: Board, current_player: Player, rules: Rules) -> Self {
        let terminal = rules.is_game_over(&board);
        Self {
            board,
            current_player,
            terminal,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// 当前走子方的合法落子
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.terminal {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.current_player)
    }

    /// 双方棋子数 (黑, 白)
    pub fn disc_counts(&self) -> (usize, usize) {
        self.board.disc_counts()
    }

    /// 终局结果，未结束时为 None
    pub fn winner(&self) -> Option<GameResult> {
        if !self.terminal {
            return None;
        }
        let (black, white) = self.disc_counts();
        Some(GameResult::from_counts(black, white))
    }

    /// 当前走子方落子
    pub fn submit_move(&mut self, pos: Position) -> SubmitOutcome {
        if self.terminal {
            return SubmitOutcome::Rejected(Rejection::GameOver);
        }
        if !self.board.get(pos).is_empty() {
            return SubmitOutcome::Rejected(Rejection::Occupied);
        }
        if !self.rules.is_legal_move(&self.board, self.current_player, pos) {
            return SubmitOutcome::Rejected(Rejection::NoCapture);
        }

        let player = self.current_player;
        let flipped = self.rules.apply_move(&mut self.board, player, pos);
        self.current_player = player.opponent();
        let passed = self.resolve_turn();

        SubmitOutcome::Accepted(MoveReport {
            player,
            position: pos,
            flipped,
            passed,
        })
    }

    /// 当前走子方无子可下时停一手
    ///
    /// 仍有合法落子或已终局时返回 false，状态不变。
    pub fn pass_turn(&mut self) -> bool {
        if self.terminal || self.rules.has_any_legal_move(&self.board, self.current_player) {
            return false;
        }

        tracing::debug!("{}无子可下，停一手", self.current_player.display_name());
        self.current_player = self.current_player.opponent();
        self.terminal = self.rules.is_game_over(&self.board);
        true
    }

    /// 落子后重新确定走子方与终局标志
    ///
    /// 对手能下则轮到对手；对手不能下而己方能下，对手停一手；双方都不能下则终局。
    /// 返回被跳过的一方。
    fn resolve_turn(&mut self) -> Option<Player> {
        let next = self.current_player;

        if self.rules.has_any_legal_move(&self.board, next) {
            self.terminal = false;
            return None;
        }

        let mover = next.opponent();
        if self.rules.has_any_legal_move(&self.board, mover) {
            tracing::debug!("{}无子可下，轮回{}", next.display_name(), mover.display_name());
            self.current_player = mover;
            self.terminal = false;
            return Some(next);
        }

        let (black, white) = self.board.disc_counts();
        tracing::debug!("双方均无子可下，对局结束 黑 {} : 白 {}", black, white);
        self.terminal = true;
        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
