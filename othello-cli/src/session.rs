//! 对局会话
//!
//! 用显式状态机表达轮换：玩家走 → AI 走 → 玩家走，终局为吸收态。
//! 前端轮询 `phase()`，再调用对应的推进方法。

use othello_ai::{AiEngine, Difficulty};
use othello_core::{
    GameResult, GameState, MoveReport, Notation, Player, Position, Rejection, Rules, SubmitOutcome,
};

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// 双人对战，双方都由玩家操作
    TwoPlayer,
    /// 人机对战
    VersusComputer {
        computer: Player,
        difficulty: Difficulty,
    },
}

impl GameMode {
    /// 该方是否由 AI 操作
    pub fn is_computer(&self, player: Player) -> bool {
        matches!(self, GameMode::VersusComputer { computer, .. } if *computer == player)
    }

    /// 获取难度（仅人机模式有效）
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VersusComputer { difficulty, .. } => Some(*difficulty),
        }
    }
}

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 等待玩家落子
    HumanToMove,
    /// 等待 AI 落子
    ComputerToMove,
    /// 对局结束
    Finished,
}

/// 状态转移表
pub fn next_phase(mode: &GameMode, state: &GameState) -> Phase {
    if state.is_terminal() {
        Phase::Finished
    } else if mode.is_computer(state.current_player()) {
        Phase::ComputerToMove
    } else {
        Phase::HumanToMove
    }
}

/// 会话推进的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// 落子成功
    Moved(MoveReport),
    /// 非法落子，状态不变
    Rejected(Rejection),
    /// 该方无子可下，停一手
    Passed(Player),
    /// 当前阶段不允许该操作
    OutOfTurn(Phase),
}

/// 对局会话
pub struct Session {
    state: GameState,
    mode: GameMode,
    phase: Phase,
}

impl Session {
    /// 新对局
    pub fn new(mode: GameMode, rules: Rules) -> Self {
        Self::from_state(GameState::with_rules(rules), mode)
    }

    /// 从已有局面开始
    pub fn from_state(state: GameState, mode: GameMode) -> Self {
        let phase = next_phase(&mode, &state);
        tracing::info!("新对局: {:?}，{:?}", mode, phase);
        Self { state, mode, phase }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 对局结果（未结束为 None）
    pub fn result(&self) -> Option<GameResult> {
        self.state.winner()
    }

    /// 玩家落子
    pub fn submit_human_move(&mut self, pos: Position) -> SessionEvent {
        if self.phase != Phase::HumanToMove {
            return SessionEvent::OutOfTurn(self.phase);
        }

        self.apply(pos)
    }

    /// 玩家无子可下时停一手
    pub fn pass_human_turn(&mut self) -> SessionEvent {
        if self.phase != Phase::HumanToMove {
            return SessionEvent::OutOfTurn(self.phase);
        }

        self.pass()
    }

    /// AI 走一步（同步搜索，返回前完成）
    pub fn play_computer_turn(&mut self) -> SessionEvent {
        let difficulty = match (self.phase, self.mode.difficulty()) {
            (Phase::ComputerToMove, Some(difficulty)) => difficulty,
            _ => return SessionEvent::OutOfTurn(self.phase),
        };

        tracing::info!("AI 开始思考... 难度: {:?}", difficulty);
        let mut engine = AiEngine::from_difficulty(difficulty);
        let choice = engine.search(&self.state);
        tracing::debug!("搜索节点数: {}", engine.nodes_searched());

        match choice {
            Some(pos) => self.apply(pos),
            None => {
                tracing::warn!("AI 无法找到合法走法，停一手");
                self.pass()
            }
        }
    }

    fn apply(&mut self, pos: Position) -> SessionEvent {
        let player = self.state.current_player();

        let event = match self.state.submit_move(pos) {
            SubmitOutcome::Accepted(report) => {
                tracing::info!(
                    "{} 落子 {}，翻转 {} 子",
                    player.display_name(),
                    Notation::position_name(pos),
                    report.flipped.len()
                );
                SessionEvent::Moved(report)
            }
            SubmitOutcome::Rejected(reason) => {
                tracing::debug!("拒绝落子 {}: {:?}", Notation::position_name(pos), reason);
                SessionEvent::Rejected(reason)
            }
        };

        self.advance();
        event
    }

    fn pass(&mut self) -> SessionEvent {
        let player = self.state.current_player();
        if !self.state.pass_turn() {
            return SessionEvent::Rejected(Rejection::HasLegalMove);
        }

        self.advance();
        SessionEvent::Passed(player)
    }

    fn advance(&mut self) {
        self.phase = next_phase(&self.mode, &self.state);
        tracing::debug!(
            "局面: {}",
            Notation::to_string(self.state.board(), self.state.current_player())
        );
        if let Some(result) = self.result() {
            let (black, white) = self.state.disc_counts();
            tracing::info!("游戏结束: {:?}，黑 {} : 白 {}", result, black, white);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    fn versus(computer: Player) -> GameMode {
        GameMode::VersusComputer {
            computer,
            difficulty: Difficulty::Easy,
        }
    }

    fn state_from(text: &str) -> GameState {
        let (board, player) = Notation::parse(text).unwrap();
        GameState::from_board(board, player, Rules::default())
    }

    #[test]
    fn test_transition_table() {
        let opening = GameState::new();
        let finished = state_from("BB6/8/8/8/8/8/8/8 b");

        assert_eq!(next_phase(&GameMode::TwoPlayer, &opening), Phase::HumanToMove);
        assert_eq!(next_phase(&versus(Player::Black), &opening), Phase::ComputerToMove);
        assert_eq!(next_phase(&versus(Player::White), &opening), Phase::HumanToMove);

        for mode in [GameMode::TwoPlayer, versus(Player::Black), versus(Player::White)] {
            assert_eq!(next_phase(&mode, &finished), Phase::Finished);
        }
    }

    #[test]
    fn test_computer_moves_first_as_black() {
        let mut session = Session::new(versus(Player::Black), Rules::default());
        assert_eq!(session.phase(), Phase::ComputerToMove);

        // 轮到 AI 时玩家落子无效
        assert_eq!(
            session.submit_human_move(pos(2, 3)),
            SessionEvent::OutOfTurn(Phase::ComputerToMove)
        );

        let SessionEvent::Moved(report) = session.play_computer_turn() else {
            panic!("computer should move");
        };
        assert_eq!(report.player, Player::Black);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.state().current_player(), Player::White);
    }

    #[test]
    fn test_human_then_computer() {
        let mut session = Session::new(versus(Player::White), Rules::default());
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(
            session.play_computer_turn(),
            SessionEvent::OutOfTurn(Phase::HumanToMove)
        );

        // 非法落子不改变阶段
        assert_eq!(
            session.submit_human_move(pos(0, 0)),
            SessionEvent::Rejected(Rejection::NoCapture)
        );
        assert_eq!(session.phase(), Phase::HumanToMove);

        assert!(matches!(session.submit_human_move(pos(2, 3)), SessionEvent::Moved(_)));
        assert_eq!(session.phase(), Phase::ComputerToMove);

        assert!(matches!(session.play_computer_turn(), SessionEvent::Moved(_)));
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_two_player_alternates() {
        let mut session = Session::new(GameMode::TwoPlayer, Rules::default());

        assert!(matches!(session.submit_human_move(pos(2, 3)), SessionEvent::Moved(_)));
        assert_eq!(session.state().current_player(), Player::White);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(
            session.play_computer_turn(),
            SessionEvent::OutOfTurn(Phase::HumanToMove)
        );
    }

    #[test]
    fn test_computer_passes_when_blocked() {
        // AI 执白但无子可下
        let mut session = Session::from_state(state_from("BW6/8/8/8/8/8/8/8 w"), versus(Player::White));
        assert_eq!(session.phase(), Phase::ComputerToMove);

        assert_eq!(session.play_computer_turn(), SessionEvent::Passed(Player::White));
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.state().current_player(), Player::Black);
    }

    #[test]
    fn test_human_pass_only_when_blocked() {
        let mut session = Session::new(GameMode::TwoPlayer, Rules::default());
        assert_eq!(session.pass_human_turn(), SessionEvent::Rejected(Rejection::HasLegalMove));
        assert_eq!(session.state().current_player(), Player::Black);
        assert_eq!(session.phase(), Phase::HumanToMove);

        let mut session = Session::from_state(state_from("BW6/8/8/8/8/8/8/8 w"), GameMode::TwoPlayer);
        assert_eq!(session.pass_human_turn(), SessionEvent::Passed(Player::White));
    }

    #[test]
    fn test_finished_is_absorbing() {
        let mut session = Session::from_state(state_from("BW6/8/8/8/8/8/8/8 b"), GameMode::TwoPlayer);

        assert!(matches!(session.submit_human_move(pos(0, 2)), SessionEvent::Moved(_)));
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.result(), Some(GameResult::BlackWin));

        assert_eq!(
            session.submit_human_move(pos(5, 5)),
            SessionEvent::OutOfTurn(Phase::Finished)
        );
        assert_eq!(
            session.play_computer_turn(),
            SessionEvent::OutOfTurn(Phase::Finished)
        );
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn test_computer_vs_computer_reaches_end() {
        // 两个会话交替驱动同一局面：黑方 AI 与白方 AI
        let mut state = GameState::new();
        let modes = [versus(Player::Black), versus(Player::White)];

        while !state.is_terminal() {
            let mode = modes
                .into_iter()
                .find(|mode| mode.is_computer(state.current_player()))
                .unwrap();
            let mut session = Session::from_state(state, mode);
            assert_eq!(session.phase(), Phase::ComputerToMove);

            let event = session.play_computer_turn();
            assert!(matches!(event, SessionEvent::Moved(_) | SessionEvent::Passed(_)));
            state = session.state().clone();
        }

        assert!(state.winner().is_some());
    }
}
