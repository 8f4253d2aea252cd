//! 搜索引擎
//!
//! 实现固定视角的 Minimax + Alpha-Beta 剪枝
//!
//! 每个分支都在棋盘副本上落子，不做撤销，兄弟分支之间互不影响。

use std::str::FromStr;

use othello_core::{Board, GameState, Notation, OthelloError, Player, Position, Rules};
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;

/// 搜索窗口的无穷大
pub const INFINITY: i32 = i32::MAX;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：depth=1
    Easy,
    /// 中等：depth=3
    #[default]
    Medium,
    /// 困难：depth=5
    Hard,
}

impl Difficulty {
    /// 对应的搜索深度
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }
}

impl FromStr for Difficulty {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(OthelloError::UnknownValue {
                kind: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            max_depth: difficulty.depth(),
        }
    }

    /// 覆盖搜索深度
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 固定视角评估策略
///
/// 所有叶子都用根节点玩家的子数差打分，不随走子方取反（不是 negamax）。
/// 根节点玩家的层取最大，对手的层取最小。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPerspective {
    pub root: Player,
}

impl FixedPerspective {
    pub fn new(root: Player) -> Self {
        Self { root }
    }

    pub fn fixed_perspective_score(&self, board: &Board) -> i32 {
        Evaluator::score(board, self.root)
    }

    pub fn is_maximizing(&self, side: Player) -> bool {
        side == self.root
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rules: Rules,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎（默认四方向规则）
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            rules: Rules::default(),
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 指定搜索使用的规则
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// 为对局的当前走子方搜索最佳落子（跟随对局规则）
    pub fn search(&mut self, state: &GameState) -> Option<Position> {
        if state.is_terminal() {
            return None;
        }
        self.rules = state.rules();
        self.choose_move(state.board(), state.current_player())
    }

    /// 搜索最佳落子
    ///
    /// 逐个尝试合法落子（行优先），以 `max_depth` 调用 alpha-beta 评估对手应对后的局面，
    /// 取分数严格最大者，同分保留先找到的。无合法落子时返回 None，调用方应停一手。
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        self.nodes_searched = 0;
        let perspective = FixedPerspective::new(player);

        let mut best: Option<(Position, i32)> = None;

        for pos in self.rules.legal_moves(board, player) {
            let mut child = board.clone();
            self.rules.apply_move(&mut child, player, pos);

            let score = self.alpha_beta(
                &child,
                player.opponent(),
                -INFINITY,
                INFINITY,
                self.config.max_depth,
                perspective,
            );

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => {
                tracing::debug!(
                    "{} 选择 {}，分数 {}，深度 {}，节点 {}",
                    player.display_name(),
                    Notation::position_name(pos),
                    score,
                    self.config.max_depth,
                    self.nodes_searched
                );
                Some(pos)
            }
            None => {
                tracing::debug!("{} 无合法落子", player.display_name());
                None
            }
        }
    }

    /// Alpha-Beta 搜索
    ///
    /// `depth == 0` 或走子方无合法落子时直接返回固定视角评估值。
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        side_to_move: Player,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
        perspective: FixedPerspective,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 || !self.rules.has_any_legal_move(board, side_to_move) {
            return perspective.fixed_perspective_score(board);
        }

        let maximizing = perspective.is_maximizing(side_to_move);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for pos in self.rules.legal_moves(board, side_to_move) {
            let mut child = board.clone();
            self.rules.apply_move(&mut child, side_to_move, pos);

            let score = self.alpha_beta(
                &child,
                side_to_move.opponent(),
                alpha,
                beta,
                depth - 1,
                perspective,
            );

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
