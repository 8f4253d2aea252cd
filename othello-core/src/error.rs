//! 错误类型定义

use thiserror::Error;

/// 规则库错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// 坐标越界
    #[error("Invalid coordinate: ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    /// 无效的局面或坐标记谱
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },

    /// 无法识别的取值（难度、方向集、颜色等）
    #[error("Unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

/// 规则库操作结果类型
pub type Result<T> = std::result::Result<T, OthelloError>;
