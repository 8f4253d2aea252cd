//! 黑白棋终端客户端
//!
//! 包含:
//! - 对局会话（人机/双人轮换状态机）
//! - 设置加载与保存
//! - 文本棋盘渲染

pub mod render;
pub mod session;
pub mod settings;

pub use session::{next_phase, GameMode, Phase, Session, SessionEvent};
pub use settings::{LogLevel, PlayMode, Settings, SettingsSource};
