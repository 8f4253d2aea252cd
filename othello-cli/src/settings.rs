//! 设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use othello_ai::Difficulty;
use othello_core::{DirectionSet, Player, Rules};
use serde::{Deserialize, Serialize};

use crate::session::GameMode;

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayMode {
    /// 双人对战（同一终端）
    TwoPlayer,
    /// 人机对战
    #[default]
    VersusComputer,
}

impl PlayMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayMode::TwoPlayer => "双人对战",
            PlayMode::VersusComputer => "人机对战",
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 作为 EnvFilter 指令使用的级别名
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 设置的来源
#[derive(Debug)]
pub enum SettingsSource {
    /// 从文件加载
    Loaded(PathBuf),
    /// 设置文件不存在
    Missing(PathBuf),
    /// 无法获取配置目录
    NoConfigDir,
    /// 设置文件无法读取或格式无效
    Invalid(anyhow::Error),
}

impl SettingsSource {
    /// 是否回退到了默认设置
    pub fn is_default(&self) -> bool {
        !matches!(self, SettingsSource::Loaded(_))
    }

    /// 记录加载结果（需在日志初始化之后调用）
    pub fn log(&self) {
        match self {
            SettingsSource::Loaded(path) => tracing::info!("已加载设置: {:?}", path),
            SettingsSource::Missing(path) => {
                tracing::info!("设置文件不存在，使用默认设置: {:?}", path)
            }
            SettingsSource::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认设置"),
            SettingsSource::Invalid(e) => tracing::warn!("{:#}，使用默认设置", e),
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 对局模式
    pub play_mode: PlayMode,
    /// 人机对战时 AI 执子颜色（默认执黑先行）
    pub computer_side: Player,
    /// AI 难度
    pub difficulty: Difficulty,
    /// 夹吃方向集
    pub directions: DirectionSet,
    /// 显示合法落子标记
    pub show_move_hints: bool,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_mode: PlayMode::default(),
            computer_side: Player::Black,
            difficulty: Difficulty::Medium,
            directions: DirectionSet::default(),
            show_move_hints: true,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("othello");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认设置
    ///
    /// 加载时日志可能尚未初始化，来源随结果一起返回，由调用方记录。
    pub fn load() -> (Self, SettingsSource) {
        match Self::settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Self::default(), SettingsSource::NoConfigDir),
        }
    }

    /// 从指定文件加载设置，文件不存在或无效时使用默认设置
    pub fn load_or_default(path: &Path) -> (Self, SettingsSource) {
        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(path.to_path_buf()));
        }

        match Self::load_from(path) {
            Ok(settings) => (settings, SettingsSource::Loaded(path.to_path_buf())),
            Err(e) => (Self::default(), SettingsSource::Invalid(e)),
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取设置文件: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存到默认位置，返回写入的路径
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 对应的规则
    pub fn rules(&self) -> Rules {
        Rules::new(self.directions)
    }

    /// 对应的对局模式
    pub fn game_mode(&self) -> GameMode {
        match self.play_mode {
            PlayMode::TwoPlayer => GameMode::TwoPlayer,
            PlayMode::VersusComputer => GameMode::VersusComputer {
                computer: self.computer_side,
                difficulty: self.difficulty,
            },
        }
    }
}
