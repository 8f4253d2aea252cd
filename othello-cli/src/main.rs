//! 黑白棋终端版
//!
//! ## 用法
//!
//! - `othello` - 按保存的设置开始对局（默认人机对战，AI 执黑先行）
//! - `othello --mode two-player` - 双人对战
//! - `othello --difficulty hard --computer white` - AI 执白，困难难度
//! - `othello --directions eight-way --save-settings` - 使用八方向规则并保存设置

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use othello_ai::Difficulty;
use othello_cli::render::{render_board, render_status, result_text};
use othello_cli::{Phase, PlayMode, Session, SessionEvent, Settings};
use othello_core::{DirectionSet, Notation, Player, Rejection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 黑白棋：终端对局与 Alpha-Beta AI
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 对局模式
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// AI 难度 (easy / medium / hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// AI 执子颜色 (black / white)
    #[arg(long)]
    computer: Option<Player>,
    /// 夹吃方向集 (orthogonal / eight-way)
    #[arg(long)]
    directions: Option<DirectionSet>,
    /// 不显示合法落子标记
    #[arg(long)]
    no_hints: bool,
    /// 把本次参数保存为默认设置
    #[arg(long)]
    save_settings: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    Computer,
}

impl Cli {
    /// 命令行参数覆盖已保存的设置
    fn apply(&self, settings: &mut Settings) {
        if let Some(mode) = self.mode {
            settings.play_mode = match mode {
                ModeArg::TwoPlayer => PlayMode::TwoPlayer,
                ModeArg::Computer => PlayMode::VersusComputer,
            };
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(computer) = self.computer {
            settings.computer_side = computer;
        }
        if let Some(directions) = self.directions {
            settings.directions = directions;
        }
        if self.no_hints {
            settings.show_move_hints = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut settings, source) = Settings::load();
    cli.apply(&mut settings);

    // 初始化日志（输出到 stderr，不干扰棋盘）
    let level = settings.log_level.as_filter();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("othello_cli={}", level).parse()?)
                .add_directive(format!("othello_ai={}", level).parse()?)
                .add_directive(format!("othello_core={}", level).parse()?),
        )
        .init();

    source.log();

    if cli.save_settings {
        let path = settings.save()?;
        println!("设置已保存到 {}", path.display());
    }

    println!(
        "欢迎来到黑白棋！{}，{}",
        settings.play_mode.display_name(),
        settings.directions.display_name()
    );
    if settings.play_mode == PlayMode::VersusComputer {
        println!(
            "AI 执{}，难度: {}",
            if settings.computer_side == Player::Black { "黑" } else { "白" },
            settings.difficulty.display_name()
        );
    }

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let mut session = Session::new(settings.game_mode(), settings.rules());
    let mut lines = io::stdin().lock().lines();

    loop {
        println!();
        print!("{}", render_board(session.state(), settings.show_move_hints));
        println!("{}", render_status(session.state()));

        match session.phase() {
            Phase::Finished => break,
            Phase::ComputerToMove => report(&session.play_computer_turn()),
            Phase::HumanToMove => {
                print!(
                    "{}请输入落子（如 d3 或 2 3），pass 停一手，quit 退出: ",
                    session.state().current_player().display_name()
                );
                io::stdout().flush().context("刷新输出失败")?;

                let Some(line) = lines.next() else {
                    break;
                };
                let line = line.context("读取输入失败")?;

                match line.trim() {
                    "" => continue,
                    "quit" | "exit" | "q" => break,
                    "pass" => report(&session.pass_human_turn()),
                    input => match Notation::parse_position(input) {
                        Ok(pos) => report(&session.submit_human_move(pos)),
                        Err(e) => println!("无法识别的位置: {}", e),
                    },
                }
            }
        }
    }

    if let Some(result) = session.result() {
        println!("{}", result_text(result));
    }

    Ok(())
}

fn report(event: &SessionEvent) {
    match event {
        SessionEvent::Moved(report) => {
            println!(
                "{} 落子 {}，翻转 {} 子",
                report.player.display_name(),
                Notation::position_name(report.position),
                report.flipped.len()
            );
            if let Some(passed) = report.passed {
                println!("{}无子可下，停一手", passed.display_name());
            }
        }
        SessionEvent::Passed(player) => println!("{}无子可下，停一手", player.display_name()),
        SessionEvent::Rejected(Rejection::Occupied) => println!("该位置已有棋子"),
        SessionEvent::Rejected(Rejection::NoCapture) => println!("该位置不能落子"),
        SessionEvent::Rejected(Rejection::GameOver) => println!("对局已结束"),
        SessionEvent::Rejected(Rejection::HasLegalMove) => println!("仍有合法落子，不能停一手"),
        SessionEvent::OutOfTurn(phase) => println!("当前不能操作: {:?}", phase),
    }
}
