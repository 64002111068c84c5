//! 抽选的计时驱动：核心给节奏（`next_delay`），这里负责真正地等。
//!
//! 两段式调度：
//! - Spinning：`channel::tick` 的固定节奏重复计时器，结束时**必定**被丢弃
//!   （即便循环提前退出），不会有计时器活过自己的阶段
//! - 发表后：`channel::after` 的一次性悬念停顿，收到即收尾

use std::io::{self, Write};
use std::time::Duration;

use crossbeam::channel;

use hidori_core::feedback::{FeedbackSink, Pulse};
use hidori_core::phrase::ReasonSource;
use hidori_core::roulette::{SUSPENSE_DELAY, TICK_INTERVAL};
use hidori_core::session::{Session, Stepped};

/// 终端的反馈实现：BEL 脉冲。写失败/静音时直接跳过，抽选照常进行。
pub struct TerminalFeedback {
    enabled: bool,
}

impl TerminalFeedback {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl FeedbackSink for TerminalFeedback {
    fn pulse(&mut self, pulse: Pulse) {
        if !self.enabled {
            return;
        }
        let bells: &[u8] = match pulse {
            Pulse::Click => b"\x07",
            // 胜利音：三连
            Pulse::Victory => b"\x07\x07\x07",
        };
        let mut out = io::stdout();
        let _ = out.write_all(bells);
        let _ = out.flush();
    }
}

/// 把进行中的抽选跑到完结。进来之前调用方需确认 `view().active`。
pub fn run_roulette<S, F>(session: &mut Session<S, F>, out: &mut impl Write) -> io::Result<()>
where
    S: ReasonSource,
    F: FeedbackSink,
{
    writeln!(out)?;
    writeln!(out, "🎰 選んでます... 🎰")?;
    tracing::debug!(
        candidates = session.view().selected.len(),
        "ルーレット開始"
    );

    // Spinning：固定节奏，直到"下一步是零延迟"（= 最终 tick 已完成）
    let ticker = channel::tick(TICK_INTERVAL);
    loop {
        if ticker.recv().is_err() {
            break;
        }
        match session.step() {
            Some(Stepped::Tick(shown)) => {
                write!(out, "\r  >> {}   ", shown.display_md())?;
                out.flush()?;
            }
            // tick 阶段不会出现其他事件；保险起见直接退出
            _ => break,
        }
        if session.next_delay() == Some(Duration::ZERO) {
            break;
        }
    }
    drop(ticker);

    // 当选发表（零延迟）
    if let Some(Stepped::Reveal(won)) = session.step() {
        write!(out, "\r  >> {} !!", won.display_md())?;
        out.flush()?;
        tracing::debug!(winner = %won.canonical(), "当選発表");
    }

    // 悬念停顿：一次性计时器，收到即确定结果
    let hold = channel::after(SUSPENSE_DELAY);
    let _ = hold.recv();
    if let Some(Stepped::Decided) = session.step() {
        writeln!(out)?;
        tracing::info!("結果確定");
    }
    Ok(())
}
