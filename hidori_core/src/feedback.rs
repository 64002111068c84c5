//! `feedback`：演出用的音效/触感协作者（fire-and-forget）。
//!
//! 核心只管在 tick 与当选发表时打一发脉冲；实现方出错或环境不支持
//! 必须自行吞掉，绝不能把抽选状态机打断。

/// 一次反馈脉冲。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// 每个 tick 的短促"咔哒"一声
    Click,
    /// 当选发表：连续三声的胜利音（实现细节由协作者决定）
    Victory,
}

/// 反馈协作者：核心不依赖其返回值。
pub trait FeedbackSink {
    fn pulse(&mut self, pulse: Pulse);
}

/// 静音实现（无音频环境 / 测试默认）。
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn pulse(&mut self, _pulse: Pulse) {}
}
