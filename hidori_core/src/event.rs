//! 用户事件（逻辑操作事件）与核心产生的动作。
//!
//! 说明：
//! - `Session`/processor 只关心"语义事件"，不关心具体 UI 控件。
//! - CLI/GUI 层负责把点击/按键转换成这些事件。

use thiserror::Error;

use crate::model::CalendarDate;
use crate::roulette::PickError;
use crate::selection::SelectError;

/// 用户操作事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// 点一个日期格子（选择/解除开关）
    Toggle(CalendarDate),
    /// "決めてもらう"按钮：用当前选择快照开一局抽选
    RequestPick,
    /// 重选：清空选择与结果
    Reset,
}

/// 核心输出动作（对 UI/宿主的"副作用"请求）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 需要阻断性展示给用户的警告
    Warn(Warning),
}

/// 面向用户的警告内容（Display 即为展示文案）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Pick(#[from] PickError),
}
