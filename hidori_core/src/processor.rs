//! `processor`：用户事件处理链。
//!
//! 按顺序处理 `UserEvent`，对 `Context` 做状态变更，并可产生 `Action`
//! （例如要求 UI 弹警告）。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `ToggleProcessor`：日期格子的选择/解除（满员时产出警告；过去日静默拒绝）
//! - `PickProcessor`：开一局抽选（候补不足时产出警告；进行中则忽略）
//! - `ResetProcessor`：重选（清空选择与结果）

use crate::context::Context;
use crate::event::{Action, UserEvent, Warning};
use crate::oracle::Oracle;
use crate::roulette::PickSession;
use crate::selection::SelectError;

/// Processor 执行结果：是否"消费"了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理用户事件并改变 Context；必要时产生输出动作（警告等）。
pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        oracle: &mut dyn Oracle,
        context: &mut Context,
        event: &UserEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 日期选择/解除的 processor。
pub struct ToggleProcessor;

impl Processor for ToggleProcessor {
    fn process(
        &mut self,
        _oracle: &mut dyn Oracle,
        context: &mut Context,
        event: &UserEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *event {
            UserEvent::Toggle(date) => {
                let today = context.today;
                match context.selected.toggle(date, today) {
                    Ok(_) => (ProcessStatus::Consume, Vec::new()),
                    // 过去日：无反应即可
                    Err(SelectError::PastDateRejected) => (ProcessStatus::Consume, Vec::new()),
                    Err(err @ SelectError::CapacityExceeded { .. }) => (
                        ProcessStatus::Consume,
                        vec![Action::Warn(Warning::Select(err))],
                    ),
                }
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 开局 processor：把选择快照交给抽选会话。
pub struct PickProcessor;

impl Processor for PickProcessor {
    fn process(
        &mut self,
        oracle: &mut dyn Oracle,
        context: &mut Context,
        event: &UserEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *event {
            UserEvent::RequestPick => {
                // 进行中再开一局不是定义内操作；吞掉即可
                if context.active.is_some() {
                    return (ProcessStatus::Consume, Vec::new());
                }
                match PickSession::start(context.selected.snapshot(), oracle) {
                    Ok(session) => {
                        context.result = None;
                        context.active = Some(session);
                        (ProcessStatus::Consume, Vec::new())
                    }
                    Err(err) => (
                        ProcessStatus::Consume,
                        vec![Action::Warn(Warning::Pick(err))],
                    ),
                }
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 重选 processor。
pub struct ResetProcessor;

impl Processor for ResetProcessor {
    fn process(
        &mut self,
        _oracle: &mut dyn Oracle,
        context: &mut Context,
        event: &UserEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *event {
            UserEvent::Reset => {
                (&mut *context).reset();
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
