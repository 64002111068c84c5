//! `Context`：processor 链共享的唯一状态容器。
//!
//! 约定：
//! - `today`：宿主在会话创建时注入的"今天"（核心不读时钟）
//! - `selected`：候补日集合，只被 toggle/reset 变更
//! - `active`/`result`：进行中的抽选会话与确定结果，二者互斥

use crate::model::{CalendarDate, Pick, UiView};
use crate::roulette::PickSession;
use crate::selection::{MAX_SELECTED, SelectionSet};

/// 会话上下文：processor 链共享的唯一状态。
#[derive(Debug, Clone)]
pub struct Context {
    /// 今天（日粒度；过去日判定的基准）
    pub today: CalendarDate,
    /// 候补日集合
    pub selected: SelectionSet,
    /// 进行中的抽选会话（无则为逻辑 Idle）
    pub active: Option<PickSession>,
    /// 已确定的结果（reset 时一并丢弃）
    pub result: Option<Pick>,
}

impl Context {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today,
            selected: SelectionSet::new(),
            active: None,
            result: None,
        }
    }

    /// 重选：清空选择与结果（等价于重新开始一次会话）。
    pub fn reset(&mut self) {
        self.selected.clear();
        self.result = None;
    }

    /// 生成 UI 层只读快照。
    pub fn ui_view(&self) -> UiView {
        UiView {
            selected: self.selected.snapshot(),
            capacity: MAX_SELECTED,
            active: self.active.is_some(),
            spinning: self.active.as_ref().is_some_and(PickSession::is_spinning),
            display: self.active.as_ref().and_then(PickSession::display),
            result: self.result.clone(),
        }
    }
}
