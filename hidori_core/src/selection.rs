//! `SelectionSet`：候补日集合（去重、上限、过去日不可选）。
//!
//! 约定：
//! - 成员按规范键（`"{y}/{m+1}/{d}"` 字符串）去重并升序迭代；
//!   这是**字符串序**，例如 `2024/10/5` 排在 `2024/3/10` 之前（沿用既有展示顺序）
//! - 只由 toggle 变更；抽选引擎绝不回写集合
//! - 单线程同步变更，无内部并发

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::CalendarDate;

/// 同时可选的候补日上限。
pub const MAX_SELECTED: usize = 10;

/// toggle 被拒绝的原因。三种都是本地可恢复状态，不需要重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// 过去的日子不可新增（UI 侧静默忽略即可，不要求弹警告）
    #[error("過去の日付は選択できません")]
    PastDateRejected,
    /// 已达上限；作为阻断性警告展示给用户，集合不变
    #[error("最大{max}個まで選択できます！")]
    CapacityExceeded { max: usize },
}

/// toggle 实际做了什么。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// 候补日集合：规范键 -> 日期。
///
/// BTreeMap 一举两得：键唯一性 + 展示所需的键升序迭代。
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: BTreeMap<String, CalendarDate>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.items.contains_key(&date.canonical())
    }

    /// 选择/解除的开关：
    /// - 已在集合内 -> 移除（总是成功，即便该日已成为过去）
    /// - 不在集合内 -> 严格早于 `today` 则拒绝；满员则拒绝；否则加入
    pub fn toggle(
        &mut self,
        date: CalendarDate,
        today: CalendarDate,
    ) -> Result<Toggled, SelectError> {
        let key = date.canonical();
        if self.items.remove(&key).is_some() {
            return Ok(Toggled::Removed);
        }
        if date < today {
            return Err(SelectError::PastDateRejected);
        }
        if self.items.len() >= MAX_SELECTED {
            return Err(SelectError::CapacityExceeded { max: MAX_SELECTED });
        }
        self.items.insert(key, date);
        Ok(Toggled::Added)
    }

    /// 当前成员的不可变快照（规范键升序）。
    ///
    /// 既用于展示，也是抽选开始时交给 `PickSession` 的输入。
    pub fn snapshot(&self) -> Vec<CalendarDate> {
        self.items.values().copied().collect()
    }

    /// 无条件清空。
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
