use std::fmt;

/// 候补日（可被 UI 展示与用户选择的一天）。
///
/// 注意：`month0` 是**从 0 开始的月索引**（0 = 1月），排序按
/// (year, month0, day) 字典序，与日历先后一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// 0 起算的月索引（0..=11）
    pub month0: u8,
    /// 当月第几日（1 起算）
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month0: u8, day: u8) -> Self {
        Self { year, month0, day }
    }

    /// 规范键：`"{year}/{month+1}/{day}"`（集合去重与显示排序都用它）。
    pub fn canonical(&self) -> String {
        format!("{}/{}/{}", self.year, u32::from(self.month0) + 1, self.day)
    }

    /// 展示形："3月10日"。
    pub fn display_md(&self) -> String {
        format!("{}月{}日", u32::from(self.month0) + 1, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_md())
    }
}

/// 抽选结果：确定的日子 + 随机抽到的理由文案。
///
/// 一旦产生即不可变；`reset` 丢弃它（不保留历史）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub date: CalendarDate,
    pub reason: String,
}

/// 引擎给 UI 的"快照视图"。
///
/// 设计目标：
/// - UI 层只读 `UiView`，不直接读写 `Context`
/// - 便于 CLI/GUI 输出与调试
#[derive(Debug, Clone)]
pub struct UiView {
    /// 已选日期（按规范键字符串升序，供展示）
    pub selected: Vec<CalendarDate>,
    /// 选择上限（固定 10）
    pub capacity: usize,
    /// 抽选会话进行中（转盘弹层显示中）
    pub active: bool,
    /// Spinning 阶段中（高速切换演出中；发表后为 false）
    pub spinning: bool,
    /// 当前演出显示值（tick 或最终发表的当选值）
    pub display: Option<CalendarDate>,
    /// 已确定的结果（与 `active` 互斥）
    pub result: Option<Pick>,
}
