//! 月历相关：无状态的网格生成 + 月份导航的纯计算。
//!
//! 这里只做"读"：对 (year, month0, today, 选择集合) 生成一串格子描述，
//! 每次月份切换/选择变化由上层重新生成，不保留任何状态。

use hidori_core::model::CalendarDate;

/// 星期表头（周日起）。
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// 闰年判定（格里历）。
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// 某月天数（`month0` 为 0 起算的月索引）。
pub fn days_in_month(year: i32, month0: u8) -> u8 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        // 约定调用方传入 0..=11；越界按 30 兜底
        _ => 30,
    }
}

/// 某日星期几（0 = 周日）。Sakamoto 查表法。
pub fn weekday_of(year: i32, month0: u8, day: u8) -> u8 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let m = i32::from(month0) + 1;
    let y = if m < 3 { year - 1 } else { year };
    let raw = y + y / 4 - y / 100 + y / 400 + T[(m - 1) as usize] + i32::from(day);
    (raw.rem_euclid(7)) as u8
}

/// 当月 1 号的星期（网格行首的空格子数）。
pub fn first_weekday(year: i32, month0: u8) -> u8 {
    weekday_of(year, month0, 1)
}

/// 月份导航：在 (year, month0) 上加减若干月。
pub fn add_months(year: i32, month0: u8, delta: i32) -> (i32, u8) {
    let total = year * 12 + i32::from(month0) + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u8)
}

/// 月标签："3月"。
pub fn month_label(month0: u8) -> String {
    format!("{}月", u32::from(month0) + 1)
}

/// 月历表头："2024年 3月"。
pub fn month_header(year: i32, month0: u8) -> String {
    format!("{}年 {}", year, month_label(month0))
}

/// 一个日期格子的描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// 当月第几日
    pub day: u8,
    pub date: CalendarDate,
    /// 严格早于今天（不可选，展示为灰）
    pub is_past: bool,
    /// 已在候补集合内
    pub is_selected: bool,
}

/// 网格里的一个格子：行首补位的空格，或一个日期。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(DayCell),
}

/// 生成一个月的格子序列：先是 1 号星期对应数量的空格，
/// 再按 1..=月末 逐日给出描述。有限序列，每次调用重新生成。
///
/// `selected` 是选择集合的只读快照（成员判定用；条数上限 10，线性查找足够）。
pub fn month_cells(
    year: i32,
    month0: u8,
    today: CalendarDate,
    selected: &[CalendarDate],
) -> Vec<Cell> {
    let blanks = usize::from(first_weekday(year, month0));
    let days = days_in_month(year, month0);
    let mut cells = Vec::with_capacity(blanks + usize::from(days));
    for _ in 0..blanks {
        cells.push(Cell::Blank);
    }
    for day in 1..=days {
        let date = CalendarDate::new(year, month0, day);
        cells.push(Cell::Day(DayCell {
            day,
            date,
            is_past: date < today,
            is_selected: selected.contains(&date),
        }));
    }
    cells
}
