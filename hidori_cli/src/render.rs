//! 终端渲染：月历网格、已选列表、结果块。
//!
//! 纯输出；状态全部来自 `UiView` 与网格生成，渲染层不持有任何状态。

use std::io::{self, Write};

use hidori_cal::{Cell, WEEKDAY_LABELS, month_cells, month_header};
use hidori_core::model::{CalendarDate, Pick, UiView};

/// 画一个月的网格。已选 `[n]`、过去 ` n.`、普通 ` n `。
pub fn draw_month(
    out: &mut impl Write,
    year: i32,
    month0: u8,
    today: CalendarDate,
    view: &UiView,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "      {}", month_header(year, month0))?;
    for label in WEEKDAY_LABELS {
        write!(out, " {label} ")?;
    }
    writeln!(out)?;

    let cells = month_cells(year, month0, today, &view.selected);
    for (i, cell) in cells.iter().enumerate() {
        match cell {
            Cell::Blank => write!(out, "    ")?,
            Cell::Day(day) => {
                if day.is_selected {
                    write!(out, "[{:>2}]", day.day)?;
                } else if day.is_past {
                    write!(out, " {:>2}.", day.day)?;
                } else {
                    write!(out, " {:>2} ", day.day)?;
                }
            }
        }
        if (i + 1) % 7 == 0 {
            writeln!(out)?;
        }
    }
    if cells.len() % 7 != 0 {
        writeln!(out)?;
    }
    Ok(())
}

/// 已选日期一览（计数行 + 各日小标签）。
pub fn draw_chips(out: &mut impl Write, view: &UiView) -> io::Result<()> {
    writeln!(
        out,
        "選択した日付（最大{}個）: {}/{}",
        view.capacity,
        view.selected.len(),
        view.capacity
    )?;
    if !view.selected.is_empty() {
        let chips: Vec<String> = view.selected.iter().map(CalendarDate::display_md).collect();
        writeln!(out, "  {}", chips.join("  "))?;
    }
    Ok(())
}

/// 结果块。
pub fn draw_result(out: &mut impl Write, pick: &Pick) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✨ 決定しました！ ✨")?;
    writeln!(out, "   {}", pick.date.display_md())?;
    writeln!(out, "  「{}」", pick.reason)?;
    writeln!(out, "（reset でもう一度選べます）")?;
    Ok(())
}
