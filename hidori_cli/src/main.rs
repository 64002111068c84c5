use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use time::OffsetDateTime;

use hidori_core::event::{Action, UserEvent};
use hidori_core::model::CalendarDate;
use hidori_core::phrase::ReasonSource;
use hidori_core::session::Session;

use crate::driver::TerminalFeedback;

mod driver;
mod render;
mod telemetry;

/// 命令行参数（帮助文案面向用户，保持日文）。
#[derive(Parser, Debug)]
#[command(name = "hidori", version, about = "日取りルーレット - 迷ったら回して決める")]
struct Cli {
    /// 理由フレーズのファイル（1行1フレーズ、# はコメント）
    #[arg(long, value_name = "PATH")]
    phrases: Option<PathBuf>,

    /// ベル音を鳴らさない
    #[arg(long)]
    no_sound: bool,

    /// ログ詳細度（-v / -vv）
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let reasons: Box<dyn ReasonSource> = match &cli.phrases {
        Some(path) => Box::new(hidori_phrase::FileReasons::from_path(path)?),
        None => Box::new(hidori_phrase::BuiltinReasons::new()),
    };
    let feedback = TerminalFeedback::new(!cli.no_sound);

    let today = today_local();
    tracing::debug!(today = %today.canonical(), "セッション開始");

    let mut session = Session::new(today, reasons, feedback);
    let (mut view_year, mut view_month0) = (today.year, today.month0);

    let mut out = io::stdout();
    writeln!(out, "🎯 ひどりん 🎯")?;
    writeln!(out, "決められないあなたの代わりに、適当に日取りを決めちゃいます！")?;
    writeln!(out, "操作: 日番号=選択/解除  n=翌月  p=前月  go=決めてもらう  reset=選び直し  :q=終了")?;
    (&mut out).flush()?;

    let mut line = String::new();
    loop {
        render::draw_month(&mut out, view_year, view_month0, today, &session.view())?;
        render::draw_chips(&mut out, &session.view())?;

        print!("hidori> ");
        out.flush()?;
        (&mut line).clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        match input {
            "n" => {
                (view_year, view_month0) = hidori_cal::add_months(view_year, view_month0, 1);
            }
            "p" => {
                (view_year, view_month0) = hidori_cal::add_months(view_year, view_month0, -1);
            }
            "reset" => {
                let (_, actions) = session.handle(UserEvent::Reset);
                report(&mut out, &actions)?;
            }
            "go" => {
                // 已有结果时不再开局；引导用户 reset
                if session.view().result.is_some() {
                    writeln!(out, "（もう決まっています。reset で選び直してください）")?;
                    continue;
                }
                let (_, actions) = session.handle(UserEvent::RequestPick);
                report(&mut out, &actions)?;
                if session.view().active {
                    driver::run_roulette(&mut session, &mut out)?;
                    if let Some(result) = session.view().result {
                        render::draw_result(&mut out, &result)?;
                    }
                }
            }
            other => match other.parse::<u8>() {
                Ok(day) if (1..=hidori_cal::days_in_month(view_year, view_month0)).contains(&day) => {
                    let date = CalendarDate::new(view_year, view_month0, day);
                    let (_, actions) = session.handle(UserEvent::Toggle(date));
                    report(&mut out, &actions)?;
                }
                _ => {
                    writeln!(out, "（入力を解釈できません: {other}）")?;
                }
            },
        }
    }

    Ok(())
}

/// 把警告动作原样展示给用户。
fn report(out: &mut impl Write, actions: &[Action]) -> io::Result<()> {
    for action in actions {
        let Action::Warn(warning) = action;
        writeln!(out, "⚠ {warning}")?;
    }
    Ok(())
}

/// 今天（本地日期；取不到本地时区时退回 UTC）。
fn today_local() -> CalendarDate {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let date = now.date();
    CalendarDate::new(date.year(), u8::from(date.month()) - 1, date.day())
}
