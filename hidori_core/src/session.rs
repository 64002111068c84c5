//! `Session`：对上层（CLI/GUI）提供的会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有 `Context`（状态）与 processors 链（可插拔）
//! - 把每次 `UserEvent` 依次交给 processors，直到被消费
//! - 进行中的抽选由宿主按 `next_delay` 节奏反复调用 `step` 推进
//! - 最后输出 `UiView` + `Action`

use std::time::Duration;

use crate::context::Context;
use crate::event::{Action, UserEvent};
use crate::feedback::{FeedbackSink, Pulse};
use crate::model::{CalendarDate, Pick, UiView};
use crate::oracle::{Oracle, RandomOracle};
use crate::phrase::ReasonSource;
use crate::processor::{PickProcessor, ProcessStatus, Processor, ResetProcessor, ToggleProcessor};
use crate::roulette::SpinEvent;

/// `step` 一步推进的可观测结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stepped {
    /// 一次 tick 展示更新（宿主同时已收到 Click 脉冲）
    Tick(CalendarDate),
    /// 当选发表（宿主同时已收到 Victory 脉冲）
    Reveal(CalendarDate),
    /// 结果确定，抽选会话已丢弃（`view().result` 可读）
    Decided,
}

/// 日取り会话（一次选日+抽选过程的状态机容器）。
pub struct Session<S, F> {
    /// 会话上下文（processors 共享）
    ctx: Context,
    /// 随机源（抽选的全部随机经由它）
    oracle: Box<dyn Oracle>,
    /// 理由语料供给源
    reasons: S,
    /// 演出反馈协作者（fire-and-forget）
    feedback: F,
    /// processors 链（可配置/可扩展）
    processors: Vec<Box<dyn Processor>>,
}

impl<S, F> Session<S, F>
where
    S: ReasonSource,
    F: FeedbackSink,
{
    /// 创建会话，并组装默认 processors 链。
    pub fn new(today: CalendarDate, reasons: S, feedback: F) -> Self {
        Self::with_oracle(today, reasons, feedback, Box::new(RandomOracle::new()))
    }

    /// 注入自定义随机源（测试：脚本化/可播种）。
    pub fn with_oracle(
        today: CalendarDate,
        reasons: S,
        feedback: F,
        oracle: Box<dyn Oracle>,
    ) -> Self {
        Self {
            ctx: Context::new(today),
            oracle,
            reasons,
            feedback,
            processors: vec![
                Box::new(ToggleProcessor),
                Box::new(PickProcessor),
                Box::new(ResetProcessor),
            ],
        }
    }

    /// 获取当前 UI 快照（只读）。
    pub fn view(&self) -> UiView {
        self.ctx.ui_view()
    }

    /// 处理一个用户事件，返回最新 UI 快照与动作列表。
    pub fn handle(&mut self, ev: UserEvent) -> (UiView, Vec<Action>) {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(self.oracle.as_mut(), &mut self.ctx, &ev);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        (self.ctx.ui_view(), actions)
    }

    /// 进行中抽选的下一步之前该等多久；无抽选时为 None。
    pub fn next_delay(&self) -> Option<Duration> {
        self.ctx.active.as_ref().map(|s| s.next_delay())
    }

    /// 推进进行中的抽选一步（无抽选时为 None）。
    ///
    /// 脉冲在这里发出：tick -> Click、发表 -> Victory；
    /// 悬念停顿结束的那一步抽理由、写结果、丢弃会话。
    pub fn step(&mut self) -> Option<Stepped> {
        let active = self.ctx.active.as_mut()?;
        match active.advance(self.oracle.as_mut()) {
            SpinEvent::Tick(shown) => {
                self.feedback.pulse(Pulse::Click);
                Some(Stepped::Tick(shown))
            }
            SpinEvent::Reveal(won) => {
                self.feedback.pulse(Pulse::Victory);
                Some(Stepped::Reveal(won))
            }
            SpinEvent::Settled(date) => {
                let reason = self.draw_reason();
                self.ctx.result = Some(Pick { date, reason });
                self.ctx.active = None;
                Some(Stepped::Decided)
            }
        }
    }

    fn draw_reason(&mut self) -> String {
        let pool = self.reasons.phrases();
        if pool.is_empty() {
            // 供给方保证非空；空池时退化为空串而不是崩
            return String::new();
        }
        let i = self.oracle.reason_index(pool.len()).min(pool.len() - 1);
        pool[i].clone()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::event::Warning;
    use crate::roulette::{MAX_TICKS, MIN_TICKS, PickError, SUSPENSE_DELAY, TICK_INTERVAL};
    use crate::selection::{MAX_SELECTED, SelectError};

    const TODAY: CalendarDate = CalendarDate {
        year: 2024,
        month0: 2,
        day: 1,
    };

    struct StubReasons(Vec<String>);

    impl ReasonSource for StubReasons {
        fn phrases(&self) -> &[String] {
            &self.0
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Pulse>>>);

    impl FeedbackSink for Recorder {
        fn pulse(&mut self, pulse: Pulse) {
            self.0.borrow_mut().push(pulse);
        }
    }

    fn pool() -> Vec<String> {
        vec!["なんとなく".to_string(), "直感です".to_string()]
    }

    fn session_with_seed(seed: u64) -> (Session<StubReasons, Recorder>, Rc<RefCell<Vec<Pulse>>>) {
        let recorder = Recorder::default();
        let pulses = Rc::clone(&recorder.0);
        let oracle = Box::new(RandomOracle::from_rng(StdRng::seed_from_u64(seed)));
        (
            Session::with_oracle(TODAY, StubReasons(pool()), recorder, oracle),
            pulses,
        )
    }

    fn drive_to_completion(session: &mut Session<StubReasons, Recorder>) -> (u32, u32) {
        let mut ticks = 0;
        let mut reveals = 0;
        while let Some(stepped) = session.step() {
            match stepped {
                Stepped::Tick(_) => ticks += 1,
                Stepped::Reveal(_) => reveals += 1,
                Stepped::Decided => break,
            }
        }
        (ticks, reveals)
    }

    #[test]
    fn pick_with_too_few_candidates_warns_and_stays_idle() {
        let (mut session, _) = session_with_seed(3);
        session.handle(UserEvent::Toggle(CalendarDate::new(2024, 2, 10)));
        let (view, actions) = session.handle(UserEvent::RequestPick);
        assert!(!view.active);
        assert!(view.result.is_none());
        assert_eq!(
            actions,
            vec![Action::Warn(Warning::Pick(
                PickError::InsufficientCandidates { have: 1 }
            ))]
        );
        assert_eq!(session.step(), None);
        assert_eq!(session.next_delay(), None);
    }

    #[test]
    fn full_scenario_two_candidates() {
        let a = CalendarDate::new(2024, 2, 10);
        let b = CalendarDate::new(2024, 2, 15);
        for seed in 0..20 {
            let (mut session, pulses) = session_with_seed(seed);
            session.handle(UserEvent::Toggle(a));
            session.handle(UserEvent::Toggle(b));
            let (view, actions) = session.handle(UserEvent::RequestPick);
            assert!(view.active && view.spinning);
            assert!(actions.is_empty());

            let mut displays = Vec::new();
            let mut ticks = 0u32;
            loop {
                match session.step().expect("active session") {
                    Stepped::Tick(shown) => {
                        ticks += 1;
                        displays.push(shown);
                        // 最终 tick 之后发表是零延迟，其余 tick 维持固定节奏
                        let delay = session.next_delay().expect("still active");
                        assert!(delay == TICK_INTERVAL || delay == std::time::Duration::ZERO);
                    }
                    Stepped::Reveal(won) => {
                        displays.push(won);
                        assert_eq!(session.next_delay(), Some(SUSPENSE_DELAY));
                        break;
                    }
                    Stepped::Decided => panic!("decided before reveal"),
                }
            }
            assert!((MIN_TICKS..=MAX_TICKS).contains(&ticks), "seed {seed}");
            // 展示更新总数 = total_ticks + 1（tick 们 + 一次发表）
            assert_eq!(displays.len() as u32, ticks + 1);
            assert!(displays.iter().all(|d| *d == a || *d == b));

            assert_eq!(session.step(), Some(Stepped::Decided));
            let view = session.view();
            assert!(!view.active);
            let result = view.result.expect("result emitted");
            assert!(result.date == a || result.date == b);
            assert!(pool().contains(&result.reason));

            // 脉冲：与 tick 数相同的 Click + 恰好一次 Victory
            let recorded = pulses.borrow();
            let clicks = recorded.iter().filter(|p| **p == Pulse::Click).count();
            let victories = recorded.iter().filter(|p| **p == Pulse::Victory).count();
            assert_eq!(clicks as u32, ticks);
            assert_eq!(victories, 1);
        }
    }

    #[test]
    fn reset_clears_selection_and_result_then_pick_fails() {
        let (mut session, _) = session_with_seed(11);
        session.handle(UserEvent::Toggle(CalendarDate::new(2024, 2, 10)));
        session.handle(UserEvent::Toggle(CalendarDate::new(2024, 2, 15)));
        session.handle(UserEvent::RequestPick);
        let (ticks, reveals) = drive_to_completion(&mut session);
        assert!((MIN_TICKS..=MAX_TICKS).contains(&ticks));
        assert_eq!(reveals, 1);
        assert!(session.view().result.is_some());

        let (view, _) = session.handle(UserEvent::Reset);
        assert!(view.selected.is_empty());
        assert!(view.result.is_none());

        let (_, actions) = session.handle(UserEvent::RequestPick);
        assert_eq!(
            actions,
            vec![Action::Warn(Warning::Pick(
                PickError::InsufficientCandidates { have: 0 }
            ))]
        );
    }

    #[test]
    fn capacity_warning_surfaces_through_actions() {
        let (mut session, _) = session_with_seed(5);
        for day in 1..=MAX_SELECTED as u8 {
            let (_, actions) = session.handle(UserEvent::Toggle(CalendarDate::new(2024, 3, day)));
            assert!(actions.is_empty());
        }
        let (view, actions) = session.handle(UserEvent::Toggle(CalendarDate::new(2024, 3, 20)));
        assert_eq!(view.selected.len(), MAX_SELECTED);
        assert_eq!(
            actions,
            vec![Action::Warn(Warning::Select(SelectError::CapacityExceeded {
                max: MAX_SELECTED
            }))]
        );
    }

    #[test]
    fn past_toggle_is_silent_and_ignored() {
        let (mut session, _) = session_with_seed(5);
        let (view, actions) = session.handle(UserEvent::Toggle(CalendarDate::new(2024, 1, 28)));
        assert!(view.selected.is_empty());
        assert!(actions.is_empty());
    }

    #[test]
    fn pick_request_during_active_session_is_ignored() {
        let (mut session, _) = session_with_seed(9);
        session.handle(UserEvent::Toggle(CalendarDate::new(2024, 2, 10)));
        session.handle(UserEvent::Toggle(CalendarDate::new(2024, 2, 15)));
        session.handle(UserEvent::RequestPick);
        session.step();
        let before = session.view();
        let (after, actions) = session.handle(UserEvent::RequestPick);
        assert!(actions.is_empty());
        assert!(after.active);
        assert_eq!(after.display, before.display);
    }
}
