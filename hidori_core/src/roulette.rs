//! 抽选引擎：`PickSession` 状态机（Spinning -> Revealing -> 完结）。
//!
//! 设计要点：
//! - 核心**从不睡眠**：每次 `advance` 只推进一步，`next_delay` 告诉宿主
//!   下一步之前该等多久（tick 间隔 / 立即发表 / 悬念停顿）
//! - 时序保证：恰好 `total_ticks` 次 tick 之后才发表；发表后必须等满
//!   悬念停顿才会产出最终值
//! - Spinning 一旦开始就跑到完结，没有中断/取消路径（由调用方保证
//!   进行中不再触发新抽选）

use std::time::Duration;

use thiserror::Error;

use crate::model::CalendarDate;
use crate::oracle::Oracle;

/// tick 的固定节奏。
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// 当选发表与最终确定之间的悬念停顿。
pub const SUSPENSE_DELAY: Duration = Duration::from_millis(1500);
/// 总 tick 数的下限/上限（两端含）。
pub const MIN_TICKS: u32 = 20;
pub const MAX_TICKS: u32 = 29;
/// 开局所需的最少候补数。
pub const MIN_CANDIDATES: usize = 2;

/// 开局被拒绝的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// 候补不足两个；作为阻断性警告展示，状态不变
    #[error("2つ以上の日付を選択してください！")]
    InsufficientCandidates { have: usize },
}

/// 状态机阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 高速切换演出中
    Spinning,
    /// 已到达总 tick 数：先发表、再悬念停顿
    Revealing,
}

/// `advance` 每一步的产出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// 一次 tick：展示值换成了这个候补（有放回抽取，可能重复）
    Tick(CalendarDate),
    /// 当选发表：与最后一次 tick 展示无关的独立抽取
    Reveal(CalendarDate),
    /// 悬念停顿结束，当选日就此定案（会话随后被丢弃）
    Settled(CalendarDate),
}

/// 一局抽选的短命会话。快照在开局时固定，之后不再回看选择集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSession {
    candidates: Vec<CalendarDate>,
    total_ticks: u32,
    ticks_done: u32,
    phase: Phase,
    display: Option<CalendarDate>,
    winner: Option<CalendarDate>,
}

impl PickSession {
    /// 开局守卫：快照不足 `MIN_CANDIDATES` 则拒绝，不产生任何状态。
    ///
    /// `total_ticks` 在这里一次性抽定；oracle 给出越界值时收回边界内
    /// （与其 panic 不如收敛，抽选本来就不要求可复现）。
    pub fn start(
        candidates: Vec<CalendarDate>,
        oracle: &mut dyn Oracle,
    ) -> Result<Self, PickError> {
        if candidates.len() < MIN_CANDIDATES {
            return Err(PickError::InsufficientCandidates {
                have: candidates.len(),
            });
        }
        let total_ticks = oracle.spin_ticks().clamp(MIN_TICKS, MAX_TICKS);
        Ok(Self {
            candidates,
            total_ticks,
            ticks_done: 0,
            phase: Phase::Spinning,
            display: None,
            winner: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    /// 当前演出显示值（第一次 tick 之前为 None）。
    pub fn display(&self) -> Option<CalendarDate> {
        self.display
    }

    /// 开局时固定下来的候补快照。
    pub fn candidates(&self) -> &[CalendarDate] {
        &self.candidates
    }

    /// 宿主在下一次 `advance` 之前应等待的时长。
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Spinning => TICK_INTERVAL,
            // 最后一次 tick 和发表之间没有停顿
            Phase::Revealing if self.winner.is_none() => Duration::ZERO,
            Phase::Revealing => SUSPENSE_DELAY,
        }
    }

    /// 推进一步。调用节奏由宿主按 `next_delay` 调度；
    /// 核心保证 tick 严格顺序、计数恰好 `total_ticks` 次。
    pub fn advance(&mut self, oracle: &mut dyn Oracle) -> SpinEvent {
        match self.phase {
            Phase::Spinning => {
                let shown = self.draw(oracle);
                self.display = Some(shown);
                self.ticks_done += 1;
                if self.ticks_done >= self.total_ticks {
                    self.phase = Phase::Revealing;
                }
                SpinEvent::Tick(shown)
            }
            Phase::Revealing => match self.winner {
                None => {
                    let won = self.draw(oracle);
                    self.winner = Some(won);
                    self.display = Some(won);
                    SpinEvent::Reveal(won)
                }
                Some(won) => SpinEvent::Settled(won),
            },
        }
    }

    fn draw(&mut self, oracle: &mut dyn Oracle) -> CalendarDate {
        // 候补非空由开局守卫保证；下标仍收回边界内
        let i = oracle.candidate_index(self.candidates.len());
        self.candidates[i.min(self.candidates.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::oracle::RandomOracle;

    fn d(month0: u8, day: u8) -> CalendarDate {
        CalendarDate::new(2024, month0, day)
    }

    /// 脚本化 oracle：tick 数固定、下标轮转。
    struct Scripted {
        ticks: u32,
        cursor: usize,
    }

    impl Oracle for Scripted {
        fn spin_ticks(&mut self) -> u32 {
            self.ticks
        }
        fn candidate_index(&mut self, len: usize) -> usize {
            self.cursor += 1;
            self.cursor % len
        }
        fn reason_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn fewer_than_two_candidates_never_starts() {
        let mut oracle = RandomOracle::from_rng(StdRng::seed_from_u64(1));
        assert_eq!(
            PickSession::start(vec![], &mut oracle),
            Err(PickError::InsufficientCandidates { have: 0 })
        );
        assert_eq!(
            PickSession::start(vec![d(2, 10)], &mut oracle),
            Err(PickError::InsufficientCandidates { have: 1 })
        );
    }

    #[test]
    fn exact_tick_count_then_one_reveal_then_settled() {
        let snapshot = vec![d(2, 10), d(2, 15)];
        let mut oracle = Scripted { ticks: 23, cursor: 0 };
        let mut session = PickSession::start(snapshot.clone(), &mut oracle).unwrap();

        let mut ticks = 0;
        loop {
            match session.advance(&mut oracle) {
                SpinEvent::Tick(shown) => {
                    ticks += 1;
                    assert!(snapshot.contains(&shown));
                    assert!(session.display().is_some());
                }
                SpinEvent::Reveal(won) => {
                    assert_eq!(ticks, 23);
                    assert!(snapshot.contains(&won));
                    assert_eq!(session.display(), Some(won));
                    break;
                }
                SpinEvent::Settled(_) => panic!("settled before reveal"),
            }
        }
        // 发表后的推进只会给出同一个当选日
        match session.advance(&mut oracle) {
            SpinEvent::Settled(won) => assert!(snapshot.contains(&won)),
            other => panic!("expected settled, got {other:?}"),
        }
    }

    #[test]
    fn delays_follow_tick_reveal_suspense_order() {
        let mut oracle = Scripted { ticks: 20, cursor: 0 };
        let mut session = PickSession::start(vec![d(2, 10), d(2, 15)], &mut oracle).unwrap();
        for step in 0..20 {
            assert_eq!(session.next_delay(), TICK_INTERVAL, "step {step}");
            session.advance(&mut oracle);
        }
        // 最终 tick 完成：发表是零延迟
        assert_eq!(session.next_delay(), Duration::ZERO);
        session.advance(&mut oracle);
        // 发表后：悬念停顿
        assert_eq!(session.next_delay(), SUSPENSE_DELAY);
    }

    #[test]
    fn seeded_runs_stay_inside_snapshot_and_tick_bounds() {
        let snapshot = vec![d(2, 10), d(5, 1), d(9, 30)];
        for seed in 0..50 {
            let mut oracle = RandomOracle::from_rng(StdRng::seed_from_u64(seed));
            let mut session = PickSession::start(snapshot.clone(), &mut oracle).unwrap();
            let mut ticks = 0u32;
            let won = loop {
                match session.advance(&mut oracle) {
                    SpinEvent::Tick(shown) => {
                        ticks += 1;
                        assert!(snapshot.contains(&shown));
                    }
                    SpinEvent::Reveal(won) => break won,
                    SpinEvent::Settled(_) => panic!("settled before reveal"),
                }
            };
            assert!((MIN_TICKS..=MAX_TICKS).contains(&ticks), "seed {seed}");
            assert!(snapshot.contains(&won));
        }
    }

    #[test]
    fn out_of_range_oracle_ticks_are_clamped() {
        let mut oracle = Scripted { ticks: 999, cursor: 0 };
        let mut session = PickSession::start(vec![d(2, 10), d(2, 15)], &mut oracle).unwrap();
        let mut ticks = 0;
        while let SpinEvent::Tick(_) = session.advance(&mut oracle) {
            ticks += 1;
        }
        assert_eq!(ticks, MAX_TICKS);
    }
}
