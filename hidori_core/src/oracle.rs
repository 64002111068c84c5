//! `oracle`：随机抽取的对象安全接缝。
//!
//! 抽选的三类随机（tick 展示值、最终当选、理由文案）全部经由这里，
//! 便于测试注入脚本化/可播种实现；生产实现是无偏均匀抽取，
//! 有放回、不加权、不排除已出现过的值。

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::roulette::{MAX_TICKS, MIN_TICKS};

/// 给引擎的随机源接口（避免在 processor 层引入泛型爆炸）。
pub trait Oracle {
    /// Spinning 阶段的总 tick 数（期望落在 `MIN_TICKS..=MAX_TICKS`）
    fn spin_ticks(&mut self) -> u32;
    /// 从 `len` 个候补里抽一个下标（`len >= 1`）
    fn candidate_index(&mut self, len: usize) -> usize;
    /// 从 `len` 条理由里抽一条下标（与候补抽取相互独立）
    fn reason_index(&mut self, len: usize) -> usize;
}

/// 默认实现：包一个 `rand` 的 RNG。
pub struct RandomOracle<R: Rng> {
    rng: R,
}

impl RandomOracle<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomOracle<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOracle<R> {
    /// 测试用：注入可播种 RNG（例如 `StdRng::seed_from_u64`）。
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Oracle for RandomOracle<R> {
    fn spin_ticks(&mut self) -> u32 {
        self.rng.random_range(MIN_TICKS..=MAX_TICKS)
    }

    fn candidate_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn reason_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
