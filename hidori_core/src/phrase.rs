//! 理由语料抽象：核心不关心文案来自内置表/文件/网络。
//!
//! 约定：
//! - `phrases()` 返回固定顺序的全量列表（非空由提供方保证）
//! - 核心只做一次均匀随机取下标，与日期抽取相互独立

/// 理由文案的供给源。
pub trait ReasonSource: Send + Sync {
    /// 固定顺序的全部理由文案。
    fn phrases(&self) -> &[String];
}

impl<T: ReasonSource + ?Sized> ReasonSource for Box<T> {
    fn phrases(&self) -> &[String] {
        (**self).phrases()
    }
}
