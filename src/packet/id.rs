//! 标识符与权重类型
//!
//! 定义流标识符与流的带宽权重（百分比）。

use std::fmt;

use crate::error::ValueError;

/// 流标识符，从 1 开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StreamId(u32);

impl StreamId {
    pub fn new(id: i64) -> Result<StreamId, ValueError> {
        match u32::try_from(id) {
            Ok(v) if v > 0 => Ok(StreamId(v)),
            _ => Err(ValueError::InvalidStreamId(id)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// 依次生成 `1..=n` 的流标识符
    pub fn sequence(n: u32) -> impl Iterator<Item = StreamId> {
        (1..=n).map(StreamId)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分配给某条流的链路容量百分比，取值 `[0, 100]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(100);

    pub fn new(value: i64) -> Result<Priority, ValueError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Priority(v)),
            _ => Err(ValueError::PriorityOutOfRange(value)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `value / 100`
    pub fn percentage(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX.0)
    }

    /// 相加；超过 100 时返回 None。
    pub fn checked_add(self, rhs: Priority) -> Option<Priority> {
        let sum = self.0.checked_add(rhs.0)?;
        (sum <= Self::MAX.0).then_some(Priority(sum))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
