//! 仿真时间类型
//!
//! 定义仿真时间（秒）与时间区间。

use std::fmt;
use std::ops::Add;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// 仿真时间（秒），非负且有限，全序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Time(NotNan<f64>);

impl Time {
    pub fn new(secs: f64) -> Result<Time, ValueError> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ValueError::InvalidTime(secs));
        }
        NotNan::new(secs)
            .map(Time)
            .map_err(|_| ValueError::InvalidTime(secs))
    }

    pub fn zero() -> Time {
        Time(NotNan::default())
    }

    pub fn as_secs(self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for Time {
    fn default() -> Self {
        Time::zero()
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl TryFrom<f64> for Time {
    type Error = ValueError;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        Time::new(secs)
    }
}

impl From<Time> for f64 {
    fn from(t: Time) -> f64 {
        t.as_secs()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sec.", self.as_secs())
    }
}

/// 半开区间 `[begin, end)`，保证 `begin < end`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct TimeInterval {
    begin: Time,
    end: Time,
}

#[derive(Serialize, Deserialize)]
struct RawInterval {
    begin: Time,
    end: Time,
}

impl TimeInterval {
    pub fn new(begin: Time, end: Time) -> Result<TimeInterval, ValueError> {
        if begin >= end {
            return Err(ValueError::EmptyInterval {
                begin: begin.as_secs(),
                end: end.as_secs(),
            });
        }
        Ok(TimeInterval { begin, end })
    }

    pub fn begin(&self) -> Time {
        self.begin
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// 区间长度（秒）
    pub fn duration(&self) -> f64 {
        self.end.as_secs() - self.begin.as_secs()
    }

    /// `begin <= t < end`
    pub fn contains(&self, t: Time) -> bool {
        self.begin <= t && t < self.end
    }
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = ValueError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        TimeInterval::new(raw.begin, raw.end)
    }
}

impl From<TimeInterval> for RawInterval {
    fn from(iv: TimeInterval) -> Self {
        RawInterval {
            begin: iv.begin,
            end: iv.end,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.begin, self.end)
    }
}
