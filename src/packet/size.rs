//! 包长与链路速率
//!
//! 包长换算为传输时间：`size / link_speed`。

use std::fmt;

use super::time::Time;
use crate::error::ValueError;

/// 包长（单位任意），严格为正。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PacketSize(f64);

impl PacketSize {
    pub fn new(size: f64) -> Result<PacketSize, ValueError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ValueError::InvalidSize(size));
        }
        Ok(PacketSize(size))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// 以给定链路速率发送该包所需的时间
    pub fn to_time(self, speed: LinkSpeed) -> Result<Time, ValueError> {
        Time::new(self.0 / speed.0)
    }
}

impl fmt::Display for PacketSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 链路服务速率（单位/秒）。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LinkSpeed(f64);

impl LinkSpeed {
    pub const UNIT: LinkSpeed = LinkSpeed(1.0);

    pub fn new(rate: f64) -> Result<LinkSpeed, ValueError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ValueError::InvalidLinkSpeed(rate));
        }
        Ok(LinkSpeed(rate))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for LinkSpeed {
    fn default() -> Self {
        LinkSpeed::UNIT
    }
}
