//! 发送队列
//!
//! 只追加的发送记录：(传输区间, 包)，即最终的调度结果。

use tracing::debug;

use crate::packet::{Packet, Time, TimeInterval};

#[derive(Debug, Clone, Default)]
pub struct SendQueue {
    q: Vec<(TimeInterval, Packet)>,
}

impl SendQueue {
    pub fn record(&mut self, packet: Packet, interval: TimeInterval) {
        debug!(pkt_id = packet.id(), %interval, "发送队列：发送");
        self.q.push((interval, packet));
    }

    /// 按发送顺序的包序号
    pub fn packet_order(&self) -> Vec<u64> {
        self.q.iter().map(|(_, p)| p.id()).collect()
    }

    /// 按发送顺序的传输区间
    pub fn interval_order(&self) -> Vec<TimeInterval> {
        self.q.iter().map(|(iv, _)| *iv).collect()
    }

    pub fn entries(&self) -> &[(TimeInterval, Packet)] {
        &self.q
    }

    /// 最后一个包发送完毕的时间
    pub fn finish_time(&self) -> Option<Time> {
        self.q.last().map(|(iv, _)| iv.end())
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}
