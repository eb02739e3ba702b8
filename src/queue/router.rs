//! 路由队列
//!
//! 以虚拟完成时间（finish tag）为键的最小堆。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::QueueError;
use crate::packet::{Packet, Time};

/// 堆元素：完成时间 + 包。
#[derive(Debug)]
struct RouterEntry {
    tag: Time,
    packet: Packet,
}

impl RouterEntry {
    fn key(&self) -> (Time, Time, u64) {
        (self.tag, self.packet.arrival(), self.packet.id())
    }
}

// BinaryHeap 是 max-heap；需要最小完成时间优先，因此反向比较。
// 完成时间相同时按到达时间、再按包序号，即先进先出。
impl Ord for RouterEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl PartialOrd for RouterEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RouterEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RouterEntry {}

#[derive(Debug, Default)]
pub struct RouterQueue {
    q: BinaryHeap<RouterEntry>,
}

impl RouterQueue {
    pub fn insert(&mut self, tag: Time, packet: Packet) {
        debug!(pkt_id = packet.id(), stream = %packet.stream(), tag = tag.as_secs(), "路由队列：入队");
        self.q.push(RouterEntry { tag, packet });
    }

    /// 取出完成时间最小的包
    pub fn extract_min(&mut self) -> Result<(Time, Packet), QueueError> {
        let RouterEntry { tag, packet } = self.q.pop().ok_or(QueueError::RouterEmpty)?;
        Ok((tag, packet))
    }

    pub fn peek_tag(&self) -> Option<Time> {
        self.q.peek().map(|e| e.tag)
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }
}
