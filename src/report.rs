//! 调度报告
//!
//! 把发送队列整理成可序列化的 JSON 结构（供 `--json` 输出与离线分析）。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::packet::{LinkSpeed, Time};
use crate::queue::SendQueue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub algorithm: String,
    pub initial_time: f64,
    pub link_speed: f64,
    /// 最后一个包发送完毕的时间；没有包时等于 `initial_time`
    pub finish_time: f64,
    pub entries: Vec<ReportEntry>,
    pub streams: Vec<StreamSummary>,
}

/// 单个包的发送记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub packet: u64,
    pub stream: u32,
    pub size: f64,
    pub arrival: f64,
    pub begin: f64,
    pub end: f64,
}

/// 每条流的汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub stream: u32,
    pub packets: usize,
    pub served: f64,
    /// 平均排队时延：`begin - arrival`
    pub mean_delay: f64,
}

impl ScheduleReport {
    pub fn new(algorithm: &str, initial: Time, link_speed: LinkSpeed, send: &SendQueue) -> Self {
        let entries: Vec<ReportEntry> = send
            .entries()
            .iter()
            .map(|(iv, pkt)| ReportEntry {
                packet: pkt.id(),
                stream: pkt.stream().get(),
                size: pkt.size().get(),
                arrival: pkt.arrival().as_secs(),
                begin: iv.begin().as_secs(),
                end: iv.end().as_secs(),
            })
            .collect();

        let mut per_stream: BTreeMap<u32, (usize, f64, f64)> = BTreeMap::new();
        for e in &entries {
            let acc = per_stream.entry(e.stream).or_default();
            acc.0 += 1;
            acc.1 += e.size;
            acc.2 += e.begin - e.arrival;
        }
        let streams = per_stream
            .into_iter()
            .map(|(stream, (packets, served, delay))| StreamSummary {
                stream,
                packets,
                served,
                mean_delay: delay / packets as f64,
            })
            .collect();

        Self {
            algorithm: algorithm.to_string(),
            initial_time: initial.as_secs(),
            link_speed: link_speed.get(),
            finish_time: send.finish_time().unwrap_or(initial).as_secs(),
            entries,
            streams,
        }
    }

    pub fn packet_order(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.packet).collect()
    }
}
