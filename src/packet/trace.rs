//! 包轨迹解析
//!
//! 每行三个以空白分隔的字段：`到达时间 包长 流ID`。空行忽略，
//! 包序号按出现顺序从 1 开始分配。

use std::fs;
use std::path::Path;

use tracing::debug;

use super::id::StreamId;
use super::record::Packet;
use super::size::PacketSize;
use super::time::Time;
use crate::error::TraceError;

/// 读取并解析轨迹文件
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<Packet>, TraceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let packets = parse_trace(&raw)?;
    debug!(path = %path.display(), packets = packets.len(), "轨迹已加载");
    Ok(packets)
}

/// 解析轨迹文本
pub fn parse_trace(raw: &str) -> Result<Vec<Packet>, TraceError> {
    let mut packets = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let id = packets.len() as u64 + 1;
        let pkt = parse_line(line, id).map_err(|reason| TraceError::Line {
            line: idx + 1,
            reason,
        })?;
        packets.push(pkt);
    }
    Ok(packets)
}

fn parse_line(line: &str, id: u64) -> Result<Packet, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [arrival, size, stream] = fields[..] else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let arrival: f64 = arrival
        .parse()
        .map_err(|_| format!("arrival time {arrival:?} is not a number"))?;
    let size: f64 = size
        .parse()
        .map_err(|_| format!("packet size {size:?} is not a number"))?;
    let stream: i64 = stream
        .parse()
        .map_err(|_| format!("stream id {stream:?} is not an integer"))?;

    let arrival = Time::new(arrival).map_err(|e| e.to_string())?;
    let size = PacketSize::new(size).map_err(|e| e.to_string())?;
    let stream = StreamId::new(stream).map_err(|e| e.to_string())?;
    Ok(Packet::new(id, stream, size, arrival))
}
