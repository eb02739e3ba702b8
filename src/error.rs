//! 错误类型
//!
//! 每个关注点一个错误枚举，顶层 `Error` 通过 `#[from]` 汇总。

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::packet::StreamId;

/// 值类型构造失败（时间为负、包长非正、流 ID 非法、权重越界等）。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("time must be a finite non-negative number, got {0}")]
    InvalidTime(f64),
    #[error("packet size must be a finite positive number, got {0}")]
    InvalidSize(f64),
    #[error("stream id must be greater than 0, got {0}")]
    InvalidStreamId(i64),
    #[error("priority must be in the range [0, 100], got {0}")]
    PriorityOutOfRange(i64),
    #[error("interval begin time must be less than end time ({begin} >= {end})")]
    EmptyInterval { begin: f64, end: f64 },
    #[error("link speed must be a finite positive number, got {0}")]
    InvalidLinkSpeed(f64),
}

/// 流配置错误。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid percentage values: {0:?}")]
    Parse(String),
    #[error("invalid weight: {0}")]
    Weight(#[from] ValueError),
    #[error("sum of priorities must be 100, got {0}")]
    WeightSum(i64),
    #[error("stream {0} not found in configuration")]
    UnknownStream(StreamId),
    #[error("stream {0} has weight 0 and cannot be served")]
    ZeroWeight(StreamId),
}

/// 从空队列取包：调用方违反约定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("receive queue is empty")]
    ReceiveEmpty,
    #[error("router queue is empty")]
    RouterEmpty,
}

/// 包轨迹文件解析错误。
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid packet format at line {line}: {reason}")]
    Line { line: usize, reason: String },
}

/// 调度执行错误。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("stream ids in configuration and packets must be the same ({observed:?} != {configured:?})")]
    StreamMismatch {
        observed: BTreeSet<StreamId>,
        configured: BTreeSet<StreamId>,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// 顶层错误：在进程边界统一汇报。
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("failed to write report: {0}")]
    Report(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
