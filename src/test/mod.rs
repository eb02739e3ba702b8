mod queues;
mod trace;

use crate::packet::{Packet, PacketSize, StreamId, Time, TimeInterval};

pub(crate) fn t(secs: f64) -> Time {
    Time::new(secs).expect("valid time")
}

pub(crate) fn iv(begin: f64, end: f64) -> TimeInterval {
    TimeInterval::new(t(begin), t(end)).expect("valid interval")
}

pub(crate) fn ivs(bounds: &[(f64, f64)]) -> Vec<TimeInterval> {
    bounds.iter().map(|&(b, e)| iv(b, e)).collect()
}

pub(crate) fn pkt(id: u64, stream: i64, size: f64, arrival: f64) -> Packet {
    Packet::new(
        id,
        StreamId::new(stream).expect("stream id"),
        PacketSize::new(size).expect("size"),
        t(arrival),
    )
}
