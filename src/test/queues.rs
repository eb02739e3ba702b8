use crate::error::QueueError;
use crate::packet::Packet;
use crate::queue::{ReceiveQueue, RouterQueue, SendQueue};

use super::{iv, pkt, t};

fn ids(packets: &[Packet]) -> Vec<u64> {
    packets.iter().map(Packet::id).collect()
}

#[test]
fn receive_queue_groups_packets_by_arrival_preserving_input_order() {
    let mut q = ReceiveQueue::from_packets(vec![
        pkt(1, 1, 1.0, 2.0),
        pkt(2, 1, 1.0, 0.0),
        pkt(3, 2, 1.0, 2.0),
        pkt(4, 1, 1.0, 0.0),
    ]);
    assert!(!q.is_empty());
    assert_eq!(q.len(), 4);
    assert_eq!(q.batch_count(), 2);

    assert_eq!(ids(&q.pop_earliest_batch().expect("batch")), vec![2, 4]);
    assert_eq!(ids(&q.pop_earliest_batch().expect("batch")), vec![1, 3]);
    assert!(q.is_empty());
    assert_eq!(q.pop_earliest_batch(), Err(QueueError::ReceiveEmpty));
}

#[test]
fn receive_queue_pops_only_batches_inside_half_open_interval() {
    let mut q = ReceiveQueue::from_packets(vec![
        pkt(1, 1, 1.0, 0.0),
        pkt(2, 1, 1.0, 1.0),
        pkt(3, 2, 1.0, 1.0),
        pkt(4, 1, 1.0, 1.5),
        pkt(5, 1, 1.0, 3.0),
    ]);

    let arrived = q.pop_arriving_within(&iv(1.0, 3.0));
    assert_eq!(ids(&arrived), vec![2, 3, 4]);
    assert_eq!(ids(&q.snapshot()), vec![1, 5]);
    assert_eq!(q.batch_count(), 2);

    assert!(q.pop_arriving_within(&iv(10.0, 20.0)).is_empty());
    assert_eq!(q.len(), 2);
}

#[test]
fn receive_queue_snapshot_and_stream_ids_do_not_mutate() {
    let q = ReceiveQueue::from_packets(vec![
        pkt(1, 3, 1.0, 0.0),
        pkt(2, 1, 1.0, 0.5),
        pkt(3, 3, 1.0, 0.5),
    ]);
    assert_eq!(ids(&q.snapshot()), vec![1, 2, 3]);
    let streams: Vec<u32> = q.stream_ids().into_iter().map(|s| s.get()).collect();
    assert_eq!(streams, vec![1, 3]);
    assert_eq!(q.len(), 3);
}

#[test]
fn empty_receive_queue() {
    let mut q = ReceiveQueue::from_packets(Vec::new());
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert!(q.snapshot().is_empty());
    assert!(q.pop_arriving_within(&iv(0.0, 1.0)).is_empty());
}

#[test]
fn router_queue_extracts_smallest_tag_first() {
    let mut q = RouterQueue::default();
    q.insert(t(5.0), pkt(1, 1, 1.0, 0.0));
    q.insert(t(3.0), pkt(2, 1, 1.0, 0.0));
    q.insert(t(9.0), pkt(3, 1, 1.0, 0.0));
    assert_eq!(q.len(), 3);
    assert_eq!(q.peek_tag(), Some(t(3.0)));

    let (tag, p) = q.extract_min().expect("entry");
    assert_eq!((tag, p.id()), (t(3.0), 2));
    let (tag, p) = q.extract_min().expect("entry");
    assert_eq!((tag, p.id()), (t(5.0), 1));
    let (tag, p) = q.extract_min().expect("entry");
    assert_eq!((tag, p.id()), (t(9.0), 3));

    assert!(q.is_empty());
    assert_eq!(q.extract_min().map(|(tag, _)| tag), Err(QueueError::RouterEmpty));
}

#[test]
fn router_queue_breaks_ties_by_arrival_then_packet_id() {
    let mut q = RouterQueue::default();
    q.insert(t(7.0), pkt(5, 1, 1.0, 1.0));
    q.insert(t(7.0), pkt(4, 2, 1.0, 0.0));
    q.insert(t(7.0), pkt(6, 1, 1.0, 0.5));
    q.insert(t(7.0), pkt(2, 2, 1.0, 0.0));

    let mut order = Vec::new();
    while let Ok((_, p)) = q.extract_min() {
        order.push(p.id());
    }
    assert_eq!(order, vec![2, 4, 6, 5]);
}

#[test]
fn send_queue_is_append_only_log() {
    let mut q = SendQueue::default();
    assert!(q.is_empty());
    assert_eq!(q.finish_time(), None);

    q.record(pkt(2, 1, 1.0, 0.0), iv(0.0, 1.0));
    q.record(pkt(1, 1, 4.0, 0.0), iv(1.0, 5.0));

    assert_eq!(q.len(), 2);
    assert_eq!(q.packet_order(), vec![2, 1]);
    assert_eq!(q.interval_order(), vec![iv(0.0, 1.0), iv(1.0, 5.0)]);
    assert_eq!(q.finish_time(), Some(t(5.0)));
    assert_eq!(q.entries()[1].1.id(), 1);
}
