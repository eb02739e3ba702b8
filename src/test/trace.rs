use crate::error::TraceError;
use crate::packet::{parse_trace, read_trace};

use super::t;

#[test]
fn parse_trace_assigns_sequential_ids_and_skips_blank_lines() {
    let packets = parse_trace("0 4 1\n0 1 1\n\n0.5 1 2\n").expect("parse trace");
    assert_eq!(packets.len(), 3);
    assert_eq!(
        packets.iter().map(|p| p.id()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(packets[2].stream().get(), 2);
    assert_eq!(packets[2].arrival(), t(0.5));
    assert_eq!(packets[0].size().get(), 4.0);
}

#[test]
fn parse_trace_accepts_tabs_and_repeated_spaces() {
    let packets = parse_trace("1.0\t2.5   3\n").expect("parse trace");
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].size().get(), 2.5);
    assert_eq!(packets[0].stream().get(), 3);
}

#[test]
fn parse_trace_reports_line_number_of_malformed_line() {
    let err = parse_trace("0 1 1\n0 x 1\n").expect_err("should fail");
    match err {
        TraceError::Line { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("packet size"), "reason={reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_trace_line_numbers_count_blank_lines() {
    let err = parse_trace("0 1 1\n\n0 1\n").expect_err("should fail");
    assert!(matches!(err, TraceError::Line { line: 3, .. }));
}

#[test]
fn parse_trace_rejects_invalid_values() {
    for raw in ["-1 1 1", "0 0 1", "0 1 0", "0 1 1.5", "0 1 1 9"] {
        let err = parse_trace(raw).expect_err(raw);
        assert!(matches!(err, TraceError::Line { line: 1, .. }), "{raw}: {err}");
    }
}

#[test]
fn parse_trace_of_fixture_files() {
    let one = parse_trace(include_str!("../../data/file1.txt")).expect("file1");
    assert_eq!(one.len(), 9);
    assert!(one.iter().all(|p| p.stream().get() == 1));

    let two = parse_trace(include_str!("../../data/file2.txt")).expect("file2");
    assert_eq!(two.len(), 16);
    assert_eq!(two[15].id(), 16);
    assert_eq!(two[15].arrival(), t(125.0));
}

#[test]
fn read_trace_reports_missing_file() {
    let err = read_trace("/nonexistent/wfq-sim/trace.txt").expect_err("missing file");
    assert!(matches!(err, TraceError::Io { .. }));
}
