use oracle_api::{Packet, Stream};
use super::{Record, Row};
use super::time::{clock_utc, date_utc, duration_millis};

#[test]
fn packet_is_instantaneous_without_end() {
    let pkt = Packet {
        rowid:      1,
        start_time: 1_500,
        protocol:   "DNS".to_owned(),
        ..Default::default()
    };
    assert_eq!(pkt.end(), 1_500);
    assert_eq!(pkt.latest(), 1_500);
}

#[test]
fn packet_cursor_uses_start() {
    let pkt = Packet {
        rowid:      1,
        start_time: 1_500,
        end_time:   Some(9_000),
        ..Default::default()
    };
    assert_eq!(pkt.end(), 9_000);
    assert_eq!(pkt.latest(), 1_500);
}

#[test]
fn stream_cursor_uses_end() {
    let stream = Stream {
        rowid:      2,
        start_time: 1_000,
        end_time:   5_000,
        ..Default::default()
    };
    assert_eq!(stream.latest(), 5_000);
}

#[test]
fn duration_truncates() {
    assert_eq!(duration_millis(1_000, 2_999), 1);
    assert_eq!(duration_millis(0, 999), 0);
    assert_eq!(duration_millis(5_000, 1_000), 0);
}

#[test]
fn clock_and_date() {
    // 2021-03-04 05:06:07.000089 UTC
    let ts = 1_614_834_367_000_089;
    assert_eq!(clock_utc(ts), "05:06:07.000089");
    assert_eq!(date_utc(ts), "04/03/2021");
}

#[test]
fn row_mentions_endpoints() {
    let stream = Stream {
        rowid:      9,
        start_time: 1_000,
        end_time:   4_500,
        protocol:   "HTTP".to_owned(),
        src_ip:     "10.0.0.1".to_owned(),
        src_port:   51000,
        dst_ip:     "10.0.0.2".to_owned(),
        dst_port:   80,
        ..Default::default()
    };
    let row = Row(&stream).to_string();
    assert!(row.starts_with("#9 "));
    assert!(row.contains("10.0.0.1:51000 -> 10.0.0.2:80"));
    assert!(row.ends_with("(3ms)"));
}
