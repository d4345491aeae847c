// tests/timestamp_tests.rs
mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::PdbBuilder;
use palmdb_rs::*;
use std::io::Cursor;
use std::time::SystemTime;

fn system_time_to_utc(st: SystemTime) -> DateTime<Utc> {
    DateTime::from(st)
}

fn palm_seconds(date: DateTime<Utc>) -> u32 {
    (date.timestamp() + PalmTimestamp::EPOCH_OFFSET_SECONDS) as u32
}

#[test]
fn test_palm_epoch_start() {
    let ts = PalmTimestamp::from_raw(0);
    assert!(ts.is_unset());
    assert_eq!(
        system_time_to_utc(ts.to_system_time()),
        Utc.with_ymd_and_hms(1904, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_unix_epoch() {
    let ts = PalmTimestamp::from_raw(2_082_844_800);
    assert_eq!(ts.to_unix_seconds(), 0);
    assert_eq!(ts.to_system_time(), SystemTime::UNIX_EPOCH);
}

#[test]
fn test_known_dates() {
    for date in [
        Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap(),
        Utc.with_ymd_and_hms(2002, 3, 15, 12, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2040, 2, 6, 6, 28, 15).unwrap(),
    ] {
        let ts = PalmTimestamp::from_raw(palm_seconds(date));
        assert_eq!(ts.to_unix_seconds(), date.timestamp());
        assert_eq!(system_time_to_utc(ts.to_system_time()), date);
    }
}

#[test]
fn test_largest_palm_timestamp() {
    // u32::MAX seconds after 1904 lands on 2040-02-06 06:28:15 UTC
    let ts = PalmTimestamp::from_raw(u32::MAX);
    assert_eq!(
        system_time_to_utc(ts.to_system_time()),
        Utc.with_ymd_and_hms(2040, 2, 6, 6, 28, 15).unwrap()
    );
}

#[test]
fn test_header_timestamps() {
    let created = Utc.with_ymd_and_hms(2001, 6, 1, 8, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2003, 11, 20, 17, 45, 10).unwrap();

    let data = PdbBuilder::new("Dated")
        .times(palm_seconds(created), palm_seconds(modified), 0)
        .build();
    let db = PalmDatabase::from_reader(Cursor::new(data)).unwrap();
    let header = db.header();

    assert_eq!(system_time_to_utc(header.creation_time.to_system_time()), created);
    assert_eq!(system_time_to_utc(header.modification_time.to_system_time()), modified);
    assert!(header.backup_time.is_unset());
    assert!(header.creation_time < header.modification_time);
}

#[test]
fn test_timestamp_in_record() {
    let date = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 0).unwrap();
    let mut record = RecordCursor::new(palm_seconds(date).to_be_bytes().to_vec());
    let ts = record.timestamp_field().unwrap();
    assert_eq!(system_time_to_utc(ts.to_system_time()), date);
}
