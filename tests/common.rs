#![cfg(feature = "std")]

use std::{fmt::Debug, io::Cursor, str::FromStr};

use bacnet_primitives::avec::{Decode, Error, Reader, Source};
use csv::{ReaderBuilder, StringRecord};

const PATH: &str = "fixtures/primitives.csv";

#[test]
fn decode_slice_primitives() {
    for record in records() {
        let bytes = hex(&record[1]);
        let mut source: &[u8] = &bytes;
        validate(&record, &mut source);
    }
}

#[test]
fn decode_reader_primitives() {
    for record in records() {
        let mut source = Reader::new(Cursor::new(hex(&record[1])));
        validate(&record, &mut source);
    }
}

fn records() -> Vec<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    let records: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert!(!records.is_empty());
    records
}

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn validate(record: &StringRecord, r: &mut impl Source) {
    match &record[0] {
        "u8" => check(record, r.read_u8()),
        "i8" => check(record, r.read_i8()),
        "u16" => check(record, r.read_u16()),
        "i16" => check(record, r.read_i16()),
        "u24" => check(record, r.read_u24()),
        "i24" => check(record, r.read_i24()),
        "u32" => check(record, r.read_u32()),
        "i32" => check(record, r.read_i32()),
        "f32" => check(record, r.read_f32()),
        "f64" => check(record, r.read_f64()),
        "tag" => match r.read_tag() {
            Ok(tag) => {
                assert_eq!(tag.tag_number.to_string(), &record[2], "{record:?}");
                assert_eq!(tag.is_context_specific.to_string(), &record[3], "{record:?}");
                assert_eq!(tag.length_value_type.to_string(), &record[4], "{record:?}");
            }
            Err(err) => assert_incomplete(record, err),
        },
        operation => panic!("unknown operation {operation}"),
    }
}

fn check<T>(record: &StringRecord, result: Result<T, Error>)
where
    T: FromStr + PartialEq + Debug,
    T::Err: Debug,
{
    match result {
        Ok(value) => assert_eq!(value, record[2].parse::<T>().unwrap(), "{record:?}"),
        Err(err) => assert_incomplete(record, err),
    }
}

fn assert_incomplete(record: &StringRecord, err: Error) {
    assert_eq!(&record[2], "incomplete", "{record:?}: {err}");

    let Error::IncompleteInput { expected, found } = err;
    assert_eq!(found, record[1].len() / 2, "{record:?}");
    assert!(found < expected, "{record:?}");
}
