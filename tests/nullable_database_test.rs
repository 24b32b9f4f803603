use chrono::{DateTime, Utc};
use maybe::{Nullable, NullableError, Scanner, StorageValue, Valuer};

#[test]
fn test_scan_string_into_text_container() {
    let mut n = Nullable::<String>::null();
    n.scan("test").unwrap();
    assert!(n.is_valid());
    assert_eq!(n.extract_or(String::new()), "test");
}

#[test]
fn test_scan_null_into_integer_container() {
    let mut n = Nullable::of(8i32);
    n.scan(StorageValue::Null).unwrap();
    assert!(!n.is_valid());
    assert_eq!(n.value().unwrap(), StorageValue::Null);
}

#[test]
fn test_value_widens_integer() {
    assert_eq!(Nullable::of(42i32).value().unwrap(), StorageValue::Int(42));
    assert_eq!(Nullable::of(42u16).value().unwrap(), StorageValue::Int(42));
}

#[test]
fn test_scan_timestamp() {
    let now = Utc::now();
    let mut n = Nullable::<DateTime<Utc>>::null();
    n.scan(now).unwrap();

    let (value, ok) = n.extract();
    assert!(n.is_valid());
    assert!(ok);
    assert_eq!(value, now);
}

#[test]
fn test_storage_round_trip() {
    let samples = [
        StorageValue::Int(-17),
        StorageValue::Null,
    ];
    for sample in samples {
        let mut n = Nullable::<i64>::null();
        n.scan(sample.clone()).unwrap();
        assert_eq!(n.value().unwrap(), sample);
    }

    let mut bytes = Nullable::<Vec<u8>>::null();
    bytes.scan(vec![0u8, 159, 146, 150]).unwrap();
    assert_eq!(bytes.value().unwrap(), StorageValue::Bytes(vec![0, 159, 146, 150]));

    let mut flag = Nullable::<bool>::null();
    flag.scan(true).unwrap();
    assert_eq!(flag.value().unwrap(), StorageValue::Bool(true));

    let mut single = Nullable::<f32>::null();
    single.scan(StorageValue::Float(0.25)).unwrap();
    assert_eq!(single.value().unwrap(), StorageValue::Float(0.25));

    let mut double = Nullable::<f64>::null();
    double.scan(StorageValue::Float(0.1)).unwrap();
    assert_eq!(double.value().unwrap(), StorageValue::Float(0.1));

    let mut label = Nullable::<String>::null();
    label.scan(StorageValue::Text("naïve".to_string())).unwrap();
    assert_eq!(label.value().unwrap(), StorageValue::Text("naïve".to_string()));

    let now = Utc::now();
    let mut stamp = Nullable::<DateTime<Utc>>::null();
    stamp.scan(StorageValue::Timestamp(now)).unwrap();
    assert_eq!(stamp.value().unwrap(), StorageValue::Timestamp(now));
}

#[test]
fn test_scan_real_column_text_into_f32() {
    let mut n = Nullable::<f32>::null();
    n.scan("3.14").unwrap();
    assert_eq!(n.extract(), (3.14f32, true));

    n.scan(b"0.1".as_slice()).unwrap();
    assert_eq!(n.extract(), (0.1f32, true));

    assert!(n.scan("1e300").is_err());
    assert_eq!(n.extract(), (0.1f32, true));
}

#[test]
fn test_incompatible_scan_leaves_state_intact() {
    let mut n = Nullable::of("kept".to_string());
    let err = n.scan(vec![0xffu8, 0x00]).unwrap_err();
    assert!(matches!(err, NullableError::TypeMismatch { source_type: "bytes", .. }));
    assert!(n.is_valid());
    assert_eq!(n.clone().extract(), ("kept".to_string(), true));

    let mut ts = Nullable::<DateTime<Utc>>::null();
    assert!(ts.scan(12i64).is_err());
    assert!(!ts.is_valid());
}

#[test]
fn test_generic_driver_code_sees_scanner_and_valuer() {
    struct Row {
        id: Nullable<i64>,
        label: Nullable<String>,
    }

    fn fill(columns: &mut [&mut dyn Scanner], values: Vec<StorageValue>) -> maybe::Result<()> {
        for (column, value) in columns.iter_mut().zip(values) {
            column.scan(value)?;
        }
        Ok(())
    }

    let mut row = Row {
        id: Nullable::null(),
        label: Nullable::null(),
    };
    let mut columns: [&mut dyn Scanner; 2] = [&mut row.id, &mut row.label];
    fill(&mut columns, vec![StorageValue::Int(9), StorageValue::Null]).unwrap();

    let params: [&dyn Valuer; 2] = [&row.id, &row.label];
    let bound: Vec<StorageValue> = params.iter().map(|p| p.value().unwrap()).collect();
    assert_eq!(bound, vec![StorageValue::Int(9), StorageValue::Null]);
}
