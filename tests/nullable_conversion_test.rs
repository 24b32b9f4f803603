use maybe::Nullable;

#[test]
fn test_to_option() {
    let null = Nullable::<String>::null();
    let opt1 = null.to_option();
    assert!(opt1.is_none());

    let valid = Nullable::of(42);
    let opt2 = valid.to_option();
    assert!(opt2.is_some());
    assert_eq!(opt2.unwrap(), 42);
}

#[test]
fn test_option_round_trip_through_from() {
    let some: Option<&str> = Nullable::of("x").into();
    assert_eq!(some, Some("x"));

    let none: Option<i32> = Nullable::<i32>::null().into();
    assert_eq!(none, None);

    assert_eq!(Nullable::from(Some(0u32)).extract(), (0, true));
    assert!(!Nullable::<u32>::from(None).is_valid());
}
