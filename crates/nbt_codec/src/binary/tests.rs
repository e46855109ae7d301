use pretty_assertions::assert_eq;

use super::*;
use crate::tag::Tag;
use crate::{compound, Compound, List, Value};

const ROOT_NAME: &str = "The root name‽";

fn example_compound() -> Compound {
    fn inner() -> Compound {
        compound! {
            "int" => i32::MIN,
            "long" => i64::MAX,
            "float" => 1e10_f32,
            "double" => f64::INFINITY,
        }
    }

    compound! {
        "byte" => 123_i8,
        "short" => -1234_i16,
        "list_of_int" => List::Int(vec![3, -7, 5]),
        "list_of_string" => List::String(vec![
            "foo".to_owned(),
            "bar".to_owned(),
            "baz".to_owned()
        ]),
        "list_of_byte" => List::Byte(vec![-1, 0, 1]),
        "list_of_list" => List::List(vec![
            List::Double(vec![0.5]),
            List::End,
            List::Long(vec![1, 2]),
        ]),
        "empty_list" => List::End,
        "string" => "aé日\0😺",
        "compound" => inner(),
        "list_of_compound" => List::Compound(vec![
            inner(),
            inner(),
            inner(),
        ]),
        "int_array" => vec![5, -9, i32::MIN, 0, i32::MAX],
        "byte_array" => vec![0_i8, 2, 3, i8::MIN],
        "long_array" => vec![123_i64, 456, 789],
        "empty_key" => compound! { "" => "" },
    }
}

/// Builds a root compound holding a single chain of `n` nested lists.
fn nested_lists_bytes(n: usize) -> Vec<u8> {
    // Root compound with one field.
    let mut buf = vec![Tag::Compound as u8, 0, 0, Tag::List as u8, 0, 0];

    for _ in 0..n - 1 {
        buf.extend([Tag::List as u8, 0, 0, 0, 1]); // List of list
    }

    // Innermost list is empty.
    buf.extend([Tag::End as u8, 0, 0, 0, 0]);

    buf.push(Tag::End as u8); // End root compound
    buf
}

fn nested_lists_value(n: usize) -> Value {
    let mut l = List::End;
    for _ in 0..n - 1 {
        l = List::List(vec![l]);
    }

    compound!("" => l).into()
}

#[test]
fn round_trip() {
    let mut buf = Vec::new();

    let compound = example_compound();

    to_binary_named(&compound, &mut buf, ROOT_NAME).unwrap();

    let (decoded, root_name) = from_binary_named(&mut buf.as_slice()).unwrap();

    assert_eq!(root_name, ROOT_NAME);
    assert_eq!(decoded, Value::Compound(compound));
}

#[test]
fn every_variant_round_trips_at_root() {
    let values = [
        Value::End,
        Value::Byte(-5),
        Value::Short(i16::MAX),
        Value::Int(-123_456),
        Value::Long(i64::MIN),
        Value::Float(-0.25),
        Value::Double(std::f64::consts::PI),
        Value::ByteArray(vec![1, -2, 3]),
        Value::String("hello".into()),
        Value::List(List::Short(vec![1, 2, 3])),
        Value::Compound(example_compound()),
        Value::IntArray(vec![]),
        Value::LongArray(vec![-1, i64::MAX]),
    ];

    for value in values {
        let mut buf = Vec::new();
        to_binary(&value, &mut buf).unwrap();

        assert_eq!(buf[0], value.id());
        assert_eq!(buf.len(), written_size(&value, ""), "size of {value:?}");
        assert_eq!(from_binary(&mut buf.as_slice()).unwrap(), value);
    }
}

#[test]
fn end_root_is_a_single_byte() {
    let mut buf = Vec::new();
    to_binary(&Value::End, &mut buf).unwrap();
    assert_eq!(buf, [0]);

    // Nothing after the id byte is consumed.
    let input = [0_u8, 0xff, 0xff];
    let mut slice = input.as_slice();
    assert_eq!(from_binary(&mut slice).unwrap(), Value::End);
    assert_eq!(slice, [0xff, 0xff]);
}

#[test]
fn exact_bytes() {
    let mut buf = Vec::new();
    to_binary(&compound! { "int" => 0xdead }, &mut buf).unwrap();

    assert_eq!(
        buf,
        [10, 0, 0, 3, 0, 3, b'i', b'n', b't', 0, 0, 0xde, 0xad, 0]
    );
}

#[test]
fn empty_list_writes_end_element_type() {
    let mut buf = Vec::new();
    write_payload(&List::Int(vec![]), &mut buf).unwrap();

    assert_eq!(buf, [0, 0, 0, 0, 0]);
}

#[test]
fn payload_round_trip() {
    let value = Value::List(List::String(vec!["a".into(), "ü".into()]));

    let mut buf = Vec::new();
    write_payload(&value, &mut buf).unwrap();

    assert_eq!(
        read_payload(Tag::List.id(), &mut buf.as_slice(), 0).unwrap(),
        value
    );
}

#[test]
fn check_min_sizes() {
    fn check(min_val: Value, expected_size: usize) {
        /// TAG_Compound + root name + field tag + field name + TAG_End
        const COMPOUND_OVERHEAD: usize = 1 + 2 + 1 + 2 + 1;

        let dbg = format!("{min_val:?}");
        let mut buf = Vec::new();

        to_binary(&compound!("" => min_val), &mut buf).unwrap();

        assert_eq!(
            expected_size,
            buf.len() - COMPOUND_OVERHEAD,
            "size mismatch for {dbg}"
        );
    }

    check(Value::Byte(0), 1);
    check(Value::Short(0), 2);
    check(Value::Int(0), 4);
    check(Value::Long(0), 8);
    check(Value::Float(0.0), 4);
    check(Value::Double(0.0), 8);
    check(Value::ByteArray([].into()), 4);
    check(Value::String("".into()), 2);
    check(Value::List(Vec::<i32>::new().into()), 5);
    check(Value::Compound(compound!()), 1);
    check(Value::IntArray([].into()), 4);
    check(Value::LongArray([].into()), 4);
}

#[test]
fn depth_limit_decode() {
    let ok = nested_lists_bytes(MAX_DEPTH);
    assert_eq!(
        from_binary(&mut ok.as_slice()).unwrap(),
        nested_lists_value(MAX_DEPTH)
    );

    let too_deep = nested_lists_bytes(MAX_DEPTH + 1);
    assert!(matches!(
        from_binary(&mut too_deep.as_slice()),
        Err(Error::DepthExceeded)
    ));
}

#[test]
fn depth_limit_encode() {
    let mut buf = Vec::new();
    to_binary(&nested_lists_value(MAX_DEPTH), &mut buf).unwrap();
    assert_eq!(buf, nested_lists_bytes(MAX_DEPTH));

    let too_deep = nested_lists_value(MAX_DEPTH + 1);
    assert!(matches!(
        to_binary(&too_deep, &mut Vec::new()),
        Err(Error::DepthExceeded)
    ));
}

#[test]
fn deeply_nested_compound_decode() {
    let mut buf = vec![Tag::Compound as u8, 0, 0]; // Root compound
    let n = 10_000;

    for _ in 0..n {
        buf.extend([Tag::Compound as u8, 0, 0]);
    }

    buf.extend((0..n).map(|_| Tag::End as u8));

    buf.push(Tag::End as u8); // End root compound

    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::DepthExceeded)
    ));
}

#[test]
fn lone_surrogate_string_decodes() {
    // Root string named "" holding the single code unit U+D800.
    let buf = [Tag::String as u8, 0, 0, 0, 3, 0xed, 0xa0, 0x80];

    assert_eq!(
        from_binary(&mut buf.as_slice()).unwrap(),
        Value::String("\u{fffd}".into())
    );
}

#[test]
fn missing_list_element_type() {
    // Root list named "" with element type End and three elements.
    let buf = [Tag::List as u8, 0, 0, Tag::End as u8, 0, 0, 0, 3];

    let err = from_binary(&mut buf.as_slice()).unwrap_err();

    assert!(matches!(err, Error::MissingListType(3)));
    assert!(err.to_string().contains("missing element type"));
}

#[test]
fn truncated_input() {
    // Compound entry of type Int with only two payload bytes.
    let buf = [10, 0, 0, 3, 0, 1, b'a', 0, 0];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::UnexpectedEof)
    ));

    // String shorter than its length prefix.
    let buf = [8, 0, 0, 0, 5, b'a', b'b'];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::UnexpectedEof)
    ));

    assert!(matches!(
        from_binary(&mut [0_u8; 0].as_slice()),
        Err(Error::UnexpectedEof)
    ));
}

#[test]
fn unknown_tag_id() {
    let buf = [10, 0, 0, 42, 0, 1, b'a', 0];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::UnknownTag(42))
    ));

    assert!(matches!(
        read_payload(13, &mut [0_u8; 0].as_slice(), 0),
        Err(Error::UnknownTag(13))
    ));
}

#[test]
fn negative_lengths() {
    let buf = [7, 0, 0, 0xff, 0xff, 0xff, 0xff];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::NegativeLength(-1))
    ));

    let buf = [9, 0, 0, 3, 0x80, 0, 0, 0];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::NegativeLength(i32::MIN))
    ));
}

#[test]
fn malformed_string_on_the_wire() {
    let buf = [8, 0, 0, 0, 2, b'a', 0xff];
    assert!(matches!(
        from_binary(&mut buf.as_slice()),
        Err(Error::MalformedString { offset: 1 })
    ));
}

#[test]
fn string_length_limit() {
    let max = "a".repeat(u16::MAX as usize);
    let mut buf = Vec::new();
    to_binary(&Value::String(max.clone()), &mut buf).unwrap();
    assert_eq!(from_binary(&mut buf.as_slice()).unwrap(), Value::String(max));

    // Three bytes per character once encoded.
    let too_long = "日".repeat(21_846);
    assert!(matches!(
        to_binary(&Value::String(too_long), &mut Vec::new()),
        Err(Error::StringTooLong(65_538))
    ));
}

#[test]
fn end_cannot_be_stored_in_compound() {
    let c = compound! { "nothing" => Value::End };

    assert!(matches!(
        to_binary(&c, &mut Vec::new()),
        Err(Error::EndInCompound(key)) if key == "nothing"
    ));
}

#[test]
fn duplicate_keys_overwrite() {
    let buf = [
        10, 0, 0, //
        1, 0, 1, b'k', 1, //
        1, 0, 1, b'k', 2, //
        0,
    ];

    assert_eq!(
        from_binary(&mut buf.as_slice()).unwrap(),
        Value::Compound(compound! { "k" => 2_i8 })
    );
}
