use pretty_assertions::assert_eq;

use super::*;
use crate::{compound, List, Value, MAX_DEPTH};

fn parse_value(s: &str) -> Value {
    value_from_snbt_str(s).unwrap()
}

#[test]
fn parse_compound() {
    let snbt = r#"
        {
            foo: 1,
            "bar": 1.0,
            "baz": 1.0f,
            "hello'": "hello world",
            "world": "hello\"world",
            1.5f: 1.5d,
            3b: 2f,
            bool: false,
            more: {
                iarr: [I; 1, 2, 3],
                larr: [L; 1L, 2L, 3L],
            },
            empty: [Bibabo ],
        }
    "#;

    let c = from_snbt_str(snbt).unwrap();

    assert_eq!(
        c,
        compound! {
            "foo" => 1,
            "bar" => 1.0,
            "baz" => 1.0_f32,
            "hello'" => "hello world",
            "world" => "hello\"world",
            "1.5f" => 1.5,
            "3b" => 2.0_f32,
            "bool" => 0_i8,
            "more" => compound! {
                "iarr" => vec![1, 2, 3],
                "larr" => vec![1_i64, 2, 3],
            },
            "empty" => List::String(vec!["Bibabo".into()]),
        }
    );

    // Keys keep their textual order.
    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["foo", "bar", "baz", "hello'", "world", "1.5f", "3b", "bool", "more", "empty"]
    );
}

#[test]
fn array_and_list_disambiguation() {
    assert_eq!(parse_value("[B;1,2,3]"), Value::ByteArray(vec![1, 2, 3]));
    assert_eq!(parse_value("[1,2,3]"), Value::List(List::Int(vec![1, 2, 3])));
    assert_eq!(
        parse_value(r#"["B;1"]"#),
        Value::List(List::String(vec!["B;1".into()]))
    );
    assert_eq!(parse_value("[I;]"), Value::IntArray(vec![]));
    assert_eq!(parse_value("[L; -1, 2L]"), Value::LongArray(vec![-1, 2]));
    assert_eq!(parse_value("[B; 1b, -2b]"), Value::ByteArray(vec![1, -2]));
}

#[test]
fn unknown_array_kind() {
    let err = value_from_snbt_str("[X;1]").unwrap_err();

    assert_eq!(err.kind(), SnbtErrorKind::Syntax);
    assert_eq!(err.message(), "Invalid array type 'X' found");
}

#[test]
fn quoted_string_escapes() {
    let c = from_snbt_str(r#"{a:"va\"l"}"#).unwrap();
    assert_eq!(c, compound! { "a" => "va\"l" });
    assert_eq!(to_snbt_string(&c), r#"{a:"va\"l"}"#);

    assert_eq!(parse_value(r#""back\\slash""#), Value::String("back\\slash".into()));

    let err = value_from_snbt_str(r#""\n""#).unwrap_err();
    assert_eq!(err.message(), "Invalid escape of 'n'");

    let err = value_from_snbt_str(r#""unterminated"#).unwrap_err();
    assert_eq!(err.message(), "Missing termination quote");
}

#[test]
fn heterogeneous_list() {
    let err = value_from_snbt_str(r#"[1,"a"]"#).unwrap_err();

    assert_eq!(err.kind(), SnbtErrorKind::TypeMismatch);
    assert!(err.message().contains("Int"), "{err}");
    assert!(err.message().contains("String"), "{err}");
}

#[test]
fn wrong_array_element() {
    let err = value_from_snbt_str(r#"[B;1,"a"]"#).unwrap_err();

    assert_eq!(err.kind(), SnbtErrorKind::TypeMismatch);
    assert_eq!(err.message(), "Unable to insert String into ByteArray of Byte");

    // Suffixed values are never coerced.
    let err = value_from_snbt_str("[I;1L]").unwrap_err();
    assert_eq!(err.message(), "Unable to insert Long into IntArray of Int");

    // Neither are unsuffixed values that do not fit.
    let err = value_from_snbt_str("[B;300]").unwrap_err();
    assert_eq!(err.message(), "Unable to insert Int into ByteArray of Byte");
}

#[test]
fn error_excerpt() {
    // 40 characters of valid text followed by a missing separator.
    let input = format!("{{{}:1 234567890}}", "k".repeat(36));
    assert_eq!(input.chars().count(), 50);

    let err = from_snbt_str(&input).unwrap_err();

    assert_eq!(err.cursor(), 40);
    assert_eq!(err.message(), "Expected '}' but got '2'");

    let window: String = input.chars().skip(5).take(35).collect();
    assert_eq!(err.excerpt(), format!("...{window}<--[HERE]"));
    assert!(err.to_string().ends_with(&format!("{window}<--[HERE]")));
}

#[test]
fn short_excerpt_has_no_ellipsis() {
    let err = from_snbt_str("{foo 1}").unwrap_err();

    assert_eq!(err.to_string(), "Expected ':' but got '1' at: {foo <--[HERE]");
}

#[test]
fn syntax_errors() {
    let cases = [
        ("{ foo: }", "Expected value"),
        ("{ :1 }", "Expected non-empty key"),
        (r#"{ "": 1 }"#, "Expected non-empty key"),
        ("{ a: 1, ", "Expected key"),
        ("{ a: 1 b: 2 }", "Expected '}' but got 'b'"),
        ("{ a: [1, 2 }", "Expected ']' but got '}'"),
        ("{ a: [1, ", "Expected value"),
        ("{ a: [B;", "Expected value"),
        ("{ a: [", "Expected value"),
        ("{ a: 1", "Expected '}' but got '<EOF>'"),
        ("{a:[1, 2", "Expected ']' but got '<EOF>'"),
        ("a: 1", "Expected '{' but got 'a'"),
        ("", "Expected '{' but got '<EOF>'"),
    ];

    for (input, message) in cases {
        let err = from_snbt_str(input).unwrap_err();
        assert_eq!(err.kind(), SnbtErrorKind::Syntax, "input {input:?}");
        assert_eq!(err.message(), message, "input {input:?}");
    }
}

#[test]
fn trailing_text_is_ignored() {
    let mut reader = SnbtReader::new("{a:1b} and then some");

    assert_eq!(reader.read_compound().unwrap(), compound! { "a" => 1_i8 });
    assert_eq!(reader.cursor(), 6);

    assert_eq!(parse_value("5b ]]]"), Value::Byte(5));
}

#[test]
fn reader_continues_after_value() {
    let mut reader = SnbtReader::new("1b 2s \"three\"");

    assert_eq!(reader.read_value().unwrap(), Value::Byte(1));
    assert_eq!(reader.read_value().unwrap(), Value::Short(2));
    assert_eq!(reader.read_value().unwrap(), Value::String("three".into()));
    assert!(reader.read_value().is_err());
}

#[test]
fn whitespace_is_skipped() {
    let c = from_snbt_str("\t{ a :\n[ 1 , 2 ] ,\u{3000}b : { } }").unwrap();

    assert_eq!(
        c,
        compound! {
            "a" => List::Int(vec![1, 2]),
            "b" => compound!(),
        }
    );
}

#[test]
fn empty_containers() {
    assert_eq!(parse_value("{}"), Value::Compound(compound!()));
    assert_eq!(parse_value("[]"), Value::List(List::End));
    assert_eq!(parse_value("[ ]"), Value::List(List::End));
    assert_eq!(
        parse_value("[[],[1]]"),
        Value::List(List::List(vec![List::End, List::Int(vec![1])]))
    );
}

#[test]
fn depth_limit() {
    fn nested(n: usize) -> String {
        format!("{{a:{}{}}}", "[".repeat(n), "]".repeat(n))
    }

    assert!(from_snbt_str(&nested(MAX_DEPTH)).is_ok());

    let err = from_snbt_str(&nested(MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err.kind(), SnbtErrorKind::Syntax);
    assert!(err.message().contains("depth"), "{err}");
}

#[test]
fn write_canonical_forms() {
    let c = compound! {
        "byte" => 1_i8,
        "short" => -2_i16,
        "int" => 3,
        "long" => 4_i64,
        "float" => 0.5_f32,
        "double" => 2.0,
        "bytes" => vec![1_i8, -1],
        "ints" => vec![1, 2],
        "longs" => vec![-5_i64],
        "empty_ints" => Vec::<i32>::new(),
        "list" => List::Short(vec![1, 2]),
        "needs quotes" => "x",
        "" => "empty key",
        "plain_key-1.+" => "\\",
    };

    assert_eq!(
        c.to_string(),
        concat!(
            "{byte:1b,short:-2s,int:3,long:4L,float:0.5f,double:2.0d,",
            "bytes:[B;1b,-1b],ints:[I;1,2],longs:[L;-5L],empty_ints:[I;],",
            r#"list:[1s,2s],"needs quotes":"x","":"empty key",plain_key-1.+:"\\"}"#
        )
    );
}

#[test]
fn text_round_trip() {
    let c = compound! {
        "byte" => 123_i8,
        "short" => -1234_i16,
        "int" => i32::MIN,
        "long" => i64::MAX,
        "float" => 1e10_f32,
        "double" => -1.5e-7,
        "string" => "aé日\0😺 \"quoted\" \\",
        "list_of_list" => List::List(vec![
            List::Double(vec![0.5]),
            List::End,
            List::Compound(vec![compound! { "x" => 1 }]),
        ]),
        "list_of_arrays" => List::LongArray(vec![vec![1, 2], vec![]]),
        "int_array" => vec![5, -9, i32::MIN, 0, i32::MAX],
        "byte_array" => vec![0_i8, 2, 3, i8::MIN],
        "long_array" => vec![123_i64, i64::MIN],
        "nested" => compound! {
            "with space" => compound! { "deeper" => List::Byte(vec![1, 2]) },
        },
    };

    let text = to_snbt_string(&c);

    assert_eq!(from_snbt_str(&text).unwrap(), c, "{text}");
}

#[test]
fn display_of_single_values() {
    assert_eq!(Value::Float(5.0).to_string(), "5.0f");
    assert_eq!(Value::Double(-0.25).to_string(), "-0.25d");
    assert_eq!(Value::String("hi".into()).to_string(), r#""hi""#);
    assert_eq!(List::Int(vec![]).to_string(), "[]");
    assert_eq!(to_snbt_string(&Value::Long(-1)), "-1L");
}
