//! Container, string, character and I/O helpers

use std::collections::{BTreeMap, HashMap};
use std::io::{self, BufRead, Cursor, Read};

use test_case::test_case;
use zzz::util::{chars, container, io as zio, string, StringError};
use zzz::{filter, map, take};

#[test]
fn test_head_and_tail() {
    let values = vec![3, 1, 4];
    assert_eq!(container::head(&values), Some(3));
    assert_eq!(container::tail(&values), Some(4));
    assert_eq!(container::head::<i32>(&[]), None);
}

#[test]
fn test_lookup_in_both_map_kinds() {
    let mut hashed = HashMap::new();
    hashed.insert(String::from("one"), 1);
    let mut ordered = BTreeMap::new();
    ordered.insert(String::from("two"), 2);

    assert_eq!(container::lookup(&hashed, "one"), Some(1));
    assert_eq!(container::lookup(&hashed, "missing"), None);
    assert_eq!(container::lookup(&ordered, "two"), Some(2));
}

#[test]
fn test_find_and_contains() {
    let values = ["a", "b", "c"];
    assert_eq!(container::find(&values, &"c"), Some(2));
    assert!(container::contains(&values, &"b"));
    assert!(!container::contains(&values, &"z"));
}

#[test]
fn test_reduce_and_reducer() {
    assert_eq!(container::reduce(|acc, x: &i32| acc + x, 0, &[1, 2, 3, 4]), 10);

    let joined = container::reducer(|acc: String, s: &str| acc + s, String::new());
    assert_eq!(joined(&["ab", "cd"]), "abcd");
    assert_eq!(joined(&[]), "");

    let concat = container::reduce_fn(|acc: String, s: &str| acc + s);
    assert_eq!(concat(String::from(">"), &["a", "b"]), ">ab");

    let has_b = container::contains_fn("b");
    assert!(has_b(&["a", "b"]));
    assert!(!has_b(&["c"]));
}

#[test_case("abc", "", true ; "empty needle in text")]
#[test_case("", "", false ; "empty needle in empty text")]
#[test_case("hello world", "o w", true ; "inner match")]
#[test_case("hello", "hello!", false ; "needle longer than text")]
fn test_string_contains(haystack: &str, needle: &str, expected: bool) {
    assert_eq!(string::contains(haystack, needle), expected);
}

#[test]
fn test_split_eager_matches_lazy() {
    for input in ["a,b,,c", ",lead", "trail,", "", "none"] {
        let eager = string::split(input, ",").unwrap();
        let lazy: Vec<&str> = string::split_lazy(input, ",")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(eager, lazy, "input {:?}", input);
    }
}

#[test]
fn test_split_edge_cases() {
    assert!(string::split("", ":").unwrap().is_empty());
    assert_eq!(string::split("a::b", ":").unwrap(), vec!["a", "", "b"]);
    assert_eq!(string::split(":a", ":").unwrap(), vec!["", "a"]);
    assert_eq!(string::split("a:", ":").unwrap(), vec!["a"]);
    assert_eq!(string::split("a", ""), Err(StringError::EmptyDelimiter));
}

#[test]
fn test_split_lazy_feeds_combinators() {
    let upper = map(
        filter(string::split_lazy("ab cd  ef", " ").unwrap(), |s| !s.is_empty()),
        string::uppercase,
    );
    let collected: Vec<String> = upper.collect::<Result<_, _>>().unwrap();
    assert_eq!(collected, vec!["AB", "CD", "EF"]);
}

#[test]
fn test_substring_errors() {
    assert_eq!(
        string::substring("abc", 4, 1),
        Err(StringError::InvalidRange {
            begin: 4,
            len: 1,
            source_len: 3,
        })
    );
    assert_eq!(string::substring("abc", 1, 1), Ok("b"));
}

#[test_case(' ', true, false ; "space")]
#[test_case('a', false, true ; "letter")]
#[test_case('\n', true, false ; "newline")]
#[test_case('7', false, true ; "digit")]
fn test_char_classes(c: char, whitespace: bool, alphanumeric: bool) {
    assert_eq!(chars::is_whitespace(c), whitespace);
    assert_eq!(chars::is_alphanumeric(c), alphanumeric);
}

#[test]
fn test_lines_is_lazy() {
    let mut input = Cursor::new("first\nsecond\nthird\n");
    let firsts: Vec<String> = take(zio::lines(&mut input), 1)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(firsts, vec!["first"]);

    let mut rest = String::new();
    input.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "second\nthird\n");
}

/// Reader that fails after its first line.
struct FlakyReader {
    served: bool,
}

impl Read for FlakyReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        unreachable!("reads go through BufRead")
    }
}

impl BufRead for FlakyReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
        }
        Ok(b"ok\n")
    }

    fn consume(&mut self, amt: usize) {
        if amt > 0 {
            self.served = true;
        }
    }
}

#[test]
fn test_lines_reports_failing_line() {
    let mut gen = zio::lines(FlakyReader { served: false });
    assert_eq!(gen.next_value().unwrap().as_deref(), Some("ok"));

    let error = gen.next_value().unwrap_err();
    assert_eq!(error.to_string(), "producer failed: failed to read line 2");
    assert!(gen.is_exhausted());
}

#[test]
fn test_print_renders_braces() {
    let mut out = Vec::new();
    zio::print(&mut out, ["a", "b"]).unwrap();
    assert_eq!(out, b"{ a, b }");

    let mut out = Vec::new();
    zio::print(&mut out, std::iter::empty::<u8>()).unwrap();
    assert_eq!(out, b"{  }");
}
