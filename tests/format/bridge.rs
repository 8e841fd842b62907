use ferrofmt::format;
use ferrofmt::format_with_defaults;

#[test]
fn minimal_file_is_canonicalized() {
    let output = format_with_defaults("fn main(){}");
    assert_eq!(output, "fn main() {}\n");
}

#[test]
fn spacing_and_indentation_are_normalized() {
    let input = "fn add(a:i32,b:i32)->i32{a+b}";
    let output = format_with_defaults(input);
    assert_eq!(output, "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n");
}

#[test]
fn invalid_source_is_returned_verbatim() {
    let input = "fn broken(";
    let output = format_with_defaults(input);
    assert_eq!(output, input);
}

#[test]
fn invalid_source_with_valid_prefix_is_untouched() {
    // Formatting is all-or-nothing: a parse failure anywhere leaves the
    // whole input alone, including the parts that would have formatted.
    let input = "fn ok() {}\nstruct Broken {";
    let output = format_with_defaults(input);
    assert_eq!(output, input);
}

#[test]
fn empty_input_formats_to_empty_output() {
    assert_eq!(format_with_defaults(""), "");
}

#[test]
fn repeated_calls_are_deterministic() {
    let input = "struct Point{x:i32,y:i32}";
    let first = format(input, None);
    let second = format(input, None);
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn call_order_does_not_leak_state() {
    // An invalid call in between must not affect the next valid one.
    let valid = "fn main(){}";
    let before = format_with_defaults(valid);
    let _ = format_with_defaults("fn broken(");
    let after = format_with_defaults(valid);
    assert_eq!(before, after);
}
