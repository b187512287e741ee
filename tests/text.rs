use dict::{hello, repeat};

#[test]
fn hello_to_people() {
    assert_eq!(hello("Chris"), "Hello, Chris");
}

#[test]
fn hello_to_empty_string() {
    assert_eq!(hello(""), "Hello, World");
}

#[test]
fn repeat_four() {
    assert_eq!(repeat("a", 4), "aaaa");
}

#[test]
fn repeat_five() {
    assert_eq!(repeat("a", 5), "aaaaa");
}

#[test]
fn repeat_zero_is_empty() {
    assert_eq!(repeat("ab", 0), "");
}
