const DEFAULT_NAME: &str = "World";

/// Greets `name`, falling back to "World" when it is empty.
///
/// ```
/// assert_eq!(dict::hello("Chris"), "Hello, Chris");
/// assert_eq!(dict::hello(""), "Hello, World");
/// ```
pub fn hello(name: &str) -> String {
    let name = if name.is_empty() { DEFAULT_NAME } else { name };
    format!("Hello, {name}")
}

/// Concatenates `count` copies of `text`.
///
/// ```
/// assert_eq!(dict::repeat("a", 3), "aaa");
/// ```
pub fn repeat(text: &str, count: usize) -> String {
    text.repeat(count)
}
