// Text helpers shared by the logging facade and argument validation.
//
// Godot's `print` concatenates its arguments with no separator between
// them, so `print("a", "b", [1, 2, 3])` produces `ab[1, 2, 3]`. The
// logging facade reproduces that convention exactly; `concat` is where
// it is pinned down and tested.

/// Return true if `s` is empty or consists only of Unicode whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Concatenate already-stringified parts in order, with no separator.
///
/// This matches the engine print sink's convention; any spacing between
/// parts is the caller's responsibility.
pub fn concat<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        out.push_str(part.as_ref());
    }
    out
}
