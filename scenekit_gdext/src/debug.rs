// Logging facade over the engine's output channels.
//
// Pure pass-through: no buffering, no level filtering, no formatting of
// its own. `log` reproduces the engine's `print` convention of
// concatenating its arguments with no separator; warnings and errors go
// to the channels the editor debugger surfaces specially.

use godot::prelude::*;
use scenekit_core::text;

/// Print a sequence of values to the engine's standard output channel.
///
/// Each part is stringified by the engine (`Variant::stringify`) and the
/// results are concatenated in order with no separator, matching Godot's
/// own `print`: logging `"a"`, `"b"`, `[1, 2, 3]` produces `ab[1, 2, 3]`.
/// Any spacing between parts is the caller's responsibility. For
/// heterogeneous arguments, [`scene_log!`](crate::scene_log) is easier
/// at the call site.
pub fn log(parts: &[Variant]) {
    let line = text::concat(parts.iter().map(|part| part.stringify().to_string()));
    godot_print!("{line}");
}

/// Push a warning to the engine's warning channel (debugger and terminal).
pub fn log_warning(message: &str) {
    godot_warn!("{message}");
}

/// Push an error to the engine's error channel (debugger and terminal).
pub fn log_error(message: &str) {
    godot_error!("{message}");
}

/// Variadic front end for [`log`]: converts each argument to a
/// `Variant` and prints the concatenation.
///
/// Call as `scene_log!("elves: ", elf_count, "/", capacity);`.
#[macro_export]
macro_rules! scene_log {
    ($($part:expr),* $(,)?) => {
        $crate::debug::log(&[$(::godot::prelude::ToGodot::to_variant(&$part)),*])
    };
}
