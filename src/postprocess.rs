//! Output normalization after compiling

use tracing::debug;

/// Line prepended when the compiled code calls `printf` without includes
pub const STD_INCLUDE: &str = "#include <stdio.h>\n";

const INCLUDE_DIRECTIVE: &str = "#include";
const PRINT_ROUTINE: &str = "printf";

/// Prepend the standard I/O include if the code prints but includes nothing
///
/// Best effort only: any existing `#include` suppresses the injection,
/// and other library calls are not inspected.
pub fn ensure_std_include(code: String) -> String {
    if code.contains(INCLUDE_DIRECTIVE) || !code.contains(PRINT_ROUTINE) {
        return code;
    }

    debug!("Injecting standard I/O include");
    let mut with_include = String::with_capacity(STD_INCLUDE.len() + code.len());
    with_include.push_str(STD_INCLUDE);
    with_include.push_str(&code);
    with_include
}
