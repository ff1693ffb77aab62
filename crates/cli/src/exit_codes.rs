//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract. Codes 1 (general error) and
//! 2 (usage error, raised by clap on bad arguments) are implicit; the
//! constants below cover the outcomes this binary raises itself.
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! | 0    | Success, including a report with no matches |
//! | 1    | General error                               |
//! | 2    | CLI usage error (bad args)                  |
//! | 3    | Input acquisition failed (read/parse)       |
//! | 4    | Output write failed                         |

/// Success. A completed run with zero matches is still success: an empty
/// report is a valid answer, distinct from failing to acquire the inputs.
pub const EXIT_SUCCESS: u8 = 0;

/// Input acquisition failed: an input file could not be read or parsed.
pub const EXIT_READ: u8 = 3;

/// The report could not be written to the requested output.
pub const EXIT_WRITE: u8 = 4;
