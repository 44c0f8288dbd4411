//! Process exit codes, following BSD `sysexits.h`.

/// Assessment or command finished normally
pub const OK: i32 = 0;

/// Bad arguments, unknown condition, or answers ran out before a diagnosis
pub const USAGE: i32 = 64;

/// Unparseable answer text or a corrupt history file
pub const DATAERR: i32 = 65;

/// Reading or writing a file failed
pub const IOERR: i32 = 74;

/// Settings could not be loaded
pub const CONFIG: i32 = 78;
