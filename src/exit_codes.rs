/// Everything ran and passed
pub const SUCCESS: i32 = 0;

/// At least one scenario or report failed verification
pub const VERIFICATION_FAILED: i32 = 1;

/// The command could not run (bad config, missing files, tool failures)
pub const EXECUTION_ERROR: i32 = 2;
