use crate::error::VestibuleError;

/// Exit code for a dispatcher-local failure before any hand-off occurred.
///
/// Exit codes other than this one and `0` are passed through verbatim from
/// whichever entry point the process handed off to.
pub const FATAL_STARTUP_EXIT_CODE: i32 = -1;

pub fn get_exit_code(error: &VestibuleError) -> i32 {
    match error {
        VestibuleError::ArgumentAcquisition(_)
        | VestibuleError::CommandLineRegistered
        | VestibuleError::LifecycleOrdering(_) => FATAL_STARTUP_EXIT_CODE,

        _ => 1,
    }
}
