use crate::error::format::format_error_with_color;
use crate::error::*;

#[test]
fn test_error_context_argument_acquisition() {
    let error = VestibuleError::ArgumentAcquisition("null argv".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("cannot start"));
    assert!(context.details.is_some());
    assert!(context.details.unwrap().contains("null argv"));
}

#[test]
fn test_error_context_console_attach() {
    let error = VestibuleError::ConsoleAttach("no parent console".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(
        context
            .suggestion
            .unwrap()
            .contains("VESTIBULE_NO_ATTACH_CONSOLE")
    );
}

#[test]
fn test_error_context_command_line_registered() {
    let error = VestibuleError::CommandLineRegistered;
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("only once"));
    assert!(context.details.is_none());
}

#[test]
fn test_error_context_with_custom_suggestion() {
    let error = VestibuleError::LifecycleOrdering("nested scope".to_string());
    let context =
        ErrorContext::new(&error).with_suggestion("Drop the outer scope first.".to_string());

    assert_eq!(
        context.suggestion,
        Some("Drop the outer scope first.".to_string())
    );
}

#[test]
fn test_fatal_startup_exit_codes() {
    assert_eq!(
        get_exit_code(&VestibuleError::ArgumentAcquisition("bad".to_string())),
        FATAL_STARTUP_EXIT_CODE
    );
    assert_eq!(
        get_exit_code(&VestibuleError::CommandLineRegistered),
        FATAL_STARTUP_EXIT_CODE
    );
    assert_eq!(
        get_exit_code(&VestibuleError::LifecycleOrdering("oops".to_string())),
        FATAL_STARTUP_EXIT_CODE
    );
}

#[test]
fn test_passthrough_errors_use_generic_exit_code() {
    let io = VestibuleError::Io(std::io::Error::other("disk"));
    assert_eq!(get_exit_code(&io), 1);

    let attach = VestibuleError::ConsoleAttach("denied".to_string());
    assert_eq!(get_exit_code(&attach), 1);
}

#[test]
fn test_format_error_chain_includes_suggestion() {
    let error = VestibuleError::ArgumentAcquisition("CommandLineToArgvW".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.starts_with("Error:"));
    assert!(formatted.contains("Suggestion:"));
}

#[test]
fn test_format_error_with_color_toggles_ansi() {
    let error = VestibuleError::CommandLineRegistered;

    let colored = format_error_with_color(&error, true);
    assert!(colored.contains("\x1b[31m"));

    let plain = format_error_with_color(&error, false);
    assert!(!plain.contains("\x1b["));
    assert!(plain.contains("Error:"));
}
