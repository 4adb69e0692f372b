use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error raised by the form clients carries an `ErrorLocation`.
/// If capture breaks, a failed product submission can no longer be traced to the call site.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: Current caller location
    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` Display format.
///
/// **BUG THIS CATCHES**: Would catch if the brackets or separators change, which would break
/// every `"<Kind> Error: {message} {location}"` string downstream.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should produce "[file:line:column]" format
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains("error_location.rs"));
    assert!(formatted.contains(&location.line.to_string()));
    assert_eq!(formatted.matches(':').count(), 2, "Should have exactly 2 colons");
}

#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from different call sites
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file);
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
