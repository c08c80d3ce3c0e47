//! Configuration constants.
//!
//! This module defines the protocol names of the result form, the marker
//! used to recognise a rendered grade report, and the operational defaults.

use std::time::Duration;

/// Result form endpoint. Serves the initial page (GET) and every postback (POST).
pub const DEFAULT_BASE_URL: &str = "https://support.charusat.edu.in/Uniexamresult/";

/// User-Agent sent on every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

// Concurrency and batch limits
/// Default number of concurrent form sessions in bulk mode (2-3 recommended)
pub const DEFAULT_MAX_WORKERS: usize = 3;
/// Concurrent sessions are never allowed above this, whatever the configuration says
pub const MAX_WORKERS_HARD_CAP: usize = 4;
/// Default upper bound on generated enrollment numbers in bulk mode
pub const DEFAULT_ROLL_LIMIT: usize = 120;
/// Width of the zero-padded numeric suffix appended to the roll prefix
pub const ROLL_SUFFIX_WIDTH: usize = 3;

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Interval between progress lines while a bulk run is in flight
pub const PROGRESS_LOGGING_INTERVAL: Duration = Duration::from_secs(5);

// Output
/// Default directory for archived pages and the summary table
pub const DEFAULT_OUTPUT_DIR: &str = "results";
/// Sub-directory of the output directory holding raw result pages
pub const HTML_ARCHIVE_DIR: &str = "html";
/// File name of the CSV summary table
pub const SUMMARY_CSV_FILE: &str = "sgpa_summary.csv";

// WebForms postback fields
/// Hidden field naming the control whose change triggered the postback
pub const EVENT_TARGET_FIELD: &str = "__EVENTTARGET";
/// Institute dropdown
pub const INSTITUTE_FIELD: &str = "ddlInst";
/// Degree dropdown (depends on institute)
pub const DEGREE_FIELD: &str = "ddlDegree";
/// Semester dropdown (depends on degree)
pub const SEMESTER_FIELD: &str = "ddlSem";
/// Exam schedule dropdown (depends on semester)
pub const EXAM_FIELD: &str = "ddlScheduleExam";
/// Enrollment number text box
pub const ENROLLMENT_FIELD: &str = "txtEnrNo";
/// Search button name and the value it submits
pub const SEARCH_BUTTON_FIELD: &str = "btnSearch";
pub const SEARCH_BUTTON_VALUE: &str = "Search";

/// Option value the site uses for its "-- Select --" placeholder entries.
pub const PLACEHOLDER_OPTION_VALUE: &str = "0";

// Result page
/// Literal text present only on a rendered grade report (note the double spaces).
pub const RESULT_MARKER: &str = "SEMESTER  GRADE  REPORT";
/// Element id of the score (SGPA) label
pub const SCORE_ELEMENT_ID: &str = "uclGrdNEP_lblSGPA";
/// Element id of the total credits label
pub const CREDIT_TOTAL_ELEMENT_ID: &str = "uclGrdNEP_lblTotCredit";
