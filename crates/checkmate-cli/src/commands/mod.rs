//! Command implementations.

pub mod analyze;
pub mod ocr;
pub mod requirements;
pub mod send;

pub use self::analyze::{execute_analyze, print_results};
pub use self::ocr::execute_ocr;
pub use self::requirements::execute_requirements;
pub use self::send::{deliver_report, execute_send, validate_recipient};
