//! HTML page extractors.
//!
//! One pure function per portal page type:
//! - [`parse_user_profile`] — home page (photo, profile table, info board)
//! - [`parse_personal_info`] — personal-info page (label tables, phone inputs)
//! - [`parse_courses`] — course/grade table
//!
//! Extraction never performs I/O and never fails: whatever the markup does
//! not show stays unset on the returned record. All parsing is done using
//! CSS selectors via the `scraper` crate.

mod courses;
mod personal;
mod profile;
mod table;

// Re-export public API
pub use courses::parse_courses;
pub use personal::parse_personal_info;
pub use profile::parse_user_profile;
