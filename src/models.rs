//! Record types extracted from portal pages.
//!
//! Every field is optional: a field is `None` until a parse pass actually
//! saw it, which is distinct from the portal rendering an empty cell (an
//! empty string). Records are plain data — extraction lives in [`crate::parse`].

use serde::{Deserialize, Serialize};

/// Serializes a record to a JSON value.
fn record_json<T: Serialize>(record: &T) -> serde_json::Value {
    serde_json::to_value(record).unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
}

/// Student profile as shown on the portal home page.
///
/// All fields hold the text exactly as the portal renders it; nothing is
/// coerced to numeric or date types (`gpa` and `last_login` included).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// URL of the student photo.
    pub image: Option<String>,
    /// Full name.
    pub name: Option<String>,
    /// Curriculum name.
    pub curriculum: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Student ID.
    pub student_id: Option<String>,
    /// Last login timestamp, as displayed.
    pub last_login: Option<String>,
    /// Grade level.
    pub grade: Option<String>,
    /// E-mail address.
    pub email: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// GPA, as displayed.
    pub gpa: Option<String>,
    /// Academic year.
    pub year: Option<String>,
    /// Current term.
    pub term: Option<String>,
    /// Student type (the portal's "Type" row).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Free-form label the portal shows as "Somestr".
    pub somestr: Option<String>,
    /// Info-board announcement links, in document order.
    pub info_board: Vec<String>,
    /// Personal info, once fetched from its own page.
    pub personal_info: Option<PersonalInfo>,
}

impl UserProfile {
    /// Returns the profile as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        record_json(self)
    }
}

/// Personal information from the portal's personal-info page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Gender.
    pub gender: Option<String>,
    /// Enrollment status.
    pub status: Option<String>,
    /// Tuition type.
    pub tuition_type: Option<String>,
    /// Registration date, as displayed.
    pub registration_date: Option<String>,
    /// Registration reason.
    pub registration_reason: Option<String>,
    /// Father's name.
    pub father_name: Option<String>,
    /// Mother's name.
    pub mother_name: Option<String>,
    /// Birth date, as displayed.
    pub birth_date: Option<String>,
    /// Phone numbers from the page's phone input fields, non-empty values
    /// only, in document order.
    pub phones: Vec<String>,
    /// Father's phone number.
    pub father_phone: Option<String>,
    /// Mother's phone number.
    pub mother_phone: Option<String>,
    /// Contact number after graduation.
    pub graduate_phone: Option<String>,
}

impl PersonalInfo {
    /// Returns the personal info as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        record_json(self)
    }
}

/// One row of the course/grade table.
///
/// Credits and grade stay display strings: the portal renders placeholders
/// like `-` for courses without a grade yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code.
    #[serde(rename = "Course Code")]
    pub code: String,
    /// Course name.
    #[serde(rename = "Name of Course")]
    pub name: String,
    /// Credit count, as displayed.
    #[serde(rename = "Credits")]
    pub credits: String,
    /// Grade, as displayed.
    #[serde(rename = "Grade")]
    pub grade: String,
}

impl Course {
    /// Returns the course as a JSON value, keyed by the portal's column
    /// names.
    pub fn to_json(&self) -> serde_json::Value {
        record_json(self)
    }
}

/// Ordered list of courses from the course-data page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseData {
    /// Courses in document order.
    pub courses: Vec<Course>,
}

impl CourseData {
    /// Returns the course list as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        record_json(self)
    }
}
