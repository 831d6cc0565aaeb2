//! Course-table extractor.

use log::debug;
use scraper::{ElementRef, Html};

use crate::models::{Course, CourseData};
use crate::parse::table::{element_text, CELL_SELECTOR, ROW_SELECTOR};

/// Parses the course-data page into a [`CourseData`].
///
/// Only rows with exactly five cells qualify, and only when the first four
/// trimmed cell texts are all non-empty; everything else is skipped without
/// error. The fifth cell is never read.
pub fn parse_courses(html: &str) -> CourseData {
    let document = Html::parse_document(html);
    let mut courses = Vec::new();

    for row in document.select(&ROW_SELECTOR) {
        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
        if cells.len() != 5 {
            continue;
        }

        let code = element_text(&cells[0]).trim().to_string();
        let name = element_text(&cells[1]).trim().to_string();
        let credits = element_text(&cells[2]).trim().to_string();
        let grade = element_text(&cells[3]).trim().to_string();

        if code.is_empty() || name.is_empty() || credits.is_empty() || grade.is_empty() {
            continue;
        }

        courses.push(Course {
            code,
            name,
            credits,
            grade,
        });
    }

    debug!("Parsed {} course rows", courses.len());
    CourseData { courses }
}
