//! Home-page extractor.
//!
//! The home page renders the student photo, a label/value profile table, and
//! the info-board announcement list. All three are pulled out in one pass
//! over the parsed document.

use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::constants::{INFO_BOARD_URL_PREFIX, PHOTO_URL_PREFIX};
use crate::models::UserProfile;
use crate::parse::table::{scan_label_rows, ROW_SELECTOR};
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const IMG_SELECTOR_STR: &str = "img[src]";
const TABLE_SELECTOR_STR: &str = "table";
const INFO_BOARD_SELECTOR_STR: &str = "a.box[href]";

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TABLE_SELECTOR_STR, "TABLE_SELECTOR"));

static INFO_BOARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(INFO_BOARD_SELECTOR_STR, "INFO_BOARD_SELECTOR"));

/// Parses the portal home page into a [`UserProfile`].
///
/// Missing or malformed markup never fails: whatever the page does not show
/// stays unset on the returned record. `personal_info` is not populated here;
/// it comes from its own page.
pub fn parse_user_profile(html: &str) -> UserProfile {
    let document = Html::parse_document(html);
    let mut profile = UserProfile::default();

    extract_image(&document, &mut profile);
    extract_user_data(&document, &mut profile);
    extract_info_board(&document, &mut profile);

    profile
}

/// First image whose source sits under the student-photo path, verbatim.
fn extract_image(document: &Html, profile: &mut UserProfile) {
    profile.image = document
        .select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .find(|src| src.contains(PHOTO_URL_PREFIX))
        .map(str::to_string);

    if profile.image.is_none() {
        debug!("No student photo found on home page");
    }
}

/// Label/value rows of the first table on the page.
fn extract_user_data(document: &Html, profile: &mut UserProfile) {
    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        debug!("Home page has no profile table");
        return;
    };

    scan_label_rows(table.select(&ROW_SELECTOR), |label, value| match label {
        "Name Surname" => profile.name = Some(value),
        "CURRICULUM" => profile.curriculum = Some(value),
        "Department" => profile.department = Some(value),
        "Student ID" => profile.student_id = Some(value),
        "Last Login" => profile.last_login = Some(value),
        "GRADE" => profile.grade = Some(value),
        "E-mail" => profile.email = Some(value),
        "Mobile" => profile.mobile = Some(value),
        "GPA" => profile.gpa = Some(value),
        "Year" => profile.year = Some(value),
        "Term" => profile.term = Some(value),
        "Type" => profile.kind = Some(value),
        "Somestr" => profile.somestr = Some(value),
        _ => {}
    });
}

/// Every `a.box` announcement link, in document order, no dedup.
fn extract_info_board(document: &Html, profile: &mut UserProfile) {
    profile.info_board = document
        .select(&INFO_BOARD_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.starts_with(INFO_BOARD_URL_PREFIX))
        .map(str::to_string)
        .collect();

    debug!("Collected {} info-board links", profile.info_board.len());
}
