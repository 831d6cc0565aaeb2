//! Personal-info page extractor.
//!
//! Unlike the home page, the personal-info page spreads its label/value rows
//! over several tables, and the phone numbers live in form input fields
//! rather than table cells.

use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::PersonalInfo;
use crate::parse::table::{scan_label_rows, ROW_SELECTOR};
use crate::utils::parse_selector_unsafe;

const INPUT_SELECTOR_STR: &str = "input[name]";

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(INPUT_SELECTOR_STR, "INPUT_SELECTOR"));

/// Input-field names whose values are collected into the `phones` list.
const PHONE_LIST_FIELDS: [&str; 7] = [
    "phone1",
    "phone2",
    "phone3",
    "phone4",
    "mobile1",
    "mobile2",
    "home_phone",
];

/// Parses the personal-info page into a [`PersonalInfo`].
///
/// Missing or malformed markup never fails; absent fields stay unset.
pub fn parse_personal_info(html: &str) -> PersonalInfo {
    let document = Html::parse_document(html);
    let mut info = PersonalInfo::default();

    // Rows of every table on the page, in document order.
    scan_label_rows(document.select(&ROW_SELECTOR), |label, value| match label {
        "Gender" => info.gender = Some(value),
        "Status" => info.status = Some(value),
        "Tuition Type" => info.tuition_type = Some(value),
        "Registration Date" => info.registration_date = Some(value),
        "Registration Reason" => info.registration_reason = Some(value),
        "Father Name" => info.father_name = Some(value),
        "Mother Name" => info.mother_name = Some(value),
        "Birth Date" => info.birth_date = Some(value),
        _ => {}
    });

    extract_phones(&document, &mut info);

    info
}

/// Collects phone numbers from the page's input fields.
///
/// List fields feed `phones` in document order, empty values skipped. The
/// three singular fields land on their own record fields; absent or empty
/// inputs leave them unset.
fn extract_phones(document: &Html, info: &mut PersonalInfo) {
    for input in document.select(&INPUT_SELECTOR) {
        let element = input.value();
        let Some(name) = element.attr("name") else {
            continue;
        };
        let Some(value) = element.attr("value") else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        if PHONE_LIST_FIELDS.contains(&name) {
            info.phones.push(value.to_string());
        }

        match name {
            "father_phone" => info.father_phone = Some(value.to_string()),
            "mother_phone" => info.mother_phone = Some(value.to_string()),
            "graduate_phone" => info.graduate_phone = Some(value.to_string()),
            _ => {}
        }
    }

    debug!("Collected {} phone numbers", info.phones.len());
}
