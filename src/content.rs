use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

use crate::quiz::Question;

static TOPIC_DIR: Dir = include_dir!("src/topics");

/// Base URL of the published hub, for opening a page in the browser
pub const SITE_BASE: &str = "https://python-learning-hub.github.io/";

/// One main page of the hub. Pages with a quiz carry the name of their
/// embedded topic file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInfo {
    pub page: &'static str,
    pub title: &'static str,
    pub keywords: &'static str,
    pub topic: Option<&'static str>,
}

/// Every main page of the hub. The length of this list is the fixed
/// denominator of the completion percentage.
pub const PAGES: &[PageInfo] = &[
    PageInfo {
        page: "unit1.html",
        title: "Unit I - Introduction",
        keywords: "python history features installation ide syntax variables operators data types",
        topic: Some("unit1"),
    },
    PageInfo {
        page: "unit2.html",
        title: "Unit II - Control Structures",
        keywords: "if else elif loops for while break continue pass nested conditions",
        topic: Some("unit2"),
    },
    PageInfo {
        page: "unit3.html",
        title: "Unit III - Data Structures",
        keywords: "list tuple set dictionary comprehension append remove pop sort methods",
        topic: Some("unit3"),
    },
    PageInfo {
        page: "unit4.html",
        title: "Unit IV - Functions & Modules",
        keywords: "function def return arguments lambda recursion module import package pip",
        topic: Some("unit4"),
    },
    PageInfo {
        page: "unit5.html",
        title: "Unit V - File Handling & OOP",
        keywords: "file read write open close exception try except class object inheritance",
        topic: Some("unit5"),
    },
    PageInfo {
        page: "practice.html",
        title: "Practice Questions",
        keywords: "coding practice exercises solutions problems",
        topic: None,
    },
    PageInfo {
        page: "theory.html",
        title: "Theory Questions",
        keywords: "theory viva questions answers exam preparation",
        topic: None,
    },
    PageInfo {
        page: "comparisons.html",
        title: "Comparisons",
        keywords: "list tuple comparison difference vs function method",
        topic: None,
    },
    PageInfo {
        page: "errors.html",
        title: "Common Errors",
        keywords: "error exception syntax runtime name type value index key",
        topic: None,
    },
    PageInfo {
        page: "extras.html",
        title: "Extras",
        keywords: "tips shortcuts best practices resources",
        topic: None,
    },
    PageInfo {
        page: "mcq.html",
        title: "MCQ Question Bank",
        keywords: "mcq multiple choice questions quiz exam test",
        topic: None,
    },
];

pub fn total_known_pages() -> usize {
    PAGES.len()
}

pub fn page_url(page: &str) -> String {
    format!("{SITE_BASE}{page}")
}

pub fn find_page(page: &str) -> Option<&'static PageInfo> {
    PAGES.iter().find(|p| p.page == page)
}

/// A quiz topic: page identity plus its authored question set,
/// embedded in the binary at build time.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct Topic {
    pub name: String,
    pub page: String,
    pub title: String,
    pub keywords: String,
    pub questions: Vec<Question>,
}

impl Topic {
    pub fn new(name: &str) -> Self {
        read_topic_from_file(format!("{name}.json")).unwrap()
    }

    /// Names of every embedded topic, sorted
    pub fn names() -> Vec<String> {
        TOPIC_DIR
            .files()
            .filter_map(|f| {
                f.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .sorted()
            .collect()
    }
}

fn read_topic_from_file(file_name: String) -> Result<Topic, Box<dyn Error>> {
    let file = TOPIC_DIR.get_file(file_name).expect("Topic file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let topic = from_str(file_as_str).expect("Unable to deserialize topic json");

    Ok(topic)
}
