#![allow(dead_code)]

use beu_result_proxy::Config;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const RESULT_PATH: &str = "/backend/v1/result/get-result";

pub fn config_for(server: &ServerGuard) -> Config {
    Config {
        result_api_base_url: server.url(),
        fetch_timeout_secs: 5,
        ..Config::default()
    }
}

/// Successful upstream body for one semester
pub fn sheet(theory: Value, practical: Value, cgpa: Option<&str>) -> String {
    let mut data = json!({
        "name": "TEST STUDENT",
        "redg_no": "21101001",
        "theorySubjects": theory,
        "practicalSubjects": practical,
    });
    if let Some(cgpa) = cgpa {
        data["cgpa"] = json!(cgpa);
    }
    json!({ "status": 200, "message": "Success", "data": data }).to_string()
}

/// Mock one semester's lookup for the student used throughout the tests
pub async fn mock_semester(
    server: &mut ServerGuard,
    semester: &str,
    exam: &str,
    body: String,
    hits: usize,
) -> Mock {
    server
        .mock("GET", RESULT_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("year".into(), "2023".into()),
            Matcher::UrlEncoded("redg_no".into(), "21101001".into()),
            Matcher::UrlEncoded("semester".into(), semester.into()),
            Matcher::UrlEncoded("exam_held".into(), exam.into()),
        ]))
        .match_header("user-agent", Matcher::Regex("^Mozilla/5.0".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}
