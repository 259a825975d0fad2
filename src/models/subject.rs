use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// 成绩单中的一门科目，只保留计算 SGPA 所需字段
///
/// 其他字段（课程代码、名称、分数）保留在原始数据中，
/// 这里不处理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    #[serde(default, deserialize_with = "deserialize_credit")]
    pub credit: f64,

    #[serde(default, deserialize_with = "deserialize_grade")]
    pub grade: String,
}

impl SubjectRecord {
    pub fn new(credit: f64, grade: impl Into<String>) -> Self {
        Self {
            credit,
            grade: grade.into(),
        }
    }
}

/// 将上游的学分值转换为数字
///
/// 数字和数字字符串按原值处理；其余情况（null、布尔值、
/// 非数字字符串、负数、非有限值）一律为 0
pub fn to_credit(value: &JsonValue) -> f64 {
    let credit = match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(0.0),
        JsonValue::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if credit.is_finite() && credit > 0.0 {
        credit
    } else {
        0.0
    }
}

fn deserialize_credit<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(to_credit(&value))
}

// 成绩可能为 null，部分成绩单中也可能是数字
fn deserialize_grade<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_credit() {
        assert_eq!(to_credit(&json!(4)), 4.0);
        assert_eq!(to_credit(&json!(1.5)), 1.5);
        assert_eq!(to_credit(&json!("4")), 4.0);
        assert_eq!(to_credit(&json!(" 3 ")), 3.0);
        assert_eq!(to_credit(&json!("x")), 0.0);
        assert_eq!(to_credit(&json!(null)), 0.0);
        assert_eq!(to_credit(&json!(true)), 0.0);
        assert_eq!(to_credit(&json!(-2)), 0.0);
        assert_eq!(to_credit(&json!("NaN")), 0.0);
    }

    #[test]
    fn test_deserialize_full_subject_line() {
        let subject: SubjectRecord = serde_json::from_value(json!({
            "subjectCode": "100101",
            "subjectName": "Physics",
            "ese": 45,
            "ia": 20,
            "total": 65,
            "grade": "B+",
            "credit": "3"
        }))
        .unwrap();
        assert_eq!(subject, SubjectRecord::new(3.0, "B+"));
    }

    #[test]
    fn test_missing_fields_default() {
        let subject: SubjectRecord = serde_json::from_value(json!({ "grade": null })).unwrap();
        assert_eq!(subject, SubjectRecord::new(0.0, ""));
    }

    #[test]
    fn test_only_credit_key_is_read() {
        let subject: SubjectRecord =
            serde_json::from_value(json!({ "credit": 3, "credits": 5, "grade": "A" })).unwrap();
        assert_eq!(subject, SubjectRecord::new(3.0, "A"));

        let subject: SubjectRecord =
            serde_json::from_value(json!({ "credits": 2, "grade": "A" })).unwrap();
        assert_eq!(subject.credit, 0.0);
    }
}
