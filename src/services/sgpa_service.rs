//! SGPA 计算 - 业务能力层
//!
//! 只做科目的加权计算，不关心 HTTP 和学期

use crate::error::AppResult;
use crate::models::{grade_point, is_known_grade, SemesterResult, Sgpa, SubjectRecord};
use tracing::debug;

/// 按学分加权的平均绩点
///
/// 总学分为 0（包括空列表）时返回 `None`，
/// 表示"无可计算"，而不是平均值为 0
pub fn compute_sgpa(subjects: &[SubjectRecord]) -> Option<Sgpa> {
    let (total_credits, total_points) =
        subjects
            .iter()
            .fold((0.0_f64, 0.0_f64), |(credits, points), subject| {
                if !is_known_grade(&subject.grade) {
                    debug!("unrecognized grade '{}' counted as 0 points", subject.grade);
                }
                (
                    credits + subject.credit,
                    points + subject.credit * grade_point(&subject.grade),
                )
            });

    if total_credits > 0.0 {
        Some(Sgpa::rounded(total_points / total_credits))
    } else {
        None
    }
}

/// 理论课与实践课合并计算 SGPA
pub fn semester_sgpa(result: &SemesterResult) -> AppResult<Option<Sgpa>> {
    let subjects = result.all_subjects()?;
    Ok(compute_sgpa(&subjects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subjects(pairs: &[(f64, &str)]) -> Vec<SubjectRecord> {
        pairs
            .iter()
            .map(|(credit, grade)| SubjectRecord::new(*credit, *grade))
            .collect()
    }

    #[test]
    fn test_weighted_average() {
        // (4*8 + 2*7) / 6 = 7.666..
        let sgpa = compute_sgpa(&subjects(&[(4.0, "A"), (2.0, "B+")])).unwrap();
        assert_eq!(sgpa.to_string(), "7.67");
        assert_eq!(sgpa.value(), 7.67);
    }

    #[test]
    fn test_zero_credits_is_none() {
        assert_eq!(compute_sgpa(&[]), None);
        assert_eq!(compute_sgpa(&subjects(&[(0.0, "O"), (0.0, "A")])), None);
    }

    #[test]
    fn test_all_fail_is_zero_not_none() {
        let sgpa = compute_sgpa(&subjects(&[(3.0, "F")])).unwrap();
        assert_eq!(sgpa.to_string(), "0.00");
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut list = subjects(&[(4.0, "A"), (3.0, "B"), (2.0, "O"), (1.0, "C"), (1.5, "P")]);
        let forward = compute_sgpa(&list);
        list.reverse();
        assert_eq!(compute_sgpa(&list), forward);
        list.rotate_left(2);
        assert_eq!(compute_sgpa(&list), forward);
    }

    #[test]
    fn test_unknown_grade_counts_credit_with_zero_points() {
        // (4*8 + 4*0) / 8 = 4.00
        let sgpa = compute_sgpa(&subjects(&[(4.0, "A"), (4.0, "XYZ")])).unwrap();
        assert_eq!(sgpa.to_string(), "4.00");
    }

    #[test]
    fn test_semester_sgpa_from_sheet() {
        let sheet = match json!({
            "theorySubjects": [
                { "credit": "4", "grade": "A" },
                { "credit": 3, "grade": "O" }
            ],
            "practicalSubjects": [
                { "credit": 1, "grade": "B" },
                { "credit": "n/a", "grade": "A+" }
            ]
        }) {
            serde_json::Value::Object(map) => SemesterResult::new(map),
            _ => unreachable!(),
        };
        // (32 + 30 + 6) / 8 = 8.50
        let sgpa = semester_sgpa(&sheet).unwrap().unwrap();
        assert_eq!(sgpa.to_string(), "8.50");
    }
}
