//! 等级 → 绩点对照表

use phf::phf_map;

/// 成绩单使用的十分制
static GRADE_POINTS: phf::Map<&'static str, f64> = phf_map! {
    "O" => 10.0,
    "A+" => 9.0,
    "A" => 8.0,
    "B+" => 7.0,
    "B" => 6.0,
    "C" => 5.0,
    "D" => 4.0,
    "P" => 4.0,
    "F" => 0.0,
};

/// 获取等级对应的绩点
///
/// 先去除空白并转大写；表中不存在的等级记为 0，
/// 单个异常等级不会中断汇总
pub fn grade_point(grade: &str) -> f64 {
    let normalized = grade.trim().to_ascii_uppercase();
    GRADE_POINTS.get(normalized.as_str()).copied().unwrap_or(0.0)
}

/// 是否为已知等级
pub fn is_known_grade(grade: &str) -> bool {
    GRADE_POINTS.contains_key(grade.trim().to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_grades() {
        assert_eq!(grade_point("O"), 10.0);
        assert_eq!(grade_point("A+"), 9.0);
        assert_eq!(grade_point("A"), 8.0);
        assert_eq!(grade_point("B+"), 7.0);
        assert_eq!(grade_point("F"), 0.0);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(grade_point(" a+ "), 9.0);
        assert_eq!(grade_point("b"), 6.0);
        assert!(is_known_grade("p"));
    }

    #[test]
    fn test_unknown_grade_is_zero() {
        assert_eq!(grade_point("AB"), 0.0);
        assert_eq!(grade_point(""), 0.0);
        assert_eq!(grade_point("Z"), 0.0);
        assert!(!is_known_grade("AB"));
    }
}
