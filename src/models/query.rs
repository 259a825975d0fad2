use super::Semester;
use std::fmt::Display;

/// 定位一张成绩单的四个参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterQuery {
    /// 考试年份，如 `2023`
    pub year: String,
    /// 注册号
    pub reg_no: String,
    /// 发送给上游的学期标签
    pub semester: String,
    /// 考试场次，自由文本（如 `Nov/2023`）
    pub exam_held: String,
}

impl SemesterQuery {
    pub fn new(
        year: impl Into<String>,
        reg_no: impl Into<String>,
        semester: impl Into<String>,
        exam_held: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            reg_no: reg_no.into(),
            semester: semester.into(),
            exam_held: exam_held.into(),
        }
    }

    /// 同一学生、同一场次，换一个学期
    pub fn for_semester(&self, semester: Semester) -> Self {
        Self {
            semester: semester.label().to_string(),
            ..self.clone()
        }
    }
}

impl Display for SemesterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[reg#{} year#{} sem#{} exam#{}]",
            self.reg_no, self.year, self.semester, self.exam_held
        )
    }
}
