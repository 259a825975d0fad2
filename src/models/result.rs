//! 成绩单数据与汇总结果

use super::{Semester, SubjectRecord};
use crate::error::{AppError, AppResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// 上游原始字段，原样透传
pub type UpstreamPayload = Map<String, JsonValue>;

const THEORY_KEY: &str = "theorySubjects";
const PRACTICAL_KEY: &str = "practicalSubjects";
const CGPA_KEY: &str = "cgpa";

/// 单个学期查询成功后的 `data` 对象
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterResult {
    payload: UpstreamPayload,
}

impl SemesterResult {
    pub fn new(payload: UpstreamPayload) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &UpstreamPayload {
        &self.payload
    }

    pub fn into_payload(self) -> UpstreamPayload {
        self.payload
    }

    pub fn theory_subjects(&self) -> AppResult<Vec<SubjectRecord>> {
        self.subject_list(THEORY_KEY)
    }

    pub fn practical_subjects(&self) -> AppResult<Vec<SubjectRecord>> {
        self.subject_list(PRACTICAL_KEY)
    }

    /// 理论课与实践课合并为一个列表
    pub fn all_subjects(&self) -> AppResult<Vec<SubjectRecord>> {
        let mut subjects = self.theory_subjects()?;
        subjects.extend(self.practical_subjects()?);
        Ok(subjects)
    }

    /// 上游提供的 CGPA（如果有）
    pub fn cgpa(&self) -> Option<&JsonValue> {
        self.payload.get(CGPA_KEY).filter(|v| !v.is_null())
    }

    // 缺失或 null 视为空列表，其余必须是对象数组
    fn subject_list(&self, key: &str) -> AppResult<Vec<SubjectRecord>> {
        match self.payload.get(key) {
            None | Some(JsonValue::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
                AppError::MalformedPayload {
                    field: key.to_string(),
                    source,
                }
            }),
        }
    }
}

/// 学期平均绩点，保留两位小数
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Sgpa(f64);

impl Sgpa {
    /// 四舍五入到两位小数
    pub fn rounded(value: f64) -> Self {
        Sgpa((value * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Sgpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// 序列化时固定两位小数："8.00" 而不是 8
impl Serialize for Sgpa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSgpa {
    pub semester: Semester,
    pub sgpa: Sgpa,
}

/// 本服务在上游数据之上附加的字段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedFields {
    /// 请求学期自身的 SGPA；无学分时为 `null`
    pub sgpa: Option<Sgpa>,
    /// 上游 CGPA 或 `null`
    pub cgpa: Option<JsonValue>,
    /// 每个可计算 SGPA 的学期一条，按 I..VIII 排序
    pub semester_wise_sgpa: Vec<SemesterSgpa>,
}

impl ComputedFields {
    const KEYS: [&'static str; 3] = ["sgpa", "cgpa", "semester_wise_sgpa"];
}

/// 请求学期的原始数据与计算字段合并后的结果
///
/// 序列化为一个扁平对象：先上游字段，后计算字段；
/// 同名字段以计算结果为准
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    upstream: UpstreamPayload,
    computed: ComputedFields,
}

impl AggregatedResult {
    pub fn merge(requested: SemesterResult, computed: ComputedFields) -> Self {
        Self {
            upstream: requested.into_payload(),
            computed,
        }
    }

    pub fn computed(&self) -> &ComputedFields {
        &self.computed
    }
}

impl Serialize for AggregatedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let passthrough = self
            .upstream
            .iter()
            .filter(|(key, _)| !ComputedFields::KEYS.contains(&key.as_str()));

        let mut map = serializer.serialize_map(None)?;
        for (key, value) in passthrough {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("sgpa", &self.computed.sgpa)?;
        map.serialize_entry("cgpa", &self.computed.cgpa)?;
        map.serialize_entry("semester_wise_sgpa", &self.computed.semester_wise_sgpa)?;
        map.end()
    }
}
