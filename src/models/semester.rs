use serde::{Serialize, Serializer};

/// 学期标签，顺序即汇总顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Semester {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl Semester {
    /// 学期查询的固定顺序
    pub const ALL: [Semester; 8] = [
        Semester::I,
        Semester::II,
        Semester::III,
        Semester::IV,
        Semester::V,
        Semester::VI,
        Semester::VII,
        Semester::VIII,
    ];

    /// 成绩服务使用的罗马数字标签
    pub fn label(self) -> &'static str {
        match self {
            Semester::I => "I",
            Semester::II => "II",
            Semester::III => "III",
            Semester::IV => "IV",
            Semester::V => "V",
            Semester::VI => "VI",
            Semester::VII => "VII",
            Semester::VIII => "VIII",
        }
    }

    /// 解析标签（忽略大小写和首尾空白）
    pub fn from_label(s: &str) -> Option<Self> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|sem| sem.label() == upper)
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Semester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
