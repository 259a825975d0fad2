pub mod grade;
pub mod query;
pub mod result;
pub mod semester;
pub mod subject;

pub use grade::{grade_point, is_known_grade};
pub use query::SemesterQuery;
pub use result::{
    AggregatedResult, ComputedFields, SemesterResult, SemesterSgpa, Sgpa, UpstreamPayload,
};
pub use semester::Semester;
pub use subject::{to_credit, SubjectRecord};
