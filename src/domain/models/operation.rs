//! Simulated AI operations and their static descriptors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::analysis::AnalysisResult;
use super::log_entry::LogLevel;

/// Every simulated operation exposed to the dashboard, one per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    AnalyzeApplicants,
    ForecastBudget,
    ScreenCandidates,
    RecommendCourses,
    OptimizeRoutes,
    PredictRestock,
    ScreenHealthRecords,
    MatchClubs,
    EngageAlumni,
    GenerateExam,
    OptimizeTimetable,
    BalanceClasses,
    AssessStudentRisk,
    EvaluateTeachers,
    AnalyzeAttendance,
    AnalyzeGrades,
    PlanEvent,
    PlanMenu,
    AllocateRooms,
    AnalyzeSentiment,
    SummarizeResearch,
    AssessWellbeing,
    MatchUniversities,
    GenerateStrategy,
}

impl OperationKind {
    /// All operations in catalog order.
    pub const ALL: [Self; 24] = [
        Self::AnalyzeApplicants,
        Self::ForecastBudget,
        Self::ScreenCandidates,
        Self::RecommendCourses,
        Self::OptimizeRoutes,
        Self::PredictRestock,
        Self::ScreenHealthRecords,
        Self::MatchClubs,
        Self::EngageAlumni,
        Self::GenerateExam,
        Self::OptimizeTimetable,
        Self::BalanceClasses,
        Self::AssessStudentRisk,
        Self::EvaluateTeachers,
        Self::AnalyzeAttendance,
        Self::AnalyzeGrades,
        Self::PlanEvent,
        Self::PlanMenu,
        Self::AllocateRooms,
        Self::AnalyzeSentiment,
        Self::SummarizeResearch,
        Self::AssessWellbeing,
        Self::MatchUniversities,
        Self::GenerateStrategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzeApplicants => "analyze-applicants",
            Self::ForecastBudget => "forecast-budget",
            Self::ScreenCandidates => "screen-candidates",
            Self::RecommendCourses => "recommend-courses",
            Self::OptimizeRoutes => "optimize-routes",
            Self::PredictRestock => "predict-restock",
            Self::ScreenHealthRecords => "screen-health-records",
            Self::MatchClubs => "match-clubs",
            Self::EngageAlumni => "engage-alumni",
            Self::GenerateExam => "generate-exam",
            Self::OptimizeTimetable => "optimize-timetable",
            Self::BalanceClasses => "balance-classes",
            Self::AssessStudentRisk => "assess-student-risk",
            Self::EvaluateTeachers => "evaluate-teachers",
            Self::AnalyzeAttendance => "analyze-attendance",
            Self::AnalyzeGrades => "analyze-grades",
            Self::PlanEvent => "plan-event",
            Self::PlanMenu => "plan-menu",
            Self::AllocateRooms => "allocate-rooms",
            Self::AnalyzeSentiment => "analyze-sentiment",
            Self::SummarizeResearch => "summarize-research",
            Self::AssessWellbeing => "assess-wellbeing",
            Self::MatchUniversities => "match-universities",
            Self::GenerateStrategy => "generate-strategy",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.as_str() == normalized)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied parameters interpolated into canned results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInput {
    /// Number of records the caller asks to analyze
    pub count: Option<u32>,
    /// Free-text subject such as a course or event name
    pub subject: Option<String>,
}

impl OperationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Count or a per-operation fallback.
    pub fn count_or(&self, default: u32) -> u32 {
        self.count.unwrap_or(default)
    }

    /// Subject or a per-operation fallback.
    pub fn subject_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.subject.as_deref().unwrap_or(default)
    }
}

/// Nominal simulated latency of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DelaySpec {
    /// Always the same duration
    Fixed { ms: u64 },
    /// Uniformly drawn from `[min_ms, max_ms]`
    Jitter { min_ms: u64, max_ms: u64 },
}

impl DelaySpec {
    pub const fn fixed(ms: u64) -> Self {
        Self::Fixed { ms }
    }

    pub const fn jitter(min_ms: u64, max_ms: u64) -> Self {
        Self::Jitter { min_ms, max_ms }
    }

    /// Pick a concrete duration for one invocation.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            Self::Fixed { ms } => Duration::from_millis(ms),
            Self::Jitter { min_ms, max_ms } if min_ms >= max_ms => Duration::from_millis(min_ms),
            Self::Jitter { min_ms, max_ms } => Duration::from_millis(rng.gen_range(min_ms..=max_ms)),
        }
    }

    /// Upper bound of the nominal delay.
    pub fn max_ms(&self) -> u64 {
        match *self {
            Self::Fixed { ms } => ms,
            Self::Jitter { max_ms, .. } => max_ms,
        }
    }
}

impl fmt::Display for DelaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { ms } => write!(f, "{ms}ms"),
            Self::Jitter { min_ms, max_ms } => write!(f, "{min_ms}-{max_ms}ms"),
        }
    }
}

/// Builds the canned result of an operation from the caller's input.
pub type ResultBuilder = fn(&OperationInput) -> AnalysisResult;

/// Static description of one operation, driven through the task runner.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    /// Domain shown in listings, e.g. `admissions`
    pub domain: &'static str,
    /// Registry key of the simulated microservice
    pub service_key: &'static str,
    /// Module name written to the log buffer
    pub module: &'static str,
    /// Severity of the success log entry
    pub level: LogLevel,
    pub delay: DelaySpec,
    /// Message of the success log entry
    pub message: &'static str,
    pub build: ResultBuilder,
}
