//! Simulated AI service facade.
//!
//! [`AiService`] is the explicitly constructed owner of the status registry,
//! the log buffer, the request counter and the task runner. Views, CLI
//! commands and tests each hold their own instance (or a clone sharing the
//! same state); nothing is process-global.
//!
//! # Examples
//!
//! ```
//! use edusim::services::AiService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = AiService::builder().instant().build();
//!
//! let report = service.analyze_applicants(50).await?;
//! assert!(report.summary.contains("50 applications"));
//!
//! let logs = service.logs().await;
//! assert_eq!(logs[0].module, "ADMISSIONS_AI");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::ServiceResult;
use crate::domain::models::{
    AggregateStats, AnalysisResult, LogEntry, OperationDescriptor, OperationInput, OperationKind,
    ServiceEntry, SimulationConfig,
};
use crate::domain::ports::{DelayStrategy, FailureInjector, MetricsSource};
use crate::infrastructure::simulation::{
    InstantDelay, NoFailures, RandomFailures, RandomMetricsSource, TokioDelay,
};
use crate::services::log_buffer::{LogBuffer, DEFAULT_LOG_CAPACITY};
use crate::services::monitor_poller::MonitorPoller;
use crate::services::operation_catalog;
use crate::services::status_registry::StatusRegistry;
use crate::services::task_runner::TaskRunner;

const DEFAULT_UPTIME: &str = "99.98%";

/// Owned handle onto one simulated service layer.
#[derive(Clone)]
pub struct AiService {
    runner: TaskRunner,
    metrics: Arc<dyn MetricsSource>,
    uptime: Arc<str>,
}

impl AiService {
    pub fn builder() -> AiServiceBuilder {
        AiServiceBuilder::default()
    }

    /// Wire a service from the simulation section of the configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        AiServiceBuilder::from_config(config).build()
    }

    /// Run any catalog operation.
    pub async fn run(&self, kind: OperationKind, input: &OperationInput) -> ServiceResult<AnalysisResult> {
        self.runner.run(kind, input).await
    }

    /// Log buffer contents, newest-first.
    pub async fn logs(&self) -> Vec<LogEntry> {
        self.runner.logs().read_all().await
    }

    /// Every registered service with its current status.
    pub async fn service_statuses(&self) -> Vec<ServiceEntry> {
        self.runner.registry().snapshot_all().await
    }

    /// Recompute the aggregate health snapshot. Mutates nothing.
    pub async fn stats(&self) -> AggregateStats {
        let load = self.metrics.sample();
        AggregateStats {
            cpu_percent: load.cpu_percent,
            memory_percent: load.memory_percent,
            active_microservices: self.runner.registry().active_count().await,
            total_requests: self.runner.total_requests(),
            uptime: self.uptime.to_string(),
        }
    }

    /// Background poller publishing snapshots every `interval`.
    pub fn monitor(&self, interval: Duration) -> MonitorPoller {
        MonitorPoller::new(self.clone(), interval)
    }

    pub fn catalog(&self) -> &'static [OperationDescriptor] {
        operation_catalog::all()
    }

    pub fn registry(&self) -> &StatusRegistry {
        self.runner.registry()
    }

    pub fn log_buffer(&self) -> &LogBuffer {
        self.runner.logs()
    }

    pub fn runner(&self) -> &TaskRunner {
        &self.runner
    }

    // Per-domain operations.

    pub async fn analyze_applicants(&self, applicants: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AnalyzeApplicants, &OperationInput::new().with_count(applicants))
            .await
    }

    pub async fn forecast_budget(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::ForecastBudget, &OperationInput::new()).await
    }

    pub async fn screen_candidates(&self, candidates: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::ScreenCandidates, &OperationInput::new().with_count(candidates))
            .await
    }

    pub async fn recommend_courses(&self, subject: &str) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::RecommendCourses, &OperationInput::new().with_subject(subject))
            .await
    }

    pub async fn optimize_routes(&self, buses: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::OptimizeRoutes, &OperationInput::new().with_count(buses))
            .await
    }

    pub async fn predict_restock(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::PredictRestock, &OperationInput::new()).await
    }

    pub async fn screen_health_records(&self, records: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::ScreenHealthRecords, &OperationInput::new().with_count(records))
            .await
    }

    pub async fn match_clubs(&self, students: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::MatchClubs, &OperationInput::new().with_count(students))
            .await
    }

    pub async fn engage_alumni(&self, alumni: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::EngageAlumni, &OperationInput::new().with_count(alumni))
            .await
    }

    pub async fn generate_exam(&self, subject: &str, questions: u32) -> ServiceResult<AnalysisResult> {
        let input = OperationInput::new().with_subject(subject).with_count(questions);
        self.run(OperationKind::GenerateExam, &input).await
    }

    pub async fn optimize_timetable(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::OptimizeTimetable, &OperationInput::new()).await
    }

    pub async fn balance_classes(&self, sections: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::BalanceClasses, &OperationInput::new().with_count(sections))
            .await
    }

    pub async fn assess_student_risk(&self, students: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AssessStudentRisk, &OperationInput::new().with_count(students))
            .await
    }

    pub async fn evaluate_teachers(&self, teachers: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::EvaluateTeachers, &OperationInput::new().with_count(teachers))
            .await
    }

    pub async fn analyze_attendance(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AnalyzeAttendance, &OperationInput::new()).await
    }

    pub async fn analyze_grades(&self, subject: &str) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AnalyzeGrades, &OperationInput::new().with_subject(subject))
            .await
    }

    pub async fn plan_event(&self, event: &str) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::PlanEvent, &OperationInput::new().with_subject(event))
            .await
    }

    pub async fn plan_menu(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::PlanMenu, &OperationInput::new()).await
    }

    pub async fn allocate_rooms(&self, residents: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AllocateRooms, &OperationInput::new().with_count(residents))
            .await
    }

    pub async fn analyze_sentiment(&self, responses: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AnalyzeSentiment, &OperationInput::new().with_count(responses))
            .await
    }

    pub async fn summarize_research(&self, topic: &str) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::SummarizeResearch, &OperationInput::new().with_subject(topic))
            .await
    }

    pub async fn assess_wellbeing(&self, students: u32) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::AssessWellbeing, &OperationInput::new().with_count(students))
            .await
    }

    pub async fn match_universities(&self, destination: &str, students: u32) -> ServiceResult<AnalysisResult> {
        let input = OperationInput::new().with_subject(destination).with_count(students);
        self.run(OperationKind::MatchUniversities, &input).await
    }

    pub async fn generate_strategy(&self) -> ServiceResult<AnalysisResult> {
        self.run(OperationKind::GenerateStrategy, &OperationInput::new()).await
    }
}

/// Builder for [`AiService`]; every port has a production default.
pub struct AiServiceBuilder {
    delay: Arc<dyn DelayStrategy>,
    failures: Arc<dyn FailureInjector>,
    metrics: Arc<dyn MetricsSource>,
    log_capacity: usize,
    uptime: String,
}

impl Default for AiServiceBuilder {
    fn default() -> Self {
        Self {
            delay: Arc::new(TokioDelay::default()),
            failures: Arc::new(NoFailures),
            metrics: Arc::new(RandomMetricsSource::default()),
            log_capacity: DEFAULT_LOG_CAPACITY,
            uptime: DEFAULT_UPTIME.to_string(),
        }
    }
}

impl AiServiceBuilder {
    /// Builder preloaded from configuration, for callers that override a port.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let failures: Arc<dyn FailureInjector> = if config.failure_rate > 0.0 {
            Arc::new(RandomFailures::new(config.failure_rate))
        } else {
            Arc::new(NoFailures)
        };

        Self::default()
            .delay(Arc::new(TokioDelay::new(config.delay_scale)))
            .failures(failures)
            .log_capacity(config.log_capacity)
            .uptime(config.uptime.clone())
    }

    pub fn delay(mut self, delay: Arc<dyn DelayStrategy>) -> Self {
        self.delay = delay;
        self
    }

    /// Report nominal latencies without waiting.
    pub fn instant(self) -> Self {
        self.delay(Arc::new(InstantDelay))
    }

    pub fn failures(mut self, failures: Arc<dyn FailureInjector>) -> Self {
        self.failures = failures;
        self
    }

    pub fn metrics(mut self, metrics: Arc<dyn MetricsSource>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn uptime(mut self, uptime: impl Into<String>) -> Self {
        self.uptime = uptime.into();
        self
    }

    pub fn build(self) -> AiService {
        let registry = StatusRegistry::from_entries(operation_catalog::initial_services());
        let logs = LogBuffer::new(self.log_capacity);

        AiService {
            runner: TaskRunner::new(registry, logs, self.delay, self.failures),
            metrics: self.metrics,
            uptime: Arc::from(self.uptime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{LogLevel, ServiceStatus};
    use crate::infrastructure::simulation::FixedMetricsSource;

    fn instant_service() -> AiService {
        AiService::builder()
            .instant()
            .metrics(Arc::new(FixedMetricsSource::new(35.0, 52.0)))
            .build()
    }

    #[tokio::test]
    async fn test_all_services_registered_at_start() {
        let service = instant_service();
        let statuses = service.service_statuses().await;

        assert_eq!(statuses.len(), 27);
        assert_eq!(statuses[0].key, "admissionsAI");
        assert!(statuses
            .iter()
            .filter(|e| e.status == ServiceStatus::Running)
            .all(|e| operation_catalog::ALWAYS_ON_SERVICES.contains(&e.key.as_str())));
    }

    #[tokio::test]
    async fn test_analyze_applicants_scenario() {
        let service = instant_service();

        let result = service.analyze_applicants(50).await.unwrap();

        assert!(!result.title.is_empty());
        assert!(result.summary.contains('%'));
        assert!(!result.recommendations.is_empty());
        let logs = service.logs().await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, LogLevel::Success);
        assert_eq!(logs[0].module, "ADMISSIONS_AI");
    }

    #[tokio::test]
    async fn test_stats_reflect_registry_and_counter() {
        let service = instant_service();

        let before = service.stats().await;
        assert_eq!(before.active_microservices, 3);
        assert_eq!(before.total_requests, 0);
        assert_eq!(before.uptime, "99.98%");
        assert!((before.cpu_percent - 35.0).abs() < f64::EPSILON);

        service.plan_menu().await.unwrap();
        service.registry().set("hrAI", ServiceStatus::Processing).await.unwrap();

        let after = service.stats().await;
        assert_eq!(after.total_requests, 1);
        assert_eq!(after.active_microservices, 4);
    }

    #[tokio::test]
    async fn test_stats_do_not_count_as_requests() {
        let service = instant_service();
        for _ in 0..3 {
            service.stats().await;
        }
        assert_eq!(service.stats().await.total_requests, 0);
    }

    #[tokio::test]
    async fn test_from_config_applies_capacity_and_uptime() {
        let config = SimulationConfig {
            delay_scale: 0.0,
            failure_rate: 0.0,
            log_capacity: 2,
            uptime: "100%".to_string(),
        };
        let service = AiService::from_config(&config);

        for _ in 0..3 {
            service.plan_menu().await.unwrap();
        }
        assert_eq!(service.logs().await.len(), 2);
        assert_eq!(service.stats().await.uptime, "100%");
    }

    #[tokio::test]
    async fn test_from_config_with_certain_failure() {
        let config = SimulationConfig {
            delay_scale: 0.0,
            failure_rate: 1.0,
            ..SimulationConfig::default()
        };
        let service = AiService::from_config(&config);

        assert!(service.forecast_budget().await.is_err());
        assert_eq!(service.logs().await[0].level, LogLevel::Error);
        assert_eq!(
            service.registry().get("financeAI").await.unwrap(),
            ServiceStatus::Idle
        );
    }

    #[tokio::test]
    async fn test_every_wrapper_hits_its_own_module() {
        let service = instant_service();

        service.analyze_applicants(10).await.unwrap();
        service.forecast_budget().await.unwrap();
        service.screen_candidates(5).await.unwrap();
        service.recommend_courses("History").await.unwrap();
        service.optimize_routes(4).await.unwrap();
        service.predict_restock().await.unwrap();
        service.screen_health_records(100).await.unwrap();
        service.match_clubs(30).await.unwrap();
        service.engage_alumni(120).await.unwrap();
        service.generate_exam("Chemistry", 15).await.unwrap();
        service.optimize_timetable().await.unwrap();
        service.balance_classes(5).await.unwrap();
        service.assess_student_risk(90).await.unwrap();
        service.evaluate_teachers(18).await.unwrap();
        service.analyze_attendance().await.unwrap();
        service.analyze_grades("Biology").await.unwrap();
        service.plan_event("Sports Day").await.unwrap();
        service.plan_menu().await.unwrap();
        service.allocate_rooms(40).await.unwrap();
        service.analyze_sentiment(75).await.unwrap();
        service.summarize_research("Climate").await.unwrap();
        service.assess_wellbeing(50).await.unwrap();
        service.match_universities("Germany", 6).await.unwrap();
        service.generate_strategy().await.unwrap();

        let logs = service.logs().await;
        assert_eq!(logs.len(), 24);
        // Newest-first, so reversed catalog order.
        let modules: Vec<_> = logs.iter().rev().map(|e| e.module.as_str()).collect();
        let expected: Vec<_> = service.catalog().iter().map(|d| d.module).collect();
        assert_eq!(modules, expected);
        assert_eq!(service.stats().await.total_requests, 24);
    }
}
