//! Ordered log of pipeline step outcomes.
//!
//! The driver narrates to the console as it goes; the report exists so tests
//! can assert on what happened instead of scraping that narration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RuntimeDiscovery,
    VersionCheck,
    CreateEnvironment,
    InstallDependencies,
    SeedConfiguration,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::RuntimeDiscovery => "runtime discovery",
            Step::VersionCheck => "version check",
            Step::CreateEnvironment => "create environment",
            Step::InstallDependencies => "install dependencies",
            Step::SeedConfiguration => "seed configuration",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepRecord {
    pub step: Step,
    pub detail: String,
}

/// Records of the steps that completed, in execution order. A failed run's
/// report stops at the last successful step.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    records: Vec<StepRecord>,
}

impl BootstrapReport {
    pub fn record(&mut self, step: Step, detail: impl Into<String>) {
        self.records.push(StepRecord {
            step,
            detail: detail.into(),
        });
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn completed(&self, step: Step) -> bool {
        self.records.iter().any(|record| record.step == step)
    }
}
