//! File-based Snapshot Repository Adapter
//!
//! Reads one user's cycle history from a JSON or YAML file, chosen by the
//! file extension. Dates are stored as `YYYY-MM-DD` strings and converted to
//! day numbers on load.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use super::InMemoryCycleRepository;
use crate::domain::cycle::{
    CycleInput, OvulationDay, OvulationTest, OvulationTestResult, PeriodRecord, PeriodSettings,
    PillPackage, PillSettings, PregnancyInfo,
};
use crate::domain::foundation::{day_number_from_date, DayNumber, DomainError, ErrorCode, PeriodId};
use crate::ports::CycleRepository;

/// Serialization format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            _ => Err(DomainError::new(
                ErrorCode::SnapshotInvalid,
                "Snapshot file must end in .json, .yaml or .yml",
            )
            .with_detail("path", path.display().to_string())),
        }
    }
}

/// Settings applied when a snapshot omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDefaults {
    pub settings: PeriodSettings,
    pub pill_settings: PillSettings,
}

/// Repository backed by a snapshot file, loaded once.
#[derive(Debug, Clone)]
pub struct SnapshotFileRepository {
    inner: InMemoryCycleRepository,
}

impl SnapshotFileRepository {
    /// Loads and validates the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// - `RepositoryUnavailable` if the file cannot be read
    /// - `SnapshotInvalid` if it cannot be parsed or holds inverted periods
    pub async fn load<P: AsRef<Path>>(
        path: P,
        defaults: SnapshotDefaults,
    ) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let format = SnapshotFormat::from_path(&path)?;

        let raw = fs::read_to_string(&path).await.map_err(|e| {
            DomainError::new(ErrorCode::RepositoryUnavailable, e.to_string())
                .with_detail("path", path.display().to_string())
        })?;

        let dto: SnapshotDto = match format {
            SnapshotFormat::Json => serde_json::from_str(&raw).map_err(|e| e.to_string()),
            SnapshotFormat::Yaml => serde_yaml::from_str(&raw).map_err(|e| e.to_string()),
        }
        .map_err(|reason| {
            DomainError::new(ErrorCode::SnapshotInvalid, reason)
                .with_detail("path", path.display().to_string())
        })?;

        let input = dto.into_input(defaults).map_err(|e| {
            DomainError::new(ErrorCode::SnapshotInvalid, e.message)
                .with_detail("path", path.display().to_string())
        })?;

        tracing::info!(
            path = %path.display(),
            periods = input.periods.len(),
            "Loaded cycle snapshot"
        );

        Ok(Self {
            inner: InMemoryCycleRepository::from_input(input),
        })
    }

}

#[async_trait]
impl CycleRepository for SnapshotFileRepository {
    async fn get_periods(&self) -> Result<Vec<PeriodRecord>, DomainError> {
        self.inner.get_periods().await
    }

    async fn get_periods_between(
        &self,
        from_date: DayNumber,
        to_date: DayNumber,
    ) -> Result<Vec<PeriodRecord>, DomainError> {
        self.inner.get_periods_between(from_date, to_date).await
    }

    async fn get_last_period_before(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError> {
        self.inner.get_last_period_before(date).await
    }

    async fn get_first_period_after(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError> {
        self.inner.get_first_period_after(date).await
    }

    async fn get_period_settings(&self) -> Result<PeriodSettings, DomainError> {
        self.inner.get_period_settings().await
    }

    async fn get_ovulation_tests(&self) -> Result<Vec<OvulationTest>, DomainError> {
        self.inner.get_ovulation_tests().await
    }

    async fn get_user_ovulation_days(&self) -> Result<Vec<OvulationDay>, DomainError> {
        self.inner.get_user_ovulation_days().await
    }

    async fn get_pill_packages(&self) -> Result<Vec<PillPackage>, DomainError> {
        self.inner.get_pill_packages().await
    }

    async fn get_pill_settings(&self) -> Result<PillSettings, DomainError> {
        self.inner.get_pill_settings().await
    }

    async fn get_active_pregnancy(&self) -> Result<Option<PregnancyInfo>, DomainError> {
        self.inner.get_active_pregnancy().await
    }
}

// === File layout ===

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SnapshotDto {
    periods: Vec<PeriodDto>,
    settings: Option<PeriodSettings>,
    ovulation_tests: Vec<OvulationTestDto>,
    ovulation_days: Vec<NaiveDate>,
    pill_packages: Vec<PillPackageDto>,
    pill_settings: Option<PillSettings>,
    pregnancy: Option<PregnancyDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodDto {
    #[serde(default)]
    pk: Option<PeriodId>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OvulationTestDto {
    date: NaiveDate,
    result: OvulationTestResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PillPackageDto {
    package_start: NaiveDate,
    #[serde(default)]
    pill_count: Option<i64>,
    #[serde(default)]
    rest_days: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PregnancyDto {
    starts_date: Option<NaiveDate>,
    last_the_day_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    is_due_date_decided: bool,
    is_ended: bool,
    is_miscarriage: bool,
    is_deleted: bool,
    is_multiple_birth: bool,
    before_weight: Option<f64>,
    current_weight: Option<f64>,
}

impl SnapshotDto {
    fn into_input(self, defaults: SnapshotDefaults) -> Result<CycleInput, DomainError> {
        let periods = self
            .periods
            .into_iter()
            .map(|p| {
                let start_date = day_number_from_date(p.start_date);
                let pk = p.pk.unwrap_or_else(|| PeriodId::from_start_date(start_date));
                PeriodRecord::with_id(pk, start_date, day_number_from_date(p.end_date))
                    .map_err(DomainError::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pregnancy = self.pregnancy.map(|p| PregnancyInfo {
            starts_date: p.starts_date.map(day_number_from_date),
            last_the_day_date: p.last_the_day_date.map(day_number_from_date),
            due_date: p.due_date.map(day_number_from_date),
            is_due_date_decided: p.is_due_date_decided,
            is_ended: p.is_ended,
            is_miscarriage: p.is_miscarriage,
            is_deleted: p.is_deleted,
            is_multiple_birth: p.is_multiple_birth,
            before_weight: p.before_weight,
            current_weight: p.current_weight,
        });

        Ok(CycleInput {
            periods,
            settings: self.settings.unwrap_or(defaults.settings),
            ovulation_tests: self
                .ovulation_tests
                .into_iter()
                .map(|t| OvulationTest::new(day_number_from_date(t.date), t.result))
                .collect(),
            ovulation_days: self
                .ovulation_days
                .into_iter()
                .map(|d| OvulationDay::new(day_number_from_date(d)))
                .collect(),
            pill_packages: self
                .pill_packages
                .into_iter()
                .map(|p| PillPackage {
                    package_start: day_number_from_date(p.package_start),
                    pill_count: p.pill_count,
                    rest_days: p.rest_days,
                })
                .collect(),
            pill_settings: self.pill_settings.unwrap_or(defaults.pill_settings),
            pregnancy,
        })
    }
}
