use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use period_calculator::adapters::{SnapshotDefaults, SnapshotFileRepository, SystemClock};
use period_calculator::application::{
    CalculateCycleInfoHandler, CalculateCycleInfoQuery, GetDayStatusHandler, GetDayStatusQuery,
};
use period_calculator::config::AppConfig;
use period_calculator::domain::cycle::{CycleInfo, DayStatus, DayType};
use period_calculator::domain::foundation::{format_day_number, parse_day_number, DateRange, DayNumber};
use period_calculator::logging;
use period_calculator::ports::{Clock, CycleRepository};

#[derive(Parser)]
#[command(name = "period-calculator")]
#[command(about = "Predict periods, ovulation and fertile windows from a cycle history")]
#[command(version)]
struct Cli {
    /// Snapshot file with the cycle history (.json, .yaml or .yml)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Day to treat as today (YYYY-MM-DD format, defaults to the system date)
    #[arg(long, global = true, value_parser = parse_day_number)]
    today: Option<DayNumber>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cycles touching a date range
    Cycles {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day_number)]
        from: DayNumber,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day_number)]
        to: DayNumber,
    },
    /// Classify one or more days
    Status {
        /// Day to classify (YYYY-MM-DD); repeat for several days
        #[arg(long = "date", value_parser = parse_day_number, required = true)]
        dates: Vec<DayNumber>,
    },
}

#[derive(Serialize)]
struct RangeView {
    start: String,
    end: String,
}

impl From<&DateRange> for RangeView {
    fn from(range: &DateRange) -> Self {
        Self {
            start: format_day_number(range.start_date()),
            end: format_day_number(range.end_date()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CycleView {
    pk: String,
    actual_period: Option<RangeView>,
    period: i64,
    predict_days: Vec<RangeView>,
    ovulation_days: Vec<RangeView>,
    fertile_days: Vec<RangeView>,
    delay_the_days: i64,
    delay_day: Option<RangeView>,
    pregnancy_start_date: Option<String>,
    is_ovulation_period_user_input: bool,
    ovulation_day_period: Option<i64>,
    the_pill_period: Option<i64>,
    rest_pill: Option<i64>,
}

impl From<&CycleInfo> for CycleView {
    fn from(info: &CycleInfo) -> Self {
        let ranges = |list: &[DateRange]| list.iter().map(RangeView::from).collect();
        Self {
            pk: info.pk.to_string(),
            actual_period: info.actual_period.as_ref().map(RangeView::from),
            period: info.period,
            predict_days: ranges(&info.predict_days),
            ovulation_days: ranges(&info.ovulation_days),
            fertile_days: ranges(&info.fertile_days),
            delay_the_days: info.delay_the_days,
            delay_day: info.delay_day.as_ref().map(RangeView::from),
            pregnancy_start_date: info.pregnancy_start_date.map(format_day_number),
            is_ovulation_period_user_input: info.is_ovulation_period_user_input,
            ovulation_day_period: info.ovulation_day_period,
            the_pill_period: info.the_pill_period,
            rest_pill: info.rest_pill,
        }
    }
}

#[derive(Serialize)]
struct DayStatusView {
    date: String,
    #[serde(rename = "type")]
    day_type: DayType,
    period: Option<i64>,
}

impl From<&DayStatus> for DayStatusView {
    fn from(status: &DayStatus) -> Self {
        Self {
            date: format_day_number(status.date),
            day_type: status.day_type,
            period: status.period,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(level) = logging::level_for_verbosity(cli.verbose) {
        config.logging.level = level;
    }
    config.validate()?;
    logging::init(&config.logging);

    let snapshot = cli
        .snapshot
        .or_else(|| config.repository.snapshot_path.clone())
        .context("No snapshot file: pass --snapshot or set PERIOD_CALC__REPOSITORY__SNAPSHOT_PATH")?;
    let defaults = SnapshotDefaults {
        settings: config.defaults.period_settings(),
        pill_settings: config.defaults.pill_settings(),
    };

    let repository: Arc<dyn CycleRepository> = Arc::new(
        SnapshotFileRepository::load(&snapshot, defaults)
            .await
            .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let output = match cli.command {
        Commands::Cycles { from, to } => {
            let handler = CalculateCycleInfoHandler::new(repository, clock);
            let cycles = handler
                .handle(CalculateCycleInfoQuery {
                    from_date: from,
                    to_date: to,
                    today: cli.today,
                })
                .await?;
            let views: Vec<CycleView> = cycles.iter().map(CycleView::from).collect();
            serde_json::to_string_pretty(&views)?
        }
        Commands::Status { dates } => {
            let handler = GetDayStatusHandler::new(repository, clock);
            let mut query = GetDayStatusQuery::dates(dates);
            query.today = cli.today;
            let statuses = handler.handle(query).await?;
            let views: Vec<DayStatusView> = statuses.iter().map(DayStatusView::from).collect();
            serde_json::to_string_pretty(&views)?
        }
    };

    println!("{output}");
    Ok(())
}
