use crate::infra::{build_engine, data_config};
use clap::Args;
use gridwise::advisory::catalog::{ActionCatalog, ActionCategory, PeakRelief};
use gridwise::advisory::profile::UserProfile;
use gridwise::advisory::{AdvisoryService, RecommendationResponse};
use gridwise::config::AppConfig;
use gridwise::error::AppError;
use gridwise::telemetry::{self, LogSink};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Questionnaire profile as a JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Action catalog JSON (defaults to GRIDWISE_CATALOG_PATH or the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Grid-constrained PC4 list, .json or .csv (defaults to the bundled list)
    #[arg(long)]
    pub(crate) grid_areas: Option<PathBuf>,
    /// Number of top picks included in the plan summary
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Emit the full response as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Action catalog JSON (defaults to GRIDWISE_CATALOG_PATH or the bundled catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog,
        grid_areas,
        top,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let data = data_config(config.data, catalog, grid_areas);
    let top_picks = top.unwrap_or(data.top_picks).max(1);
    let engine = Arc::new(build_engine(&data)?);
    let service = AdvisoryService::new(engine).with_top_picks(top_picks);

    let file = std::fs::File::open(&profile)?;
    let profile: UserProfile = serde_json::from_reader(file)?;
    let response = service.recommend(&profile);

    if json {
        let rendered = serde_json::to_string_pretty(&response)?;
        println!("{rendered}");
    } else {
        print!("{}", render_recommendations(&response));
    }

    Ok(())
}

pub(crate) fn run_catalog_validate(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let data = data_config(config.data, args.catalog, None);
    let catalog = data.load_catalog()?;
    print!("{}", render_catalog_overview(&catalog));
    Ok(())
}

pub(crate) fn render_recommendations(response: &RecommendationResponse) -> String {
    let mut out = String::new();
    let zone = if response.in_grid_constrained_area {
        "grid-constrained area"
    } else {
        "no grid constraint"
    };
    let _ = writeln!(out, "Recommendations for PC4 {} ({zone})", response.pc4);

    if response.recommendations.is_empty() {
        let _ = writeln!(out, "No eligible actions for this profile.");
        return out;
    }

    for (rank, rec) in response.recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. [{}] {:>3}  {:<28} {:<16} EUR {:.0}-{:.0} upfront | EUR {:.0}-{:.0}/yr | peak {}",
            rank + 1,
            rec.grade.label(),
            rec.score,
            rec.action.id,
            rec.action.category.label(),
            rec.action.cost_range_eur.low,
            rec.action.cost_range_eur.high,
            rec.action.annual_savings_eur.low,
            rec.action.annual_savings_eur.high,
            rec.action.peak_relief.label(),
        );
    }

    let plan = &response.plan;
    let _ = writeln!(
        out,
        "\nTop {} picks: {}",
        plan.top_action_ids.len(),
        plan.top_action_ids.join(", ")
    );
    let _ = writeln!(
        out,
        "- est. EUR {:.0}/yr (EUR {:.0}/month) | {:.0} kg CO2/yr",
        plan.top_annual_savings_eur, plan.top_monthly_savings_eur, plan.top_annual_co2_kg
    );

    out
}

pub(crate) fn render_catalog_overview(catalog: &ActionCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Catalog OK: {} actions", catalog.len());

    for category in [
        ActionCategory::LowCost,
        ActionCategory::Medium,
        ActionCategory::MajorInvestment,
    ] {
        let count = catalog
            .iter()
            .filter(|action| action.category == category)
            .count();
        let _ = writeln!(out, "- {:<16} {count}", category.label());
    }

    for relief in [PeakRelief::High, PeakRelief::Medium, PeakRelief::Low] {
        let count = catalog
            .iter()
            .filter(|action| action.peak_relief == relief)
            .count();
        let _ = writeln!(out, "- peak {:<11} {count}", relief.label());
    }

    let gated = catalog
        .iter()
        .filter(|action| !action.audience.is_empty() || !action.requires.is_empty())
        .count();
    let _ = writeln!(out, "- gated by tenure or requirements: {gated}");

    out
}
