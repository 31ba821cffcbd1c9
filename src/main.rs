use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use admit_ai::advising::category::StrategyKind;
use admit_ai::advising::{
    acceptance_chance, fit_reasons, generate_initial_tasks, risks, MatchEngine, OnboardingAnswers,
    ProfileStrength, StudentProfile,
};
use admit_ai::catalog::UniversityCatalog;
use admit_ai::config::AppConfig;
use admit_ai::error::AppError;
use admit_ai::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "admit-ai",
    about = "Score a student profile against the university catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank catalog universities against a saved profile
    Match(MatchArgs),
    /// Show the derived profile strength ratings
    Strength(ProfileArgs),
    /// Print the starter checklist generated for a new profile
    Tasks(ProfileArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    /// Catalog file, .json seed or .csv export. Falls back to ADMIT_CATALOG.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Categorization strategy; falls back to ADMIT_STRATEGY, then score-band
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Number of universities to print
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Include the fit reasons and risks under each row
    #[arg(long)]
    explain: bool,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Onboarding answers JSON file
    #[arg(long)]
    profile: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    ScoreBand,
    RequirementCount,
}

impl From<StrategyArg> for StrategyKind {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::ScoreBand => StrategyKind::ScoreBand,
            StrategyArg::RequirementCount => StrategyKind::RequirementCount,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let cli = Cli::parse();

    match cli.command {
        Command::Match(args) => run_match(args, &config),
        Command::Strength(args) => run_strength(args),
        Command::Tasks(args) => run_tasks(args),
    }
}

fn run_match(args: MatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let profile = load_profile(&args.profile.profile)?;
    let catalog_path = args
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no catalog given; pass --catalog or set ADMIT_CATALOG",
            ))
        })?;
    let catalog = load_catalog(&catalog_path)?;

    let kind = args.strategy.map(StrategyKind::from).unwrap_or(config.strategy);
    let strategy = kind.strategy();
    let engine = MatchEngine::default();

    info!(
        universities = catalog.len(),
        strategy = kind.label(),
        "scoring catalog"
    );

    let mut scored: Vec<_> = catalog
        .universities()
        .iter()
        .map(|university| {
            let outcome = engine.score(Some(&profile), university);
            let category = strategy.classify(&profile, university, outcome.score);
            let chance = acceptance_chance(profile.gpa, university);
            (university, outcome.score, category, chance)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));

    println!(
        "Match report for {} (strategy: {})",
        Local::now().date_naive(),
        kind.label()
    );
    for (university, score, category, chance) in scored.iter().take(args.top) {
        println!(
            "{score:>3}  {:<8} {:<7} {} ({})",
            category.shortlist_label(),
            chance.label(),
            university.name,
            university.country
        );
        if args.explain {
            println!("     fit:   {}", fit_reasons(&profile, university));
            println!("     risks: {}", risks(&profile, university));
        }
    }

    Ok(())
}

fn run_strength(args: ProfileArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let strength = ProfileStrength::derive(&profile);

    println!("academic: {}", strength.academic.label());
    println!("exam:     {}", strength.exam.label());
    println!("sop:      {}", strength.sop.label());
    Ok(())
}

fn run_tasks(args: ProfileArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let tasks = generate_initial_tasks(&profile);

    for (index, task) in tasks.iter().enumerate() {
        println!(
            "{}. [{:?}/{:?}] {}",
            index + 1,
            task.priority,
            task.category,
            task.title
        );
        println!("   {}", task.description);
    }
    Ok(())
}

fn load_profile(path: &Path) -> Result<StudentProfile, AppError> {
    let file = File::open(path)?;
    let answers: OnboardingAnswers = serde_json::from_reader(file)?;
    Ok(StudentProfile::from_answers(&answers))
}

fn load_catalog(path: &Path) -> Result<UniversityCatalog, AppError> {
    let catalog = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => UniversityCatalog::from_csv_path(path)?,
        _ => UniversityCatalog::from_json_path(path)?,
    };
    Ok(catalog)
}
