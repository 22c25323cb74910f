//! Crew Desk - Entry Point
//!
//! Headless stand-in for the game host: loads a roster and training
//! settings, prints the filtered roster with each perk's training offer,
//! and optionally trains one perk.

use crew_roster::core::error::{CrewError, Result, SettingsError};
use crew_roster::core::{GameMode, RosterConfig, TrainingSettings};
use crew_roster::roster::{FilterConfig, Person, Roster, Specialty};
use crew_roster::skills::SkillLevel;
use crew_roster::training::{ResourceLedger, TrainingDesk, TrainingOffer};

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Crew Desk - browse the roster and train perks
#[derive(Parser, Debug)]
#[command(name = "crew-desk")]
#[command(about = "Browse the crew roster and train perks")]
struct Args {
    /// Roster file (TOML)
    #[arg(long, default_value = "data/roster.toml")]
    roster: PathBuf,

    /// Training settings file (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game mode override: FullEconomy, ScienceOnlyEconomy or Unconstrained
    #[arg(long)]
    mode: Option<GameMode>,

    /// Treat the roster as being in flight
    #[arg(long)]
    in_flight: bool,

    /// Show the active mission's crew
    #[arg(long)]
    crew: bool,

    /// Show assigned crew
    #[arg(long)]
    assigned: bool,

    /// Show available hired crew
    #[arg(long)]
    available: bool,

    /// Show applicants
    #[arg(long)]
    applicants: bool,

    /// Name of the person to train
    #[arg(long, requires = "perk")]
    train: Option<String>,

    /// Specialty to train
    #[arg(long)]
    perk: Option<Specialty>,

    /// Override starting funds
    #[arg(long)]
    funds: Option<f64>,

    /// Override starting science
    #[arg(long)]
    science: Option<f64>,

    /// Print the roster as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RosterView {
    mode: GameMode,
    filter: FilterConfig,
    ledger: ResourceLedger,
    people: Vec<PersonView>,
}

#[derive(Serialize)]
struct PersonView {
    name: String,
    perks: Vec<PerkView>,
}

#[derive(Serialize)]
struct PerkView {
    specialty: Specialty,
    level: SkillLevel,
    offer: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose {
        "crew_roster=debug"
    } else {
        "crew_roster=info"
    };
    tracing_subscriber::fmt().with_env_filter(directive).init();

    let settings = match &args.config {
        Some(path) => TrainingSettings::load_from_toml(path)?,
        None => TrainingSettings::default(),
    };
    let mut roster = RosterConfig::load_from_toml(&args.roster)?.build_roster()?;
    if args.in_flight {
        roster.set_in_flight(true);
    }

    let settings = settings.with_overrides(args.mode, args.funds, args.science)?;
    let mode = settings.mode;
    let mut ledger = settings.ledger;
    let costs = settings.cost_table().map_err(SettingsError::from)?;

    let filter = select_filter(&args, roster.in_flight());
    tracing::info!(
        "Crew desk ready: {} people, mode {}, filter {}",
        roster.len(),
        mode,
        filter
    );

    if let (Some(name), Some(specialty)) = (&args.train, args.perk) {
        let id = roster
            .find_by_name(name)
            .map(|person| person.id)
            .ok_or_else(|| CrewError::CrewNotFound(name.clone()))?;
        let membership = roster.membership();
        let desk = TrainingDesk::new(&costs, &membership, mode);
        let person = roster
            .get_mut(id)
            .ok_or_else(|| CrewError::CrewNotFound(name.clone()))?;

        match desk.advance(person, specialty, &mut ledger) {
            Ok(perk) => println!("{} is now {} {}", name, perk.skill_level, perk.specialty),
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => println!("{}", err),
        }
    }

    let membership = roster.membership();
    let desk = TrainingDesk::new(&costs, &membership, mode);
    let people = roster
        .visible(filter)
        .into_iter()
        .map(|person| person_view(&desk, person))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SettingsError::from)?;

    let view = RosterView {
        mode,
        filter,
        ledger,
        people,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view, &roster);
    }
    Ok(())
}

/// Toggles from the command line, or the scene defaults when none are given
fn select_filter(args: &Args, in_flight: bool) -> FilterConfig {
    let requested = FilterConfig {
        show_active_crew: args.crew,
        show_assigned: args.assigned,
        show_available: args.available,
        show_applicants: args.applicants,
    };
    if requested.is_empty() {
        FilterConfig::for_context(in_flight)
    } else {
        requested.normalized(in_flight)
    }
}

fn person_view(
    desk: &TrainingDesk<'_>,
    person: &Person,
) -> std::result::Result<PersonView, crew_roster::core::ConfigurationError> {
    let mut perks = Vec::with_capacity(person.perks.len());
    for perk in &person.perks {
        let offer: TrainingOffer = desk.offer(person, perk.specialty)?;
        perks.push(PerkView {
            specialty: perk.specialty,
            level: perk.skill_level,
            offer: offer.label(person),
        });
    }
    Ok(PersonView {
        name: person.name.clone(),
        perks,
    })
}

fn print_view(view: &RosterView, roster: &Roster) {
    println!();
    println!("=== CREW MANAGEMENT ===");
    println!("Mode: {}  Filter: {}", view.mode, view.filter);
    println!(
        "Funds: {:.0}  Science: {:.1}",
        view.ledger.funds, view.ledger.science
    );
    println!();

    if view.people.is_empty() {
        println!("No crew member matches your search");
        return;
    }

    for person in &view.people {
        let status = roster
            .find_by_name(&person.name)
            .map(|p| format!("{:?}", p.status))
            .unwrap_or_default();
        println!("{} [{}]", person.name, status);
        if person.perks.is_empty() {
            println!("  (no perks)");
        }
        for perk in &person.perks {
            println!("  {:<12} {:<13} {}", perk.specialty, perk.level, perk.offer);
        }
    }
}
