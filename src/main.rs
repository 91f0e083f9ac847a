use clap::Parser;
use league_stats::{
    args::{Args, Command},
    commands::{self, CommandError, NewPlayer},
    database::{JsonFileStore, RecordStore, StoreConfig, StoreError},
    model::{
        aggregation::calculate_aggregates, history::match_history, leaderboard::leaderboard, player_of_the_week,
        Dashboard
    },
    render
};
use serde::Serialize;
use std::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.data_dir {
        Some(dir) => StoreConfig::with_data_dir(dir.clone()),
        None => StoreConfig::from_env()
    };
    info!("Using record store at {}", config.data_dir.display());

    let mut store = JsonFileStore::new(config);

    if let Err(e) = run(&args, &mut store) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, store: &mut JsonFileStore) -> Result<(), CommandError> {
    match &args.command {
        Command::Arena => {
            let dashboard = Dashboard::build(&store.load_snapshot()?);
            if args.json {
                return print_json(&dashboard);
            }

            println!("{}", render::player_of_the_week(dashboard.player_of_the_week.as_ref()));
            println!();
            print!("{}", render::leaderboard("Top scorers", &dashboard.top_scorers));
            println!();
            print!("{}", render::leaderboard("Top assists", &dashboard.top_assisters));
        }
        Command::Leaderboard { column, limit } => {
            let snapshot = store.load_snapshot()?;
            let aggregates = calculate_aggregates(&snapshot.players, &snapshot.matches);
            let entries = leaderboard(&aggregates, *column, *limit);
            if args.json {
                return print_json(&entries);
            }

            print!("{}", render::leaderboard(&format!("Top {}", column), &entries));
        }
        Command::Mvp => {
            let potw = player_of_the_week(&store.load_snapshot()?);
            if args.json {
                return print_json(&potw);
            }

            println!("{}", render::player_of_the_week(potw.as_ref()));
        }
        Command::Compare { first, second } => {
            let h2h = commands::compare_players(&store.load_snapshot()?, first, second)?;
            if args.json {
                return print_json(&h2h);
            }

            print!("{}", render::head_to_head(&h2h));
        }
        Command::Roster => {
            let dashboard = Dashboard::build(&store.load_snapshot()?);
            if args.json {
                return print_json(&dashboard.aggregates.values().collect::<Vec<_>>());
            }

            print!("{}", render::roster(dashboard.aggregates.values()));
        }
        Command::History => {
            let history = match_history(&store.load_snapshot()?);
            if args.json {
                return print_json(&history);
            }

            print!("{}", render::history(&history));
        }
        Command::AddPlayer {
            name,
            number,
            position,
            photo
        } => {
            let photo = match photo {
                Some(path) => Some(fs::read(path).map_err(StoreError::from)?),
                None => None
            };

            let player = commands::add_player(
                store,
                NewPlayer {
                    name: name.clone(),
                    number: *number,
                    position: *position,
                    photo
                }
            )?;
            println!("{}", player.id);
        }
        Command::RemovePlayer { id } => {
            commands::remove_player(store, id)?;
        }
        Command::AddMatch { date, note, events } => {
            let match_ = commands::record_match(store, *date, note, events.clone())?;
            println!("{}", match_.id);
        }
        Command::UndoMatch => {
            commands::undo_last_match(store)?;
        }
        Command::Wipe { yes } => {
            if !yes {
                return Err(CommandError::NotConfirmed);
            }
            commands::wipe(store)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value).map_err(StoreError::from)?;
    println!("{}", json);
    Ok(())
}
