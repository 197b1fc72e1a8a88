use std::error::Error;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::{warn, LevelFilter};
use separator::Separatable;

use ricochet_solver::config::Heuristic;
use ricochet_solver::data::Pos;
use ricochet_solver::grid::{reciprocal_walls, Grid};
use ricochet_solver::moves::Moves;
use ricochet_solver::parser::{parse_number, parse_wall};
use ricochet_solver::puzzle::Puzzle;
use ricochet_solver::state::State;
use ricochet_solver::Solve;

fn main() {
    let matches = App::new("ricochet-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest sequence of slides getting the target robot to the goal")
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("N")
                .default_value("16")
                .help("board is N×N cells"),
        )
        .arg(
            Arg::with_name("robot")
                .long("robot")
                .value_name("X,Y")
                .multiple(true)
                .number_of_values(1)
                .help("robot start position, in order (without any robots the demo puzzle is used)"),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("X,Y")
                .help("goal cell for the target robot"),
        )
        .arg(
            Arg::with_name("wall")
                .long("wall")
                .value_name("X,Y,DIR")
                .multiple(true)
                .number_of_values(1)
                .help("blocks leaving cell X,Y toward DIR (north, east, south or west)"),
        )
        .arg(
            Arg::with_name("target")
                .long("target")
                .value_name("I")
                .default_value("0")
                .help("index of the robot which has to reach the goal"),
        )
        .arg(
            Arg::with_name("random")
                .long("random")
                .value_name("SEED")
                .conflicts_with_all(&["robot", "goal", "wall", "reciprocal"])
                .help("solve a random puzzle of the given size, goal and walls are random too"),
        )
        .arg(
            Arg::with_name("wall-count")
                .long("wall-count")
                .value_name("N")
                .default_value("10")
                .help("number of walls of a random puzzle"),
        )
        .arg(
            Arg::with_name("robot-count")
                .long("robot-count")
                .value_name("N")
                .default_value("2")
                .help("number of robots of a random puzzle"),
        )
        .arg(
            Arg::with_name("reciprocal")
                .long("reciprocal")
                .help("also block the opposite side of every wall"),
        )
        .arg(
            Arg::with_name("blind")
                .long("blind")
                .help("don't use a heuristic (uniform-cost search)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log more (repeat for more detail)"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let heuristic = if matches.is_present("blind") {
        Heuristic::Blind
    } else {
        Heuristic::Relaxed
    };

    let puzzle = load_puzzle(&matches).unwrap_or_else(|err| {
        eprintln!("Invalid puzzle: {}", err);
        process::exit(1);
    });

    print!("{}", puzzle);
    println!("Solving using {} heuristic...", heuristic);
    match puzzle.solve(heuristic) {
        Ok(solution) => {
            println!("{}", solution.stats);
            println!("Found solution:");
            print_path(&solution.path);
            match Moves::from_path(&solution.path) {
                Some(moves) => {
                    println!("{}", moves);
                    println!("Moves: {}", moves.move_cnt());
                    let per_robot: Vec<_> = (0..puzzle.state.robots.len())
                        .map(|robot| moves.robot_move_cnt(robot).to_string())
                        .collect();
                    println!("Moves by robot: {}", per_robot.join(", "));
                }
                None => println!("Moves: {}", solution.cost),
            }
            println!(
                "Time: {} ms",
                (solution.elapsed.as_millis() as u64).separated_string()
            );
        }
        Err(err) => {
            println!("{}", err.stats);
            println!("No solution");
            println!("Time: {} ms", (err.elapsed.as_millis() as u64).separated_string());
        }
    }
}

fn load_puzzle(matches: &ArgMatches<'_>) -> Result<Puzzle, Box<dyn Error>> {
    // all have default values
    let size: usize = parse_number(matches.value_of("size").unwrap_or("16"))?;
    let target: usize = parse_number(matches.value_of("target").unwrap_or("0"))?;

    if let Some(seed) = matches.value_of("random") {
        let seed: u64 = parse_number(seed)?;
        let wall_cnt: usize = parse_number(matches.value_of("wall-count").unwrap_or("10"))?;
        let robot_cnt: usize = parse_number(matches.value_of("robot-count").unwrap_or("2"))?;
        return Ok(Puzzle::random(size, wall_cnt, robot_cnt, seed)?);
    }

    let robots = match matches.values_of("robot") {
        Some(values) => values
            .map(|s| s.parse::<Pos>())
            .collect::<Result<Vec<_>, _>>()?,
        None => {
            if matches.is_present("goal") || matches.is_present("wall") {
                warn!("No robots given, ignoring the other options and using the demo puzzle");
            }
            return Ok(Puzzle::demo()?);
        }
    };

    let goal: Pos = matches
        .value_of("goal")
        .ok_or("The goal is required when robots are given")?
        .parse()?;
    let mut walls = Vec::new();
    if let Some(values) = matches.values_of("wall") {
        for s in values {
            walls.push(parse_wall(s)?);
        }
    }
    if matches.is_present("reciprocal") {
        walls = reciprocal_walls(size, &walls);
    }

    let grid = Grid::new(size, walls, goal, target)?;
    Ok(Puzzle::new(grid, State::new(robots))?)
}

fn print_path(path: &[State]) {
    for (i, state) in path.iter().enumerate() {
        println!("{}: {}", i, state);
    }
}
