//! 3D maze generator CLI
//!
//! Thin driver over mz-core: builds a configuration from the command
//! line, seeds the RNG, and prints the floor plan and solution path.

use std::process::ExitCode;

use clap::Parser;

use mz_core::{Maze, MazeConfig, MazeError, MazeRng};

#[derive(Debug, Parser)]
#[command(name = "maze3d", about = "Generate a 3D maze and print its floor plan")]
struct Args {
    /// RNG seed; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Maze size as height,rows,columns
    #[arg(long, value_parser = parse_triple, default_value = "2,9,9")]
    size: [usize; 3],

    /// Start room corner as height,row,column
    #[arg(long, value_parser = parse_triple, default_value = "0,3,3")]
    start: [usize; 3],

    /// Start room size
    #[arg(long, value_parser = parse_triple, default_value = "1,3,3")]
    start_size: [usize; 3],

    /// Goal room corner as height,row,column
    #[arg(long, value_parser = parse_triple, default_value = "0,0,0")]
    goal: [usize; 3],

    /// Goal room size
    #[arg(long, value_parser = parse_triple, default_value = "1,1,1")]
    goal_size: [usize; 3],

    /// Per-axis cap on generated room sizes
    #[arg(long, value_parser = parse_triple, default_value = "2,2,2")]
    max_room_size: [usize; 3],

    /// Leave the solution arrows off the floor plan
    #[arg(long)]
    no_solution: bool,

    /// Also print the raw room-id grid
    #[arg(long)]
    grid: bool,
}

fn parse_triple(s: &str) -> Result<[usize; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated values, got '{s}'"));
    }
    let mut out = [0usize; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("'{part}' is not a non-negative integer"))?;
    }
    Ok(out)
}

fn run(args: &Args) -> Result<(), MazeError> {
    let config = MazeConfig {
        maze_size: args.size,
        start_loc: args.start,
        start_room_size: args.start_size,
        goal_loc: args.goal,
        goal_room_size: args.goal_size,
        max_room_size: args.max_room_size,
    };
    let mut rng = match args.seed {
        Some(seed) => MazeRng::new(seed),
        None => MazeRng::from_entropy(),
    };

    let maze = Maze::generate(config, &mut rng)?;

    if args.grid {
        print!("{}", maze.grid_dump());
    }
    println!("{}", maze.floor_plan(!args.no_solution)?);
    println!("{}", maze.solution_summary());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("maze3d: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("2,9,9"), Ok([2, 9, 9]));
        assert_eq!(parse_triple(" 1, 2 ,3 "), Ok([1, 2, 3]));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,x").is_err());
    }

    #[test]
    fn test_defaults_match_example_config() {
        let args = Args::parse_from(["maze3d"]);
        let example = MazeConfig::example();
        assert_eq!(args.size, example.maze_size);
        assert_eq!(args.start, example.start_loc);
        assert_eq!(args.start_size, example.start_room_size);
        assert_eq!(args.goal, example.goal_loc);
        assert_eq!(args.goal_size, example.goal_room_size);
        assert_eq!(args.max_room_size, example.max_room_size);
    }
}
