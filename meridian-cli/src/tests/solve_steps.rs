//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{Workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use meridian_core::test_support::StubSolver;
use meridian_core::{SolveError, Solver};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct SolveWorld {
    workspace: Workspace,
    waypoints_path: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    solver: RefCell<StubSolver>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            waypoints_path: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            solver: RefCell::new(StubSolver::InputOrder),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["meridian".to_owned(), "solve".to_owned()];
        if let Some(path) = self.waypoints_path.borrow().as_ref() {
            argv.push(path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

struct StubSolverBuilder {
    solver: StubSolver,
}

impl SolverBuilder for StubSolverBuilder {
    fn build(&self, _config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(self.solver.clone()))
    }
}

#[given("the sample capitals exist on disk")]
fn sample_capitals_exist(#[from(world)] world: &SolveWorld) {
    world.waypoints_path.replace(Some(world.workspace.capitals()));
}

#[given("I omit the waypoint path")]
fn omit_waypoint_path(#[from(world)] world: &SolveWorld) {
    world.waypoints_path.replace(None);
}

#[given("a waypoint file with a record missing its latitude")]
fn waypoint_file_missing_latitude(#[from(world)] world: &SolveWorld) {
    let path = world.workspace.path("broken.json");
    write_utf8(
        &path,
        br#"[{"state": "Iowa", "capital": "Des Moines", "long": -93.6091},
             {"state": "Ohio", "capital": "Columbus", "lat": 39.9612, "long": -82.9988}]"#,
    );
    world.waypoints_path.replace(Some(path));
}

#[given("the solver cannot find a route")]
fn solver_cannot_find_route(#[from(world)] world: &SolveWorld) {
    world.solver.replace(StubSolver::Fail(SolveError::NoSolution));
}

#[given("the time limit is {seconds} seconds")]
fn time_limit_is(#[from(world)] world: &SolveWorld, seconds: u64) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SOLVE_TIME_LIMIT}"), seconds.to_string()]);
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let builder = StubSolverBuilder {
                solver: world.solver.borrow().clone(),
            };
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &builder, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the route")]
fn command_succeeds_and_prints_route(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }

    let stdout = world.stdout();
    assert!(stdout.starts_with("Optimal route:\n"));
    assert!(stdout.contains("\nTotal travel distance: "));
    assert!(stdout.ends_with(" km\n"));
}

#[then("the route starts in Des Moines and ends in Washington")]
fn route_starts_and_ends_at_endpoints(#[from(world)] world: &SolveWorld) {
    let stdout = world.stdout();
    let stops: Vec<&str> = stdout
        .lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect();
    assert_eq!(stops.len(), 8);
    assert_eq!(stops.first(), Some(&"Des Moines (Iowa)"));
    assert_eq!(stops.last(), Some(&"Washington (District of Columbia)"));
}

#[then("the command prints the no-solution message")]
fn command_prints_no_solution(#[from(world)] world: &SolveWorld) {
    assert_eq!(world.stdout(), "No solution found.\n");
}

#[then("the command fails because the waypoint path is missing")]
fn command_fails_missing_path(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_SOLVE_WAYPOINTS),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the waypoint data is malformed")]
fn command_fails_malformed_data(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::LoadWaypoints { source, .. } => assert!(source.is_data_format()),
        other => panic!("expected LoadWaypoints, found {other:?}"),
    }
    assert!(world.stdout().is_empty());
}

#[then("the command fails because no route was found")]
fn command_fails_no_route(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::Solve { source } => assert_eq!(*source, SolveError::NoSolution),
        other => panic!("expected Solve, found {other:?}"),
    }
}

#[then("the command fails because the time limit is invalid")]
fn command_fails_invalid_time_limit(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::InvalidTimeLimit { value, .. } => assert_eq!(*value, 0),
        other => panic!("expected InvalidTimeLimit, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_sample_capitals, "solving the sample capitals");
register_solve_scenario!(solve_missing_path, "rejecting a missing waypoint path");
register_solve_scenario!(solve_missing_latitude, "rejecting a record without a latitude");
register_solve_scenario!(solve_no_route, "reporting when no route exists");
register_solve_scenario!(solve_zero_time_limit, "rejecting a zero time limit");
