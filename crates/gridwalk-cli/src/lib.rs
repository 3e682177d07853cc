//! CLI surface for gridwalk: argument parsing, the solver-mode and
//! split-mode drivers, and the debug board renderer.
//!
//! Split the same way a protocol-driven CLI splits `command` (argument/
//! protocol parsing), a driver loop, and `error` (protocol errors) — here
//! specialized to a one-shot invocation instead of a persistent input loop.

pub mod error;
pub mod render;
pub mod setting;
pub mod split;

use std::time::Instant;

use tracing::info;

use gridwalk_core::parse_problem;
use gridwalk_search::ThreadPool;

pub use error::CliError;
pub use setting::{Mode, Setting};

const RENDER_FLAG: &str = "--render";

/// Run gridwalk end to end: parse `args` (program name already stripped),
/// load the problem file, and dispatch to solver mode or split mode.
pub fn run<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    let render = take_flag(&mut args, RENDER_FLAG);

    let setting = Setting::from_args(&args)?;
    info!("\n{setting}");

    let text = std::fs::read_to_string(&setting.file_name).map_err(|source| CliError::FileOpen {
        path: setting.file_name.clone(),
        source,
    })?;
    let board = parse_problem(&text, setting.start_position, setting.goal_position)?;

    if render {
        println!("{}", render::board_to_string(&board));
    }

    match setting.mode {
        Mode::Solve { threads } => {
            let pool = ThreadPool::new(threads);
            let started = Instant::now();
            let result = pool.solve(&board);
            let elapsed_seconds = started.elapsed().as_secs_f64();

            let path_sequence = result
                .best_path
                .iter()
                .map(|cell| cell.index().to_string())
                .collect::<Vec<_>>()
                .join("->");

            println!(
                "{},{},{},{},{}",
                board.width(),
                board.height(),
                result.best_score,
                path_sequence,
                elapsed_seconds
            );
        }
        Mode::Split { count } => {
            let stem = stem_path(&setting.file_name);
            let written = split::split_and_write(&board, &stem, count)?;
            for path in &written {
                info!(path, "wrote sub-problem");
            }
        }
    }

    Ok(())
}

/// Remove `flag` from `args` if present, returning whether it was found.
/// Positional arguments keep their relative order regardless of where the
/// flag appeared.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|a| a == flag) {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    }
}

/// The problem file's path with its extension stripped, used as the
/// `<input-stem>` prefix for split-mode output files.
fn stem_path(file_name: &str) -> String {
    let path = std::path::Path::new(file_name);
    if path.extension().is_some() {
        path.with_extension("").to_string_lossy().into_owned()
    } else {
        file_name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_flag_removes_it_from_any_position() {
        let mut args = vec!["a".to_string(), "--render".to_string(), "b".to_string()];
        assert!(take_flag(&mut args, "--render"));
        assert_eq!(args, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn take_flag_is_false_when_absent() {
        let mut args = vec!["a".to_string()];
        assert!(!take_flag(&mut args, "--render"));
        assert_eq!(args, vec!["a".to_string()]);
    }

    #[test]
    fn stem_path_strips_extension_but_keeps_directory() {
        assert_eq!(stem_path("problems/11_56.txt"), "problems/11_56");
        assert_eq!(stem_path("noext"), "noext");
    }

    #[test]
    fn bad_args_surface_as_cli_error() {
        let err = run(["only_one_arg".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::BadArgs { .. }));
    }

    #[test]
    fn missing_file_surfaces_as_file_open_error() {
        let err = run(["no_such_file.txt".to_string(), "0".to_string(), "1".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::FileOpen { .. }));
    }
}
