//! CLI command implementations
//!
//! The commands are thin: they load the config, set up logging, open the
//! engine, translate requests into engine calls and print the results.
//! No catalog logic lives here.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Value};
use tracing::warn;

use crate::catalog::{Book, CatalogEngine, Outcome};
use crate::config::CatalogConfig;
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_error, write_json, write_response};
use super::request::Request;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config } => start(&config),
        Command::List { config } => list(&config),
    }
}

fn open_engine(config_path: &Path) -> CliResult<CatalogEngine> {
    let config = CatalogConfig::load_or_default(config_path)?;
    init_logging(&config.log);
    Ok(CatalogEngine::open(config))
}

/// Serve requests from stdin until EOF, then close the catalog
pub fn start(config_path: &Path) -> CliResult<()> {
    let engine = open_engine(config_path)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session(engine, stdin.lock(), &mut stdout).map(|_| ())
}

/// One full request session over an opened engine.
///
/// The first response line carries the load report, so a caller learns
/// about an unreadable snapshot before sending any mutation. The engine is
/// closed once `input` is exhausted and the close outcome returned.
pub fn session<R: BufRead, W: Write>(
    mut engine: CatalogEngine,
    input: R,
    out: &mut W,
) -> CliResult<Outcome> {
    write_response(out, json!({ "load": engine.load_report() }))?;
    serve(&mut engine, input, out)?;

    let outcome = engine.close();
    if !outcome.is_ok() {
        warn!(outcome = outcome.as_str(), "final snapshot flush failed");
    }
    Ok(outcome)
}

/// Print every live record and exit
pub fn list(config_path: &Path) -> CliResult<()> {
    let mut stdout = io::stdout();
    list_to(config_path, &mut stdout)
}

/// Write every live record of the configured catalog to `out` as one line
pub fn list_to<W: Write>(config_path: &Path, out: &mut W) -> CliResult<()> {
    let engine = open_engine(config_path)?;
    write_json(out, &engine.list_all())
}

/// Process request lines from `input`, writing one response per line.
///
/// A line that is not a valid request produces an error response and the
/// loop continues. I/O failures end the loop.
pub fn serve<R: BufRead, W: Write>(
    engine: &mut CatalogEngine,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    for line in read_lines(input) {
        let line = line?;
        match serde_json::from_str::<Request>(&line) {
            Ok(request) => write_response(out, execute(engine, request))?,
            Err(e) => {
                let err = CliError::bad_request(format!("invalid request: {}", e));
                write_error(out, err.code_str(), err.message())?;
            }
        }
    }
    Ok(())
}

/// Apply one request to the engine and build the response payload
pub fn execute(engine: &mut CatalogEngine, request: Request) -> Value {
    match request {
        Request::Add {
            title,
            author,
            isbn,
            category,
            year,
            copies,
        } => outcome_json(engine.add(&title, &author, &isbn, &category, year, copies)),
        Request::Borrow { title } => {
            let (outcome, book) = engine.borrow_record(&title);
            outcome_with_record(outcome, book)
        }
        Request::Return { title } => {
            let (outcome, book) = engine.return_record(&title);
            outcome_with_record(outcome, book)
        }
        Request::Delete { title } => outcome_json(engine.delete(&title)),
        Request::Restore => outcome_json(engine.restore()),
        Request::Search { title } => found_json(&title, engine.search_by_title(&title)),
        Request::LinearSearch { title } => found_json(&title, engine.linear_search(&title)),
        Request::BinarySearch { title } => found_json(&title, engine.binary_search(&title)),
        Request::BubbleSort => json!(engine.bubble_sort()),
        Request::SelectionSort => json!(engine.selection_sort()),
        Request::List => json!(engine.list_all()),
        Request::ListSorted => json!(engine.list_sorted()),
        Request::DrainQueue => json!(engine.drain_search_queue()),
        Request::Stats => json!(engine.statistics()),
        Request::LoadReport => json!(engine.load_report()),
    }
}

fn outcome_json(outcome: Outcome) -> Value {
    json!({
        "outcome": outcome,
        "message": outcome.message(),
    })
}

fn outcome_with_record(outcome: Outcome, book: Option<&Book>) -> Value {
    let mut value = outcome_json(outcome);
    if let Some(book) = book {
        value["book"] = json!(book);
    }
    value
}

fn found_json(title: &str, found: bool) -> Value {
    json!({ "title": title, "found": found })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> CatalogEngine {
        CatalogEngine::open(CatalogConfig::with_data_file(dir.path().join("library_data.txt")))
    }

    fn run_lines(engine: &mut CatalogEngine, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        serve(engine, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_borrow_response_includes_record() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        let responses = run_lines(&mut engine, r#"{"op":"borrow","title":"Mathematics"}"#);
        assert_eq!(responses[0]["status"], "ok");
        assert_eq!(responses[0]["data"]["outcome"], "ok");
        assert_eq!(responses[0]["data"]["book"]["available_copies"], 1);
    }

    #[test]
    fn test_borrow_response_shows_record_that_lost_a_copy() {
        let dir = TempDir::new().unwrap();
        let mut config = CatalogConfig::with_data_file(dir.path().join("library_data.txt"));
        config.seed_defaults = false;
        let mut engine = CatalogEngine::open(config);
        let _ = engine.add("A", "first", "1", "x", 2000, 0);
        let _ = engine.add("A", "second", "2", "x", 2000, 2);

        let responses = run_lines(&mut engine, r#"{"op":"borrow","title":"A"}"#);
        assert_eq!(responses[0]["data"]["outcome"], "ok");
        assert_eq!(responses[0]["data"]["book"]["author"], "second");
        assert_eq!(responses[0]["data"]["book"]["available_copies"], 1);
    }

    #[test]
    fn test_informational_outcomes_are_not_errors() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        let responses = run_lines(
            &mut engine,
            "{\"op\":\"return\",\"title\":\"Nope\"}\n{\"op\":\"restore\"}\n",
        );
        assert_eq!(responses[0]["status"], "ok");
        assert_eq!(responses[0]["data"]["outcome"], "not_found");
        assert!(responses[0]["data"].get("book").is_none());
        assert_eq!(responses[1]["data"]["outcome"], "empty_history");
    }

    #[test]
    fn test_bad_line_reported_and_loop_continues() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        let responses = run_lines(&mut engine, "not json\n{\"op\":\"stats\"}\n");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["status"], "error");
        assert_eq!(responses[0]["code"], "SHELF_CLI_BAD_REQUEST");
        assert_eq!(responses[1]["data"]["total_records"], 3);
    }

    #[test]
    fn test_search_then_drain() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        let responses = run_lines(
            &mut engine,
            "{\"op\":\"search\",\"title\":\"Mathematics\"}\n{\"op\":\"drain_queue\"}\n",
        );
        assert_eq!(responses[0]["data"]["found"], true);
        assert_eq!(responses[1]["data"][0]["title"], "Mathematics");
        assert_eq!(responses[1]["data"][0]["found"], true);
    }

    #[test]
    fn test_sorted_listings() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        let value = execute(&mut engine, Request::BubbleSort);
        assert_eq!(value[0]["title"], "C++ Programming");
        let value = execute(&mut engine, Request::ListSorted);
        assert_eq!(value[2]["title"], "Mathematics");
    }

    fn parse_output(out: Vec<u8>) -> Vec<Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_reports_unreadable_snapshot_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "garbage\nA|a|1|x|2000|1|1|1\n").unwrap();
        let engine = CatalogEngine::open(CatalogConfig::with_data_file(&path));

        let mut out = Vec::new();
        let outcome = session(engine, "{\"op\":\"load_report\"}\n".as_bytes(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Ok);

        let responses = parse_output(out);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["data"]["load"]["outcome"], "storage_unreadable");
        assert_eq!(responses[0]["data"]["load"]["source"], "unreadable");
        assert_eq!(responses[1]["data"]["outcome"], "storage_unreadable");
        // untouched without a mutation
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage\nA|a|1|x|2000|1|1|1\n");
    }

    #[test]
    fn test_session_closes_and_flushes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.txt");
        let engine = CatalogEngine::open(CatalogConfig::with_data_file(&path));

        let mut out = Vec::new();
        let outcome = session(engine, "{\"op\":\"stats\"}\n".as_bytes(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Ok);

        let responses = parse_output(out);
        assert_eq!(responses[0]["data"]["load"]["source"], "seeded");
        assert_eq!(responses[1]["data"]["total_records"], 3);
        assert!(fs::read_to_string(&path).unwrap().starts_with("3\n"));
    }

    #[test]
    fn test_list_reads_catalog_from_config() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("catalog.txt");
        fs::write(&data, "1\nDune|Herbert|42|Fiction|1965|2|2|1\n").unwrap();
        let config_path = dir.path().join("shelfdb.json");
        fs::write(
            &config_path,
            serde_json::to_string(&json!({ "data_file": data })).unwrap(),
        )
        .unwrap();

        let mut out = Vec::new();
        list_to(&config_path, &mut out).unwrap();
        let listed = parse_output(out);
        assert_eq!(listed[0][0]["title"], "Dune");
        assert_eq!(listed[0].as_array().unwrap().len(), 1);

        run_command(Command::List { config: config_path }).unwrap();
        assert_eq!(
            fs::read_to_string(&data).unwrap(),
            "1\nDune|Herbert|42|Fiction|1965|2|2|1\n"
        );
    }
}
