//! Perft verification runner.
//!
//! Commands mirror the verification workflow: check one position, run the
//! quick/full/comprehensive suites, benchmark, or list known positions.
//! Exit status is 0 only when every verified case matched.

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use chess_movegen::board::Board;
use chess_movegen::perft::perft;
use chess_movegen::verify::{
    self, find_position, CaseReport, ReferenceEntry, SuiteReport, QUICK_POSITIONS,
    REFERENCE_POSITIONS,
};

struct Options {
    command: String,
    position: Option<String>,
    depth: Option<u32>,
    divide: bool,
    timeout: Option<Duration>,
}

fn parse_options(mut args: env::Args) -> Result<Options, String> {
    args.next(); // program name

    let mut options = Options {
        command: "help".to_string(),
        position: None,
        depth: None,
        divide: false,
        timeout: None,
    };

    let mut positional = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--depth" => {
                let value = args.next().ok_or("missing value for --depth")?;
                let depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth '{value}'"))?;
                options.depth = Some(depth);
            }
            "--divide" => options.divide = true,
            "-t" | "--timeout" => {
                let value = args.next().ok_or("missing value for --timeout")?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid timeout '{value}'"))?;
                options.timeout = Some(Duration::from_secs(secs));
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'"));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    if let Some(command) = positional.next() {
        options.command = command;
    }
    options.position = positional.next();
    Ok(options)
}

fn print_help() {
    println!("Chess Move Generation Perft Test Suite");
    println!();
    println!("Commands:");
    println!("  test <position> [-d depth] [--divide]  - Test specific position");
    println!("  suite [-d max_depth] [-t seconds]      - Run full test suite");
    println!("  quick                                  - Run quick verification suite");
    println!("  comprehensive [-t seconds]             - Run comprehensive test suite");
    println!("  benchmark [position] [-d depth]        - Run performance benchmark");
    println!("  list                                   - List available positions");
    println!();
    println!("Examples:");
    println!("  perft_runner test starting_position -d 4");
    println!("  perft_runner test position_5 -d 3 --divide");
    println!("  perft_runner quick");
    println!("  perft_runner benchmark starting_position -d 5");
}

fn print_list() {
    println!("Available test positions:");
    for entry in REFERENCE_POSITIONS {
        println!(
            "  {:<20} - {} (max depth: {})",
            entry.name,
            entry.description,
            entry.max_depth()
        );
    }
}

fn print_case(report: &CaseReport, show_divide: bool) {
    for depth_report in &report.depths {
        if let Some(error) = &depth_report.error {
            println!("Depth {}: ERROR - {error}", depth_report.depth);
            continue;
        }

        if show_divide {
            if let Some(divide) = &depth_report.divide {
                for (notation, nodes) in divide {
                    println!("{notation}: {nodes}");
                }
                println!();
            }
        }

        let computed = depth_report.computed.unwrap_or(0);
        println!("Nodes searched: {computed}");
        println!("Time: {:.3} seconds", depth_report.elapsed.as_secs_f64());

        match depth_report.expected {
            Some(expected) if expected == computed => {
                println!("✓ CORRECT: Matches expected result ({expected})");
            }
            Some(expected) => {
                println!("✗ INCORRECT: Expected {expected}, got {computed}");
                let diff = computed as i64 - expected as i64;
                println!("  Difference: {diff:+} nodes");
            }
            None => {
                println!(
                    "⚠ No expected result available for depth {}",
                    depth_report.depth
                );
            }
        }

        if let Some(comparison) = &depth_report.divide_comparison {
            println!();
            println!("--- Move-by-move comparison ---");
            for line in &comparison.lines {
                match (line.expected, line.computed) {
                    (Some(expected), Some(computed)) if expected == computed => {
                        println!("✓ {}: {computed}", line.notation);
                    }
                    (Some(expected), Some(computed)) => {
                        println!("✗ {}: {computed} (expected {expected})", line.notation);
                    }
                    (Some(expected), None) => {
                        println!("✗ {}: MISSING (expected {expected})", line.notation);
                    }
                    (None, Some(computed)) => {
                        println!("✗ {}: {computed} (not in reference)", line.notation);
                    }
                    (None, None) => {}
                }
            }
            let matched = comparison.matched();
            let total = comparison.reference_count();
            let accuracy = if total == 0 {
                100.0
            } else {
                (matched as f64 / total as f64) * 100.0
            };
            println!();
            println!("Move accuracy: {matched}/{total} ({accuracy:.1}%)");
        }
    }
}

fn run_test(options: &Options) -> Result<bool, String> {
    let name = options
        .position
        .as_deref()
        .ok_or("position name required for test command")?;
    let entry = find_position(name).ok_or_else(|| {
        let names: Vec<&str> = REFERENCE_POSITIONS.iter().map(|e| e.name).collect();
        format!("unknown position: {name}\navailable positions: {names:?}")
    })?;

    let depth = options.depth.unwrap_or(3);
    println!("=== {} ===", entry.description);
    println!("FEN: {}", entry.fen);
    println!("Testing at depth {depth}");
    println!();

    let report = verify::verify_position(entry, depth, options.divide);
    print_case(&report, options.divide);
    Ok(report.passed())
}

fn print_suite(report: &SuiteReport) {
    for case in &report.cases {
        println!("--- {} ---", case.description);
        for depth_report in &case.depths {
            match (&depth_report.error, depth_report.computed) {
                (Some(error), _) => {
                    println!("  Depth {}: ERROR - {error}", depth_report.depth);
                }
                (None, Some(computed)) => {
                    let verdict = if depth_report.passed() { "✓" } else { "✗" };
                    let expectation = match depth_report.expected {
                        Some(expected) if expected != computed => {
                            format!(" (expected {expected})")
                        }
                        _ => String::new(),
                    };
                    println!(
                        "  Depth {}: {computed} nodes {verdict}{expectation} ({:.3}s)",
                        depth_report.depth,
                        depth_report.elapsed.as_secs_f64()
                    );
                }
                (None, None) => {
                    println!("  Depth {}: no result", depth_report.depth);
                }
            }
        }
    }

    let (passed, total) = report.depth_counts();
    println!();
    println!("{}", "=".repeat(50));
    println!("TEST SUMMARY");
    println!("{}", "=".repeat(50));
    if total > 0 {
        println!(
            "Passed: {passed}/{total} ({:.1}%)",
            (passed as f64 / total as f64) * 100.0
        );
    } else {
        println!("Passed: 0/0");
    }

    let failed: Vec<&str> = report
        .failed_cases()
        .map(|case| case.name.as_str())
        .collect();
    if !failed.is_empty() {
        println!();
        println!("Failed positions:");
        for name in failed {
            println!("  - {name}");
        }
    }
    if !report.not_run.is_empty() {
        println!();
        println!("Not run (timeout):");
        for name in &report.not_run {
            println!("  - {name}");
        }
    }
}

fn run_suite_command(names: Option<&[&str]>, max_depth: u32, timeout: Option<Duration>) -> bool {
    let entries: Vec<&ReferenceEntry> = match names {
        Some(names) => names.iter().filter_map(|n| find_position(n)).collect(),
        None => REFERENCE_POSITIONS.iter().collect(),
    };

    println!("Running tests up to depth {max_depth}");
    println!();
    let report = verify::run_suite(&entries, max_depth, timeout);
    print_suite(&report);
    report.passed()
}

fn run_benchmark(options: &Options) -> Result<bool, String> {
    let name = options.position.as_deref().unwrap_or("starting_position");
    let entry = find_position(name).ok_or_else(|| format!("unknown position: {name}"))?;
    let depth = options.depth.unwrap_or(5);

    println!("=== PERFT BENCHMARK ===");
    println!("Position: {}", entry.description);
    println!("Depth: {depth}");
    println!();

    let mut board =
        Board::try_from_fen(entry.fen).map_err(|e| format!("bad FEN for {name}: {e}"))?;

    // Warm up
    perft(&mut board, 1);

    let started = Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = started.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {:.3} seconds", elapsed.as_secs_f64());
    println!("Speed: {nps:.0} nodes/second");

    match entry.expected_nodes(depth) {
        Some(expected) if expected == nodes => {
            println!("✓ Result matches expected ({expected})");
            Ok(true)
        }
        Some(expected) => {
            println!("✗ Result differs from expected ({expected})");
            Ok(false)
        }
        None => Ok(true),
    }
}

fn run(options: &Options) -> Result<bool, String> {
    match options.command.as_str() {
        "help" => {
            print_help();
            Ok(true)
        }
        "list" => {
            print_list();
            Ok(true)
        }
        "test" => run_test(options),
        "suite" => Ok(run_suite_command(
            None,
            options.depth.unwrap_or(3),
            options.timeout,
        )),
        "quick" => {
            println!("=== QUICK PERFT VERIFICATION ===");
            Ok(run_suite_command(Some(QUICK_POSITIONS), 3, options.timeout))
        }
        "comprehensive" => {
            println!("=== COMPREHENSIVE PERFT TEST SUITE ===");
            Ok(run_suite_command(
                None,
                options.depth.unwrap_or(5),
                options.timeout,
            ))
        }
        "benchmark" => run_benchmark(options),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn main() -> ExitCode {
    let options = match parse_options(env::args()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
