//! vtk2ascii CLI - Convert binary legacy VTK files to ASCII.

use std::env;

use tracing_subscriber::EnvFilter;

use vtk2ascii::{ArgvParser, Error, InputResolver};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags; everything else is positional
    let mut verbosity: u8 = 0;
    let mut positionals: Vec<String> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-v" | "--verbose" => verbosity = 1,
            "-vv" | "--trace" => verbosity = 2,
            _ => positionals.push(arg.clone()),
        }
    }

    init_tracing(verbosity);

    let resolver = select_resolver(positionals);
    let (input, output) = match resolver.resolve() {
        Ok(paths) => paths,
        Err(e @ Error::MissingArguments) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: vtk2ascii <input_binary.vtk> <output_ascii.vtk>");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}. Exiting.", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = vtk2ascii::convert(&input, &output) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// With fewer than two positionals on Windows, fall back to native file
/// dialogs; everywhere else the arguments are the only source of paths.
#[cfg(windows)]
fn select_resolver(positionals: Vec<String>) -> Box<dyn InputResolver> {
    if positionals.len() < 2 {
        Box::new(vtk2ascii::InteractivePicker)
    } else {
        Box::new(ArgvParser::new(positionals))
    }
}

#[cfg(not(windows))]
fn select_resolver(positionals: Vec<String>) -> Box<dyn InputResolver> {
    Box::new(ArgvParser::new(positionals))
}

/// Diagnostics go to stderr so they never mix with the status lines the
/// converter prints on stdout.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("vtk2ascii=debug"),
        _ => EnvFilter::new("vtk2ascii=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "vtk2ascii {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("VTK2ASCII_BUILD_DATE")
    );
    println!("Convert a binary legacy VTK dataset to its ASCII encoding");
    println!();
    println!("USAGE:");
    println!("    vtk2ascii [OPTIONS] <input_binary.vtk> <output_ascii.vtk>");
    println!();
    println!("ARGS:");
    println!("    <input_binary.vtk>    Existing legacy VTK file (binary or ASCII)");
    println!("    <output_ascii.vtk>    Output path, overwritten if present");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!();
    println!("EXAMPLES:");
    println!("    vtk2ascii tube.vtk tube_ascii.vtk     # Convert one file");
    println!("    vtk2ascii -v tube.vtk tube_ascii.vtk  # With debug output");
    println!();
    println!("NOTES:");
    println!("    - All scalars, vectors, tensors and fields are carried over unchanged");
    println!("    - On Windows, running without arguments opens file dialogs instead");
}
