// Command-line interface for blockdown
//
// This binary converts documents between the Editor.js saved-data format,
// markdown text, and the mdast JSON tree the library pivots on.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from
// the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  blockdown <input> --to <format> [--from <format>] [--output <file>]
//  blockdown convert <input> --to <format> [--from <format>] [--output <file>]
//  blockdown inspect <input> [--from <format>]   - Print the pivot tree as JSON
//  blockdown --list-formats                      - List available formats
//
// Items with no representation in the target format are dropped by design;
// each drop is reported on stderr as a warning so lossy conversions are
// visible without failing the run.

use blockdown::{ConvertOptions, Diagnostic, FormatRegistry};
use blockdown_config::{BlockdownConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;

fn build_cli() -> Command {
    Command::new("blockdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Editor.js documents, markdown, and mdast JSON")
        .long_about(
            "blockdown is a command-line tool for converting documents between\n\
            the Editor.js block format and markdown-oriented representations.\n\n\
            Commands:\n  \
            - convert: Transform between formats (editorjs, markdown, mdast)\n  \
            - inspect: Print the intermediate tree for any input\n\n\
            Examples:\n  \
            blockdown saved.json --to markdown          # Editor.js JSON to markdown (stdout)\n  \
            blockdown notes.md --to editorjs -o out.json # Markdown to Editor.js file\n  \
            blockdown inspect notes.md                  # Show the mdast tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - editorjs: Editor.js saved data (.json)\n  \
                    - markdown: CommonMark markdown (.md)\n  \
                    - mdast:    Markdown tree as JSON (.mdast)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    blockdown convert saved.json --to markdown\n  \
                    blockdown convert notes.md --to editorjs -o saved.json\n  \
                    blockdown saved.json --to mdast              # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the intermediate markdown tree for an input")
                .long_about(
                    "Parse any supported input and print the pivot mdast tree as\n\
                    pretty JSON. Useful for debugging conversions and for handing\n\
                    trees to external mdast tooling.\n\n\
                    Examples:\n  \
                    blockdown inspect notes.md\n  \
                    blockdown inspect saved.json --from editorjs",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Try normal parsing first. If the first argument looks like a file rather
    // than a subcommand, re-parse with "convert" injected so plain
    // `blockdown input.md --to editorjs` works.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        let registry = FormatRegistry::default();
        for name in registry.list_formats() {
            match registry.get(&name) {
                Ok(format) => println!("{name}: {}", format.description()),
                Err(_) => println!("{name}"),
            }
        }
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let registry = build_registry(&config);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = resolve_from(&registry, input, sub_matches.get_one::<String>("from"));
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = resolve_from(&registry, input, sub_matches.get_one::<String>("from"));
            handle_inspect_command(&registry, input, &from);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load configuration: embedded defaults, then the given file (if any).
fn load_cli_config(path: Option<&str>) -> BlockdownConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("blockdown.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    })
}

/// Build the registry with formats wired to the loaded configuration.
fn build_registry(config: &BlockdownConfig) -> FormatRegistry {
    use blockdown::formats::{EditorJsFormat, MarkdownFormat, MdastFormat};

    let mut registry = FormatRegistry::new();
    registry.register(EditorJsFormat::new(ConvertOptions::from(config)));
    registry.register(MarkdownFormat::new(config.markdown.width));
    registry.register(MdastFormat);
    registry
}

/// Resolve the source format from the flag, falling back to file extension.
fn resolve_from(registry: &FormatRegistry, input: &str, flag: Option<&String>) -> String {
    if let Some(from) = flag {
        return from.to_string();
    }
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn report_warnings(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    // Validate formats exist before reading anything
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let (tree, warnings) = registry
        .parse_with_diagnostics(&source, from)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });
    report_warnings(&warnings);

    let (text, warnings) = registry
        .serialize_with_diagnostics(&tree, to)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
    report_warnings(&warnings);

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(registry: &FormatRegistry, input: &str, from: &str) {
    let source = read_input(input);

    let (tree, warnings) = registry
        .parse_with_diagnostics(&source, from)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });
    report_warnings(&warnings);

    let json = serde_json::to_string_pretty(&tree).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}
