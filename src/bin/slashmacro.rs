//! Command-line interface for slashmacro
//! This binary checks, lints, formats and inspects slash-command macro files.
//!
//! Usage:
//!   slashmacro check `<path>`                                  - Report validation errors (exit 1 if any)
//!   slashmacro lint `<path>`                                   - Report validation errors and advisories
//!   slashmacro format `<path>` [--trim]                        - Print the canonical rendering
//!   slashmacro inspect `<path>` [--format treeviz|json|yaml]   - Print the syntax tree
//!   slashmacro reference commands|conditionals|values `<key>`  - List reference data
//!   slashmacro list-formats                                  - List output formats
//!
//! A path of `-` reads the macro from stdin. `--config <file>` layers a TOML file over
//! the built-in defaults.

use clap::{Arg, ArgAction, ArgMatches, Command};
use slashmacro::slashmacro::config::{EngineConfig, Loader};
use slashmacro::slashmacro::formats::FormatRegistry;
use slashmacro::slashmacro::logging::init_logging;
use slashmacro::slashmacro::processor::{
    OutputFormat, ProcessingError, ProcessingSpec, ProcessingStage, Processor,
};
use slashmacro::slashmacro::validation::ReferenceTables;
use std::io::Read;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the macro file, or '-' for stdin")
        .required(true)
        .index(1)
}

fn build_cli() -> Command {
    Command::new("slashmacro")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking, linting and formatting slash-command macros")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("check")
                .about("Report validation errors")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("lint")
                .about("Report validation errors and heuristic advisories")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Print the canonical rendering of a macro")
                .arg(path_arg())
                .arg(
                    Arg::new("trim")
                        .long("trim")
                        .short('t')
                        .action(ArgAction::SetTrue)
                        .help("Collapse whitespace and drop spaces around brackets"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the syntax tree of a macro")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["treeviz", "json", "yaml"])
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("reference")
                .about("List reference data")
                .subcommand_required(true)
                .subcommand(Command::new("commands").about("List known slash commands"))
                .subcommand(Command::new("conditionals").about("List known conditional keys"))
                .subcommand(
                    Command::new("values")
                        .about("List the allowed values of a conditional key")
                        .arg(
                            Arg::new("key")
                                .help("Conditional key, e.g. 'mod'")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_logging(config.logging_config());

    let result = match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(sub, &config),
        Some(("lint", sub)) => handle_lint_command(sub, &config),
        Some(("format", sub)) => handle_format_command(sub, &config),
        Some(("inspect", sub)) => handle_inspect_command(sub, &config),
        Some(("reference", sub)) => handle_reference_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> Result<EngineConfig, ProcessingError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

fn read_source(matches: &ArgMatches) -> Result<String, ProcessingError> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");

    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| ProcessingError::Io(e.to_string()))?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| ProcessingError::Io(format!("{}: {}", path, e)))
    }
}

/// Handle the check command; exits 1 when validation fails
fn handle_check_command(matches: &ArgMatches, config: &EngineConfig) -> Result<(), ProcessingError> {
    let source = read_source(matches)?;
    let errors = Processor::from_config(config).check(&source)?;
    for error in &errors {
        println!("{}", error);
    }
    if !errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_lint_command(matches: &ArgMatches, config: &EngineConfig) -> Result<(), ProcessingError> {
    let source = read_source(matches)?;
    for record in Processor::from_config(config).lint(&source)? {
        println!("{}", record);
    }
    Ok(())
}

fn handle_format_command(
    matches: &ArgMatches,
    config: &EngineConfig,
) -> Result<(), ProcessingError> {
    let source = read_source(matches)?;
    let format = if matches.get_flag("trim") || config.formatting.trim {
        OutputFormat::MacroTrim
    } else {
        OutputFormat::Macro
    };
    let spec = ProcessingSpec::new(ProcessingStage::Format, format);
    println!("{}", Processor::from_config(config).process(&source, &spec)?);
    Ok(())
}

fn handle_inspect_command(
    matches: &ArgMatches,
    config: &EngineConfig,
) -> Result<(), ProcessingError> {
    let source = read_source(matches)?;
    let name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");
    let spec = ProcessingSpec::from_string(&format!("ast-{}", name))?;
    print!("{}", Processor::from_config(config).process(&source, &spec)?);
    Ok(())
}

fn handle_reference_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let tables = ReferenceTables::standard();
    match matches.subcommand() {
        Some(("commands", _)) => {
            for (category, commands) in tables.commands_by_category() {
                println!("{}:", category);
                for command in commands {
                    println!("  {}", command);
                }
            }
        }
        Some(("conditionals", _)) => {
            for key in tables.known_conditional_keys() {
                println!("{}", key);
            }
        }
        Some(("values", sub)) => {
            let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or("");
            match tables.allowed_values_for(key) {
                None => return Err(ProcessingError::UnknownKey(key.to_string())),
                Some([]) => println!("(any value, or none)"),
                Some(values) => {
                    for value in values {
                        println!("{}", value);
                    }
                }
            }
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    for (name, description) in FormatRegistry::with_defaults().descriptions() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
