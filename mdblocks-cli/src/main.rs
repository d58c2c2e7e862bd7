// Command-line interface for mdblocks
//
// This binary converts Markdown into outline blocks and inspects the intermediate stages of
// that conversion. The conversion itself lives in the mdblocks crate; this binary only wires
// files, configuration and formats together.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overridden by an explicit --from flag.
// Usage:
//  mdblocks <input> --to <format> [--from <format>] [--mode <mode>] [-o <file>]  - Convert
//  mdblocks convert <input> --to <format> [--from <format>] [--mode <mode>] [-o <file>]
//  mdblocks inspect <path> [<transform>]      - Execute a transform (defaults to "blocks-treeviz")
//  mdblocks --list-formats                    - List available formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  mdblocks notes.md --to markdown --extra-bullet '*' --extra-indent-string '    '
//
// Logging:
//
// Diagnostics go to stderr through tracing. MDBLOCKS_LOG (or RUST_LOG) sets the filter,
// e.g. MDBLOCKS_LOG=mdblocks=debug. The default only shows warnings.

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use mdblocks::formats::MarkdownFormat;
use mdblocks::{FormatRegistry, Pipeline, PipelineOptions, RenderMode};
use mdblocks_config::{Loader, MdblocksConfig};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            // A following arg that is not a flag is this parameter's value
            match args.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    extra_params.insert(key.to_string(), next.clone());
                    i += 2;
                }
                _ => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdblocks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into outline blocks")
        .long_about(
            "mdblocks turns Markdown documents into a tree of outline blocks: headings own\n\
            the content that follows them, list items nest, and task markers are normalized.\n\n\
            Commands:\n  \
            - convert: Convert between formats (markdown, json, flat, treeviz)\n  \
            - inspect: View intermediate stages (normalized text, AST, blocks)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdblocks notes.md --to json                  # Block tree as JSON (stdout)\n  \
            mdblocks notes.md --to markdown -o out.md    # Markdown outline file\n  \
            mdblocks notes.md --to flat --mode compact   # Single compact block\n  \
            mdblocks inspect notes.md                    # Block tree visualization\n  \
            mdblocks inspect notes.md md-ast             # Markdown AST",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdblocks.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the intermediate stages of a conversion")
                .long_about(
                    "View a Markdown file at different stages of the block conversion.\n\n\
                    Transforms (stage-format):\n  \
                    - md-normalized:   Text after task keyword normalization\n  \
                    - md-ast:          Markdown AST as tree visualization\n  \
                    - blocks-treeviz:  Block tree visualization (default)\n  \
                    - blocks-json:     Block tree as JSON\n  \
                    - blocks-flat:     Flat content strings as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-icons false   Hide node icons in tree views\n\n\
                    Examples:\n  \
                    mdblocks inspect notes.md                  # Block tree (default)\n  \
                    mdblocks inspect notes.md md-ast           # Markdown AST\n  \
                    mdblocks inspect notes.md md-normalized    # Parser input",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'blocks-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown in, Markdown outline out (.md)\n  \
                    - json:     {text, children} block tree (.json)\n  \
                    - flat:     Pre-order content strings (output only)\n  \
                    - treeviz:  Tree visualization (output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdblocks convert notes.md --to json            # Block tree (stdout)\n  \
                    mdblocks convert blocks.json --to markdown     # JSON tree to outline\n  \
                    mdblocks notes.md --to treeviz                 # 'convert' is optional",
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
                    Arg::new("mode")
                        .long("mode")
                        .help("Render mode for the parsed blocks (overrides [render] mode)")
                        .value_parser(["readable", "compact"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MDBLOCKS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means "convert" was omitted
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !matches!(cleaned_args[1].as_str(), "inspect" | "convert" | "help")
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

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
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("path is required");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                fail("input and --to are required");
            };

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        fail("Please specify --from explicitly");
                    }),
            };

            if let Some(mode) = sub_matches.get_one::<String>("mode") {
                config.render.mode = mode.parse().unwrap_or_else(|e: String| fail(&e));
            }

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn pipeline_from_config(config: &MdblocksConfig) -> Pipeline {
    Pipeline::new(PipelineOptions::from(&config.parse))
}

/// Registry whose Markdown format follows the configured pipeline and outline rules.
fn registry_from_config(config: &MdblocksConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new(
        pipeline_from_config(config),
        (&config.convert.outline).into(),
    ));
    registry
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MdblocksConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{path}': {e}"));
    });

    let params = build_inspect_params(config, extra_params);
    let pipeline = pipeline_from_config(config);

    let output = transforms::execute_transform(&source, transform, &pipeline, &params)
        .unwrap_or_else(|e| fail(&format!("Execution error: {e}")));

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MdblocksConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            fail(&format!("Error: {e}"));
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        fail(&format!("Error reading file '{input}': {e}"));
    });

    let blocks = registry
        .parse(&source, from)
        .unwrap_or_else(|e| fail(&format!("Parse error: {e}")));
    let blocks = match config.render.mode {
        RenderMode::Readable => blocks,
        RenderMode::Compact => mdblocks::compact(&blocks),
    };
    tracing::debug!(blocks = blocks.len(), from, to, "converted input");

    let text = registry
        .serialize_with_options(&blocks, to, extra_params)
        .unwrap_or_else(|e| fail(&format!("Serialization error: {e}")));

    match output {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            fail(&format!("Error writing file '{path}': {e}"));
        }),
        None => print!("{text}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format in registry.formats() {
        let directions = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, _) => "out",
        };
        println!(
            "  {:<10} {:<7} {}",
            format.name(),
            directions,
            format.description()
        );
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdblocksConfig {
    let loader = Loader::new().with_optional_file("mdblocks.toml");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

/// Move config-backed extras into the config, leaving format-only extras in the map.
fn apply_config_overrides(config: &mut MdblocksConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["max-nesting-depth", "max-depth"]) {
        config.parse.max_nesting_depth = raw.parse().unwrap_or_else(|_| {
            fail(&format!(
                "Invalid value '{raw}' for --extra-max-nesting-depth (expected a number)"
            ))
        });
    }
    if let Some(raw) = take_override(extra_params, &["mode"]) {
        config.render.mode = raw.parse().unwrap_or_else(|e: String| fail(&e));
    }
    if let Some(raw) = take_override(extra_params, &["icons", "show-icons"]) {
        config.inspect.show_icons = parse_bool_arg("icons", &raw);
    }
}

fn build_inspect_params(
    config: &MdblocksConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("icons".to_string(), config.inspect.show_icons.to_string());

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
