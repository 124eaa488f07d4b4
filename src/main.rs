use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use review_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use review_guard::config::{Config, ConfigLoader, FileConfigLoader, config_template};
use review_guard::output::{
    ColorMode, FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use review_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use review_guard::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> review_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Create GlobFilter
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scanner.extensions.clone());
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // 4. Discover files
    let scanner = DirectoryScanner::new(filter);
    let all_files = scanner.scan_all(&args.paths)?;

    // 5. Scan each file (parallel with rayon; each scan is stateless)
    let reports: Vec<FileReport> = all_files
        .par_iter()
        .filter_map(|file_path| {
            let content = fs::read_to_string(file_path).ok()?;
            let path_str = file_path.to_string_lossy().replace('\\', "/");
            let findings = review_guard::scan(&path_str, &content, &config.thresholds);
            Some(FileReport::new(path_str, findings))
        })
        .collect();

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    let has_findings = reports.iter().any(|r| !r.is_clean());

    if args.warn_only || !has_findings {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FINDINGS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> review_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_file_lines) = args.max_file_lines {
        config.thresholds.max_file_lines = max_file_lines;
    }

    if let Some(max_function_lines) = args.max_function_lines {
        config.thresholds.max_function_lines = max_function_lines;
    }

    if let Some(max_jsx_lines) = args.max_jsx_lines {
        config.thresholds.max_jsx_lines = max_jsx_lines;
    }

    if let Some(max_states) = args.max_states {
        config.thresholds.max_state_count = max_states;
    }

    if let Some(max_params) = args.max_params {
        config.thresholds.max_params = max_params;
    }
}

fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> review_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> review_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> review_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(review_guard::ReviewGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
