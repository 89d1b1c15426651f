use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, validate_config_semantics,
};
use crate::error::Result;
use crate::input::{InputBuffer, InputSource, discover_inputs};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, ViolationListing,
    eol_mismatch_message, print_error,
};
use crate::status::Status;
use crate::validator::{InputReport, Validator};

/// Settings of the verbose listing rendered during scans.
#[derive(Debug, Clone, Copy)]
struct ListingOptions {
    separate_lines: bool,
    use_colors: bool,
}

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            print_error(&e);
            e.status().exit_code()
        }
    }
}

pub(crate) fn run_check_impl(cli: &Cli) -> Result<Status> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);
    validate_config_semantics(&config)?;
    debug!(?config, "effective configuration");

    // 2. Resolve inputs
    let sources = discover_inputs(&cli.input_paths(), &config.scanner)?;
    info!(inputs = sources.len(), "inputs resolved");

    // 3. Load and validate each input; nothing is reported before all succeed
    let color_mode = ColorMode::from(cli.color);
    let listing = (config.output.verbose && cli.format == OutputFormat::Text).then(|| {
        ListingOptions {
            separate_lines: config.output.line_separator,
            use_colors: color_mode.use_colors(),
        }
    });
    let validator = Validator::from_config(&config);
    let reports = validate_inputs(sources, &validator, listing)?;

    // 4. Report
    if cli.format == OutputFormat::Text {
        let prefix_name = reports.len() > 1;
        for message in reports
            .iter()
            .filter_map(|r| eol_mismatch_message(r, prefix_name))
        {
            eprintln!("{message}");
        }
    }
    let output = format_output(cli.format, &reports, color_mode, config.output.verbose)?;
    write_output(cli.output.as_deref(), &output)?;

    let status = reports
        .iter()
        .fold(Status::Valid, |acc, r| acc.worst(r.outcome.status()));
    info!(?status, "check finished");
    Ok(status)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Flags can only switch behavior on; an `--eol` value replaces the configured one.
const fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(eol) = cli.eol {
        config.eol = eol;
    }
    if cli.ff {
        config.charset.allow_form_feed = true;
    }
    if cli.vt {
        config.charset.allow_vertical_tab = true;
    }
    if cli.apa {
        config.charset.allow_all_printable_ascii = true;
    }
    if cli.noht {
        config.charset.forbid_horizontal_tab = true;
    }
    if cli.verbose {
        config.output.verbose = true;
    }
    if cli.no_line_separator {
        config.output.line_separator = false;
    }
}

/// Each buffer lives only for its own validation.
fn validate_inputs(
    sources: Vec<InputSource>,
    validator: &Validator,
    listing: Option<ListingOptions>,
) -> Result<Vec<InputReport>> {
    sources
        .into_par_iter()
        .map(|source| {
            let buffer = InputBuffer::load(&source)?;
            Ok(check_input(source, buffer.as_bytes(), validator, listing))
        })
        .collect()
}

fn check_input(
    source: InputSource,
    buf: &[u8],
    validator: &Validator,
    listing: Option<ListingOptions>,
) -> InputReport {
    let Some(options) = listing else {
        let outcome = validator.validate(buf);
        debug!(input = %source.display_name(), status = ?outcome.status(), "validated");
        return InputReport::new(source, outcome);
    };

    let mut observer = ViolationListing::new(options.separate_lines, options.use_colors);
    let outcome = validator.validate_with(buf, &mut observer);
    debug!(input = %source.display_name(), status = ?outcome.status(), "validated");
    InputReport::new(source, outcome).with_listing(observer.finish())
}

fn format_output(
    format: OutputFormat,
    reports: &[InputReport],
    color_mode: ColorMode,
    verbose: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_verbose(verbose)
            .format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        std::fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
