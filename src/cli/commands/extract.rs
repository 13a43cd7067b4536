use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};

use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::{
    cli::args::ExtractCommand,
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        extract_files,
        file_scanner::scan_files,
        output::{Report, write_report},
        parsers::existing_keys::load_existing_keys,
    },
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let verbose = args.common.verbose;

    // CLI --source-root decides where the config is looked up; the config's
    // own paths are relative to it.
    let root_dir = args
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root_dir)?;
    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let config = config_result.config;

    let scan_root = resolve_from_root(&root_dir, Path::new(&config.source_root));
    let scan_path = scan_root
        .to_str()
        .ok_or_else(|| anyhow!("Invalid path: {:?}", scan_root))?;

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => resolve_from_root(&root_dir, Path::new(&config.output_dir)),
    };
    let existing_keys_path = match &args.existing_keys {
        Some(path) => Some(path.clone()),
        None => config
            .existing_keys
            .as_deref()
            .map(|p| resolve_from_root(&root_dir, Path::new(p))),
    };

    // Fail on a bad key list before doing any work.
    let existing = match &existing_keys_path {
        Some(path) => Some(load_existing_keys(path)?),
        None => None,
    };

    let scan_result = scan_files(
        scan_path,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
    );
    if scan_result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan_result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    let aggregate = extract_files(&scan_result.files);
    let new_keys = aggregate.new_keys(existing.as_ref().unwrap_or(&HashSet::new()));

    let written = if args.dry_run {
        Vec::new()
    } else {
        write_report(
            &output_dir,
            &Report {
                keys: &new_keys,
                warnings: &aggregate.warnings,
                errors: &aggregate.errors,
            },
        )
        .with_context(|| format!("Failed to write report to {}", output_dir.display()))?
    };

    let summary = ExtractSummary {
        key_count: aggregate.keys.len(),
        new_key_count: new_keys.len(),
        existing_key_count: existing.as_ref().map(HashSet::len),
        output_dir,
        written,
        is_dry_run: args.dry_run,
        skipped_count: scan_result.skipped_count,
    };

    Ok(finish(
        CommandSummary::Extract(summary),
        aggregate.issues(),
        aggregate.files_checked,
    ))
}

/// Resolve a config path against the directory the config was searched from.
fn resolve_from_root(root_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(Path::new(".")).unwrap_or(path);
        root_dir.join(rel)
    }
}
