use std::io::Write;

use cardbox_core::config::Settings;
use cardbox_rfc::codec::{ContactRecord, EncodeOptions, encode_with};
use cardbox_service::{ContactDirectory, ExportOptions, Handle};

use super::{AppendArgs, BundleArgs, Cli, Commands, DuplicatesArgs, ExportArgs, ShowArgs};
use crate::error::AppResult;

/// Scans the configured source and executes one command.
///
/// ## Summary
/// Results go to `out`. Problems that do not stop the command (unreadable
/// files, malformed blocks, skipped or overwritten exports) are printed to
/// `err` as warnings.
///
/// ## Errors
/// Returns an error if the command itself fails: an unknown handle, an
/// invalid threshold, an unwritable destination, or a failed write to
/// `out`/`err`.
#[tracing::instrument(skip_all, fields(source = %cli.source.display()))]
pub fn run(
    cli: &Cli,
    settings: &Settings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> AppResult<()> {
    let directory = load_directory(cli);

    for error in directory.errors() {
        writeln!(err, "warning: {error}")?;
    }

    match &cli.command {
        Commands::List => list(&directory, out),
        Commands::Show(args) => show(&directory, args, out),
        Commands::Duplicates(args) => duplicates(&directory, args, settings, out),
        Commands::Export(args) => export(&directory, args, settings, out, err),
        Commands::Append(args) => append(&directory, args, settings, out),
        Commands::Bundle(args) => bundle(&directory, args, settings, out),
    }
}

fn load_directory(cli: &Cli) -> ContactDirectory {
    if cli.dir {
        ContactDirectory::scan(&cli.source, true)
    } else if cli.file {
        ContactDirectory::scan(&cli.source, false)
    } else {
        ContactDirectory::scan_auto(&cli.source)
    }
}

fn export_options(flag: bool, settings: &Settings) -> ExportOptions {
    ExportOptions {
        quoted_printable: flag || settings.export.quoted_printable,
    }
}

fn name_of(directory: &ContactDirectory, handle: Handle) -> String {
    directory
        .get(handle)
        .map(ContactRecord::display_name)
        .unwrap_or_default()
}

fn list(directory: &ContactDirectory, out: &mut impl Write) -> AppResult<()> {
    for (handle, record) in directory.iter() {
        writeln!(
            out,
            "{handle}\t{}\t{}",
            record.display_name(),
            record.primary_phone()
        )?;
    }
    Ok(())
}

fn show(directory: &ContactDirectory, args: &ShowArgs, out: &mut impl Write) -> AppResult<()> {
    let record = directory.require(args.handle)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, record)?;
        writeln!(out)?;
    } else {
        out.write_all(encode_with(record, EncodeOptions::default()).as_bytes())?;
    }

    Ok(())
}

fn duplicates(
    directory: &ContactDirectory,
    args: &DuplicatesArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> AppResult<()> {
    let threshold = args.threshold.unwrap_or(settings.duplicates.threshold);
    let candidates = directory.find_duplicate_candidates_above(threshold)?;

    if candidates.is_empty() {
        writeln!(out, "No duplicate candidates above {threshold}")?;
        return Ok(());
    }

    for candidate in &candidates {
        writeln!(
            out,
            "{} {} <-> {} {} ({}, name {:.2}, phone {:.2})",
            candidate.first,
            name_of(directory, candidate.first),
            candidate.second,
            name_of(directory, candidate.second),
            candidate.reason,
            candidate.name_similarity,
            candidate.phone_similarity,
        )?;
    }

    Ok(())
}

fn export(
    directory: &ContactDirectory,
    args: &ExportArgs,
    settings: &Settings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> AppResult<()> {
    let options = export_options(args.quoted_printable, settings);
    let report = directory.export(&args.destination, options)?;

    for path in &report.overwritten {
        writeln!(err, "warning: overwrote {}", path.display())?;
    }
    for (_, failure) in &report.failures {
        writeln!(err, "warning: {failure}")?;
    }

    writeln!(
        out,
        "Wrote {} files to {}",
        report.count(),
        args.destination.display()
    )?;

    Ok(())
}

fn append(
    directory: &ContactDirectory,
    args: &AppendArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> AppResult<()> {
    let options = export_options(args.quoted_printable, settings);
    let path = directory.append_record(args.handle, &args.destination, options)?;

    writeln!(out, "Appended contact {} to {}", args.handle, path.display())?;

    Ok(())
}

fn bundle(
    directory: &ContactDirectory,
    args: &BundleArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> AppResult<()> {
    let options = export_options(args.quoted_printable, settings);
    let count = directory.export_bundle(&args.destination, options)?;

    writeln!(out, "Wrote {count} contacts to {}", args.destination.display())?;

    Ok(())
}
