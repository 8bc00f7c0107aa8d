//! Subcommand handlers.
//!
//! Handlers write to a caller-supplied sink so they can be tested without a
//! terminal.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::{debug, info};
use vbsp_formats::{
    BspFile, BspHeader, LUMP_COUNT, LumpEntry, LumpId, lump_entry_offset, read_entry_for,
};

fn four_cc_label(entry: &LumpEntry) -> String {
    if entry.is_compressed() {
        hex::encode(entry.four_cc_bytes())
    } else {
        "-".to_string()
    }
}

fn identifier_label(header: &BspHeader) -> String {
    String::from_utf8_lossy(&header.identifier().to_le_bytes()).into_owned()
}

/// Print the decoded header and its lump directory
pub fn info<W: Write>(path: &Path, format: OutputFormat, all: bool, out: &mut W) -> Result<()> {
    let bsp = BspFile::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let header = bsp.header();

    let lumps: Vec<(LumpId, &LumpEntry)> = LumpId::ALL
        .iter()
        .map(|id| (*id, header.lump(*id)))
        .filter(|(_, entry)| all || !entry.is_empty())
        .collect();

    match format {
        OutputFormat::Json => {
            let doc = json!({
                "identifier": identifier_label(header),
                "version": header.version(),
                "map_revision": header.map_revision(),
                "lumps": lumps
                    .iter()
                    .map(|(id, entry)| json!({
                        "index": id.index(),
                        "name": id.name(),
                        "offset": entry.file_offset,
                        "length": entry.file_length,
                        "version": entry.version,
                        "four_cc": entry.four_cc,
                    }))
                    .collect::<Vec<_>>(),
            });
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "identifier:   {}", identifier_label(header))?;
            writeln!(out, "version:      {}", header.version())?;
            writeln!(out, "map revision: {}", header.map_revision())?;
            writeln!(
                out,
                "lumps:        {} of {} present",
                header.present_lumps().count(),
                LUMP_COUNT
            )?;
            writeln!(out)?;
            writeln!(
                out,
                "{:>3}  {:<36} {:>10} {:>10} {:>4}  {}",
                "idx", "name", "offset", "length", "ver", "fourcc"
            )?;
            for (id, entry) in &lumps {
                writeln!(
                    out,
                    "{:>3}  {:<36} {:>10} {:>10} {:>4}  {}",
                    id.index(),
                    id.name(),
                    entry.file_offset,
                    entry.file_length,
                    entry.version,
                    four_cc_label(entry)
                )?;
            }
        }
    }

    Ok(())
}

/// Print one directory entry, read by seeking straight to it
pub fn entry<W: Write>(path: &Path, lump: LumpId, out: &mut W) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    debug!(
        "Reading {} directory entry at header offset {}",
        lump,
        lump_entry_offset(lump.index())
    );
    let entry = read_entry_for(&mut reader, lump)
        .with_context(|| format!("Failed to read {} entry from {}", lump, path.display()))?;

    writeln!(out, "{} ({})", lump, lump.index())?;
    writeln!(out, "  offset:  {}", entry.file_offset)?;
    writeln!(out, "  length:  {}", entry.file_length)?;
    writeln!(out, "  version: {}", entry.version)?;
    writeln!(out, "  fourcc:  {}", four_cc_label(&entry))?;
    Ok(())
}

/// Copy a lump's payload to `output`, or to `stdout` when no path is given
pub fn extract<W: Write>(
    path: &Path,
    lump: LumpId,
    output: Option<&Path>,
    stdout: &mut W,
) -> Result<()> {
    let mut bsp =
        BspFile::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let data = bsp
        .read_lump(lump)
        .with_context(|| format!("Failed to read {} from {}", lump, path.display()))?;

    match output {
        Some(target) => {
            std::fs::write(target, &data)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            info!("Wrote {} bytes of {} to {}", data.len(), lump, target.display());
        }
        None => {
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
