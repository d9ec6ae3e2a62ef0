//! Plain-text rendering of extracted records
//!
//! One block per title: a header line with the resolved title name and the
//! catalog id, one line per cast member in extraction order, then a blank
//! separator line.

use crate::record::TitleRecord;
use std::io::{self, Write};

/// Writes the report for all records to the given stream
///
/// # Arguments
///
/// * `out` - Destination stream
/// * `records` - Records in run order
pub fn write_report<W: Write>(out: &mut W, records: &[TitleRecord]) -> io::Result<()> {
    for record in records {
        writeln!(
            out,
            "Series: {} (IMDb ID: {})",
            record.title_name, record.catalog_id
        )?;

        for member in &record.members {
            writeln!(
                out,
                "ActorId: {}, Actor: {}, Character: {}",
                member.actor_id, member.actor_name, member.character_name
            )?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Writes the report to stdout
pub fn print_report(records: &[TitleRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, records)
}
