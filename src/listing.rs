//! Human-readable key listing for debugging.

use std::io::{self, Write};

use crate::HashTable;

/// Write every stored key, ascending, one per line.
pub fn write_sorted_keys<W: Write>(table: &HashTable, out: &mut W) -> io::Result<()> {
    for key in table.sorted_keys() {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

/// [`write_sorted_keys`] to standard output.
pub fn print_sorted_keys(table: &HashTable) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_sorted_keys(table, &mut out)?;
    out.flush()
}
