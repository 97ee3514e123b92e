//! CSV export of a computed spectrum

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::spectrum::Spectrum;

/// Write `frequency_hz,magnitude_db` rows, one per bin
///
/// Non-finite levels are written the way Rust formats them (`-inf`, `NaN`) so
/// silent bins survive the round trip into other tools.
pub fn write_csv<W: Write>(spectrum: &Spectrum, mut writer: W) -> io::Result<()> {
    writeln!(writer, "frequency_hz,magnitude_db")?;
    for (hz, db) in spectrum.frequencies_hz.iter().zip(spectrum.magnitude_db.iter()) {
        writeln!(writer, "{},{}", hz, db)?;
    }
    writer.flush()
}

/// Write the CSV to a file
pub fn save_csv<P: AsRef<Path>>(spectrum: &Spectrum, path: P) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(spectrum, BufWriter::new(file))?;
    log::info!("Wrote {} bins to {}", spectrum.len(), path.as_ref().display());
    Ok(())
}
