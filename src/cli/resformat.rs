use std::io;

use crate::core::scoring::ScoreRecord;

pub const FILE_NAME: &str = "fileName";
pub const SCORE_B: &str = "ScoreB";
pub const SCORE_C: &str = "ScoreC";

/// Writes the header and one row per record. The writer must be built without automatic headers.
pub fn scores<W: io::Write>(
    saveto: &mut csv::Writer<W>,
    position_name: &str,
    records: &[ScoreRecord],
) -> csv::Result<()> {
    saveto.write_record([FILE_NAME, position_name, SCORE_B, SCORE_C])?;
    for record in records {
        saveto.serialize(record)?;
    }
    saveto.flush()?;
    Ok(())
}
