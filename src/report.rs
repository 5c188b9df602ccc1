/*!
Writing the histogram report: one `<char>\t<count>` line per non-zero code
in ascending code order, and an optional `TOTAL\t<sum>` line.
*/

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::decode;
use crate::error::LethistError;
use crate::histogram::FrequencyTable;

/// Label of the total line
pub const TOTAL_LABEL: &str = "TOTAL";

/// Write the report for `table` to `out`
///
/// Accented codes are written back in their two-byte form, all others as a single byte.
/// Sorting by frequency is left to `sort -k2 -n -r`.
pub fn write_report<W: Write>(table: &FrequencyTable, total: bool, out: W) -> Result<(), LethistError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(out);

    let mut sum: u64 = 0;
    for (code, count) in table.iter() {
        wtr.write_record([decode::encode(code), count.to_string().into_bytes()])?;
        sum += count;
    }
    if total {
        wtr.write_record([TOTAL_LABEL.to_string(), sum.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
