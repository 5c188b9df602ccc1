/*!
Defines the analysis object (struct) and analysis states
*/

use simplelog::*;
use std::io::{BufReader, Read, Write};

use crate::decode::{Decoded, Decoder};
use crate::error::LethistError;
use crate::histogram::FrequencyTable;
use crate::input::{Input, Options};
use crate::report;

/// Enumerate the analysis states for tracking
#[derive(Debug, PartialEq)]
enum AnalysisState {
    PostInput,
    PostCount,
    Null
}

/// Per-unit tally, for diagnostics only
#[derive(Default)]
struct UnitStats {
    bytes: usize,
    counted: usize,
    skipped: usize,
    dangling_lead: bool,
}

///This contains all data related to the analysis and the main wrapper functions
///
/// Methods:
/// - create an Analysis
/// - input (stream or words)
/// - run
/// - get table / write report
pub struct Analysis {
    options: Options,
    input: Option<Input>,
    table: FrequencyTable,
    analysis_state: AnalysisState,
}

impl Analysis {
    pub fn new(options: Options) -> Analysis {
        Analysis {
            options,
            input: None,
            table: FrequencyTable::new(),
            analysis_state: AnalysisState::Null,
        }
    }
    /// Input from a byte stream (stdin in the binary)
    pub fn input_from_reader<R: Read + 'static>(&mut self, reader: R) {
        self.set_input(Input::from_reader(reader));
    }
    /// Input from words, each decoded independently
    pub fn input_from_words<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: Into<Vec<u8>>,
    {
        self.set_input(Input::from_words(words));
    }
    /// Directly set an input
    pub fn set_input(&mut self, input: Input) {
        self.input = Some(input);
        self.analysis_state = AnalysisState::PostInput;
    }
    /// Run the analysis: decode the input and accumulate into the table
    ///
    /// The input is consumed. A later input and run keeps adding to the same table.
    pub fn run(&mut self) -> Result<(), LethistError> {
        // diagnostics go to stderr only, stdout carries the report
        let _ = TermLogger::init(self.options.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

        let input = self.input.take().ok_or(LethistError::NoInput)?;

        info!("=== lethist <=> letter histogram ===");
        info!("Ver. {}", env!("CARGO_PKG_VERSION"));
        info!(" Reading {}...", input.describe());

        match input {
            Input::Stream(reader) => {
                // one decode unit for the whole stream
                let mut decoder = Decoder::new();
                let mut stats = UnitStats::default();
                for byte in BufReader::new(reader).bytes() {
                    accumulate(&mut self.table, &mut decoder, byte?, &mut stats);
                }
                stats.dangling_lead = decoder.finish();
                log_unit("<stdin>", &stats);
            }
            Input::Words(words) => {
                for (i, word) in words.iter().enumerate() {
                    // decoding restarts with every word
                    let mut decoder = Decoder::new();
                    let mut stats = UnitStats::default();
                    for byte in word {
                        accumulate(&mut self.table, &mut decoder, *byte, &mut stats);
                    }
                    stats.dangling_lead = decoder.finish();
                    log_unit(&format!("word {}", i + 1), &stats);
                }
            }
        }

        self.analysis_state = AnalysisState::PostCount;
        if self.table.is_empty() {
            info!(" No characters counted");
        } else {
            info!(" Counted {} character(s), {} distinct", self.table.total(), self.table.distinct());
        }
        info!(" Complete!");
        Ok(())
    }
    /// Return ref to the frequency table
    pub fn get_table(&self) -> &FrequencyTable {
        &self.table
    }
    /// Write the report (and TOTAL line if enabled) to out
    pub fn write_report<W: Write>(&self, out: W) -> Result<(), LethistError> {
        if self.analysis_state != AnalysisState::PostCount {
            warn!(" Writing report before any input was counted");
        }
        report::write_report(&self.table, self.options.total, out)
    }
}

/// Decode one byte and count it if it yields a character
#[inline]
fn accumulate(table: &mut FrequencyTable, decoder: &mut Decoder, byte: u8, stats: &mut UnitStats) {
    stats.bytes += 1;
    match decoder.feed(byte) {
        Decoded::Char(code) => {
            table.increment(code);
            stats.counted += 1;
        }
        Decoded::Skip => {
            trace!(" skipped byte {:#04x}", byte);
            stats.skipped += 1;
        }
        Decoded::Pending => {}
    }
}

fn log_unit(name: &str, stats: &UnitStats) {
    debug!(" {}: {} byte(s), {} counted, {} skipped", name, stats.bytes, stats.counted, stats.skipped);
    if stats.dangling_lead {
        debug!(" {}: discarded trailing lead byte", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn run_without_input() {
        let mut analysis = Analysis::new(Options::default());
        assert!(matches!(analysis.run(), Err(LethistError::NoInput)));
    }

    #[test]
    fn input_is_consumed_and_runs_accumulate() {
        let mut analysis = Analysis::new(Options::default());
        analysis.input_from_words(vec!["aa"]);
        analysis.run().unwrap();
        assert!(matches!(analysis.run(), Err(LethistError::NoInput)));
        analysis.input_from_reader(Cursor::new(b"ab".to_vec()));
        analysis.run().unwrap();
        assert_eq!(analysis.get_table().count(b'a'), 3);
        assert_eq!(analysis.get_table().count(b'b'), 1);
    }

    #[test]
    fn stream_read_error_is_reported() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
            }
        }
        let mut analysis = Analysis::new(Options::default());
        analysis.input_from_reader(Broken);
        assert!(matches!(analysis.run(), Err(LethistError::Io(_))));
    }
}
