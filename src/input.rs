/*!
Input processing: run options and the two input modes
*/

use std::io::Read;

use simplelog::LevelFilter;

/// Options controlling a run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Append a TOTAL line to the report
    pub total: bool,
    /// Diagnostic verbosity; never changes the histogram
    pub debug_level: i32,
}

impl Options {
    /// Map the debug level onto a log filter
    pub fn log_level(&self) -> LevelFilter {
        match self.debug_level {
            ..=0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Where the bytes come from
///
/// - Stream: one continuous decode unit until end of stream
/// - Words: each word is its own decode unit
pub enum Input {
    Stream(Box<dyn Read>),
    Words(Vec<Vec<u8>>),
}

impl Input {
    /// Stream input from any reader (stdin in the binary)
    pub fn from_reader<R: Read + 'static>(reader: R) -> Input {
        Input::Stream(Box::new(reader))
    }
    /// Word input, taken as raw bytes
    pub fn from_words<I, W>(words: I) -> Input
    where
        I: IntoIterator<Item = W>,
        W: Into<Vec<u8>>,
    {
        Input::Words(words.into_iter().map(Into::into).collect())
    }
    /// Short description for log lines
    pub fn describe(&self) -> String {
        match self {
            Input::Stream(_) => "<stdin>".to_string(),
            Input::Words(words) => format!("{} word(s)", words.len()),
        }
    }
}
