use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

const EXAMPLE: &str = "\
EXAMPLE
    Letter histogram, most frequent first:

     $ lethist | sort -k2 -n -r

     $ lethist \"Cottonwood trees are, perhaps, the best shade trees\"
     ,       2
     C       1
     a       3
     b       1
     d       2
     e       9
     h       3
     n       1
     o       4
     p       2
     r       4
     s       5
     t       6
     w       1

SEE ALSO
    addletters(1)";

/// Letter histogram from <stdin> or from 'words'
#[derive(Parser)]
#[command(name = "lethist", version, after_help = EXAMPLE)]
struct Cli {
    /// Print total
    #[arg(short = 't')]
    total: bool,
    /// Set debug level
    #[arg(short = 'D', value_name = "LVL", default_value_t = 0,
          allow_negative_numbers = true, value_parser = parse_level)]
    debug: i32,
    /// Words to count, each on its own; reads <stdin> when none are given
    #[arg(value_name = "WORDS")]
    words: Vec<OsString>,
}

/// Read a debug level the way `atoi` does: optional sign and leading digits, 0 otherwise
fn parse_level(value: &str) -> Result<i32, String> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let level = rest[..digits].parse::<i64>().unwrap_or(0);
    let level = if negative { -level } else { level };
    Ok(level.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

fn main() -> ExitCode {
    // bad options print usage and exit here, before any input is read
    let cli = Cli::parse();

    let options = lethist::Options { total: cli.total, debug_level: cli.debug };
    let mut analysis = lethist::Analysis::new(options);
    if cli.words.is_empty() {
        analysis.input_from_reader(io::stdin().lock());
    } else {
        analysis.input_from_words(cli.words.into_iter().map(OsString::into_encoded_bytes));
    }

    match analysis.run().and_then(|_| analysis.write_report(io::stdout().lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_words() {
        let cli = Cli::try_parse_from(["lethist", "-t", "-D", "2", "a", "b"]).unwrap();
        assert!(cli.total);
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.words, vec![OsString::from("a"), OsString::from("b")]);
    }

    #[test]
    fn defaults_read_stdin() {
        let cli = Cli::try_parse_from(["lethist"]).unwrap();
        assert!(!cli.total);
        assert_eq!(cli.debug, 0);
        assert!(cli.words.is_empty());
    }

    #[test]
    fn unknown_option_is_a_usage_error() {
        let err = Cli::try_parse_from(["lethist", "-x", "abc"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert!(err.use_stderr());
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn negative_debug_level() {
        let cli = Cli::try_parse_from(["lethist", "-D", "-1", "abc"]).unwrap();
        assert_eq!(cli.debug, -1);
        assert_eq!(cli.words, vec![OsString::from("abc")]);
    }

    #[test]
    fn debug_level_read_like_atoi() {
        let cli = Cli::try_parse_from(["lethist", "-D", "x", "abc"]).unwrap();
        assert_eq!(cli.debug, 0);
        assert_eq!(cli.words, vec![OsString::from("abc")]);
        assert_eq!(parse_level("3rd"), Ok(3));
        assert_eq!(parse_level(" +7"), Ok(7));
        assert_eq!(parse_level("-12"), Ok(-12));
        assert_eq!(parse_level(""), Ok(0));
        assert_eq!(parse_level("99999999999"), Ok(i32::MAX));
    }
}
