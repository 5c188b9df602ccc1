#[macro_use]
extern crate log;

pub mod input;
pub mod decode;
pub mod histogram;
pub mod report;
pub mod analysis;
pub mod error;

pub use analysis::Analysis as Analysis;
pub use error::LethistError as LethistError;
pub use input::{Input, Options};
