//! ISO-8601 duration strings in designator form:
//! `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.

mod format;
mod parse;

pub use format::{to_iso_duration, to_iso_duration_with};
pub use parse::{parse, parse_with};
