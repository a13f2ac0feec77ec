//! Deployment list records
//!
//! One record per line: `<timestamp> <JEDI|SITH> G<general> P<planet> F<force> #<troops>`.
//! Lines are parsed lazily as the dispatcher asks for them.

use std::io::BufRead;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, i64 as dec_i64, space0, space1},
    combinator::{all_consuming, map, value},
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::battle::deployment::RawDeployment;
use crate::core::error::{GalaxyError, Result};
use crate::core::types::Side;

fn side(input: &str) -> IResult<&str, Side> {
    alt((value(Side::Jedi, tag("JEDI")), value(Side::Sith, tag("SITH")))).parse(input)
}

/// Parse a single record line
pub fn parse_record(input: &str) -> IResult<&str, RawDeployment> {
    map(
        all_consuming(delimited(
            space0,
            (
                dec_i64,
                preceded(space1, side),
                preceded((space1, char('G')), dec_i64),
                preceded((space1, char('P')), dec_i64),
                preceded((space1, char('F')), dec_i64),
                preceded((space1, char('#')), dec_i64),
            ),
            space0,
        )),
        |(timestamp, side, general, planet, force, troops)| RawDeployment {
            timestamp,
            side,
            general,
            planet,
            force,
            troops,
        },
    )
    .parse(input)
}

/// Lazily parsed record section of a deployment list input
pub struct DeploymentList<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> DeploymentList<R> {
    /// `first_line` is the input line number of the first record
    pub fn new(reader: R, first_line: usize) -> Self {
        Self { reader, line: first_line.saturating_sub(1), buf: String::new() }
    }
}

impl<R: BufRead> Iterator for DeploymentList<R> {
    type Item = Result<RawDeployment>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line += 1;

            let text = self.buf.trim_end_matches(['\n', '\r']);
            if text.trim().is_empty() {
                continue;
            }
            return Some(parse_record(text).map(|(_, raw)| raw).map_err(|_| {
                GalaxyError::MalformedRecord { line: self.line, text: text.to_string() }
            }));
        }
    }
}
