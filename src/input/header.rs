//! Input header
//!
//! ```text
//! COMMENT: anything
//! MODE: DL
//! NUM_GENERALS: 3
//! NUM_PLANETS: 2
//! ```
//!
//! `MODE: PR` adds `RANDOM_SEED`, `NUM_DEPLOYMENTS` and `ARRIVAL_RATE` lines.

use std::io::BufRead;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{space0, u32 as dec_u32, u64 as dec_u64},
    combinator::{all_consuming, value},
    sequence::delimited,
    IResult, Parser,
};
use serde::Serialize;

use crate::core::error::{GalaxyError, Result};

/// How the deployments following the header are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputMode {
    /// One literal record per line
    DeploymentList,
    /// Seeded pseudo-random stream
    PseudoRandom(RandomParams),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RandomParams {
    pub seed: u64,
    pub num_deployments: u32,
    pub arrival_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalaxyHeader {
    pub comment: String,
    pub mode: InputMode,
    pub num_generals: u32,
    pub num_planets: u32,
}

#[derive(Clone, Copy)]
enum ModeToken {
    List,
    Random,
}

fn mode_token(input: &str) -> IResult<&str, ModeToken> {
    alt((value(ModeToken::List, tag("DL")), value(ModeToken::Random, tag("PR")))).parse(input)
}

/// `KEY: value` with optional surrounding blanks
fn keyed<'a, O, P>(
    key: &'static str,
    parser: P,
) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    all_consuming(delimited((space0, tag(key), tag(":"), space0), parser, space0))
}

impl GalaxyHeader {
    /// Read the header lines, leaving the reader at the first record
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Self> {
        let mut lines = HeaderLines { reader, buf: String::new() };

        let comment = lines.field("COMMENT", |line| {
            let text = line.trim_start();
            let text = text.strip_prefix("COMMENT:").unwrap_or(text);
            Ok(("", text.trim().to_string()))
        })?;
        let mode = lines.field("MODE", |line| keyed("MODE", mode_token).parse(line))?;
        let num_generals =
            lines.field("NUM_GENERALS", |line| keyed("NUM_GENERALS", dec_u32).parse(line))?;
        let num_planets =
            lines.field("NUM_PLANETS", |line| keyed("NUM_PLANETS", dec_u32).parse(line))?;

        let mode = match mode {
            ModeToken::List => InputMode::DeploymentList,
            ModeToken::Random => {
                let seed =
                    lines.field("RANDOM_SEED", |line| keyed("RANDOM_SEED", dec_u64).parse(line))?;
                let num_deployments = lines
                    .field("NUM_DEPLOYMENTS", |line| keyed("NUM_DEPLOYMENTS", dec_u32).parse(line))?;
                let arrival_rate =
                    lines.field("ARRIVAL_RATE", |line| keyed("ARRIVAL_RATE", dec_u32).parse(line))?;
                if arrival_rate == 0 {
                    return Err(GalaxyError::InvalidHeader("ARRIVAL_RATE must be positive".into()));
                }
                InputMode::PseudoRandom(RandomParams { seed, num_deployments, arrival_rate })
            }
        };

        Ok(Self { comment, mode, num_generals, num_planets })
    }
}

struct HeaderLines<'r, R> {
    reader: &'r mut R,
    buf: String,
}

impl<R: BufRead> HeaderLines<'_, R> {
    /// Parse the next line with `parser`, which must consume all of it
    fn field<O, P>(&mut self, key: &str, mut parser: P) -> Result<O>
    where
        P: FnMut(&str) -> IResult<&str, O>,
    {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(GalaxyError::InvalidHeader(format!("missing {} line", key)));
        }
        let line = self.buf.trim_end_matches(['\n', '\r']);
        parser(line)
            .map(|(_, value)| value)
            .map_err(|_| GalaxyError::InvalidHeader(format!("expected {}, found {:?}", key, line)))
    }
}
