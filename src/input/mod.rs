//! Input decoding
//!
//! The header picks the encoding; both encodings yield raw deployment records
//! lazily so the whole stream is never held in memory.

pub mod deployment_list;
pub mod header;
pub mod random;

use std::io::BufRead;

use crate::battle::deployment::RawDeployment;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;

pub use deployment_list::{parse_record, DeploymentList};
pub use header::{GalaxyHeader, InputMode, RandomParams};
pub use random::RandomDeployments;

/// Number of header lines before the first deployment list record
const LIST_HEADER_LINES: usize = 4;

/// Record stream for either encoding
pub enum DeploymentStream<R> {
    List(DeploymentList<R>),
    Random(RandomDeployments),
}

impl<R: BufRead> Iterator for DeploymentStream<R> {
    type Item = Result<RawDeployment>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            DeploymentStream::List(list) => list.next(),
            DeploymentStream::Random(random) => random.next(),
        }
    }
}

/// Read the header and set up the matching record stream
pub fn open<R: BufRead>(mut reader: R, bounds: GeneratorConfig) -> Result<(GalaxyHeader, DeploymentStream<R>)> {
    let header = GalaxyHeader::read(&mut reader)?;
    tracing::info!(
        mode = ?header.mode,
        generals = header.num_generals,
        planets = header.num_planets,
        "header read"
    );

    let stream = match header.mode {
        InputMode::DeploymentList => {
            DeploymentStream::List(DeploymentList::new(reader, LIST_HEADER_LINES + 1))
        }
        InputMode::PseudoRandom(params) => DeploymentStream::Random(RandomDeployments::new(
            params,
            header.num_generals,
            header.num_planets,
            bounds,
        )),
    };
    Ok((header, stream))
}
