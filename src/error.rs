use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloodError {
    #[error("unable to open raw transport channel (are you root?): {0}")]
    Channel(#[source] io::Error),

    #[error("transmission failed after {sent} packet(s): {source}")]
    Transmit {
        sent: u64,
        #[source]
        source: io::Error,
    },
}
