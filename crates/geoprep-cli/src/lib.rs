//! Library surface of the geoprep CLI: logging setup and the two
//! end-to-end pipelines the binary wires to its subcommands.

pub mod logging;
pub mod pipeline;
