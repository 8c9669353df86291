pub mod bedgraph;
pub mod sites;
mod utils;
