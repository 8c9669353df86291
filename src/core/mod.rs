pub use error::{Error, Result};
pub use query::{QuerySpec, DEFAULT_POSITION_NAME};
pub use store::SampleStore;
pub use track::{Position, SampleTrack, TrackRow};

mod error;
pub mod io;
mod query;
pub mod scoring;
mod store;
mod track;
