//! Resolver module - query to playable audio URLs
//!
//! Maps a free-text query to an ordered list of articles, each carrying the
//! audio clips that could be resolved to a directly fetchable URL. It is
//! organized into submodules by responsibility:
//!
//! - `types`: pipeline data types and the audio filtering rules
//! - `error`: the error taxonomy (only search failures propagate)
//! - `client`: the three remote JSON service calls
//! - `pipeline`: the concurrent fan-out and reassembly

mod client;
mod error;
mod pipeline;
mod types;

pub use client::WikiClient;
pub use error::{FetchError, ResolveError};
pub use pipeline::Resolver;
pub use types::{
    has_audio_extension, plain_text_snippet, MediaReference, ResolvedMedia, ResultEntry,
    SearchHit, AUDIO_EXTENSIONS,
};
