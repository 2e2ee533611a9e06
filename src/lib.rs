//! wikitunes - search a public encyclopedia for songs and play the audio
//! clips attached to the matching articles.
//!
//! The core is the [`resolver`] pipeline (query → playable audio URLs);
//! [`model`], [`controller`] and [`view`] make up the TUI around it and
//! [`audio`] hands the resolved URLs to the platform's media player.

pub mod audio;
pub mod controller;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod view;
