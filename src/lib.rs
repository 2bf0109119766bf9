// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! STEPLINE - pure arrangement model for a step sequencer.
//!
//! This crate provides:
//! - An immutable arrangement model: drum and bass tracks holding
//!   fixed-length beat grids, with pure transformation operations
//! - An occupancy codec for compact string storage of beat grids
//! - Randomized arrangement and song generation
//! - A loader for external sample-name lists
//!
//! Every operation takes an arrangement by reference and returns a new
//! value; callers keep old references for undo/retention. There is no
//! audio, no I/O beyond the sample-list loader, and no concurrency.

pub mod codec;
pub mod config;
pub mod generators;
pub mod model;

pub use codec::{
    decode_arrangement, decode_beats, decode_track, encode_arrangement, encode_beats,
    encode_track, DecodeError, EncodedTrack,
};
pub use config::SampleBank;
pub use generators::{random_arrangement, random_arrangement_with, random_song, random_song_with};
pub use model::{
    bass_notes, init_beats, Arrangement, Beat, Beats, Song, Track, TrackKind, GRID_SIZE,
};
