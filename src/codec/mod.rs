// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Occupancy codec for compact beat-grid storage.
//!
//! A grid encodes to a string of `'1'` (occupied) and `'0'` (empty)
//! characters, one per slot in order. The encoding is deliberately lossy:
//! only occupancy survives, and decoding reconstructs occupied slots with
//! the default note, volume, and duration. Consumers wanting the persisted
//! shape serialize [`EncodedTrack`] values with serde.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Arrangement, Beat, Beats, Track, TrackKind, GRID_SIZE};

/// Failure to decode an encoded beat string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character other than '0' or '1' appeared in the string
    #[error("invalid character {ch:?} at position {index} in encoded beats")]
    InvalidChar { index: usize, ch: char },
    /// The string does not match the configured grid size
    #[error("encoded beats have length {actual}, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Encode a grid to its occupancy string
pub fn encode_beats(beats: &Beats) -> String {
    beats
        .iter()
        .map(|slot| if slot.is_some() { '1' } else { '0' })
        .collect()
}

/// Decode an occupancy string back to a grid.
///
/// Occupied slots come back as default beats; the original per-beat
/// note, volume, and duration are not recoverable.
pub fn decode_beats(encoded: &str) -> Result<Beats, DecodeError> {
    encoded
        .chars()
        .enumerate()
        .map(|(index, ch)| match ch {
            '1' => Ok(Some(Beat::default())),
            '0' => Ok(None),
            _ => Err(DecodeError::InvalidChar { index, ch }),
        })
        .collect()
}

/// A track with its grid in encoded string form; the wire/storage shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedTrack {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TrackKind,
    pub name: String,
    pub vol: f64,
    pub muted: bool,
    /// Occupancy string, exactly [`GRID_SIZE`] characters of '0'/'1'
    pub beats: String,
}

/// Replace a track's grid with its encoded string form
pub fn encode_track(track: &Track) -> EncodedTrack {
    EncodedTrack {
        id: track.id,
        kind: track.kind,
        name: track.name.clone(),
        vol: track.vol,
        muted: track.muted,
        beats: encode_beats(&track.beats),
    }
}

/// Rebuild a track from its encoded form.
///
/// Fails on malformed occupancy strings; a wrong-length string would
/// otherwise produce a wrong-length grid.
pub fn decode_track(encoded: &EncodedTrack) -> Result<Track, DecodeError> {
    if encoded.beats.chars().count() != GRID_SIZE {
        return Err(DecodeError::LengthMismatch {
            expected: GRID_SIZE,
            actual: encoded.beats.chars().count(),
        });
    }
    Ok(Track {
        id: encoded.id,
        kind: encoded.kind,
        name: encoded.name.clone(),
        vol: encoded.vol,
        muted: encoded.muted,
        beats: decode_beats(&encoded.beats)?,
    })
}

/// Encode every track in an arrangement, preserving order
pub fn encode_arrangement(arrangement: &Arrangement) -> Vec<EncodedTrack> {
    arrangement.tracks().iter().map(encode_track).collect()
}

/// Decode an encoded track sequence back into an arrangement
pub fn decode_arrangement(encoded: &[EncodedTrack]) -> Result<Arrangement, DecodeError> {
    let tracks = encoded.iter().map(decode_track).collect::<Result<_, _>>()?;
    Ok(Arrangement::from_tracks(tracks))
}
