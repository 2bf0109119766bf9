// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track and beat types with their default values.
//!
//! A track is one instrument lane: a sample name, a volume, a mute flag,
//! and a fixed-length grid of beat slots. Each slot is either empty or a
//! fully-populated note/volume/duration triple.

use serde::{Deserialize, Serialize};

/// Number of beat slots in every track grid
pub const GRID_SIZE: usize = 16;

/// Default pitch for a beat toggled on without an explicit note
pub const DEFAULT_NOTE: &str = "A4";

/// Default duration token (quarter note)
pub const DEFAULT_DUR: &str = "4n";

/// Sample name given to freshly added tracks
pub const DEFAULT_DRUM_SAMPLE: &str = "kick-electro01";

/// Volume given to freshly added tracks
pub const DEFAULT_DRUM_VOL: f64 = 0.8;

/// Valid bass pitches, low to high (roughly two octaves of A minor pentatonic)
const BASS_NOTES: [&str; 11] = [
    "A1", "C2", "D2", "E2", "G2", "A2", "C3", "D3", "E3", "G3", "A3",
];

/// Get the fixed bass pitch vocabulary
pub fn bass_notes() -> &'static [&'static str] {
    &BASS_NOTES
}

/// One occupied slot in a beat grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    /// Pitch identifier (e.g. "A4", "C3")
    pub note: String,
    /// Volume (0.0 to 1.0)
    pub vol: f64,
    /// Duration token (e.g. "4n" for a quarter note)
    pub dur: String,
}

impl Beat {
    /// Create a beat with an explicit pitch and default volume/duration
    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            vol: 1.0,
            dur: DEFAULT_DUR.to_string(),
        }
    }
}

impl Default for Beat {
    fn default() -> Self {
        Beat::with_note(DEFAULT_NOTE)
    }
}

/// A fixed-length grid of beat slots
pub type Beats = Vec<Option<Beat>>;

/// Create a grid of `n` empty slots
pub fn init_beats(n: usize) -> Beats {
    vec![None; n]
}

/// Instrument kind for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Drum,
    Bass,
}

/// One instrument lane in an arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique id, stable for the track's lifetime
    pub id: u32,
    /// Instrument kind (informational; does not constrain other fields)
    #[serde(rename = "type")]
    pub kind: TrackKind,
    /// Sample name for the sound this track triggers
    pub name: String,
    /// Track volume (0.0 to 1.0)
    pub vol: f64,
    /// Muted flag; toggled independently of `vol`
    pub muted: bool,
    /// Beat grid, always exactly [`GRID_SIZE`] slots long
    pub beats: Beats,
}

impl Track {
    /// Create a track with an empty grid
    pub fn new(id: u32, kind: TrackKind, name: impl Into<String>, vol: f64) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            vol,
            muted: false,
            beats: init_beats(GRID_SIZE),
        }
    }
}
