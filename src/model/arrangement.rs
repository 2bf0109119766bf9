// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Arrangement type and its pure transformation operations.
//!
//! An arrangement is an ordered sequence of tracks. Every operation takes
//! the current arrangement by reference and returns a new value; the input
//! is never mutated, so callers keep old references for undo. Operations
//! addressing an unknown track id or an out-of-range slot index return the
//! arrangement unchanged. This no-op policy is uniform across all
//! id-taking operations; callers may rely on it being idempotent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::track::{
    init_beats, Beat, Track, TrackKind, DEFAULT_DRUM_SAMPLE, DEFAULT_DRUM_VOL, GRID_SIZE,
};

/// An ordered collection of tracks; order is display/playback order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    tracks: Vec<Track>,
}

impl Arrangement {
    /// Create an empty arrangement
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arrangement from an existing track list
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The fixed starter set: four drum tracks and one bass track,
    /// ids 1 through 5, all grids empty.
    pub fn starter() -> Self {
        Self::from_tracks(vec![
            Track::new(1, TrackKind::Drum, "hihat-reso", 0.4),
            Track::new(2, TrackKind::Drum, "hihat-plain", 0.4),
            Track::new(3, TrackKind::Drum, "snare-vinyl01", 0.9),
            Track::new(4, TrackKind::Drum, "kick-electro01", 0.8),
            Track::new(5, TrackKind::Bass, "bass", 0.3),
        ])
    }

    /// Tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the arrangement has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Find a track by id
    pub fn track(&self, id: u32) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Next free id: one past the highest in use, or 1 when empty
    fn next_id(&self) -> u32 {
        self.tracks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Rebuild the arrangement with the matching track replaced.
    /// Unknown ids leave every track untouched.
    fn map_track<F>(&self, id: u32, f: F) -> Self
    where
        F: FnOnce(&Track) -> Track,
    {
        let mut f = Some(f);
        let tracks = self
            .tracks
            .iter()
            .map(|track| {
                if track.id == id {
                    match f.take() {
                        Some(f) => f(track),
                        None => track.clone(),
                    }
                } else {
                    track.clone()
                }
            })
            .collect();
        Self { tracks }
    }

    /// Append a new drum track with the default preset and an empty grid
    pub fn add_track(&self) -> Self {
        let id = self.next_id();
        debug!(id, "add track");
        let mut tracks = self.tracks.clone();
        tracks.push(Track::new(
            id,
            TrackKind::Drum,
            DEFAULT_DRUM_SAMPLE,
            DEFAULT_DRUM_VOL,
        ));
        Self { tracks }
    }

    /// Replace the named track's grid with a fresh all-empty one
    pub fn clear_track(&self, id: u32) -> Self {
        self.map_track(id, |track| Track {
            beats: init_beats(GRID_SIZE),
            ..track.clone()
        })
    }

    /// Remove the track with the matching id, preserving the order of the rest
    pub fn delete_track(&self, id: u32) -> Self {
        let tracks = self
            .tracks
            .iter()
            .filter(|track| track.id != id)
            .cloned()
            .collect();
        Self { tracks }
    }

    /// Toggle one slot on the named track: an empty slot becomes a beat
    /// with the given pitch and default volume/duration; an occupied slot
    /// becomes empty (the pitch argument is ignored on that path).
    pub fn toggle_beat(&self, id: u32, index: usize, note: &str) -> Self {
        debug!(id, index, note, "toggle beat");
        self.map_track(id, |track| {
            let mut beats = track.beats.clone();
            if let Some(slot) = beats.get_mut(index) {
                *slot = match slot {
                    Some(_) => None,
                    None => Some(Beat::with_note(note)),
                };
            }
            Track {
                beats,
                ..track.clone()
            }
        })
    }

    /// Set the named track's volume to exactly the given value.
    /// No clamping is performed; keeping the value in range is the
    /// caller's responsibility.
    pub fn set_volume(&self, id: u32, vol: f64) -> Self {
        self.map_track(id, |track| Track {
            vol,
            ..track.clone()
        })
    }

    /// Flip the named track's muted flag; volume is untouched
    pub fn toggle_mute(&self, id: u32) -> Self {
        self.map_track(id, |track| Track {
            muted: !track.muted,
            ..track.clone()
        })
    }

    /// Point the named track at a different sample
    pub fn rename_sample(&self, id: u32, sample: impl Into<String>) -> Self {
        self.map_track(id, |track| Track {
            name: sample.into(),
            ..track.clone()
        })
    }
}

/// A full song: an arrangement plus its tempo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Tempo in beats per minute
    pub bpm: u32,
    /// The song's tracks
    pub tracks: Arrangement,
}
