// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Arrangement model: tracks, beats, and pure transformations.
//!
//! This module provides:
//! - Beats: fixed-length grids of optional note/volume/duration slots
//! - Tracks: one instrument lane with sample name, volume, and mute flag
//! - Arrangements: ordered track collections with value-semantics updates

pub mod arrangement;
pub mod track;

pub use arrangement::{Arrangement, Song};
pub use track::{
    bass_notes, init_beats, Beat, Beats, Track, TrackKind, DEFAULT_DRUM_SAMPLE, DEFAULT_DRUM_VOL,
    DEFAULT_DUR, DEFAULT_NOTE, GRID_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_creation() {
        let track = Track::new(7, TrackKind::Drum, "snare-vinyl01", 0.9);
        assert_eq!(track.id, 7);
        assert_eq!(track.name, "snare-vinyl01");
        assert!(!track.muted);
        assert_eq!(track.beats.len(), GRID_SIZE);
    }

    #[test]
    fn test_starter_arrangement() {
        let arrangement = Arrangement::starter();
        assert_eq!(arrangement.len(), 5);
        let ids: Vec<u32> = arrangement.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_beats() {
        let beats = init_beats(16);
        assert_eq!(beats.len(), 16);
        assert!(beats.iter().all(|slot| slot.is_none()));
    }
}
