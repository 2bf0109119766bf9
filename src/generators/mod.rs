// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Randomized arrangement and song generation.
//!
//! Produces arrangements of 3 to 12 sparsely-filled drum tracks topped
//! with one dense bass track, and whole songs with a random tempo. The
//! `*_with` forms take an explicit RNG so tests can seed a `StdRng`;
//! the plain forms use the thread RNG.

use rand::Rng;
use tracing::debug;

use crate::config::SampleBank;
use crate::model::{bass_notes, Arrangement, Beat, Song, Track, TrackKind, DEFAULT_DRUM_SAMPLE};

/// Probability that a drum grid slot is filled
const DRUM_FILL_CHANCE: f64 = 0.25;

/// Probability that a bass grid slot is filled
const BASS_FILL_CHANCE: f64 = 0.8;

/// Tempo range for random songs, in BPM
const BPM_RANGE: std::ops::Range<u32> = 75..150;

/// Generate a random arrangement with an explicit RNG.
///
/// Drum track names are drawn uniformly from the sample bank; an empty
/// bank falls back to the default drum sample. Track and beat volumes
/// stay in `[0, 1)`.
pub fn random_arrangement_with(samples: &SampleBank, rng: &mut impl Rng) -> Arrangement {
    let drum_count = rng.gen_range(3..=12);
    debug!(drum_count, "generating random arrangement");

    let mut tracks = Vec::with_capacity(drum_count + 1);
    for i in 0..drum_count {
        let name = if samples.is_empty() {
            DEFAULT_DRUM_SAMPLE.to_string()
        } else {
            samples.names()[rng.gen_range(0..samples.len())].clone()
        };
        let mut track = Track::new(i as u32 + 1, TrackKind::Drum, name, rng.gen::<f64>());
        for slot in track.beats.iter_mut() {
            if rng.gen_bool(DRUM_FILL_CHANCE) {
                *slot = Some(Beat::default());
            }
        }
        tracks.push(track);
    }

    let mut bass = Track::new(
        drum_count as u32 + 1,
        TrackKind::Bass,
        "bassline",
        rng.gen::<f64>(),
    );
    let vocabulary = bass_notes();
    for slot in bass.beats.iter_mut() {
        if rng.gen_bool(BASS_FILL_CHANCE) {
            let note = vocabulary[rng.gen_range(0..vocabulary.len())];
            *slot = Some(Beat::with_note(note));
        }
    }
    tracks.push(bass);

    Arrangement::from_tracks(tracks)
}

/// Generate a random arrangement with the thread RNG
pub fn random_arrangement(samples: &SampleBank) -> Arrangement {
    random_arrangement_with(samples, &mut rand::thread_rng())
}

/// Generate a random song (tempo plus arrangement) with an explicit RNG
pub fn random_song_with(samples: &SampleBank, rng: &mut impl Rng) -> Song {
    Song {
        bpm: rng.gen_range(BPM_RANGE),
        tracks: random_arrangement_with(samples, rng),
    }
}

/// Generate a random song with the thread RNG
pub fn random_song(samples: &SampleBank) -> Song {
    random_song_with(samples, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GRID_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture_bank() -> SampleBank {
        SampleBank::from_names(["kick-electro01", "snare-vinyl01", "hihat-reso"])
    }

    #[test]
    fn test_arrangement_shape() {
        let bank = fixture_bank();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let arrangement = random_arrangement_with(&bank, &mut rng);

            assert!(arrangement.len() >= 4 && arrangement.len() <= 13);

            let last = arrangement.tracks().last().unwrap();
            assert_eq!(last.kind, TrackKind::Bass);
            assert_eq!(last.name, "bassline");

            for track in &arrangement.tracks()[..arrangement.len() - 1] {
                assert_eq!(track.kind, TrackKind::Drum);
                assert!(bank.names().contains(&track.name));
            }
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let arrangement = random_arrangement_with(&fixture_bank(), &mut rng);
        let ids: Vec<u32> = arrangement.tracks().iter().map(|t| t.id).collect();
        let expected: Vec<u32> = (1..=arrangement.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_volumes_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let arrangement = random_arrangement_with(&fixture_bank(), &mut rng);
        for track in arrangement.tracks() {
            assert!(track.vol >= 0.0 && track.vol < 1.0);
            assert!(!track.muted);
            assert_eq!(track.beats.len(), GRID_SIZE);
            for beat in track.beats.iter().flatten() {
                assert_eq!(beat.vol, 1.0);
                assert_eq!(beat.dur, "4n");
            }
        }
    }

    #[test]
    fn test_drum_beats_use_default_note_bass_uses_vocabulary() {
        let mut rng = StdRng::seed_from_u64(3);
        let arrangement = random_arrangement_with(&fixture_bank(), &mut rng);

        let (bass, drums) = arrangement.tracks().split_last().unwrap();
        for track in drums {
            for beat in track.beats.iter().flatten() {
                assert_eq!(beat.note, "A4");
            }
        }
        for beat in bass.beats.iter().flatten() {
            assert!(bass_notes().contains(&beat.note.as_str()));
        }
    }

    #[test]
    fn test_empty_bank_falls_back_to_default_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        let arrangement = random_arrangement_with(&SampleBank::default(), &mut rng);
        let (_, drums) = arrangement.tracks().split_last().unwrap();
        assert!(drums.iter().all(|t| t.name == DEFAULT_DRUM_SAMPLE));
    }

    #[test]
    fn test_song_bpm_range() {
        let bank = fixture_bank();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let song = random_song_with(&bank, &mut rng);
            assert!(song.bpm >= 75 && song.bpm < 150);
            assert!(!song.tracks.is_empty());
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let bank = fixture_bank();
        let a = random_arrangement_with(&bank, &mut StdRng::seed_from_u64(9));
        let b = random_arrangement_with(&bank, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
