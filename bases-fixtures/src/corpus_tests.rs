//! Tests for corpus generation.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn collect(base: Base, space: &SizeSpace, seed: u64) -> Vec<Trial> {
    let mut rng = StdRng::seed_from_u64(seed);
    Corpus::new(base, space, &mut rng)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn test_default_size_space() {
    let space = SizeSpace::default();
    assert_eq!(space.lengths(), 1..=511);
    assert_eq!(space.trials_per_length, 4);
    assert_eq!(space.trial_count(), Some(511 * 4));
    assert_eq!(space.validate(Base::Base64).unwrap(), 511 * 4);
}

#[test]
fn test_trials_per_length() {
    let space = SizeSpace::new(20, 4);
    let trials = collect(Base::Base64, &space, 1);
    assert_eq!(trials.len(), 80);

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for trial in &trials {
        *counts.entry(trial.bytes().len()).or_default() += 1;
    }
    assert_eq!(counts.len(), 20);
    assert!(counts.values().all(|&n| n == 4));
}

#[test]
fn test_lengths_contiguous_and_ascending() {
    let space = SizeSpace::new(16, 2);
    let lengths: Vec<usize> = collect(Base::Base32, &space, 2)
        .iter()
        .map(|t| t.bytes().len())
        .collect();
    let expected: Vec<usize> = (1..=16).flat_map(|len| [len, len]).collect();
    assert_eq!(lengths, expected);
}

#[test]
fn test_covers_every_residue_of_each_block() {
    for base in Base::ALL {
        let block = base.block_size();
        let space = SizeSpace::new(MIN_BLOCKS_CROSSED * block, 1);

        let mut residues: BTreeMap<usize, usize> = BTreeMap::new();
        for trial in collect(base, &space, 3) {
            *residues.entry(trial.bytes().len() % block).or_default() += 1;
        }

        assert_eq!(
            residues.keys().copied().collect::<Vec<_>>(),
            (0..block).collect::<Vec<_>>(),
            "{base}"
        );
        assert!(
            residues.values().all(|&n| n >= MIN_BLOCKS_CROSSED),
            "{base}: {residues:?}"
        );
    }
}

#[test]
fn test_base32_includes_lengths_inside_blocks() {
    let space = SizeSpace::new(15, 1);
    let lengths: Vec<usize> = collect(Base::Base32, &space, 10)
        .iter()
        .map(|t| t.bytes().len())
        .collect();
    for len in [3, 4, 8, 9, 13, 14] {
        assert!(lengths.contains(&len), "missing length {}", len);
    }
}

#[test]
fn test_roundtrip_law() {
    for base in Base::ALL {
        let space = SizeSpace::new(40, 3).min_length(0);
        for trial in collect(base, &space, 4) {
            assert_eq!(trial.base(), base);
            let decoded = reference::decode(base, trial.encoded()).unwrap();
            assert_eq!(decoded, trial.bytes());
        }
    }
}

#[test]
fn test_zero_length_trial() {
    let space = SizeSpace::new(9, 1).min_length(0);
    let trials = collect(Base::Base64, &space, 5);
    assert!(trials[0].bytes().is_empty());
    assert_eq!(trials[0].encoded(), "");
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let space = SizeSpace::new(30, 2);
    assert_eq!(
        collect(Base::Base64, &space, 42),
        collect(Base::Base64, &space, 42)
    );
    assert_ne!(
        collect(Base::Base64, &space, 42),
        collect(Base::Base64, &space, 43)
    );
}

#[test]
fn test_trials_are_independent() {
    // Four draws of 32 bytes colliding by chance is not a realistic outcome.
    let space = SizeSpace::new(32, 4);
    let trials = collect(Base::Base16, &space, 6);
    let longest: Vec<&[u8]> = trials
        .iter()
        .filter(|t| t.bytes().len() == 32)
        .map(|t| t.bytes())
        .collect();
    assert_eq!(longest.len(), 4);
    for i in 0..longest.len() {
        for j in i + 1..longest.len() {
            assert_ne!(longest[i], longest[j]);
        }
    }
}

#[test]
fn test_exact_size_hint() {
    let space = SizeSpace::new(10, 3);
    let mut rng = StdRng::seed_from_u64(7);
    let mut corpus = Corpus::new(Base::Base64, &space, &mut rng).unwrap();
    assert_eq!(corpus.len(), 30);
    corpus.next();
    corpus.next();
    assert_eq!(corpus.len(), 28);
    assert_eq!(corpus.by_ref().count(), 28);
    assert!(corpus.next().is_none());
}

#[test]
fn test_validate_rejects_zero_trials() {
    let result = SizeSpace::new(100, 0).validate(Base::Base64);
    assert!(matches!(result, Err(Error::InvalidSizeSpace { .. })));
}

#[test]
fn test_validate_requires_small_lengths() {
    let space = SizeSpace::new(100, 1).min_length(2);
    assert!(space.validate(Base::Base64).is_err());
}

#[test]
fn test_validate_per_base_boundary() {
    let space = SizeSpace::new(9, 1);
    assert!(space.validate(Base::Base16).is_ok());
    assert!(space.validate(Base::Base64).is_ok());
    let result = space.validate(Base::Base32);
    assert!(matches!(
        result,
        Err(Error::InvalidSizeSpace { base: Base::Base32, .. })
    ));
    assert!(SizeSpace::new(15, 1).validate(Base::Base32).is_ok());
}

#[test]
fn test_corpus_rejects_invalid_space_before_drawing() {
    let mut rng = StdRng::seed_from_u64(8);
    let result = Corpus::new(Base::Base64, &SizeSpace::new(2, 4), &mut rng);
    assert!(result.is_err());
}

#[test]
fn test_verify_detects_mismatched_pairing() {
    let trial = Trial {
        base: Base::Base64,
        bytes: vec![0xDE, 0xAD, 0xBE, 0xEF],
        encoded: "3q2+7A==".to_string(),
    };
    assert!(matches!(
        trial.verify(),
        Err(Error::InvariantViolation { length: 4, .. })
    ));

    let truncated = Trial {
        base: Base::Base64,
        bytes: vec![0xDE, 0xAD, 0xBE, 0xEF],
        encoded: "3q2+".to_string(),
    };
    assert!(truncated.verify().is_err());
}

#[test]
fn test_verify_accepts_reference_pairing() {
    let trial = Trial::new(Base::Base64, vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(trial.encoded(), "3q2+7w==");
    assert!(trial.verify().is_ok());
}

#[test]
fn test_validate_rejects_overflowing_space() {
    let space = SizeSpace::new(usize::MAX, 2).min_length(0);
    assert_eq!(space.trial_count(), None);
    assert!(matches!(
        space.validate(Base::Base64),
        Err(Error::InvalidSizeSpace { base: Base::Base64, .. })
    ));

    let space = SizeSpace::new(usize::MAX, 1);
    assert_eq!(space.trial_count(), Some(usize::MAX));
    assert!(space.validate(Base::Base32).is_err());

    let space = SizeSpace::new(1 << 20, usize::MAX / 2);
    assert!(space.validate(Base::Base16).is_err());
}

#[test]
fn test_corpus_rejects_overflowing_space() {
    let mut rng = StdRng::seed_from_u64(13);
    let space = SizeSpace::new(usize::MAX, 4).min_length(0);
    assert!(Corpus::new(Base::Base64, &space, &mut rng).is_err());
}
