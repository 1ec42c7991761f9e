// Mode spelling properties across the whole catalogue
//
// Every named mode is spelled from every lattice spelling with both
// builders, and the emitted pitches are checked against the template.

use mode_speller::{
    build_common_mode, build_diatonic_mode, must_build_diatonic_mode, ChromaticLattice,
    CommonSpeller, DiatonicSpeller, IntervalTemplate, Letter, NamedMode, Pitch, SpelledPitch,
    SpellingError,
};
use pretty_assertions::assert_eq;

/// Every spelling the chromatic lattice knows, naturals first
fn lattice_spellings() -> Vec<Pitch> {
    let lattice = ChromaticLattice::shared();
    let mut pitches: Vec<Pitch> = lattice
        .nodes()
        .filter_map(|node| node.natural_pitch().cloned())
        .collect();
    for node in lattice.nodes() {
        pitches.extend(node.spellings().iter().map(|r| r.spelled.clone()));
    }
    pitches
}

fn pitch(name: &str) -> Pitch {
    Pitch::by_name(name).unwrap()
}

fn names(spelled: &[SpelledPitch]) -> Vec<String> {
    spelled.iter().map(|s| s.pitch.name()).collect()
}

/// Emitted pitch classes must sit exactly `from_prime` half-tones above the prime
fn assert_round_trip(first: &Pitch, spelled: &[SpelledPitch], template: &IntervalTemplate) {
    let cumulative: Vec<u32> = template.iter().map(|s| s.from_prime).collect();
    for (i, step) in spelled.iter().enumerate() {
        assert_eq!(step.from_prime, cumulative[i], "step {i} from {first}");
        let expected = (first.pitch_class() as u32 + step.from_prime) % 12;
        assert_eq!(
            step.pitch.pitch_class() as u32,
            expected,
            "{} is not {} half-tones above {}",
            step.pitch,
            step.from_prime,
            first
        );
    }
}

#[test]
fn test_common_round_trip_for_every_mode_and_prime() {
    for first in lattice_spellings() {
        for mode in NamedMode::ALL {
            let template = mode.template();
            let spelled = build_common_mode(&template, &first).unwrap();
            // the closing octave is implied
            assert_eq!(spelled.len(), template.len() - 1, "{mode} from {first}");
            assert_round_trip(&first, &spelled, &template);
        }
    }
}

#[test]
fn test_diatonic_round_trip_for_every_mode_and_prime() {
    for first in lattice_spellings() {
        for mode in NamedMode::ALL {
            let template = mode.template();
            let spelled = build_diatonic_mode(&template, &first).unwrap();
            assert_eq!(spelled.len(), template.len(), "{mode} from {first}");
            assert_round_trip(&first, &spelled, &template);
        }
    }
}

#[test]
fn test_diatonic_letter_cycle() {
    let heptatonic = [
        NamedMode::Ionian,
        NamedMode::Dorian,
        NamedMode::Phrygian,
        NamedMode::Lydian,
        NamedMode::Mixolydian,
        NamedMode::Aeolian,
        NamedMode::Locrian,
        NamedMode::HarmonicMinor,
        NamedMode::MelodicMinor,
    ];
    for first in lattice_spellings() {
        for mode in heptatonic {
            let spelled = build_diatonic_mode(&mode.template(), &first).unwrap();
            let letters: Vec<Letter> = spelled.iter().map(|s| s.pitch.letter()).collect();

            let mut expected = Vec::new();
            let mut letter = first.letter();
            for _ in 0..7 {
                letter = letter.next();
                expected.push(letter);
            }
            assert_eq!(letters, expected, "{mode} from {first}");

            let mut sorted = letters.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 7);
        }
    }
}

#[test]
fn test_diatonic_major_spellings() {
    let major = NamedMode::Ionian.template();
    let cases = [
        ("C", vec!["D", "E", "F", "G", "A", "B", "C"]),
        ("Db", vec!["Eb", "F", "Gb", "Ab", "Bb", "C", "Db"]),
        ("C#", vec!["D#", "E#", "F#", "G#", "A#", "B#", "C#"]),
        ("Cb", vec!["Db", "Eb", "Fb", "Gb", "Ab", "Bb", "Cb"]),
        ("E", vec!["F#", "G#", "A", "B", "C#", "D#", "E"]),
    ];
    for (first, expected) in cases {
        let spelled = must_build_diatonic_mode(&major, &pitch(first));
        assert_eq!(names(&spelled), expected, "{first} major");
    }
}

#[test]
fn test_diatonic_double_accidentals() {
    // D# major needs F## and C##
    let spelled = build_diatonic_mode(&NamedMode::Ionian.template(), &pitch("D#")).unwrap();
    assert_eq!(
        names(&spelled),
        vec!["E#", "F##", "G#", "A#", "B#", "C##", "D#"]
    );
    // Fb minor needs Ebb and Bbb
    let spelled = build_diatonic_mode(&NamedMode::Aeolian.template(), &pitch("Fb")).unwrap();
    assert_eq!(
        names(&spelled),
        vec!["Gb", "Abb", "Bbb", "Cb", "Dbb", "Ebb", "Fb"]
    );
}

#[test]
fn test_single_note_mode_is_empty() {
    let template = IntervalTemplate::new(vec![12]);
    assert!(build_common_mode(&template, &pitch("C")).unwrap().is_empty());
}

#[test]
fn test_symmetric_template() {
    let template = IntervalTemplate::new(vec![6, 6]);
    let spelled = build_common_mode(&template, &pitch("C")).unwrap();
    assert_eq!(
        spelled,
        vec![SpelledPitch {
            pitch: pitch("F#"),
            from_prime: 6
        }]
    );
}

#[test]
fn test_common_mode_pentatonic() {
    let spelled = build_common_mode(&NamedMode::MajorPentatonic.template(), &pitch("D")).unwrap();
    assert_eq!(names(&spelled), vec!["E", "F#", "A", "B"]);
}

#[test]
fn test_common_mode_prefers_letter_change_over_fewer_accidentals() {
    // After G the A#/Bb position takes the first entry whose letter is
    // not G, which is A#
    let spelled = build_common_mode(&NamedMode::MajorPentatonic.template(), &pitch("Eb")).unwrap();
    assert_eq!(names(&spelled), vec!["F", "G", "A#", "C"]);

    // A is also the next letter for the diatonic builder
    let spelled = build_diatonic_mode(&IntervalTemplate::new(vec![2, 2, 3]), &pitch("Eb")).unwrap();
    assert_eq!(names(&spelled), vec!["F", "G", "A#"]);
}

#[test]
fn test_unknown_first_pitch() {
    let template = NamedMode::Ionian.template();
    let err = build_common_mode(&template, &pitch("Cbb")).unwrap_err();
    assert_eq!(err, SpellingError::PitchNotInLattice("Cbb".to_string()));
    assert!(DiatonicSpeller::new(&template, &pitch("B##")).is_err());
}

#[test]
fn test_abandoning_a_speller_midway() {
    let template = NamedMode::Chromatic.template();
    let mut speller = CommonSpeller::new(&template, &pitch("A")).unwrap();
    let first_two: Vec<String> = speller.by_ref().take(2).map(|s| s.pitch.name()).collect();
    assert_eq!(first_two, vec!["Bb", "B"]);
    drop(speller);

    // a fresh run starts over from the first step
    let again: Vec<String> = CommonSpeller::new(&template, &pitch("A"))
        .unwrap()
        .take(2)
        .map(|s| s.pitch.name())
        .collect();
    assert_eq!(again, first_two);
}

#[test]
fn test_concurrent_runs_share_the_lattice() {
    let template = NamedMode::Lydian.template();
    let expected = names(&build_diatonic_mode(&template, &pitch("Ab")).unwrap());
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| names(&build_diatonic_mode(&template, &pitch("Ab")).unwrap())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
