// Modal characteristic classification tests

use mode_speller::{classify_degree, Error, ModalError, ModalPositionName, ModalQuality};
use pretty_assertions::assert_eq;

const PERFECT_DEGREES: [u8; 4] = [1, 4, 5, 8];
const MAJOR_DEGREES: [u8; 4] = [2, 3, 6, 7];
const REFERENCE: [u32; 8] = [0, 2, 4, 5, 7, 9, 11, 12];

fn quality(degree: u8, half_tones: u32) -> ModalQuality {
    classify_degree(degree, half_tones).unwrap().quality
}

#[test]
fn test_reference_cases() {
    assert_eq!(quality(1, 0), ModalQuality::Clean);
    assert_eq!(quality(1, 1), ModalQuality::Augmented);
    assert_eq!(quality(2, 1), ModalQuality::Minor);
    assert_eq!(quality(7, 11), ModalQuality::Major);
}

#[test]
fn test_major_scale_is_clean_or_major() {
    for (i, &half_tones) in REFERENCE.iter().enumerate() {
        let degree = i as u8 + 1;
        let expected = if PERFECT_DEGREES.contains(&degree) {
            ModalQuality::Clean
        } else {
            ModalQuality::Major
        };
        assert_eq!(quality(degree, half_tones), expected, "degree {degree}");
    }
}

#[test]
fn test_perfect_degree_table() {
    use ModalQuality::*;
    let table = [
        (-3, TripleDiminished),
        (-2, DoubleDiminished),
        (-1, Diminished),
        (0, Clean),
        (1, Augmented),
        (2, DoubleAugmented),
        (3, TripleAugmented),
    ];
    for degree in PERFECT_DEGREES {
        let reference = REFERENCE[degree as usize - 1] as i32;
        for (diff, expected) in table {
            let half_tones = reference + diff;
            if half_tones < 0 {
                continue;
            }
            assert_eq!(quality(degree, half_tones as u32), expected, "degree {degree} {diff:+}");
        }
    }
}

#[test]
fn test_major_degree_table() {
    use ModalQuality::*;
    let table = [
        (-3, DoubleDiminished),
        (-2, Diminished),
        (-1, Minor),
        (0, Major),
        (1, Augmented),
        (2, DoubleAugmented),
    ];
    for degree in MAJOR_DEGREES {
        let reference = REFERENCE[degree as usize - 1] as i32;
        for (diff, expected) in table {
            let half_tones = reference + diff;
            if half_tones < 0 {
                continue;
            }
            assert_eq!(quality(degree, half_tones as u32), expected, "degree {degree} {diff:+}");
        }
    }
}

#[test]
fn test_outside_the_tables_is_unknown_quality() {
    for degree in 1..=8u8 {
        let reference = REFERENCE[degree as usize - 1];
        let admitted = if PERFECT_DEGREES.contains(&degree) { -3..=3 } else { -3..=2 };
        for half_tones in 0..=30u32 {
            let diff = half_tones as i32 - reference as i32;
            let result = classify_degree(degree, half_tones);
            if admitted.contains(&diff) {
                assert!(result.is_ok(), "degree {degree} at {half_tones}");
            } else {
                assert_eq!(
                    result,
                    Err(ModalError::UnknownDegreeQuality {
                        degree_number: degree,
                        diff: diff as i8
                    })
                );
            }
        }
    }
}

#[test]
fn test_unknown_position_and_overflow() {
    assert_eq!(classify_degree(0, 0), Err(ModalError::UnknownDegreePosition(0)));
    assert_eq!(classify_degree(12, 19), Err(ModalError::UnknownDegreePosition(12)));
    assert!(matches!(
        classify_degree(3, 500),
        Err(ModalError::DistanceOverflow { degree_number: 3, .. })
    ));
}

#[test]
fn test_weights_order_qualities() {
    let dim = classify_degree(5, 6).unwrap();
    let clean = classify_degree(5, 7).unwrap();
    let aug = classify_degree(5, 8).unwrap();
    assert!(dim.relative_modal_position.weight < clean.relative_modal_position.weight);
    assert!(clean.relative_modal_position.weight < aug.relative_modal_position.weight);
    assert_eq!(dim.relative_modal_position.name, ModalPositionName::Low);
    assert_eq!(aug.relative_modal_position.name, ModalPositionName::High);
}

#[test]
fn test_error_converts_to_crate_error() {
    let err: Error = classify_degree(9, 0).unwrap_err().into();
    assert_eq!(err, Error::Modal(ModalError::UnknownDegreePosition(9)));
}

#[test]
fn test_characteristic_serializes() {
    let characteristic = classify_degree(3, 3).unwrap();
    let json = serde_json::to_string(&characteristic).unwrap();
    assert!(json.contains("\"quality\":\"Minor\""));
    let parsed: mode_speller::ModalCharacteristic = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, characteristic);
}
