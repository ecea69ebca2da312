use hhub_roster::RosterError;
use hhub_roster::entity::Strength;
use hhub_roster::validation::{MIN_DESCRIPTION_CHARS, parse_strength, validate_description};
use proptest::prelude::*;
use strum::VariantArray;

proptest! {
    #[test]
    fn description_accepted_iff_long_enough(candidate in "\\PC{0,40}") {
        let accepted = validate_description(Some(&candidate)).is_ok();
        prop_assert_eq!(accepted, candidate.chars().count() >= MIN_DESCRIPTION_CHARS);
    }

    #[test]
    fn rejected_description_is_a_validation_error(candidate in "\\PC{0,19}") {
        let is_validation = matches!(
            validate_description(Some(&candidate)),
            Err(RosterError::Validation { .. })
        );
        prop_assert!(is_validation);
    }

    #[test]
    fn only_exact_strength_names_parse(candidate in "[A-Za-z ]{0,10}") {
        let expected = Strength::VARIANTS.iter().copied().find(|s| s.to_string() == candidate);
        prop_assert_eq!(parse_strength(Some(&candidate)).ok(), expected);
    }

    #[test]
    fn every_strength_survives_its_own_name(strength in prop::sample::select(Strength::VARIANTS)) {
        let name = strength.to_string();
        prop_assert_eq!(parse_strength(Some(&name)).ok(), Some(strength));
    }
}
