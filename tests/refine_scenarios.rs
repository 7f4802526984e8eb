//! End-to-end refinement scenarios.

use winnower::prelude::*;

fn default_engine() -> RefinementEngine {
    RefinementEngine::new(ReplacementConfig::new(), RefinementOptions::default()).unwrap()
}

#[test]
fn test_cafe_variants_collapse_to_one() {
    let result = default_engine().refine(&["Café", "cafe", "Café "]);

    assert_eq!(result.final_keywords, vec!["cafe"]);

    let duplicates: Vec<_> = result
        .trash
        .iter()
        .filter(|t| t.reason == ReasonCode::StructuralDuplicate)
        .collect();
    assert_eq!(duplicates.len(), 2);
    assert!(duplicates.iter().all(|t| t.conserved == "cafe"));

    // "Café" and "Café " were both altered by normalization
    let informational = result
        .trash
        .iter()
        .filter(|t| t.reason == ReasonCode::SpecialCharsReplaced)
        .count();
    assert_eq!(informational, 2);
}

#[test]
fn test_french_stop_phrases() {
    let config = ReplacementConfig::new()
        .with_phrase(" pour ", true)
        .with_phrase(" les ", true);
    let engine = RefinementEngine::new(config, RefinementOptions::default()).unwrap();

    let result = engine.refine(&[" pour les chaussures ", "chaussures"]);

    assert_eq!(result.final_keywords, vec!["chaussures"]);
    let duplicates: Vec<_> = result
        .trash
        .iter()
        .filter(|t| t.reason == ReasonCode::StructuralDuplicate)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].conserved, "chaussures");
}

#[test]
fn test_min_length_filter() {
    let options = RefinementOptions {
        min_length: 3,
        ..Default::default()
    };
    let engine = RefinementEngine::new(ReplacementConfig::new(), options).unwrap();

    let result = engine.refine(&["ab", "abc"]);

    assert_eq!(result.final_keywords, vec!["abc"]);
    assert_eq!(result.trash.len(), 1);
    assert_eq!(result.trash[0].reason, ReasonCode::TooShort);
    assert_eq!(result.trash[0].removed, "ab");
}

#[test]
fn test_word_order_is_irrelevant() {
    let engine = default_engine();

    assert_eq!(
        engine.refine(&["red shoes"]).final_keywords,
        vec!["red shoes"]
    );
    assert_eq!(
        engine.refine(&["shoes red"]).final_keywords,
        vec!["shoes red"]
    );

    let both = engine.refine(&["red shoes", "shoes red"]);
    assert_eq!(both.final_keywords, vec!["red shoes"]);
    assert_eq!(both.trash.len(), 1);
    assert_eq!(both.trash[0].reason, ReasonCode::StructuralDuplicate);
}

#[test]
fn test_similarity_threshold_boundary() {
    let at_one = RefinementEngine::new(
        ReplacementConfig::new(),
        RefinementOptions {
            similarity_threshold: 1,
            ..Default::default()
        },
    )
    .unwrap();
    let result = at_one.refine(&["shoe", "shoes"]);
    assert_eq!(result.final_keywords, vec!["shoe"]);

    let at_zero = RefinementEngine::new(
        ReplacementConfig::new(),
        RefinementOptions {
            similarity_threshold: 0,
            ..Default::default()
        },
    )
    .unwrap();
    let result = at_zero.refine(&["shoe", "shoes"]);
    assert_eq!(result.final_keywords, vec!["shoe", "shoes"]);
}

#[test]
fn test_first_seen_priority() {
    let result = default_engine().refine(&["shoes", "shoe"]);

    assert_eq!(result.final_keywords, vec!["shoes"]);
    assert_eq!(result.trash.len(), 1);
    assert_eq!(result.trash[0].reason, ReasonCode::NearDuplicate);
    assert_eq!(result.trash[0].conserved, "shoes");
    assert_eq!(result.trash[0].removed, "shoe");
}

#[test]
fn test_digit_keywords_never_collapse() {
    let options = RefinementOptions {
        similarity_threshold: 3,
        ..Default::default()
    };
    let engine = RefinementEngine::new(ReplacementConfig::new(), options).unwrap();

    let result = engine.refine(&["model x1", "model x2", "model x3"]);
    assert_eq!(
        result.final_keywords,
        vec!["model x1", "model x2", "model x3"]
    );
    assert!(
        result
            .trash
            .iter()
            .all(|t| t.reason != ReasonCode::NearDuplicate)
    );
}

#[test]
fn test_partition_invariant() {
    let config = ReplacementConfig::new().with_phrase(" for ", true);
    let engine = RefinementEngine::new(config, RefinementOptions::default()).unwrap();

    let inputs = [
        "Café",
        "cafe",
        "shoes for summer",
        "summer shoes",
        "shoe",
        "...",
        "   ",
        "unrelated keyword",
    ];
    let result = engine.refine(&inputs);

    let surviving_raws = inputs.iter().filter(|r| !r.trim().is_empty()).count();
    let exclusions = result
        .trash
        .iter()
        .filter(|t| t.reason.is_exclusionary())
        .count();

    // Every non-blank input is either a final keyword or an exclusionary
    // trash record, never both, never neither.
    assert_eq!(result.final_keywords.len() + exclusions, surviving_raws);
}

#[test]
fn test_case_sensitive_mode_keeps_distinct_casings() {
    let options = RefinementOptions {
        case_sensitive: true,
        ..Default::default()
    };
    let engine = RefinementEngine::new(ReplacementConfig::new(), options).unwrap();

    // Distinct under case sensitivity, but still near-duplicates at
    // distance 1, so the first-seen form wins.
    let result = engine.refine(&["Shoes", "shoes"]);
    assert_eq!(result.final_keywords, vec!["Shoes"]);
    assert_eq!(result.trash[0].reason, ReasonCode::NearDuplicate);
}

#[test]
fn test_result_is_serializable_for_export() {
    let result = default_engine().refine(&["Café", "cafe"]);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["final_keywords"].is_array());
    assert!(json["trash"].is_array());
}
