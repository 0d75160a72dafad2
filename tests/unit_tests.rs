// Unit tests for needmap

use needmap::core::{
    classify::{classify, Tier},
    coordinates::{normalize, to_dms, Coordinate},
    geo::{haversine_distance, initial_bearing},
    scoring::{score, MAX_SCORE, NO_DIRECT_MATCHES, NO_VIEWER_DATA},
};
use needmap::models::{Appearance, Category, CategorySet, LowerColor, UpperColor, UserData};

fn user_data(requests: CategorySet, offers: CategorySet) -> UserData {
    UserData {
        requests,
        offers,
        description: Appearance {
            is_male: true,
            is_taller: false,
            is_older: false,
            has_facial_hair: false,
            has_long_hair: false,
            wears_glasses: true,
            upper_color: UpperColor::Gray,
            lower_color: LowerColor::Blue,
        },
    }
}

#[test]
fn test_normalize_decimal_is_exact() {
    let coordinate = normalize("40.7128,-74.0060").unwrap();
    assert_eq!(coordinate.latitude, 40.7128);
    assert_eq!(coordinate.longitude, -74.0060);
}

#[test]
fn test_normalize_decimal_boundary_values() {
    for input in ["90.0, 180.0", "-90.0, -180.0", "0,0", "89.999999, 179.999999"] {
        assert!(normalize(input).is_ok(), "expected {input:?} to parse");
    }
}

#[test]
fn test_normalize_rejects_out_of_range_latitude() {
    assert!(normalize("91,0").is_err());
}

#[test]
fn test_normalize_rejects_out_of_range_longitude() {
    assert!(normalize("45,181").is_err());
}

#[test]
fn test_normalize_dms_example() {
    let coordinate = normalize("19°27'20.4\"N 70°39'08.6\"W").unwrap();
    assert!((coordinate.latitude - 19.455667).abs() < 1e-6);
    assert!((coordinate.longitude - -70.652389).abs() < 1e-6);
}

#[test]
fn test_normalize_rejects_wrong_separator() {
    assert!(normalize("40.7128 -74.0060").is_err());
    assert!(normalize("40.7128;-74.0060").is_err());
}

#[test]
fn test_dms_round_trip_stays_within_tolerance() {
    let samples = [
        Coordinate {
            latitude: 40.7128,
            longitude: -74.0060,
        },
        Coordinate {
            latitude: -33.859972,
            longitude: 151.211111,
        },
        Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        },
        Coordinate {
            latitude: 89.5,
            longitude: 179.5,
        },
    ];

    for original in samples {
        let text = to_dms(&original);
        let parsed = normalize(&text)
            .unwrap_or_else(|e| panic!("round trip failed for {text:?}: {e}"));
        assert!(
            (parsed.latitude - original.latitude).abs() < 0.0001,
            "latitude drifted for {text:?}"
        );
        assert!(
            (parsed.longitude - original.longitude).abs() < 0.0001,
            "longitude drifted for {text:?}"
        );
    }
}

#[test]
fn test_score_bounded_for_all_combinations() {
    // Every subset of offers against every subset of requests in one
    // category direction stays within [0, MAX_SCORE].
    let full = CategorySet::from_categories(&Category::ALL);
    let empty = CategorySet::default();

    for (viewer_requests, viewer_offers) in [(full, full), (full, empty), (empty, full)] {
        for (candidate_requests, candidate_offers) in [(full, full), (empty, empty)] {
            let viewer = user_data(viewer_requests, viewer_offers);
            let candidate = user_data(candidate_requests, candidate_offers);
            let result = score(Some(&viewer), &candidate);
            assert!(result.score <= MAX_SCORE);
        }
    }
}

#[test]
fn test_score_absent_viewer() {
    let candidate = user_data(
        CategorySet::from_categories(&Category::ALL),
        CategorySet::from_categories(&Category::ALL),
    );
    let result = score(None, &candidate);
    assert_eq!(result.score, 0);
    assert_eq!(result.explanations, vec![NO_VIEWER_DATA.to_string()]);
}

#[test]
fn test_score_knowledge_offer_only() {
    let viewer = user_data(
        CategorySet::default(),
        CategorySet::from_categories(&[Category::Knowledge]),
    );
    let candidate = user_data(
        CategorySet::from_categories(&[Category::Knowledge]),
        CategorySet::default(),
    );

    let result = score(Some(&viewer), &candidate);
    assert_eq!(result.score, 1);
    assert_eq!(
        result.explanations,
        vec!["you can offer Knowledge to the selected user".to_string()]
    );
}

#[test]
fn test_score_all_false_sets() {
    let viewer = user_data(CategorySet::default(), CategorySet::default());
    let candidate = user_data(CategorySet::default(), CategorySet::default());

    let result = score(Some(&viewer), &candidate);
    assert_eq!(result.score, 0);
    assert_eq!(result.explanations, vec![NO_DIRECT_MATCHES.to_string()]);
}

#[test]
fn test_classify_thresholds() {
    assert_eq!(classify(10), Tier::High);
    assert_eq!(classify(9), Tier::Medium);
    assert_eq!(classify(5), Tier::Medium);
    assert_eq!(classify(4), Tier::Low);
}

#[test]
fn test_haversine_between_parsed_coordinates() {
    let nyc = normalize("40.7128, -74.0060").unwrap();
    let santiago = normalize("19°27'20.4\"N 70°39'08.6\"W").unwrap();

    // New York to Santiago de los Caballeros is roughly 2400 km.
    let distance = haversine_distance(&nyc, &santiago);
    assert!(
        distance > 2300.0 && distance < 2500.0,
        "expected ~2400km, got {}",
        distance
    );

    // Santiago lies south of New York.
    let bearing = initial_bearing(&nyc, &santiago);
    assert!(bearing > 90.0 && bearing < 270.0, "got {}", bearing);
}
