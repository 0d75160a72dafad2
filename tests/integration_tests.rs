// Integration tests for needmap

use chrono::Utc;
use needmap::core::{evaluate, normalize, Tier};
use needmap::models::{
    Appearance, Category, CategorySet, CreateUserRequest, LowerColor, UpperColor, UserData,
    UserRecord,
};
use uuid::Uuid;
use validator::Validate;

fn create_test_record(
    coordinates: &str,
    offers: &[Category],
    requests: &[Category],
) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        coordinates: coordinates.to_string(),
        user_data: UserData {
            requests: CategorySet::from_categories(requests),
            offers: CategorySet::from_categories(offers),
            description: Appearance {
                is_male: false,
                is_taller: true,
                is_older: false,
                has_facial_hair: false,
                has_long_hair: true,
                wears_glasses: false,
                upper_color: UpperColor::Red,
                lower_color: LowerColor::Black,
            },
        },
        created_at: Utc::now(),
    }
}

#[test]
fn test_end_to_end_candidate_evaluation() {
    // Viewer offers Knowledge and Expression, requests Acceptance.
    let viewer = create_test_record(
        "40.7128, -74.0060",
        &[Category::Knowledge, Category::Expression],
        &[Category::Acceptance],
    );

    let candidates = vec![
        viewer.clone(), // Self, must be excluded
        // Mutual fit on three categories
        create_test_record(
            "40.72, -74.01",
            &[Category::Acceptance],
            &[Category::Knowledge, Category::Expression],
        ),
        // One-directional fit
        create_test_record("40.73, -74.02", &[], &[Category::Knowledge]),
        // Nothing in common
        create_test_record("41.0, -74.0", &[Category::Reflection], &[Category::Reflection]),
        // DMS coordinates parse too
        create_test_record(
            "19°27'20.4\"N 70°39'08.6\"W",
            &[],
            &[Category::Expression],
        ),
    ];

    let result = evaluate(Some(&viewer), candidates);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 4);

    // Sorted by score descending.
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(result.matches[0].score, 3);

    // Every candidate is placeable and carries distance/bearing from the
    // viewer's position.
    for candidate in &result.matches {
        assert!(candidate.distance_km.is_some());
        assert!(candidate.bearing_deg.is_some());
        assert!((-90.0..=90.0).contains(&candidate.position.latitude));
        assert!((-180.0..=180.0).contains(&candidate.position.longitude));
    }

    // The zero-score candidate gets the fixed explanation and a Low tier.
    let zero = result
        .matches
        .iter()
        .find(|m| m.score == 0)
        .expect("one candidate has no direct matches");
    assert_eq!(zero.tier, Tier::Low);
    assert_eq!(zero.explanations, vec!["no direct matches found".to_string()]);
}

#[test]
fn test_evaluation_without_viewer_record() {
    let candidates = vec![
        create_test_record("40.72, -74.01", &[Category::Knowledge], &[]),
        create_test_record("40.73, -74.02", &[], &[Category::Knowledge]),
    ];

    let result = evaluate(None, candidates);

    assert_eq!(result.matches.len(), 2);
    for candidate in &result.matches {
        assert_eq!(candidate.score, 0);
        assert_eq!(candidate.tier, Tier::Low);
        assert_eq!(
            candidate.explanations,
            vec!["no viewer data submitted".to_string()]
        );
    }
}

#[test]
fn test_full_submission_wire_shape() {
    // The exact JSON the client posts.
    let json = r#"{
        "coordinates": "19°27'20.4\"N 70°39'08.6\"W",
        "userData": {
            "requests": {"Preservation": true, "Knowledge": true},
            "offers": {"Expression": true},
            "description": {
                "isMale": true,
                "isTaller": true,
                "isOlder": false,
                "hasFacialHair": true,
                "hasLongHair": false,
                "wearsGlasses": true,
                "upperColor": "purple",
                "lowerColor": "other"
            }
        }
    }"#;

    let request: CreateUserRequest = serde_json::from_str(json).unwrap();
    assert!(request.validate().is_ok());

    // The submission pipeline normalizes before persisting.
    let position = normalize(&request.coordinates).unwrap();
    assert!((position.latitude - 19.455667).abs() < 1e-6);
    assert!((position.longitude - -70.652389).abs() < 1e-6);

    assert!(request.user_data.requests.preservation);
    assert!(request.user_data.requests.knowledge);
    assert!(request.user_data.offers.expression);
    assert_eq!(request.user_data.description.upper_color, UpperColor::Purple);
}

#[test]
fn test_submission_with_unfilled_color_is_rejected() {
    // The later form revision requires both colors before accepting.
    let json = r#"{
        "coordinates": "40.7128, -74.0060",
        "userData": {
            "requests": {},
            "offers": {},
            "description": {
                "isMale": false,
                "upperColor": "white",
                "lowerColor": ""
            }
        }
    }"#;

    let result: Result<CreateUserRequest, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_malformed_coordinates_never_default_to_origin() {
    let err = normalize("garbage").unwrap_err();
    // The failure carries the offending input; nothing maps it to (0,0).
    assert_eq!(err.input, "garbage");
}

#[test]
fn test_stored_record_round_trips_through_json() {
    let record = create_test_record("40.7128, -74.0060", &[Category::Definition], &[]);
    let json = serde_json::to_string(&record).unwrap();
    let parsed: UserRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.id, record.id);
    assert_eq!(parsed.coordinates, record.coordinates);
    assert_eq!(parsed.user_data, record.user_data);
}
