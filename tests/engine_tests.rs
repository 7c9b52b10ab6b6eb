//! End-to-end pipeline tests against the engine itself, with hand-built
//! pools. The HTTP layer is covered separately in `api_tests.rs`.

use scappata::config::ScoringConfig;
use scappata::models::trip::TripQuery;
use scappata::models::{Category, Coordinates, Place, PlaceKind, Style, TravelMode, Visibility};
use scappata::services::suggest::SuggestEngine;
use std::collections::HashSet;

fn place(id: &str, kind: PlaceKind, lat: f64, lon: f64, tags: &[&str]) -> Place {
    Place {
        id: id.to_string(),
        name: id.to_string(),
        lat,
        lon,
        kind,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        visibility: Visibility::WellKnown,
        beauty: None,
        why: vec![],
    }
}

fn query(budget_minutes: f64) -> TripQuery {
    TripQuery {
        // L'Aquila
        origin: Coordinates::new(42.35, 13.40).unwrap(),
        budget_minutes,
        mode: TravelMode::Car,
        category: Category::Anywhere,
        style: Style::Mainstream,
        excluded: HashSet::new(),
    }
}

fn engine() -> SuggestEngine {
    SuggestEngine::new(ScoringConfig::default())
}

/// Terrain-dependent speeds drive the ETA: the mountain place 20 km out gets
/// the slow constant, the coastal place 55 km out the fast one, and the
/// coastal one wins a 60-minute budget on time-fit.
#[test]
fn scenario_a_terrain_speed_table_and_ranking() {
    let pool = vec![
        // 0.18° of latitude ≈ 20 km due north
        place("mountain-20", PlaceKind::Village, 42.53, 13.40, &["mountain"]),
        // 0.494° ≈ 55 km due south
        place("coastal-55", PlaceKind::Village, 41.856, 13.40, &["coastal"]),
    ];

    let response = engine().suggest(&pool, &query(60.0));

    let top = response.top.expect("top expected");
    assert_eq!(top.id, "coastal-55");
    // 55 km at the fast coastal constant (75 km/h) = 44 min
    assert_eq!(top.eta_min, 44);

    let alt = &response.alternatives[0];
    assert_eq!(alt.id, "mountain-20");
    // 20 km at the slow mountain constant (55 km/h) ≈ 22 min
    assert_eq!(alt.eta_min, 22);
}

/// Excluding the would-be winner promotes the runner-up and suppresses the
/// excluded id everywhere.
#[test]
fn scenario_b_excluded_top_is_promoted_away() {
    let pool = vec![
        place("mountain-20", PlaceKind::Village, 42.53, 13.40, &["mountain"]),
        place("coastal-55", PlaceKind::Village, 41.856, 13.40, &["coastal"]),
    ];

    let mut q = query(60.0);
    q.excluded.insert("coastal-55".to_string());

    let response = engine().suggest(&pool, &q);

    let top = response.top.expect("top expected");
    assert_eq!(top.id, "mountain-20");
    assert!(response
        .alternatives
        .iter()
        .all(|alternative| alternative.id != "coastal-55"));
}

/// A 30-minute budget with nothing inside even the widest cap: the expander
/// falls back to closest-N and the response owns up to the widening.
#[test]
fn scenario_c_fallback_with_honesty_note() {
    let pool = vec![
        // 1.26° ≈ 140 km, 1.44° ≈ 160 km, 1.62° ≈ 180 km: ETAs 129–166 min,
        // far past 30 × 1.60 = 48 min
        place("far-a", PlaceKind::Village, 43.61, 13.40, &[]),
        place("far-b", PlaceKind::Village, 43.79, 13.40, &[]),
        place("far-c", PlaceKind::Village, 43.97, 13.40, &[]),
    ];

    let response = engine().suggest(&pool, &query(30.0));

    let top = response.top.expect("fallback must still produce a result");
    assert_eq!(top.id, "far-a");
    assert!(response.note.is_some(), "expected a widened-search note");
    assert!(response.debug.cap_multiplier.is_none());
    assert!(top.why[0].contains("beyond your time budget"));
}

/// Gem style: a well-known city that would otherwise win is penalized below
/// a hidden-gem village with comparable time-fit.
#[test]
fn scenario_d_gem_style_reranks_big_city() {
    let mut big_city = place("big-city", PlaceKind::City, 41.856, 13.40, &[]);
    big_city.beauty = Some(0.9);

    // 0.429° ≈ 47.7 km: at the mixed constant this lands on the same ETA
    // as the city's 55 km at the fast constant
    let mut hidden_village = place("hidden-village", PlaceKind::Village, 41.921, 13.40, &[]);
    hidden_village.visibility = Visibility::HiddenGem;
    hidden_village.beauty = Some(0.85);

    let pool = vec![big_city, hidden_village];

    let mut q = query(45.0);
    q.style = Style::Gem;

    let response = engine().suggest(&pool, &q);
    let top = response.top.expect("top expected");
    assert_eq!(top.id, "hidden-village");

    // Under mainstream style the city's higher quality wins instead
    let response = engine().suggest(
        &[
            {
                let mut c = place("big-city", PlaceKind::City, 41.856, 13.40, &[]);
                c.beauty = Some(0.9);
                c
            },
            {
                let mut v = place("hidden-village", PlaceKind::Village, 41.921, 13.40, &[]);
                v.visibility = Visibility::HiddenGem;
                v.beauty = Some(0.85);
                v
            },
        ],
        &query(45.0),
    );
    assert_eq!(response.top.unwrap().id, "big-city");
}

/// A malformed record in the pool is dropped silently; the valid records are
/// processed normally.
#[test]
fn scenario_e_malformed_record_is_dropped() {
    let broken: Place = serde_json::from_str(r#"{"id": "broken", "name": "Broken"}"#).unwrap();
    assert!(!broken.lat.is_finite());

    let mut pool = vec![broken];
    for (i, offset) in [0.20, 0.28, 0.36, 0.44, 0.52].iter().enumerate() {
        pool.push(place(
            &format!("ok-{}", i),
            PlaceKind::Village,
            42.35 + offset,
            13.40,
            &[],
        ));
    }

    let response = engine().suggest(&pool, &query(45.0));

    assert!(response.ok);
    assert_eq!(response.debug.pool_size, 6);
    assert_eq!(response.debug.eligible, 5);
    let top = response.top.expect("valid records must still rank");
    assert!(top.id.starts_with("ok-"));
}
