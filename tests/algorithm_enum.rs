use astar_pathfinding::{Algorithm, SearchConfig};

#[test]
fn test_algorithm_enum_default() {
    assert_eq!(Algorithm::default(), Algorithm::Unidirectional);
}

#[test]
fn test_algorithm_from_str() {
    assert_eq!(Algorithm::from("unidirectional"), Algorithm::Unidirectional);
    assert_eq!(Algorithm::from("bidirectional"), Algorithm::Bidirectional);
    assert_eq!(Algorithm::from("BI"), Algorithm::Bidirectional);
    assert_eq!(Algorithm::from("Bidirectional"), Algorithm::Bidirectional);
    assert_eq!(Algorithm::from("unknown"), Algorithm::Unidirectional); // Default to unidirectional
}

#[test]
fn test_algorithm_from_string() {
    assert_eq!(Algorithm::from("uni".to_string()), Algorithm::Unidirectional);
    assert_eq!(Algorithm::from("bi".to_string()), Algorithm::Bidirectional);
}

#[test]
fn test_algorithm_as_str() {
    assert_eq!(Algorithm::Unidirectional.as_str(), "unidirectional");
    assert_eq!(Algorithm::Bidirectional.as_str(), "bidirectional");
}

#[test]
fn test_algorithm_serde() {
    let json = serde_json::to_string(&Algorithm::Bidirectional).unwrap();
    assert_eq!(json, r#""bidirectional""#);

    let parsed: Algorithm = serde_json::from_str(r#""unidirectional""#).unwrap();
    assert_eq!(parsed, Algorithm::Unidirectional);
}

#[test]
fn test_search_config_default() {
    let config: SearchConfig<u32> = SearchConfig::default();

    assert_eq!(config.max_cost, u32::MAX);
    assert_eq!(config.algorithm, Algorithm::Unidirectional);
}

#[test]
fn test_search_config_deserialization() {
    let config: SearchConfig<u32> =
        serde_json::from_str(r#"{"max_cost": 40, "algorithm": "bidirectional"}"#)
            .unwrap();

    assert_eq!(config.max_cost, 40);
    assert_eq!(config.algorithm, Algorithm::Bidirectional);
}
