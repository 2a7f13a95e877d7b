//! Small hand-written datasets exercising the query contracts.

use volcano_core::{Volcano, VolcanoDataset};

const TWO: &str = r#"[
    {"Name":"Big","Country":"Japan","Type":"Caldera","Year":1985,"VEI":7,"TSU":"tsu",
     "DEATHS":100,"Agent":["ash"],"Latitude":35.0,"Elevation":500},
    {"Name":"Small","Country":"Chile","Type":"Stratovolcano","Year":1970,"VEI":4,"TSU":"",
     "DEATHS":5,"Agent":["flows"],"Latitude":-33.0,"Elevation":2500}
]"#;

const THREE: &str = r#"[
    {"Name":"Low","Country":"A","Type":"T","Year":1,"Latitude":1,"DEATHS":1,"Agent":"x"},
    {"Name":"High","Country":"B","Type":"T","Year":2,"Latitude":1,"DEATHS":50,"Agent":"y,z"},
    {"Name":"Mid","Country":"C","Type":"T","Year":3,"Latitude":1,"DEATHS":10,"Agent":"w"}
]"#;

#[test]
fn two_record_scenario() {
    let db = VolcanoDataset::from_json_str(TWO).unwrap();

    let eighties: Vec<&str> = db
        .erupted_in_range(1980, 1990)
        .unwrap()
        .into_iter()
        .map(Volcano::name)
        .collect();
    assert_eq!(eighties, ["Big"]);
    assert_eq!(db.names_with_minimum_vei(6).unwrap(), ["Big"]);
    assert_eq!(db.percent_causing_tsunami().unwrap(), 50.0);
    assert_eq!(db.agents_of_death_for_deadliest_eruption().unwrap(), ["ash"]);
}

#[test]
fn top_n_covers_everything_when_n_exceeds_len() {
    let db = VolcanoDataset::from_json_str(THREE).unwrap();
    let all = db.agents_of_death_for_top_n_deadliest(10).unwrap();
    assert_eq!(all, ["y", "z", "w", "x"]);
    for n in 3..8 {
        assert_eq!(db.agents_of_death_for_top_n_deadliest(n).unwrap(), all);
    }
    assert_eq!(db.agents_of_death_for_top_n_deadliest(1).unwrap(), ["y", "z"]);
}

#[test]
fn from_reader_matches_from_str() {
    let a = VolcanoDataset::from_reader(THREE.as_bytes()).unwrap();
    let b = VolcanoDataset::from_json_str(THREE).unwrap();
    assert_eq!(a.volcanoes().unwrap(), b.volcanoes().unwrap());
}

#[test]
fn elevation_threshold_is_strict() {
    let db = VolcanoDataset::from_json_str(TWO).unwrap();
    assert_eq!(db.names_above_elevation(500.0).unwrap(), ["Small"]);
    assert_eq!(db.names_above_elevation(499.9).unwrap(), ["Big", "Small"]);
}

#[test]
fn hemisphere_excludes_equator() {
    let db = VolcanoDataset::from_json_str(
        r#"[
            {"Name":"N","Country":"X","Type":"T","Year":1,"Latitude":0.1},
            {"Name":"Eq","Country":"X","Type":"T","Year":1,"Latitude":0.0},
            {"Name":"S","Country":"X","Type":"T","Year":1,"Latitude":-0.1},
            {"Name":"N2","Country":"X","Type":"T","Year":1,"Latitude":45}
        ]"#,
    )
    .unwrap();
    assert_eq!(db.percent_in_northern_hemisphere().unwrap(), 50.0);
}

#[test]
fn bce_years_are_negative() {
    let db = VolcanoDataset::from_json_str(
        r#"[{"Name":"Old","Country":"X","Type":"T","Year":-4360,"Latitude":-30.2}]"#,
    )
    .unwrap();
    assert_eq!(db.erupted_in_range(-5000, 0).unwrap().len(), 1);
    assert!(db.erupted_in_range(0, 2000).unwrap().is_empty());
}
