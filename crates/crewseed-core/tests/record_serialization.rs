use chrono::{TimeZone, Utc};
use serde_json::json;

use crewseed_core::{Shift, Skill, Superior, Technician};

fn sample_shift() -> Shift {
    Shift {
        date: Utc.with_ymd_and_hms(2026, 8, 25, 14, 30, 0).unwrap(),
        capacity: "AB".to_string(),
        skills: [
            Skill {
                code: "bec".to_string(),
            },
            Skill {
                code: "EIF".to_string(),
            },
            Skill {
                code: "MxG".to_string(),
            },
        ],
        route_area: "123der".to_string(),
    }
}

#[test]
fn superior_round_trips_through_json() {
    let superior = Superior {
        superior_id: 42,
        name: "Ada Lovelace".to_string(),
        phone: "555-0100".to_string(),
    };
    let bytes = serde_json::to_vec(&superior).expect("serialize");
    let back: Superior = serde_json::from_slice(&bytes).expect("deserialize");
    assert_eq!(back, superior);
}

#[test]
fn technician_round_trips_with_nested_shift() {
    let technician = Technician {
        technician_id: 500,
        name: "Grace Hopper".to_string(),
        superior_id: 42,
        shift: sample_shift(),
    };
    let bytes = serde_json::to_vec(&technician).expect("serialize");
    let back: Technician = serde_json::from_slice(&bytes).expect("deserialize");
    assert_eq!(back, technician);
}

#[test]
fn wire_format_keeps_original_field_names() {
    let superior = Superior {
        superior_id: 42,
        name: "Ada Lovelace".to_string(),
        phone: "555-0100".to_string(),
    };
    let value = serde_json::to_value(&superior).expect("serialize");
    assert_eq!(
        value,
        json!({"SuperiorID": 42, "Name": "Ada Lovelace", "Phone": "555-0100"})
    );

    let technician = Technician {
        technician_id: 500,
        name: "Grace Hopper".to_string(),
        superior_id: 42,
        shift: sample_shift(),
    };
    let value = serde_json::to_value(&technician).expect("serialize");
    assert_eq!(value["TechnicID"], json!(500));
    assert_eq!(value["Shift"]["RouteArea"], json!("123der"));
    assert_eq!(value["Shift"]["Skill"][0]["Code"], json!("bec"));
}
