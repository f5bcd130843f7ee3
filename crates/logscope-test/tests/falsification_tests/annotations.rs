//! Falsification Tests: Category B - Visibility and Annotations (F021-F035)
//!
//! # Toyota Way: Poka-Yoke (ポカヨケ)
//! Mistake-proofing: hidden data must never reach the log body.

use std::collections::BTreeMap;

use logscope::{Inspect, inspect};
use logscope_test::fixtures::{self, Car, Name, ServiceRecord};
use serde::Serialize;
use serde_json::json;

// =============================================================================
// F021-F025: Visibility
// =============================================================================

/// F021: Hidden members are named but never projected
///
/// # Falsification Attempt
/// Search the body of a name for its hidden parts.
#[test]
fn f021_hidden_members_named_not_projected() {
    let inspection = inspect(&Name::new("Jim", "Castillo"));
    assert!(
        inspection.names().iter().any(|n| n == "first"),
        "F021 FALSIFIED: hidden member not named"
    );
    assert!(
        !inspection.json().contains("\"first\"") && !inspection.json().contains("\"Jim\""),
        "F021 FALSIFIED: hidden member leaked into {}",
        inspection.json()
    );
}

/// F022: Hidden members do not leak through nested projections either
///
/// # Falsification Attempt
/// Search the whole family body for private values.
#[test]
fn f022_hidden_members_absent_at_every_depth() {
    let body = inspect(&fixtures::family()).json().to_string();
    for private in ["Kate Castillo", "Mark Wu", "Sue Wu", "second_kid", "\"last\""] {
        assert!(
            !body.contains(private),
            "F022 FALSIFIED: '{private}' leaked into {body}"
        );
    }
}

/// F023: Restricted visibility counts as hidden
///
/// # Falsification Attempt
/// Derive a record with `pub(crate)` and `pub(super)` members.
#[test]
fn f023_restricted_visibility_hidden() {
    #[derive(Inspect)]
    struct Account {
        pub owner: String,
        pub(crate) balance: u64,
        pub(super) pin: u16,
    }

    let inspection = inspect(&Account {
        owner: "Jim".to_string(),
        balance: 10,
        pin: 1234,
    });
    assert_eq!(
        inspection.names(),
        &["owner", "balance", "pin", "Account"],
        "F023 FALSIFIED: names"
    );
    assert_eq!(inspection.json(), r#"{"owner":"Jim"}"#, "F023 FALSIFIED");
    assert_eq!(inspection.types(), &["Account", "String"], "F023 FALSIFIED");
}

/// F024: A hidden record member is neither classified nor descended into
///
/// # Falsification Attempt
/// Derive a record with a private nested record.
#[test]
fn f024_hidden_record_not_descended() {
    #[derive(Inspect)]
    struct Vault {
        car: Car,
    }

    let inspection = inspect(&Vault {
        car: Car::new("Lexus", "350"),
    });
    assert_eq!(inspection.names(), &["car", "Vault"], "F024 FALSIFIED");
    assert_eq!(inspection.types(), &["Vault"], "F024 FALSIFIED");
    assert_eq!(inspection.json(), "{}", "F024 FALSIFIED: body");
}

/// F025: A record with only hidden members still yields a valid body
///
/// # Falsification Attempt
/// Parse the body of a record with no exposed members.
#[test]
fn f025_all_hidden_valid_body() {
    #[derive(Inspect)]
    struct Sealed {
        a: u8,
        b: u8,
    }

    let inspection = inspect(&Sealed { a: 1, b: 2 });
    assert_eq!(
        inspection.triple.json_value(),
        Some(json!({})),
        "F025 FALSIFIED"
    );
}

// =============================================================================
// F026-F035: Field annotations
// =============================================================================

/// F026: `rename` changes the JSON key only
///
/// # Falsification Attempt
/// Compare the names index and body of a renamed member.
#[test]
fn f026_rename_changes_key_only() {
    let inspection = inspect(&Name::new("Jim", "Castillo"));
    assert_eq!(inspection.names()[0], "full_name", "F026 FALSIFIED: name changed");
    assert_eq!(
        inspection.json(),
        r#"{"FullName":"Jim Castillo"}"#,
        "F026 FALSIFIED: key not renamed"
    );
}

/// F027: `skip` omits the member from the body but keeps it named
///
/// # Falsification Attempt
/// Inspect the garage fixture's door code.
#[test]
fn f027_skip_named_not_projected() {
    let inspection = inspect(&fixtures::garage());
    assert!(
        inspection.names().iter().any(|n| n == "door_code"),
        "F027 FALSIFIED: skipped member not named"
    );
    assert!(
        !inspection.json().contains("4321"),
        "F027 FALSIFIED: skipped member projected"
    );
}

/// F028: `skip` also stops type classification and descent
///
/// # Falsification Attempt
/// Skip an exposed nested record.
#[test]
fn f028_skip_not_classified() {
    #[derive(Inspect)]
    struct Showroom {
        #[inspect(skip)]
        pub car: Car,
    }

    let inspection = inspect(&Showroom {
        car: Car::new("Ford", "T"),
    });
    assert_eq!(inspection.names(), &["car", "Showroom"], "F028 FALSIFIED");
    assert_eq!(inspection.types(), &["Showroom"], "F028 FALSIFIED");
}

/// F029: `omit_empty` drops zero values and keeps the rest
///
/// # Falsification Attempt
/// Inspect a garage with and without a note and service history.
#[test]
fn f029_omit_empty() {
    let mut garage = fixtures::garage();
    let body = inspect(&garage).triple.json_value().unwrap();
    assert!(body.get("note").is_none(), "F029 FALSIFIED: empty note kept");
    assert!(body.get("service").is_none(), "F029 FALSIFIED: empty history kept");

    garage.note = Some("back door sticks".to_string());
    garage.service = ServiceRecord {
        visits: BTreeMap::from([("2024-01-05".to_string(), 31_000)]),
    };
    let body = inspect(&garage).triple.json_value().unwrap();
    assert_eq!(body["note"], json!("back door sticks"), "F029 FALSIFIED");
    assert_eq!(body["service"], json!({"2024-01-05": 31000}), "F029 FALSIFIED");
}

/// F030: `omit_nested` classifies the member but does not descend
///
/// # Falsification Attempt
/// Inspect the garage owner.
#[test]
fn f030_omit_nested_not_descended() {
    let inspection = inspect(&fixtures::garage());
    assert_eq!(
        inspection.names(),
        &["owner", "cars", "service", "gate", "door_code", "note", "Garage"],
        "F030 FALSIFIED: omit_nested member descended"
    );
    assert_eq!(inspection.types()[1], "Name", "F030 FALSIFIED: not classified");
}

/// F031: `omit_nested` still renders the member in full in the body
///
/// # Falsification Attempt
/// Check the owner object in the garage body.
#[test]
fn f031_omit_nested_still_projected() {
    let body = inspect(&fixtures::garage()).triple.json_value().unwrap();
    assert_eq!(
        body["owner"],
        json!({"FullName": "Eric Castillo"}),
        "F031 FALSIFIED"
    );
}

/// F032: `serialize` projects through serde under the field's type name
///
/// # Falsification Attempt
/// Derive a record holding a serde-only value.
#[test]
fn f032_serialize_leaf() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Inspect)]
    struct Marker {
        #[inspect(serialize)]
        pub at: Point,
    }

    let inspection = inspect(&Marker {
        at: Point { x: 1, y: -1 },
    });
    assert_eq!(inspection.types(), &["Marker", "Point"], "F032 FALSIFIED");
    assert_eq!(
        inspection.json(),
        r#"{"at":{"x":1,"y":-1}}"#,
        "F032 FALSIFIED: serde body"
    );
}

/// F033: `display` projects the Display string
///
/// # Falsification Attempt
/// Inspect the garage gate address.
#[test]
fn f033_display_leaf() {
    let inspection = inspect(&fixtures::garage());
    assert_eq!(inspection.types()[4], "Ipv4Addr", "F033 FALSIFIED: type");
    let body = inspection.triple.json_value().unwrap();
    assert_eq!(body["gate"], json!("10.0.0.7"), "F033 FALSIFIED: body");
}

/// F034: The container `name` replaces the reported type name, alongside
/// an explicit crate path
///
/// # Falsification Attempt
/// Derive a record with a custom name.
#[test]
fn f034_container_name() {
    #[derive(Inspect)]
    #[inspect(name = "Person")]
    struct PersonRecord {
        pub age: u8,
    }

    let inspection = inspect(&PersonRecord { age: 9 });
    assert_eq!(inspection.names(), &["age", "Person"], "F034 FALSIFIED");
    assert_eq!(inspection.types(), &["Person", "u8"], "F034 FALSIFIED");

    #[derive(Inspect)]
    #[inspect(crate = "logscope", name = "Pet")]
    struct PetRecord {
        pub kind: String,
    }

    let pet = inspect(&PetRecord {
        kind: "cat".to_string(),
    });
    assert_eq!(pet.names(), &["kind", "Pet"], "F034 FALSIFIED: crate path");
}

/// F035: Every annotation together yields the expected garage
///
/// # Falsification Attempt
/// Compare the full garage triple.
#[test]
fn f035_garage_triple() {
    let inspection = inspect(&fixtures::garage());
    assert_eq!(
        inspection.types(),
        &["Garage", "Name", "Vec<Car>", "ServiceRecord", "Ipv4Addr", "String"],
        "F035 FALSIFIED: types"
    );
    assert_eq!(
        inspection.json(),
        r#"{"cars":[{"make":"Buick","model":"Regal"},{"make":"Lexus","model":"350"}],"gate":"10.0.0.7","owner":{"FullName":"Eric Castillo"}}"#,
        "F035 FALSIFIED: body"
    );
    assert!(inspection.is_clean(), "F035 FALSIFIED: diagnostics raised");
}
