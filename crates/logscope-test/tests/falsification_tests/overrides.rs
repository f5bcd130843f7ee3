//! Falsification Tests: Category C - Override Precedence (F036-F045)
//!
//! # Toyota Way: Respect for People (人間性尊重)
//! A type that describes itself is taken at its word.

use logscope::{
    Describe, DiagnosticKind, Inspect, JsonBody, Member, ResultTriple, Shape, Subject,
    TypeDescriptor, inspect,
};
use logscope_test::InspectionHarness;
use logscope_test::fixtures::{self, Aunt, Name};
use serde_json::json;

fn kristin() -> Aunt {
    Aunt::new(Name::new("Kristin", "Castillo"))
}

/// Exposes a member but overrides with a body that is not JSON.
#[derive(Inspect)]
#[inspect(describe)]
struct Broken {
    pub id: u32,
}

impl Describe for Broken {
    fn describe(&self) -> ResultTriple {
        ResultTriple::new(["broken"], ["Broken"], "{not json")
    }
}

/// Exposes members the override deliberately leaves out.
#[derive(Inspect)]
#[inspect(describe)]
struct Badge {
    pub holder: String,
    pub clearance: u8,
}

impl Describe for Badge {
    fn describe(&self) -> ResultTriple {
        let body = JsonBody::new().set(["badge"], self.holder.as_str());
        ResultTriple::new(["badge"], ["Badge"], body.to_string())
    }
}

// =============================================================================
// F036-F040: Root overrides
// =============================================================================

/// F036: An override's triple is returned verbatim
///
/// # Falsification Attempt
/// Inspect the aunt fixture.
#[test]
fn f036_override_returned_verbatim() {
    let aunt = kristin();
    let inspection = inspect(&aunt);
    assert_eq!(
        inspection.triple,
        aunt.describe(),
        "F036 FALSIFIED: engine altered the override"
    );
    assert_eq!(
        inspection.json(),
        r#"{"aunt":{"name":"Kristin Castillo"}}"#,
        "F036 FALSIFIED: body"
    );
}

/// F037: Nothing beneath an override is visited
///
/// # Falsification Attempt
/// The aunt's own members must not appear in the indices.
#[test]
fn f037_no_descent_beneath_override() {
    let inspection = inspect(&kristin());
    assert_eq!(inspection.names(), &["aunt"], "F037 FALSIFIED: names");
    assert_eq!(inspection.types(), &["Name"], "F037 FALSIFIED: types");
}

/// F038: An override takes precedence over exposed members
///
/// # Falsification Attempt
/// Inspect a self-describing record with exposed members.
#[test]
fn f038_override_beats_exposed_members() {
    let inspection = inspect(&Badge {
        holder: "Jim".to_string(),
        clearance: 3,
    });
    assert_eq!(inspection.names(), &["badge"], "F038 FALSIFIED: generic names");
    assert_eq!(inspection.json(), r#"{"badge":"Jim"}"#, "F038 FALSIFIED");
}

/// F039: A pointer to a self-describing value is still overridden
///
/// # Falsification Attempt
/// Inspect a boxed aunt.
#[test]
fn f039_override_through_pointer() {
    let boxed = Box::new(kristin());
    let inspection = inspect(&boxed);
    assert_eq!(inspection.triple, kristin().describe(), "F039 FALSIFIED");
}

/// F040: An override whose body is not JSON falls back to generic traversal
///
/// # Falsification Attempt
/// Inspect a record whose override emits malformed JSON.
#[test]
fn f040_invalid_override_falls_back() {
    let inspection = inspect(&Broken { id: 7 });
    assert!(
        inspection.has(DiagnosticKind::UnsupportedOverride),
        "F040 FALSIFIED: no diagnostic"
    );
    assert_eq!(inspection.names(), &["id", "Broken"], "F040 FALSIFIED: names");
    assert_eq!(inspection.types(), &["Broken", "u32"], "F040 FALSIFIED: types");
    assert_eq!(inspection.json(), r#"{"id":7}"#, "F040 FALSIFIED: body");
}

// =============================================================================
// F041-F045: Nested overrides
// =============================================================================

/// F041: A nested override contributes its own names and types after the
/// member's type
///
/// # Falsification Attempt
/// Inspect a child holding an aunt.
#[test]
fn f041_nested_override_contribution() {
    #[derive(Inspect)]
    struct Niece {
        pub aunt: Aunt,
    }

    let inspection = inspect(&Niece { aunt: kristin() });
    assert_eq!(inspection.names(), &["aunt", "Niece", "aunt"], "F041 FALSIFIED");
    assert_eq!(
        inspection.types(),
        &["Niece", "Aunt", "Name"],
        "F041 FALSIFIED: types"
    );
}

/// F042: A nested override is projected by its own body
///
/// # Falsification Attempt
/// The parent's body must embed the aunt's describe() body.
#[test]
fn f042_nested_override_projected_by_body() {
    let body = inspect(&fixtures::family()).triple.json_value().unwrap();
    assert_eq!(
        body["aunt1"],
        json!({"aunt": {"name": "Kristin Castillo"}}),
        "F042 FALSIFIED"
    );
}

/// F043: A nested invalid override is reported once and walked generically
///
/// # Falsification Attempt
/// Hold a broken override inside a record.
#[test]
fn f043_nested_invalid_override() {
    #[derive(Inspect)]
    struct Holder {
        pub broken: Broken,
    }

    let inspection = inspect(&Holder {
        broken: Broken { id: 7 },
    });
    assert_eq!(
        inspection.diagnostics.len(),
        1,
        "F043 FALSIFIED: {:?}",
        inspection.diagnostics
    );
    assert_eq!(
        inspection.names(),
        &["broken", "Holder", "id", "Broken"],
        "F043 FALSIFIED: names"
    );
    assert_eq!(inspection.json(), r#"{"broken":{"id":7}}"#, "F043 FALSIFIED");
}

/// F044: A manual implementation can declare an override without the derive
///
/// # Falsification Attempt
/// Implement `Subject` by hand with an override.
#[test]
fn f044_manual_override() {
    struct Token {
        secret: String,
    }

    impl Describe for Token {
        fn describe(&self) -> ResultTriple {
            ResultTriple::new(["token"], ["Token"], r#"{"token":"***"}"#)
        }
    }

    impl Subject for Token {
        fn descriptor(&self) -> TypeDescriptor {
            TypeDescriptor::named("Token")
        }

        fn shape(&self) -> Shape {
            Shape::Record
        }

        fn visit_members(&self, visitor: &mut dyn FnMut(Member<'_>)) {
            visitor(Member::exposed("secret", &self.secret));
        }

        fn has_override(&self) -> bool {
            true
        }

        fn describe_override(&self) -> Option<ResultTriple> {
            Some(self.describe())
        }
    }

    let inspection = inspect(&Token {
        secret: "hunter2".to_string(),
    });
    assert_eq!(inspection.json(), r#"{"token":"***"}"#, "F044 FALSIFIED");
    assert!(!inspection.json().contains("hunter2"), "F044 FALSIFIED: leaked");
}

/// F045: Exactly one strategy governs each subject
///
/// # Falsification Attempt
/// Run the harness over overridden and generic subjects.
#[test]
fn f045_exactly_one_strategy() {
    let harness = InspectionHarness::new();
    assert!(harness.verify(&kristin()).is_ok(), "F045 FALSIFIED: override");
    assert!(
        harness.verify(&fixtures::family()).is_ok(),
        "F045 FALSIFIED: generic"
    );
}
