//! Fixture domain: a family of records.
//!
//! Mirrors the shapes the engine has to cope with in practice: hidden
//! members, nested records, repeated types, and a self-describing record
//! whose interesting data is private.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use logscope::{Describe, Inspect, JsonBody, ResultTriple};
use serde::Serialize;

/// A person's name. Only the full name is exposed.
#[derive(Debug, Clone, Inspect)]
pub struct Name {
    /// Full name, projected under `FullName`.
    #[inspect(rename = "FullName")]
    pub full_name: String,
    first: String,
    last: String,
}

impl Name {
    /// Creates a name from its two parts.
    #[must_use]
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            full_name: format!("{first} {last}"),
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}

/// A car.
#[derive(Debug, Clone, Inspect)]
pub struct Car {
    /// Manufacturer.
    pub make: String,
    /// Model.
    pub model: String,
}

impl Car {
    /// Creates a car.
    #[must_use]
    pub fn new(make: &str, model: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
        }
    }
}

/// An uncle: every member exposed.
#[derive(Debug, Clone, Inspect)]
pub struct Uncle {
    /// Name.
    pub name: Name,
    /// Age in years.
    pub age: i64,
    /// The uncle's car.
    pub uncle_car: Car,
}

/// An aunt. Her name is private, so she describes herself.
#[derive(Debug, Clone, Inspect)]
#[inspect(describe)]
pub struct Aunt {
    name: Name,
}

impl Aunt {
    /// Creates an aunt.
    #[must_use]
    pub const fn new(name: Name) -> Self {
        Self { name }
    }
}

impl Describe for Aunt {
    fn describe(&self) -> ResultTriple {
        let body = JsonBody::new().set(["aunt", "name"], self.name.full_name.as_str());
        ResultTriple::new(["aunt"], ["Name"], body.to_string())
    }
}

/// A child: mostly private.
#[derive(Debug, Clone, Inspect)]
pub struct Child {
    name: Name,
    age: i64,
    /// Aunt on the mother's side.
    pub aunt: Aunt,
    /// Favourite uncle.
    pub uncle1: Uncle,
    uncle2: Uncle,
}

/// The root of the family graph.
#[derive(Debug, Clone, Inspect)]
pub struct Parent {
    /// Name.
    pub name: Name,
    /// Age in years.
    pub age: i64,
    /// Oldest child.
    pub first_kid: Child,
    second_kid: Child,
    /// Sister.
    pub aunt1: Aunt,
    aunt2: Aunt,
    /// Brother.
    pub uncle1: Uncle,
}

/// Service record kept as a plain serde type.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ServiceRecord {
    /// Odometer reading per service date.
    pub visits: BTreeMap<String, u32>,
}

/// A garage exercising every field annotation.
#[derive(Debug, Clone, Inspect)]
pub struct Garage {
    /// Owner, projected but not indexed beneath.
    #[inspect(omit_nested)]
    pub owner: Name,
    /// Cars in the garage.
    pub cars: Vec<Car>,
    /// Service history, encoded through serde.
    #[inspect(serialize, omit_empty)]
    pub service: ServiceRecord,
    /// Gate controller address.
    #[inspect(display)]
    pub gate: Ipv4Addr,
    /// Door code: named, never projected.
    #[inspect(skip)]
    pub door_code: String,
    /// Optional note.
    #[inspect(omit_empty)]
    pub note: Option<String>,
}

fn uncle(first: &str, last: &str, age: i64, car: Car) -> Uncle {
    Uncle {
        name: Name::new(first, last),
        age,
        uncle_car: car,
    }
}

/// Builds the reference family.
#[must_use]
pub fn family() -> Parent {
    let kristin = Aunt::new(Name::new("Kristin", "Castillo"));
    Parent {
        name: Name::new("Jim", "Castillo"),
        age: 43,
        first_kid: Child {
            name: Name::new("Kate", "Castillo"),
            age: 6,
            aunt: kristin.clone(),
            uncle1: uncle("Eric", "Castillo", 33, Car::new("Buick", "Regal")),
            uncle2: uncle("Mark", "Wu", 43, Car::new("Lexus", "350")),
        },
        second_kid: Child {
            name: Name::new("Mark", "Castillo"),
            age: 4,
            aunt: kristin.clone(),
            uncle1: uncle("Eric", "Castillo", 33, Car::new("Buick", "Regal")),
            uncle2: uncle("Mark", "Wu", 43, Car::new("Lexus", "350")),
        },
        aunt1: kristin,
        aunt2: Aunt::new(Name::new("Sue", "Wu")),
        uncle1: uncle("Eric", "Castillo", 33, Car::new("Buick", "Regal")),
    }
}

/// Builds a garage with an empty service history and no note.
#[must_use]
pub fn garage() -> Garage {
    Garage {
        owner: Name::new("Eric", "Castillo"),
        cars: vec![Car::new("Buick", "Regal"), Car::new("Lexus", "350")],
        service: ServiceRecord::default(),
        gate: Ipv4Addr::new(10, 0, 0, 7),
        door_code: "4321".to_string(),
        note: None,
    }
}
