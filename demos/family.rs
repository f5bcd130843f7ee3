// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! logscope Family Example
//!
//! Inspects a small family of records and emits one structured log event
//! per object.
//!
//! # Usage
//!
//! ```bash
//! # Log the family with the default configuration
//! cargo run --example family
//!
//! # Pretty-print the JSON bodies
//! cargo run --example family -- --pretty
//!
//! # Load engine settings from a TOML file
//! cargo run --example family -- --config logscope.toml
//!
//! # Show traversal detail
//! RUST_LOG=logscope=debug cargo run --example family
//! ```

use logscope::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Inspect)]
pub struct Name {
    #[inspect(rename = "FullName")]
    pub full_name: String,
    first: String,
    last: String,
}

impl Name {
    fn new(first: &str, last: &str) -> Self {
        Self {
            full_name: format!("{first} {last}"),
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}

#[derive(Inspect)]
pub struct Car {
    pub make: String,
    pub model: String,
}

#[derive(Inspect)]
pub struct Uncle {
    pub name: Name,
    pub age: i64,
    pub uncle_car: Car,
}

/// The aunt's name is private; she decides what gets logged.
#[derive(Inspect)]
#[inspect(describe)]
pub struct Aunt {
    name: Name,
}

impl Describe for Aunt {
    fn describe(&self) -> ResultTriple {
        let body = JsonBody::new().set(["aunt", "name"], self.name.full_name.as_str());
        ResultTriple::new(["aunt"], ["Name"], body.to_string())
    }
}

#[derive(Inspect)]
pub struct Child {
    name: Name,
    age: i64,
    pub aunt: Aunt,
    pub uncle1: Uncle,
}

#[derive(Inspect)]
pub struct Parent {
    pub name: Name,
    pub age: i64,
    pub first_kid: Child,
    pub aunt1: Aunt,
    aunt2: Aunt,
    pub uncle1: Uncle,
}

fn eric() -> Uncle {
    Uncle {
        name: Name::new("Eric", "Castillo"),
        age: 33,
        uncle_car: Car {
            make: "Buick".to_string(),
            model: "Regal".to_string(),
        },
    }
}

fn kristin() -> Aunt {
    Aunt {
        name: Name::new("Kristin", "Castillo"),
    }
}

fn populate() -> Box<Parent> {
    Box::new(Parent {
        name: Name::new("Jim", "Castillo"),
        age: 43,
        first_kid: Child {
            name: Name::new("Kate", "Castillo"),
            age: 6,
            aunt: kristin(),
            uncle1: eric(),
        },
        aunt1: kristin(),
        aunt2: Aunt {
            name: Name::new("Sue", "Wu"),
        },
        uncle1: eric(),
    })
}

fn print_inspection(label: &str, inspection: &Inspection) {
    println!("[{label}] names: {:?}", inspection.names());
    println!("[{label}] types: {:?}", inspection.types());
    println!("[{label}] json:  {}", inspection.json());
    for diagnostic in &inspection.diagnostics {
        println!("[{label}] diagnostic: {diagnostic}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("logscope Family Example");
        println!();
        println!("Usage: family [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <PATH>  Load engine configuration from a TOML file");
        println!("  --pretty         Pretty-print JSON bodies");
        println!("  --help           Show this help");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match args.iter().position(|a| a == "--config") {
        Some(index) => {
            let path = args.get(index + 1).ok_or("--config requires a path")?;
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    if args.iter().any(|a| a == "--pretty") {
        config = config.with_pretty_json(true);
    }
    let engine = Engine::with_config(config)?;

    let parent = populate();

    print_inspection("parent", &engine.log("parent", &parent));
    print_inspection("uncle1", &engine.log("uncle1", &parent.uncle1));
    print_inspection("aunt1", &engine.log("aunt1", &parent.aunt1));

    Ok(())
}
