//! Typed model of an XML-derived STIG benchmark document
//!
//! The benchmark is ephemeral: parsed, transformed into a checklist, and
//! discarded. The wire format's singleton-vs-array ambiguity (Group,
//! Profile.select, plain-text, Rule.ident) is normalized to sequences by
//! the schema tables here and never reaches the model types.

pub mod error;
pub mod parse;
pub mod schema;
pub mod types;

pub use error::BenchmarkParseError;
pub use parse::{benchmark_to_wire_json, parse_benchmark};
pub use types::{
    Benchmark, BenchmarkDocument, BenchmarkReference, BenchmarkStatus, Check, CheckContentRef,
    Fix, Fixtext, Group, Ident, PlainText, Profile, Rule, RuleReference, Selection, Severity,
};
