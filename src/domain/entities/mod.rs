//! Domain Entities


pub use rule_test::{CommandType, EdgeCase, EdgeCommand, RuleTest};
