//! Shipped lint adapters, one per supported language.

mod scenario;
mod script;

pub use scenario::ScenarioLinter;
pub use script::ScriptLinter;
