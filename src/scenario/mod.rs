//! Scenario inputs and scenario-file loading

mod data;
pub mod loader;

pub use data::ScenarioInput;
pub use loader::{
    load_default_scenarios, load_scenarios, load_scenarios_from_reader, NamedScenario,
    DEFAULT_SCENARIOS_PATH,
};
