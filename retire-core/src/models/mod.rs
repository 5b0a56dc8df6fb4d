mod calculator_inputs;
mod calculator_results;
mod input_field;

pub use calculator_inputs::CalculatorInputs;
pub use calculator_results::CalculatorResults;
pub use input_field::InputField;
