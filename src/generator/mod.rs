mod expander;
mod record;
mod template;

pub use expander::expand;
pub use record::{VarType, VariableRecord};
pub use template::render;
