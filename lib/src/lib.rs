mod data;
mod dictionary;
mod engine;
mod hints;
mod results;
mod validation;

pub use data::*;
pub use dictionary::*;
pub use engine::*;
pub use hints::*;
pub use results::*;
pub use validation::*;
