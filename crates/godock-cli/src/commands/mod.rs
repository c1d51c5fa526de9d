mod generate;

pub use generate::{Target, generate};
