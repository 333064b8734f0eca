pub mod compare;
pub mod config;
pub mod errors;
pub mod matrix;
pub mod pipeline;
mod runner;
pub mod score;
pub mod seq;
pub mod ui;

use crate::errors::DissimError;

pub fn run() -> Result<(), DissimError> {
    runner::run()
}
