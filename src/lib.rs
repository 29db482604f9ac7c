// Library interface for testing

pub mod carousel;
pub mod cli;
pub mod epic;
pub mod error;
pub mod matcher;
pub mod utils;
