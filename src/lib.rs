pub mod cli;
pub mod color;
pub mod generator;
pub mod platforms;
