pub mod calculator;
pub mod classifier;
pub mod leave;
pub mod logic;
pub mod report;
pub mod rules;
