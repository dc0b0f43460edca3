pub mod filter;
pub mod population;
pub mod report;
pub mod status;
