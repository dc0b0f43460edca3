pub mod collectors;
pub mod exporters;
pub mod geo;
pub mod sources;
