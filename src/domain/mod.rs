pub mod entities;
pub mod logs;
pub mod ports;
pub mod value_objects;
