// File I/O operations

pub mod results;
pub mod xlsx;
