/// Conversion and pruning core: pure logic, no I/O
pub mod domain;
pub mod policies;
pub mod services;
