// Adapters layer: concrete implementations for the console boundary.

pub mod console;
