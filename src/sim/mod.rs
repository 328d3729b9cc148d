//! Simulated bowling for tests, benches and demos.

pub mod rng;
pub mod bowler;

pub use rng::BowlerRng;
pub use bowler::SimulatedBowler;
