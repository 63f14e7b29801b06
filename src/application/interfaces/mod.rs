pub mod clock;
pub mod latency;
