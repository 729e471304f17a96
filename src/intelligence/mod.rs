//! Risk classification of extracted measurements, plus the topic knowledge table.

pub mod classify;
pub mod engine;
pub mod knowledge;
pub mod messages;
pub mod types;

pub use classify::*;
pub use engine::*;
pub use knowledge::*;
pub use types::*;
