pub mod card;
pub mod due;
pub mod notes;
pub mod review;
pub mod stats;
