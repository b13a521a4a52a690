pub mod rank;
pub mod transition;
