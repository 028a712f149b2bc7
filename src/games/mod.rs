//! Game implementations built on the pile core.

pub mod klondike;
