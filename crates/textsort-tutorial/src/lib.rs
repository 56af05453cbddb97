//! Textsort tutorial
//!
//! Orchestrates one end-to-end session against a remote online-learning
//! classifier: configure an instance, train it from the bundled corpus,
//! save and reload the model, then classify the bundled test set.

pub mod classify;
pub mod cli;
pub mod resources;
pub mod train;
