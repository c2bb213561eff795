/*! Test utilities: an in-memory element tree that implements `Host`. */

pub mod dom;

pub use dom::{FocusCall, TestDom, TestId};
