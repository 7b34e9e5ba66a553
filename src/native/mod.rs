/// Native module contains implementations of core traits backed by the
/// host system directly: real subprocesses and the real search path.
pub mod executor;
pub mod locator;
