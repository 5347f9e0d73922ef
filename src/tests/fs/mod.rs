//! Filesystem helper tests.

#[cfg(feature = "async")]
mod nonblocking_tests;
