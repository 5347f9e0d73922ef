//! CLI module tests.
