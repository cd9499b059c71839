//! CLI integration tests for the playhead binary.

mod helpers;
mod layout_test;
mod sprites_test;
