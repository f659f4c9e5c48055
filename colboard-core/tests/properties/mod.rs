//! Property test modules

mod board_tests;
mod destination_tests;
mod hitbox_tests;
mod registry_tests;
mod reorder_tests;
