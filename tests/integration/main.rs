//! Integration tests for rs-coreex
//!
//! These tests run the complete extraction pipeline on realistic pages
//! stored under `fixtures/`.

mod feature_combinations;
mod real_world_pages;
