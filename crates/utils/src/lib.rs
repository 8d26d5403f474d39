// Copyright 2024-2025 Irreducible Inc.

//! Ambient helpers shared by the hash crates and the command-line front end.

pub mod env;
pub mod error_utils;
pub mod rayon;
pub mod thread_local_mut;
pub mod tracing;
