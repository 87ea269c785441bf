// ABOUTME: Helper modules for forkful-cli
// ABOUTME: JSON file input and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

pub mod json_io;
