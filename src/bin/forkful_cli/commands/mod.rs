// ABOUTME: Command modules for forkful-cli
// ABOUTME: Record normalization and serving/gram edit commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

pub mod normalize;
pub mod serving;
