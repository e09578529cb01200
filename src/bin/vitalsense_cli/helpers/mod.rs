// ABOUTME: Re-exports helper modules for vitalsense-cli
// ABOUTME: Provides text display and serialized output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod output;
