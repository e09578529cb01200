// ABOUTME: Re-exports command modules for vitalsense-cli
// ABOUTME: Provides access to assessment and plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod assess;
pub mod plan;
