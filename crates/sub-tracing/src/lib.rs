// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod builder;
pub mod factory;

pub use builder::{TracingBuilder, TracingError};
pub use factory::{TracingConfigurator, TracingFactory};
