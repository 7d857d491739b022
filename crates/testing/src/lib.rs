// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod tempdir;
pub mod tracing;
pub mod util;
