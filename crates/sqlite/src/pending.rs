// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crossbeam_channel::Receiver;
use tallydb_type::{Error, Result};

/// Outcome of a submitted write.
///
/// Dropping it is the fire-and-forget path: the write still runs and any
/// failure is logged by the writer. Call [`Pending::wait`] to block until
/// the writer has executed it.
#[derive(Debug)]
pub struct Pending<T = ()> {
	inner: Inner<T>,
}

#[derive(Debug)]
enum Inner<T> {
	Waiting(Receiver<Result<T>>),
	Ready(Result<T>),
}

impl<T> Pending<T> {
	pub(crate) fn waiting(receiver: Receiver<Result<T>>) -> Self {
		Self {
			inner: Inner::Waiting(receiver),
		}
	}

	pub(crate) fn failed(err: Error) -> Self {
		Self {
			inner: Inner::Ready(Err(err)),
		}
	}

	pub fn wait(self) -> Result<T> {
		match self.inner {
			Inner::Waiting(receiver) => receiver.recv().map_err(|_| Error::WriterStopped)?,
			Inner::Ready(result) => result,
		}
	}
}
