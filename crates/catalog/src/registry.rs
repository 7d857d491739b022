// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The fixed set of tables the statistics dataset is made of.
//!
//! One identity table maps a player's unique id to a display name; every
//! other table holds one tracked statistic in one of the [`Shape`]s below.

use crate::{Column, DataType, Table};

pub const IDENTITY_TABLE: &str = "players";

/// Layout of a statistic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
	/// `{uuid}`: one counter per player.
	Aggregate,
	/// `{uuid, world}`
	PerWorld,
	/// `{uuid, world, category...}`, where each category is a statistic
	/// specific dimension such as a food name or a damage cause.
	Categorized(Vec<(&'static str, DataType)>),
}

impl Shape {
	pub fn categorized(category: &'static str) -> Self {
		Shape::Categorized(vec![(category, DataType::Text)])
	}

	/// Builds the table for a statistic of this shape.
	pub fn table(&self, name: &str) -> Table {
		match self {
			Shape::Aggregate => Table::new(name)
				.with_column(Column::new("uuid", DataType::Text).unique())
				.with_column(Column::new("value", DataType::Integer)),
			Shape::PerWorld => Self::per_world(name, &[]),
			Shape::Categorized(categories) => Self::per_world(name, categories),
		}
	}

	fn per_world(name: &str, categories: &[(&'static str, DataType)]) -> Table {
		let mut table = Table::new(name);
		table.add_column(Column::new("id", DataType::Integer).auto_increment())
			.add_column(Column::new("uuid", DataType::Text).not_null())
			.add_column(Column::new("value", DataType::Integer))
			.add_column(Column::new("world", DataType::Text).not_null());

		for (category, data_type) in categories {
			table.add_column(Column::new(*category, *data_type).not_null());
		}

		table.add_unique_matched("uuid");
		for (category, _) in categories {
			table.add_unique_matched(*category);
		}
		table.add_unique_matched("world");

		table
	}
}

/// Ordered collection of table declarations. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	tables: Vec<Table>,
}

impl Registry {
	pub fn new() -> Self {
		Self {
			tables: Vec::new(),
		}
	}

	/// The identity table followed by every built-in statistic.
	pub fn standard() -> Self {
		let block = || Shape::Categorized(vec![("typeid", DataType::Integer), ("datavalue", DataType::Integer)]);

		Self::new()
			.with_identity()
			.statistic("joins", Shape::Aggregate)
			.statistic("deaths", Shape::PerWorld)
			.statistic("items_caught", Shape::categorized("caught"))
			.statistic("blocks_placed", block())
			.statistic("blocks_broken", block())
			.statistic("kills_mobs", Shape::categorized("mob"))
			.statistic("kills_players", Shape::categorized("playerKilled"))
			.statistic("time_played", Shape::PerWorld)
			.statistic("food_eaten", Shape::categorized("foodEaten"))
			.statistic("damage_taken", Shape::categorized("cause"))
			.statistic("times_shorn", Shape::PerWorld)
			.statistic("distance_travelled", Shape::categorized("moveType"))
			.statistic("items_crafted", Shape::categorized("item"))
			.statistic("xp_gained", Shape::PerWorld)
			.statistic("votes", Shape::Aggregate)
	}

	pub fn with_identity(self) -> Self {
		self.register(
			Table::new(IDENTITY_TABLE)
				.with_column(Column::new("uuid", DataType::Text).primary_key())
				.with_column(Column::new("playerName", DataType::Text)),
		)
	}

	pub fn statistic(self, name: &str, shape: Shape) -> Self {
		self.register(shape.table(name))
	}

	/// Adds `table`, replacing an earlier declaration with the same name in place.
	pub fn register(mut self, table: Table) -> Self {
		match self.tables.iter_mut().find(|existing| existing.name() == table.name()) {
			Some(existing) => *existing = table,
			None => self.tables.push(table),
		}
		self
	}

	pub fn get(&self, name: &str) -> Option<&Table> {
		self.tables.iter().find(|table| table.name() == name)
	}

	pub fn tables(&self) -> &[Table] {
		&self.tables
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}
