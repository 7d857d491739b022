// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tallydb::{
	Column, ConnectionState, DataType, Error, IDENTITY_TABLE, Registry, Row, Shape, SqliteConfig, StatStoreBuilder,
	Table, Value,
};
use tallydb_testing::{tempdir::temp_dir, util::wait::wait_for};

#[test]
fn test_build_creates_standard_tables() {
	temp_dir(|dir| {
		let store = StatStoreBuilder::new(SqliteConfig::new(dir)).build().unwrap();

		assert!(store.schema_report().is_complete());
		assert_eq!(store.tables().len(), store.registry().len());
		assert!(store.tables().iter().any(|name| name == IDENTITY_TABLE));
		assert_eq!(store.state(), ConnectionState::Open);

		// a path without extension is a directory holding the default file
		assert!(dir.join("stats.db").is_file());
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_player_lookup() {
	let store = StatStoreBuilder::new(SqliteConfig::in_memory()).build().unwrap();

	store.write(IDENTITY_TABLE, Row::new().with("uuid", "abc").with("playerName", "Steve")).wait().unwrap();
	store.write(IDENTITY_TABLE, Row::new().with("uuid", "abc").with("playerName", "Alex")).wait().unwrap();

	let players = store.query(IDENTITY_TABLE, &Row::new().with("uuid", "abc")).unwrap();
	assert_eq!(players.len(), 1);
	assert_eq!(players[0].get("playerName"), Some(&Value::text("Alex")));
}

#[test]
fn test_custom_registry() {
	let registry = Registry::new()
		.with_identity()
		.statistic("fish_caught", Shape::categorized("fish"))
		.register(Table::new("settings").with_column(Column::new("key", DataType::Text).primary_key()).with_column(
			Column::new("setting", DataType::Text),
		));

	let store = StatStoreBuilder::new(SqliteConfig::in_memory()).with_registry(registry).build().unwrap();
	assert_eq!(store.tables(), vec!["fish_caught", "players", "settings"]);

	let rows = vec![
		Row::new().with("uuid", "abc").with("value", 2).with("fish", "cod").with("world", "w"),
		Row::new().with("uuid", "abc").with("value", 1).with("fish", "salmon").with("world", "w"),
	];
	assert_eq!(store.write_batch("fish_caught", rows), Ok(2));
	assert_eq!(store.query("fish_caught", &Row::new().with("uuid", "abc")).unwrap().len(), 2);

	assert_eq!(store.query("joins", &Row::new()), Err(Error::UnknownTable("joins".to_string())));
}

#[test]
fn test_rejected_table_reported() {
	let registry = Registry::standard().register(
		Table::new("votes")
			.with_column(Column::new("a", DataType::Integer).auto_increment())
			.with_column(Column::new("b", DataType::Integer).auto_increment()),
	);

	let store = StatStoreBuilder::new(SqliteConfig::in_memory()).with_registry(registry).build().unwrap();
	let report = store.schema_report();
	assert_eq!(report.failed.len(), 1);
	assert_eq!(report.failed[0].0, "votes");
	assert_eq!(report.created.len(), Registry::standard().len() - 1);
}

#[test]
fn test_unopenable_path_fails_build() {
	temp_dir(|dir| {
		let blocker = dir.join("blocker");
		std::fs::write(&blocker, b"plain file")?;

		let result = StatStoreBuilder::new(SqliteConfig::new(blocker.join("nested").join("stats.db"))).build();
		assert!(matches!(result, Err(Error::ConnectionUnavailable { .. })));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_with_tracing_builds() {
	let store = StatStoreBuilder::new(SqliteConfig::in_memory())
		.with_tracing(|b| b.with_directive("tallydb_sqlite=debug").ansi(false))
		.build()
		.unwrap();

	let _ = store.write("votes", Row::parse([("uuid", "abc"), ("value", "7")]));
	wait_for(
		|| store.query_or_empty("votes", &Row::new()).len() == 1,
		"queued vote should become visible",
	);
	assert_eq!(store.query("votes", &Row::new()).unwrap()[0].get("value"), Some(&Value::Integer(7)));
}
