//! End-to-end tests: dump text in, statements out.

mod common;
use common::*;

use ddl_diff::prelude::*;

// ===================================================================
// New columns
// ===================================================================

#[test]
fn new_column_added_after_last_old_column() {
    let old = create_table("users", &["`id` INT", "`name` VARCHAR(50)"]);
    let new = create_table(
        "users",
        &["`id` INT", "`name` VARCHAR(50)", "`email` VARCHAR(100)"],
    );

    let d = diff(&old, &new);
    assert_eq!(
        d.add_statements,
        vec!["ALTER TABLE `users` ADD `email` VARCHAR(100) AFTER `name`;"]
    );
    assert!(d.modify_statements.is_empty());
    assert!(d.create_statements.is_empty());
}

#[test]
fn anchor_is_old_tables_last_column_not_new_ones() {
    let old = create_table("t", &["`a` int", "`b` int"]);
    let new = create_table("t", &["`a` int", "`x` int", "`b` int", "`y` int"]);

    let d = diff(&old, &new);
    assert_eq!(
        d.add_statements,
        vec![
            "ALTER TABLE `t` ADD `x` int AFTER `b`;",
            "ALTER TABLE `t` ADD `y` int AFTER `b`;",
        ]
    );
}

#[test]
fn old_table_without_columns_adds_without_anchor() {
    let old = "CREATE TABLE `t` (\n) ENGINE=InnoDB;\n";
    let new = create_table("t", &["`a` int"]);

    assert_eq!(diff(old, &new).add_statements, vec!["ALTER TABLE `t` ADD `a` int;"]);
}

// ===================================================================
// Modified columns
// ===================================================================

#[test]
fn enum_gains_value() {
    let old = create_table("t", &["`status` ENUM('a','b') NOT NULL"]);
    let new = create_table("t", &["`status` ENUM('a','b','c') NOT NULL"]);

    let d = diff(&old, &new);
    assert_eq!(
        d.modify_statements,
        vec!["ALTER TABLE `t` MODIFY `status` ENUM('a','b','c') NOT NULL;"]
    );
    assert_eq!(
        d.debug_entries,
        vec![
            "=== t -> status ===\n\
             BEFORE: enum('a','b') not null\n\
             AFTER:  enum('a','b','c') not null\n\
             MODIFY: ENUM('a','b','c') NOT NULL;\n"
        ]
    );
}

#[test]
fn enum_union_with_reordered_and_removed_values() {
    let old = create_table("t", &["`s` enum('a','b')"]);
    let new = create_table("t", &["`s` enum('b','c')"]);

    assert_eq!(
        diff(&old, &new).modify_statements,
        vec!["ALTER TABLE `t` MODIFY `s` ENUM('a','b','c');"]
    );
}

#[test]
fn applying_merged_enum_converges() {
    let old = create_table("t", &["`s` enum('a','b')"]);
    let new = create_table("t", &["`s` enum('b','c')"]);
    let merged = create_table("t", &["`s` enum('a','b','c')"]);

    assert!(!diff(&old, &new).is_empty());
    assert!(diff(&merged, &new).is_empty());
}

#[test]
fn whitespace_and_case_differences_are_not_changes() {
    let old = create_table("t", &["`c` varchar(10)   NOT NULL DEFAULT 'x'"]);
    let new = create_table("t", &["`c` VARCHAR(10) not null default 'x'"]);

    let d = diff(&old, &new);
    assert!(d.is_empty());
    assert!(d.debug_entries.is_empty());
}

#[test]
fn spacing_inside_literals_is_a_change() {
    let old = create_table("t", &["`c` varchar(10) DEFAULT 'a b'"]);
    let new = create_table("t", &["`c` varchar(10) DEFAULT 'a  b'"]);

    assert_eq!(
        diff(&old, &new).modify_statements,
        vec!["ALTER TABLE `t` MODIFY `c` varchar(10) DEFAULT 'a  b';"]
    );
}

#[test]
fn removed_columns_and_tables_are_ignored() {
    let old = format!(
        "{}{}",
        create_table("users", &["`id` int", "`legacy` text"]),
        create_table("audit", &["`id` int"])
    );
    let new = create_table("users", &["`id` int"]);

    assert!(diff(&old, &new).is_empty());
}

// ===================================================================
// New tables
// ===================================================================

#[test]
fn new_table_is_created_whole_with_alter_blocks() {
    let old = create_table("users", &["`id` int"]);
    let new = format!(
        "{}\n{}\nALTER TABLE `tags`\n  ADD PRIMARY KEY (`id`),\n  ADD KEY `label` (`label`);\n\
         ALTER TABLE `tags`\n  MODIFY `id` int(11) NOT NULL AUTO_INCREMENT;\n",
        create_table("users", &["`id` int"]),
        create_table("tags", &["`id` int(11) NOT NULL", "`label` varchar(20)"])
    );

    let d = diff(&old, &new);
    assert!(d.add_statements.is_empty());
    assert!(d.modify_statements.is_empty());
    assert_eq!(
        d.create_statements,
        vec![
            "\nCREATE TABLE `tags` (\n  `id` int(11) NOT NULL,\n  `label` varchar(20)\n);\n\
             ALTER TABLE `tags`\n  ADD PRIMARY KEY (`id`),\n  ADD KEY `label` (`label`);\n\
             ALTER TABLE `tags`\n  MODIFY `id` int(11) NOT NULL AUTO_INCREMENT;\n"
        ]
    );
}

#[test]
fn lines_after_one_line_alter_header_are_replayed() {
    let new = format!(
        "{}ALTER TABLE `t` AUTO_INCREMENT=5;\n  ADD PRIMARY KEY (`id`);\n",
        create_table("t", &["`id` int"])
    );

    assert_eq!(
        diff("", &new).create_statements,
        vec!["\nCREATE TABLE `t` (\n  `id` int\n);\nALTER TABLE `t`\n  ADD PRIMARY KEY (`id`);\n"]
    );
}

#[test]
fn alter_blocks_of_existing_tables_are_not_replayed() {
    let old = create_table("t", &["`id` int"]);
    let new = format!(
        "{}ALTER TABLE `t`\n  ADD PRIMARY KEY (`id`);\n",
        create_table("t", &["`id` int"])
    );

    assert!(diff(&old, &new).is_empty());
}

#[test]
fn new_table_columns_are_not_diffed() {
    let new = create_table("fresh", &["`s` enum('a'", "`n` int"]);

    let d = diff("", &new);
    assert_eq!(d.create_statements.len(), 1);
    assert!(d.add_statements.is_empty());
}

// ===================================================================
// Errors
// ===================================================================

#[test]
fn malformed_enum_fails_whole_diff() {
    let old = format!(
        "{}{}",
        create_table("a", &["`n` int"]),
        create_table("t", &["`status` ENUM('a','b')"])
    );
    let new = format!(
        "{}{}{}",
        create_table("a", &["`n` bigint", "`m` int"]),
        create_table("t", &["`status` ENUM('a', 'b'"]),
        create_table("z", &["`id` int"])
    );

    match diff_err(&old, &new) {
        DiffError::EnumParse { table, column, .. } => {
            assert_eq!(table, "t");
            assert_eq!(column, "status");
        }
        other => panic!("Expected EnumParse, got {other:?}"),
    }
}

// ===================================================================
// Report
// ===================================================================

#[test]
fn report_lists_adds_then_modifies_but_not_creates() {
    let old = create_table("t", &["`a` int"]);
    let new = format!(
        "{}{}",
        create_table("t", &["`a` bigint", "`b` int"]),
        create_table("n", &["`id` int"])
    );

    assert_eq!(
        diff(&old, &new).report(),
        "\n--- ALTER STATEMENTS ---\n\
         ALTER TABLE `t` ADD `b` int AFTER `a`;\n\
         \n--- MODIFY STATEMENTS ---\n\
         ALTER TABLE `t` MODIFY `a` bigint;\n"
    );
}
