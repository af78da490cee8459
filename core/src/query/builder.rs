//! Append-only `SELECT` builder.
//!
//! The builder owns the SQL text and the parameter list as one unit, so a
//! placeholder can only be written by pushing its value. Clause order is fixed
//! by the stage type: predicates are only available while [`Filtering`],
//! `HAVING` only once [`Grouped`], and `LIMIT` finishes the statement.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::marker::PhantomData;

use super::clause::where_or_and;
use super::params::{Placeholder, QueryParams, SqlValue};
use crate::domain::value_objects::RowLimit;
use crate::errors::{DomainError, DomainResult};

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+)").expect("valid placeholder pattern"));

/// Stage marker: `WHERE`/`AND` predicates may still be added
#[derive(Debug)]
pub struct Filtering;

/// Stage marker: `GROUP BY` has been written
#[derive(Debug)]
pub struct Grouped;

/// Statement under construction
#[derive(Debug)]
pub struct SelectBuilder<S> {
    sql: String,
    params: QueryParams,
    having_written: bool,
    _stage: PhantomData<S>,
}

impl<S> SelectBuilder<S> {
    fn push_line(&mut self, fragment: &str) {
        self.sql.push('\n');
        self.sql.push_str(fragment);
    }

    fn into_stage<T>(self) -> SelectBuilder<T> {
        SelectBuilder {
            sql: self.sql,
            params: self.params,
            having_written: self.having_written,
            _stage: PhantomData,
        }
    }

    /// Parameters pushed so far
    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

impl SelectBuilder<Filtering> {
    /// Start from a fixed base statement that binds no parameters
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.trim().to_owned(),
            params: QueryParams::new(),
            having_written: false,
            _stage: PhantomData,
        }
    }

    /// Push `value` and append a predicate referring to its placeholder,
    /// introduced by `WHERE` for the first predicate and `AND` afterwards.
    pub fn filter<F>(&mut self, value: impl Into<SqlValue>, predicate: F) -> &mut Self
    where
        F: FnOnce(Placeholder) -> String,
    {
        let placeholder = self.params.push(value);
        let keyword = where_or_and(&self.params);
        let clause = format!("{} {}", keyword, predicate(placeholder));
        self.push_line(&clause);
        self
    }

    /// Append `GROUP BY`; no predicate may follow
    pub fn group_by(mut self, columns: &str) -> SelectBuilder<Grouped> {
        self.push_line(&format!("GROUP BY {}", columns));
        self.into_stage()
    }
}

impl SelectBuilder<Grouped> {
    /// Push `value` and append an aggregate predicate, introduced by `HAVING`
    /// the first time and `AND` afterwards.
    pub fn having<F>(&mut self, value: impl Into<SqlValue>, predicate: F) -> &mut Self
    where
        F: FnOnce(Placeholder) -> String,
    {
        let placeholder = self.params.push(value);
        let keyword = if self.having_written { "AND" } else { "HAVING" };
        self.having_written = true;
        let clause = format!("{} {}", keyword, predicate(placeholder));
        self.push_line(&clause);
        self
    }

    /// Push the limit as the final parameter and close the statement
    pub fn order_by_with_limit(mut self, order: &str, limit: RowLimit) -> BuiltQuery {
        let placeholder = self.params.push(limit.as_i64());
        self.push_line(&format!("ORDER BY {}", order));
        self.push_line(&format!("LIMIT {}", placeholder));

        let query = BuiltQuery {
            sql: self.sql,
            params: self.params.into_vec(),
        };
        debug_assert!(query.check_placeholders().is_ok());
        query
    }
}

/// Finished statement ready for the executor
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    sql: String,
    params: Vec<SqlValue>,
}

impl BuiltQuery {
    /// Wrap a fixed statement and its parameters
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }

    /// Distinct placeholder indices referenced by the SQL text
    pub fn placeholder_indices(&self) -> BTreeSet<usize> {
        PLACEHOLDER_PATTERN
            .captures_iter(&self.sql)
            .filter_map(|caps| caps[1].parse().ok())
            .collect()
    }

    /// Verify that the text references exactly `$1..=$N` for `N` parameters
    pub fn check_placeholders(&self) -> DomainResult<()> {
        let indices = self.placeholder_indices();
        let expected: BTreeSet<usize> = (1..=self.params.len()).collect();

        if indices == expected {
            Ok(())
        } else {
            Err(DomainError::Internal {
                message: format!(
                    "placeholder mismatch: statement references {:?} but {} parameter(s) were bound",
                    indices,
                    self.params.len()
                ),
            })
        }
    }
}
