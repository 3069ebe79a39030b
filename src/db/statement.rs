//! SQL templates with named placeholders.
//!
//! Templates use `:name` placeholders which are rewritten to Postgres
//! positional parameters (`$1`, `$2`, ...) at compile time. Casts (`::int`),
//! single-quoted literals and double-quoted identifiers pass through as-is.

use std::collections::HashMap;

use thiserror::Error;

/// A value bound to a named placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("no value bound for placeholder ':{0}'")]
    Unbound(String),
}

/// A SQL template plus its named parameters.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    template: String,
    params: HashMap<String, SqlValue>,
}

/// Positional SQL ready to hand to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl Statement {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            params: HashMap::new(),
        }
    }

    /// Bind a value to `:name`. Binding the same name twice keeps the last value.
    pub fn bind(mut self, name: &str, value: impl Into<SqlValue>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Rewrite named placeholders into positional ones.
    ///
    /// Each distinct name gets one position, in order of first appearance.
    /// Parameters bound but never referenced are ignored.
    pub fn compile(&self) -> Result<CompiledStatement, StatementError> {
        let chars: Vec<char> = self.template.chars().collect();
        let mut sql = String::with_capacity(self.template.len());
        let mut order: Vec<String> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '\'' | '"' => {
                    // Copy the quoted section verbatim; a doubled quote is an escape.
                    sql.push(c);
                    i += 1;
                    while i < chars.len() {
                        sql.push(chars[i]);
                        if chars[i] == c {
                            if chars.get(i + 1) == Some(&c) {
                                sql.push(c);
                                i += 2;
                                continue;
                            }
                            i += 1;
                            break;
                        }
                        i += 1;
                    }
                }
                ':' if chars.get(i + 1) == Some(&':') => {
                    sql.push_str("::");
                    i += 2;
                }
                ':' if chars.get(i + 1).is_some_and(|n| is_ident_start(*n)) => {
                    let start = i + 1;
                    let mut end = start;
                    while end < chars.len() && is_ident_char(chars[end]) {
                        end += 1;
                    }
                    let name: String = chars[start..end].iter().collect();
                    let position = match order.iter().position(|n| *n == name) {
                        Some(existing) => existing + 1,
                        None => {
                            order.push(name);
                            order.len()
                        }
                    };
                    sql.push('$');
                    sql.push_str(&position.to_string());
                    i = end;
                }
                _ => {
                    sql.push(c);
                    i += 1;
                }
            }
        }

        let values = order
            .iter()
            .map(|name| {
                self.params
                    .get(name)
                    .cloned()
                    .ok_or_else(|| StatementError::Unbound(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledStatement { sql, values })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_become_positional() {
        let compiled = Statement::new("INSERT INTO t (email, name) VALUES (:email, :name)")
            .bind("name", "A")
            .bind("email", "a@x.com")
            .compile()
            .unwrap();

        assert_eq!(compiled.sql, "INSERT INTO t (email, name) VALUES ($1, $2)");
        assert_eq!(
            compiled.values,
            vec![SqlValue::from("a@x.com"), SqlValue::from("A")]
        );
    }

    #[test]
    fn test_repeated_placeholder_reuses_position() {
        let compiled = Statement::new("SELECT :id AS a, :id + 1 AS b, :other AS c")
            .bind("id", 7_i64)
            .bind("other", true)
            .compile()
            .unwrap();

        assert_eq!(compiled.sql, "SELECT $1 AS a, $1 + 1 AS b, $2 AS c");
        assert_eq!(compiled.values, vec![SqlValue::Int(7), SqlValue::Bool(true)]);
    }

    #[test]
    fn test_casts_and_quoted_text_are_untouched() {
        let compiled = Statement::new(
            r#"SELECT ':skip', 'it''s :also', "odd:col", :v::int FROM public."user""#,
        )
        .bind("v", "3")
        .compile()
        .unwrap();

        assert_eq!(
            compiled.sql,
            r#"SELECT ':skip', 'it''s :also', "odd:col", $1::int FROM public."user""#
        );
        assert_eq!(compiled.values.len(), 1);
    }

    #[test]
    fn test_unbound_placeholder_is_an_error() {
        let err = Statement::new("DELETE FROM t WHERE id = :id")
            .compile()
            .unwrap_err();
        assert_eq!(err, StatementError::Unbound("id".to_string()));
    }

    #[test]
    fn test_unused_params_are_ignored() {
        let compiled = Statement::new("SELECT 1 AS v")
            .bind("unused", 1_i64)
            .compile()
            .unwrap();
        assert_eq!(compiled.sql, "SELECT 1 AS v");
        assert!(compiled.values.is_empty());
    }

    #[test]
    fn test_option_binds_null() {
        let compiled = Statement::new("SELECT :x")
            .bind("x", None::<String>)
            .compile()
            .unwrap();
        assert_eq!(compiled.values, vec![SqlValue::Null]);
    }
}
