//! Ordered filters and assignments
//!
//! A [`Filter`] is an ordered list of (column, operator, value) triples that
//! renders to a conjunctive predicate. The clause order and the bound value
//! order are the insertion order, so the n-th `?` always binds the n-th value.

use crate::table::Column;
use crate::value::Value;

/// Comparison operator of a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Op {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition<C> {
    pub column: C,
    pub op: Op,
    pub value: Value,
}

impl<C: Column> Condition<C> {
    fn to_sql(&self) -> String {
        // `= NULL` never matches
        let op = match (self.op, self.value.is_null()) {
            (Op::Eq, true) => "IS",
            (Op::Ne, true) => "IS NOT",
            (op, _) => op.as_sql(),
        };
        format!("{} {} ?", self.column.name(), op)
    }
}

/// SQL fragment with the values for its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter<C> {
    conditions: Vec<Condition<C>>,
}

impl<C: Column> Default for Filter<C> {
    fn default() -> Self {
        Self { conditions: Vec::new() }
    }
}

impl<C: Column> Filter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality condition
    pub fn eq(self, column: C, value: impl Into<Value>) -> Self {
        self.with(column, Op::Eq, value)
    }

    /// Add a condition with an arbitrary operator
    pub fn with(mut self, column: C, op: Op, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            column,
            op,
            value: value.into(),
        });
        self
    }

    pub fn conditions(&self) -> &[Condition<C>] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the predicate, or `None` for an empty filter
    pub fn to_clause(&self) -> Option<Clause> {
        if self.conditions.is_empty() {
            return None;
        }

        let sql = self
            .conditions
            .iter()
            .map(Condition::to_sql)
            .collect::<Vec<_>>()
            .join(" AND ");
        let params = self.conditions.iter().map(|c| c.value.clone()).collect();

        Some(Clause { sql, params })
    }
}

/// Ordered `SET` assignments for an update
#[derive(Debug, Clone, PartialEq)]
pub struct Assignments<C> {
    fields: Vec<(C, Value)>,
}

impl<C: Column> Default for Assignments<C> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<C: Column> Assignments<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: C, value: impl Into<Value>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render `c1 = ?, c2 = ?`, or `None` when nothing is assigned
    pub fn to_clause(&self) -> Option<Clause> {
        if self.fields.is_empty() {
            return None;
        }

        let sql = self
            .fields
            .iter()
            .map(|(column, _)| format!("{} = ?", column.name()))
            .collect::<Vec<_>>()
            .join(", ");
        let params = self.fields.iter().map(|(_, v)| v.clone()).collect();

        Some(Clause { sql, params })
    }
}
