//! Core data structures for registry records
//!
//! Defines the column [`Header`], individual [`Record`] rows, the ordered
//! [`Sequence`] container with its array/linked-list storage strategy, and the
//! [`Group`] of records sharing one NAICS code.

use crate::error::AnalyzerError;
use std::collections::LinkedList;
use std::collections::linked_list;
use std::fmt;
use std::slice;
use std::str::FromStr;
use std::sync::Arc;

/// Column names of a registry source, shared by everything loaded from it
///
/// Cloning a header only bumps a reference count; the names themselves are
/// never copied or modified after the source has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Arc<[String]>,
}

impl Header {
    /// Create a header from column names in file order
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names: names.into(),
        }
    }

    /// Number of columns every record must have
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column name at a position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of a column by exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// One data row of a registry source
///
/// Fields are addressed positionally. The loader only admits records whose
/// field count matches the header, so every configured column is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field value at a column position (empty when out of range)
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Storage strategy for ordered collections, chosen once at start-up
///
/// Both strategies produce identical query results; the choice only affects
/// how records and groups are held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CollectionStrategy {
    /// Contiguous growable array
    #[default]
    #[value(name = "AL")]
    Array,
    /// Doubly linked list
    #[value(name = "LL")]
    Linked,
}

impl FromStr for CollectionStrategy {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AL") {
            Ok(Self::Array)
        } else if s.eq_ignore_ascii_case("LL") {
            Ok(Self::Linked)
        } else {
            Err(AnalyzerError::configuration(format!(
                "Unknown data structure '{}'. Expected AL or LL",
                s
            )))
        }
    }
}

impl fmt::Display for CollectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => write!(f, "AL"),
            Self::Linked => write!(f, "LL"),
        }
    }
}

/// Ordered, append-only collection backed by the selected [`CollectionStrategy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence<T> {
    Array(Vec<T>),
    Linked(LinkedList<T>),
}

impl<T> Sequence<T> {
    /// Create an empty sequence with the given storage strategy
    pub fn new(strategy: CollectionStrategy) -> Self {
        match strategy {
            CollectionStrategy::Array => Self::Array(Vec::new()),
            CollectionStrategy::Linked => Self::Linked(LinkedList::new()),
        }
    }

    pub fn strategy(&self) -> CollectionStrategy {
        match self {
            Self::Array(_) => CollectionStrategy::Array,
            Self::Linked(_) => CollectionStrategy::Linked,
        }
    }

    /// Append an item at the end
    pub fn push(&mut self, item: T) {
        match self {
            Self::Array(items) => items.push(item),
            Self::Linked(items) => items.push_back(item),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Array(items) => items.len(),
            Self::Linked(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Array(items) => items.first(),
            Self::Linked(items) => items.front(),
        }
    }

    /// Mutable access by position (linear for the linked strategy)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self {
            Self::Array(items) => items.get_mut(index),
            Self::Linked(items) => items.iter_mut().nth(index),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Array(items) => Iter::Array(items.iter()),
            Self::Linked(items) => Iter::Linked(items.iter()),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Sequence`]
pub enum Iter<'a, T> {
    Array(slice::Iter<'a, T>),
    Linked(linked_list::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(iter) => iter.next(),
            Self::Linked(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::Linked(iter) => iter.size_hint(),
        }
    }
}

/// Records sharing one NAICS code, in load order
///
/// A group always holds at least one record; its first record is the
/// representative used for code matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    records: Sequence<Record>,
}

impl Group {
    /// Start a group with its representative record
    pub fn new(first: Record, strategy: CollectionStrategy) -> Self {
        let mut records = Sequence::new(strategy);
        records.push(first);
        Self { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// The first record added to the group
    pub fn representative(&self) -> &Record {
        self.records
            .first()
            .unwrap_or_else(|| unreachable!("groups are created with a record"))
    }

    pub fn records(&self) -> &Sequence<Record> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
