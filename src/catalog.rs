//! Static catalog of reactive-stream operators grouped by category.
//!
//! The catalog is hand-authored, built once, and never mutated. Category and
//! operator order is significant and drives display order.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// One reactive-stream operator in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
	Delay,
	Map,
	MapWithIndex,
	Scan,
	FlatMap,
	FlatMapFirst,
	FlatMapLatest,
	Buffer,
	CombineLatest,
	Concat,
	Merge,
	StartWith,
	Zip,
	DistinctUntilChanged,
	ElementAt,
	Filter,
	Debounce,
	IgnoreElements,
	Sample,
	Skip,
	Take,
	TakeLast,
	Reduce,
	Amb,
	CatchError,
	Retry,
}

impl Operator {
	/// Human-readable display name. Search matches against this string.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Operator::Delay => "Delay",
			Operator::Map => "Map",
			Operator::MapWithIndex => "MapWithIndex",
			Operator::Scan => "Scan",
			Operator::FlatMap => "FlatMap",
			Operator::FlatMapFirst => "FlatMapFirst",
			Operator::FlatMapLatest => "FlatMapLatest",
			Operator::Buffer => "Buffer",
			Operator::CombineLatest => "CombineLatest",
			Operator::Concat => "Concat",
			Operator::Merge => "Merge",
			Operator::StartWith => "StartWith",
			Operator::Zip => "Zip",
			Operator::DistinctUntilChanged => "DistinctUntilChanged",
			Operator::ElementAt => "ElementAt",
			Operator::Filter => "Filter",
			Operator::Debounce => "Debounce",
			Operator::IgnoreElements => "IgnoreElements",
			Operator::Sample => "Sample",
			Operator::Skip => "Skip",
			Operator::Take => "Take",
			Operator::TakeLast => "TakeLast",
			Operator::Reduce => "Reduce",
			Operator::Amb => "Amb",
			Operator::CatchError => "CatchError",
			Operator::Retry => "Retry",
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A named, ordered grouping of related operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
	/// Section title shown above the group.
	pub name: &'static str,
	/// Operators in display order.
	pub operators: Vec<Operator>,
}

impl Category {
	fn new(name: &'static str, operators: &[Operator]) -> Self {
		Self {
			name,
			operators: operators.to_vec(),
		}
	}
}

static CATALOG: LazyLock<Vec<Category>> = LazyLock::new(|| {
	use Operator::*;
	vec![
		Category::new(
			"Transforming",
			&[
				Delay,
				Map,
				MapWithIndex,
				Scan,
				FlatMap,
				FlatMapFirst,
				FlatMapLatest,
				Buffer,
			],
		),
		Category::new("Combining", &[CombineLatest, Concat, Merge, StartWith, Zip]),
		Category::new(
			"Filtering",
			&[
				DistinctUntilChanged,
				ElementAt,
				Filter,
				Debounce,
				IgnoreElements,
				Sample,
				Skip,
				Take,
				TakeLast,
			],
		),
		Category::new("Mathematical", &[Reduce]),
		Category::new("Conditional", &[Amb]),
		Category::new("Error", &[CatchError, Retry]),
	]
});

/// The full, immutable operator catalog.
#[must_use]
pub fn catalog() -> &'static [Category] {
	&CATALOG
}

/// Name of the category an operator belongs to.
#[must_use]
pub fn category_of(operator: Operator) -> &'static str {
	catalog()
		.iter()
		.find(|category| category.operators.contains(&operator))
		.map(|category| category.name)
		.unwrap_or("")
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn catalog_has_expected_sections_in_order() {
		let names: Vec<&str> = catalog().iter().map(|category| category.name).collect();
		assert_eq!(
			names,
			vec![
				"Transforming",
				"Combining",
				"Filtering",
				"Mathematical",
				"Conditional",
				"Error"
			]
		);
	}

	#[test]
	fn catalog_operators_are_unique() {
		let mut seen = HashSet::new();
		for category in catalog() {
			for op in &category.operators {
				assert!(seen.insert(*op), "{op} appears twice in the catalog");
			}
		}
		assert_eq!(seen.len(), 26);
	}

	#[test]
	fn every_operator_knows_its_category() {
		for category in catalog() {
			for op in &category.operators {
				assert_eq!(category_of(*op), category.name);
			}
		}
	}

	#[test]
	fn display_matches_name() {
		assert_eq!(Operator::FlatMapLatest.to_string(), "FlatMapLatest");
		assert_eq!(Operator::CatchError.name(), "CatchError");
	}
}
