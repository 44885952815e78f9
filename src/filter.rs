//! Search filtering over the operator catalog.

use crate::catalog::Category;

/// Keep only operators whose display name contains `query`, case-insensitively.
///
/// Categories with no surviving operators are omitted entirely. The result is
/// always a structural subsequence of the input: surviving categories and
/// operators keep their relative order and are never duplicated.
#[must_use]
pub fn filter_catalog(catalog: &[Category], query: &str) -> Vec<Category> {
	let needle = query.to_ascii_lowercase();
	catalog
		.iter()
		.filter_map(|category| {
			let operators: Vec<_> = category
				.operators
				.iter()
				.copied()
				.filter(|op| op.name().to_ascii_lowercase().contains(&needle))
				.collect();
			if operators.is_empty() {
				None
			} else {
				Some(Category {
					name: category.name,
					operators,
				})
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use crate::catalog::{Operator, catalog};

	use super::*;

	#[test]
	fn matches_are_case_insensitive_substrings() {
		let filtered = filter_catalog(catalog(), "ZIP");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].name, "Combining");
		assert_eq!(filtered[0].operators, vec![Operator::Zip]);
	}

	#[test]
	fn only_matching_operators_survive() {
		let filtered = filter_catalog(catalog(), "take");
		for category in &filtered {
			for op in &category.operators {
				assert!(
					op.name().to_ascii_lowercase().contains("take"),
					"{op} does not match 'take'"
				);
			}
		}
	}

	#[test]
	fn map_query_keeps_exactly_the_transforming_matches() {
		let filtered = filter_catalog(catalog(), "map");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].name, "Transforming");
		assert_eq!(
			filtered[0].operators,
			vec![
				Operator::Map,
				Operator::MapWithIndex,
				Operator::FlatMap,
				Operator::FlatMapFirst,
				Operator::FlatMapLatest,
			]
		);
	}

	#[test]
	fn unmatched_query_yields_no_categories() {
		assert!(filter_catalog(catalog(), "zzz").is_empty());
	}

	#[test]
	fn empty_query_matches_everything() {
		assert_eq!(filter_catalog(catalog(), ""), catalog().to_vec());
	}

	#[test]
	fn filtering_preserves_relative_order() {
		let filtered = filter_catalog(catalog(), "e");
		let full_names: Vec<&str> = catalog().iter().map(|c| c.name).collect();
		let mut last = 0;
		for category in &filtered {
			let position = full_names
				.iter()
				.position(|name| name == &category.name)
				.expect("filtered category must exist in the full catalog");
			assert!(position >= last, "category order changed");
			last = position;

			let source = &catalog()[position].operators;
			let mut cursor = 0;
			for op in &category.operators {
				let at = source[cursor..]
					.iter()
					.position(|candidate| candidate == op)
					.expect("operator order changed");
				cursor += at + 1;
			}
		}
	}

	#[test]
	fn filtering_is_idempotent() {
		let once = filter_catalog(catalog(), "at");
		let twice = filter_catalog(&once, "at");
		assert_eq!(once, twice);
	}
}
