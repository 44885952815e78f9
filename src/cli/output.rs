use anyhow::Result;
use clap::ValueEnum;

use marbles::BrowseOutcome;

/// How the final selection is printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Print the selected operator's name, if a selection was committed.
	Plain,
	/// Print the full outcome as a JSON object.
	Json,
}

/// Print the outcome for shell consumption.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	if outcome.accepted {
		println!("{}", outcome.selection);
	}
}

/// Print the outcome as JSON.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", serde_json::to_string(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use marbles::Operator;

	use super::*;

	#[test]
	fn outcome_serializes_with_the_operator_name() {
		let outcome = BrowseOutcome {
			accepted: true,
			selection: Operator::FlatMapLatest,
			query: "map".to_string(),
		};
		let json = serde_json::to_string(&outcome).unwrap();
		assert_eq!(
			json,
			r#"{"accepted":true,"selection":"FlatMapLatest","query":"map"}"#
		);
	}
}
