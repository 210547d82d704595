use regex::Regex;

use crate::error::ReconError;
use crate::model::Placement;

/// Parse pre-trimmed, non-blank results lines into placements.
///
/// `"<rank>.<name>[|<name>...]"` carries an explicit rank; a line without the
/// digit-dot prefix is a tie continuation and inherits the rank of the
/// previous line. Order-preserving, one `Placement` per line.
pub fn parse_results(lines: &[String]) -> Result<Vec<Placement>, ReconError> {
    if lines.is_empty() {
        return Err(ReconError::EmptyResults);
    }

    let rank_prefix = Regex::new(r"^(\d+)\.(.*)$").unwrap();
    let mut placements: Vec<Placement> = Vec::with_capacity(lines.len());

    for line in lines {
        let (rank, names) = match rank_prefix.captures(line) {
            Some(caps) => {
                let rank: u32 = caps[1]
                    .parse()
                    .map_err(|_| ReconError::RankOutOfRange { line: line.clone() })?;
                (rank, caps.get(2).map_or("", |m| m.as_str()))
            }
            None => {
                // Tie continuation: the whole line is the player list.
                let rank = placements
                    .last()
                    .map(|p| p.rank)
                    .ok_or_else(|| ReconError::UnanchoredResults { line: line.clone() })?;
                (rank, line.as_str())
            }
        };

        let players: Vec<String> = names
            .split('|')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        placements.push(Placement { rank, players });
    }

    Ok(placements)
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::parse_results;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]"
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        (
            prop::option::of(1u32..200),
            prop::collection::vec(name_strategy(), 1..4),
        )
            .prop_map(|(rank, names)| {
                let list = names.join("|");
                match rank {
                    Some(r) => format!("{r}.{list}"),
                    None => list,
                }
            })
    }

    proptest! {
        #[test]
        fn one_placement_per_line(first_rank in 1u32..200,
                                  first_names in prop::collection::vec(name_strategy(), 1..4),
                                  rest in prop::collection::vec(line_strategy(), 0..12)) {
            let mut lines = vec![format!("{first_rank}.{}", first_names.join("|"))];
            lines.extend(rest);

            let placements = parse_results(&lines).unwrap();
            prop_assert_eq!(placements.len(), lines.len());
        }

        #[test]
        fn ranks_never_invented(first_rank in 1u32..200,
                                rest in prop::collection::vec(line_strategy(), 0..12)) {
            let mut lines = vec![format!("{first_rank}.Anchor")];
            lines.extend(rest);

            let placements = parse_results(&lines).unwrap();
            let explicit: std::collections::HashSet<u32> = lines
                .iter()
                .filter_map(|l| l.split('.').next())
                .filter_map(|prefix| prefix.parse().ok())
                .collect();
            // Every rank in the output was written in some line.
            prop_assert!(placements.iter().all(|p| explicit.contains(&p.rank)));
        }
    }
}
