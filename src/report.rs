//! Most common cravings
use farm::new_farm;
use aggregate::Record;

/// How many cravings to report unless asked otherwise
pub const DEFAULT_TOP: usize = 25;

/// The `n` most common labels with their counts, most common first.
///
/// Ties go to whichever label showed up first, so the same records always give the same list.
pub fn most_common(records: &[Record], n: usize) -> Vec<(String, usize)> {
    // label -> (count, first index)
    let mut counts = new_farm::<&str, (usize, usize)>();
    for (rec_i, rec) in records.iter().enumerate() {
        counts.entry(rec.label.as_str()).or_insert((0, rec_i)).0 += 1;
    }
    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|&(_, (a_count, a_first)), &(_, (b_count, b_first))|
        b_count.cmp(&a_count).then(a_first.cmp(&b_first)));
    ranked.into_iter()
        .take(n)
        .map(|(label, (count, _))| (label.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweet::Coordinates;

    fn records(labels: &[&str]) -> Vec<Record> {
        labels.iter().enumerate().map(|(i, label)| Record {
            label: label.to_string(),
            date: "Mon Jan 01 12:00:00 +0000 2024".to_string(),
            coords: if i % 2 == 0 { None } else { Some(Coordinates { longitude: 1.0, latitude: 2.0 }) },
        }).collect()
    }

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|&(l, c)| (l.to_string(), c)).collect()
    }

    #[test]
    fn counts_descending() {
        let recs = records(&["pizza", "tacos", "pizza", "sushi", "tacos", "pizza"]);
        assert_eq!(most_common(&recs, 25), pairs(&[("pizza", 3), ("tacos", 2), ("sushi", 1)]));
    }

    #[test]
    fn ties_keep_first_appearance() {
        let recs = records(&["sushi", "tacos", "pizza", "tacos", "sushi", "pizza"]);
        assert_eq!(most_common(&recs, 2), pairs(&[("sushi", 2), ("tacos", 2)]));
    }

    #[test]
    fn reporting_twice_is_the_same() {
        let recs = records(&["b", "a", "c", "a", "b", "d"]);
        assert_eq!(most_common(&recs, 3), most_common(&recs, 3));
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(most_common(&[], DEFAULT_TOP).is_empty());
        assert!(most_common(&records(&["pizza"]), 0).is_empty());
    }
}
