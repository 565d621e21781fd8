use sortseq::core::{Comparator, Identity};
use sortseq::prelude::*;
use std::cmp::Ordering;

// Simulate an external record type with its own notion of identity
// (e.g. a row carrying a database id).
#[derive(Debug, Clone)]
struct Row {
    id: u64,
    score: f64,
}

impl Identity for Row {
    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// Comparator on a field with no `Ord` implementation.
struct ByScore;

impl Comparator<Row> for ByScore {
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        a.score.total_cmp(&b.score)
    }
}

#[test]
fn test_external_types_compatibility() {
    let mut seq = SortedSeq::new(ByScore);
    seq.add(Row { id: 1, score: 0.5 });
    seq.add(Row { id: 2, score: -1.0 });
    seq.add(Row { id: 3, score: 0.5 });
    seq.add(Row { id: 4, score: 2.25 });

    let ids: Vec<u64> = seq.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1, 3, 4]);

    let probe = Row { id: 3, score: 0.5 };
    assert_eq!(seq.find(&probe), Some(2));

    assert_eq!(seq.remove(&Row { id: 1, score: 0.5 }), 1);
    let ids: Vec<u64> = seq.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_boxed_comparator() {
    let cmp: Box<dyn Fn(&i32, &i32) -> Ordering> =
        Box::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    let seq = SortedSeq::from_iter_with(cmp, [-3, 1, 2, -1]);

    assert_eq!(seq.as_slice(), &[-1, 1, 2, -3]);
}
