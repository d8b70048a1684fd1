//! Property tests for the list algebra using proptest.
//!
//! These hold for any element sequence, not just hand-picked ones:
//!
//! 1. Native round trip: from_array(to_array(l)) == l
//! 2. push appends and leaves the receiver unchanged
//! 3. unshift prepends in order
//! 4. pop / shift drop exactly one end element of a non-empty list
//! 5. filter keeps exactly the passing elements, in order

use proptest::prelude::*;

use quill_types::list::ImmutableList;
use quill_types::scalar::ImmutableInteger;

quill_types::immutable_integer! {
    pub struct Score;
}

quill_types::immutable_list! {
    pub struct ScoreList(Score);
}

fn arb_scores() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..16)
}

fn list_of(values: &[i64]) -> ScoreList {
    ScoreList::new(values.iter().copied().map(Score::from_int))
}

fn ints(list: &ScoreList) -> Vec<i64> {
    list.iter().map(Score::to_int).collect()
}

proptest! {
    #[test]
    fn native_round_trip(values in arb_scores()) {
        let list = list_of(&values);
        let natives = list.to_array().unwrap();
        let decoded = ScoreList::from_array(&natives).unwrap();
        prop_assert_eq!(decoded, list);
    }

    #[test]
    fn push_appends_without_touching_receiver(values in arb_scores(), extra in -1_000i64..1_000) {
        let list = list_of(&values);
        let pushed = list.push([Score::from_int(extra)]).unwrap();

        let mut expected = values.clone();
        expected.push(extra);
        prop_assert_eq!(ints(&pushed), expected);
        prop_assert_eq!(ints(&list), values);
    }

    #[test]
    fn unshift_prepends_in_order(values in arb_scores(), a in any::<i64>(), b in any::<i64>()) {
        let list = list_of(&values);
        let unshifted = list.unshift([Score::from_int(a), Score::from_int(b)]).unwrap();

        let mut expected = vec![a, b];
        expected.extend(&values);
        prop_assert_eq!(ints(&unshifted), expected);
    }

    #[test]
    fn pop_drops_last(values in arb_scores()) {
        let list = list_of(&values);
        let popped = list.pop();

        if values.is_empty() {
            prop_assert!(popped.same_instance(&list));
        } else {
            prop_assert_eq!(ints(&popped), values[..values.len() - 1].to_vec());
            prop_assert_eq!(list.len(), values.len());
        }
    }

    #[test]
    fn shift_drops_first(values in arb_scores()) {
        let list = list_of(&values);
        let shifted = list.shift();

        if values.is_empty() {
            prop_assert!(shifted.same_instance(&list));
        } else {
            prop_assert_eq!(ints(&shifted), values[1..].to_vec());
            prop_assert_eq!(shifted.first().map(Score::to_int), values.get(1).copied());
        }
    }

    #[test]
    fn filter_keeps_passing_elements(values in arb_scores(), threshold in -1_000i64..1_000) {
        let list = list_of(&values);
        let kept = list.filter(|score| score.to_int() >= threshold);

        let expected: Vec<i64> = values.iter().copied().filter(|v| *v >= threshold).collect();
        prop_assert_eq!(ints(&kept), expected);
        prop_assert!(!kept.same_instance(&list));
    }
}
