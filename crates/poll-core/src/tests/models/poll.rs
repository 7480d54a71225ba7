use crate::{CoreError, Poll};

use googletest::prelude::*;
use proptest::prelude::*;

fn options(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn given_valid_input_when_built_then_every_counter_starts_at_zero() {
    let poll = Poll::try_new("Favorite color?", &options(&["Red", "Blue", "Green"])).unwrap();

    assert_that!(poll.title, eq("Favorite color?"));
    assert_that!(poll.options.len(), eq(3));
    for option in &poll.options {
        assert_that!(option.votes, eq(0));
    }
    assert_that!(poll.created_at, eq(poll.updated_at));
}

#[test]
fn given_valid_input_when_built_then_option_order_is_preserved() {
    let poll = Poll::try_new("Favorite color?", &options(&["Red", "Blue", "Green"])).unwrap();

    let texts: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
    assert_that!(texts, eq(&vec!["Red", "Blue", "Green"]));
}

#[test]
fn given_padded_input_when_built_then_fields_are_trimmed() {
    let poll = Poll::try_new("  Favorite color?  ", &options(&["  Red ", "Blue"])).unwrap();

    assert_that!(poll.title, eq("Favorite color?"));
    assert_that!(poll.options[0].text, eq("Red"));
}

#[test]
fn given_markup_in_input_when_built_then_fields_are_escaped() {
    let poll = Poll::try_new(
        "<script>alert(1)</script>",
        &options(&["a & b", "\"quoted\""]),
    )
    .unwrap();

    assert_that!(poll.title, eq("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
    assert_that!(poll.options[0].text, eq("a &amp; b"));
    assert_that!(poll.options[1].text, eq("&quot;quoted&quot;"));
}

#[test]
fn given_invalid_input_when_built_then_every_violated_field_is_reported() {
    let result = Poll::try_new("hi", &options(&["ok"]));

    let CoreError::Validation { violations, .. } = result.unwrap_err();
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_that!(fields, eq(&vec!["title", "options"]));
}

#[test]
fn given_two_options_with_votes_when_totalled_then_counts_are_summed() {
    let mut poll = Poll::try_new("Favorite color?", &options(&["Red", "Blue"])).unwrap();
    poll.options[0].votes = 3;
    poll.options[1].votes = 2;

    assert_that!(poll.total_votes(), eq(5));
}

proptest! {
    #[test]
    fn any_valid_input_builds_a_poll_with_zeroed_ordered_options(
        title in "[a-zA-Z0-9 ]{5,200}",
        texts in prop::collection::vec("[a-zA-Z0-9]{1,100}", 2..=10),
    ) {
        // Generated titles may trim below the minimum when they are mostly
        // spaces; skip those inputs rather than encode trim rules twice.
        prop_assume!(title.trim().chars().count() >= 5);

        let poll = Poll::try_new(&title, &texts).unwrap();

        prop_assert_eq!(poll.options.len(), texts.len());
        for (option, text) in poll.options.iter().zip(&texts) {
            prop_assert_eq!(option.votes, 0);
            prop_assert_eq!(&option.text, text.trim());
        }
    }

    #[test]
    fn any_out_of_range_option_count_is_rejected(
        texts in prop::collection::vec("[a-zA-Z0-9]{1,100}", 11..=16),
    ) {
        let result = Poll::try_new("Favorite color?", &texts);
        prop_assert!(result.is_err());
    }
}
