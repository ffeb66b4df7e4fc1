//! Pegging advisor and count tracking tests.

use cribrs::{
    CandidateScore, Card, Deck, PeggingError, PeggingOptions, PeggingRound, PlayError,
    RankDistribution, candidate_scores, count, parse_hand, recommend_card, recommend_card_with,
};

fn hand(notation: &str) -> Vec<Card> {
    parse_hand(notation).unwrap()
}

#[test]
fn hitting_fifteen_beats_a_plain_play() {
    let held = hand("3c5h");
    let played = hand("kd");
    let scores = candidate_scores(&held, &played, &RankDistribution::new(), &PeggingOptions::default());

    assert_eq!(
        scores,
        vec![
            CandidateScore { card: held[0], total: 13, score: 1 },
            CandidateScore { card: held[1], total: 15, score: 3 },
        ]
    );
    assert_eq!(recommend_card(&held, &played, &RankDistribution::new()), Ok(held[1]));
}

#[test]
fn ties_keep_the_first_held_card() {
    let held = hand("2c3d4s");
    let played = hand("kd");
    assert_eq!(recommend_card(&held, &played, &RankDistribution::new()), Ok(held[0]));
}

#[test]
fn leaving_five_is_penalised() {
    let held = hand("5h4c");
    let scores = candidate_scores(&held, &[], &RankDistribution::new(), &PeggingOptions::default());
    assert_eq!(scores[0].score, 0);
    assert_eq!(scores[1].score, 1);
    assert_eq!(recommend_card(&held, &[], &RankDistribution::new()), Ok(held[1]));
}

#[test]
fn totals_over_thirty_one_earn_nothing() {
    let played = hand("kdqhjs");
    let held = hand("5hac");
    let scores = candidate_scores(&held, &played, &RankDistribution::new(), &PeggingOptions::default());

    assert_eq!(scores[0].total, 35);
    assert_eq!(scores[0].score, 0);
    // Exactly 31 only gets the within-limit point.
    assert_eq!(scores[1].total, 31);
    assert_eq!(scores[1].score, 1);
    assert_eq!(recommend_card(&held, &played, &RankDistribution::new()), Ok(held[1]));
}

#[test]
fn empty_hand_is_an_error() {
    assert_eq!(
        recommend_card(&[], &hand("5h"), &RankDistribution::new()),
        Err(PeggingError::EmptyHand)
    );
}

#[test]
fn distribution_does_not_change_the_advice() {
    let deck = Deck::new(3);
    let held = hand("9c6d5h2s");
    let played = hand("4hah");

    let with_deck = recommend_card(&held, &played, &deck.rank_distribution());
    let without = recommend_card(&held, &played, &RankDistribution::new());
    assert_eq!(with_deck, without);
}

#[test]
fn custom_weights_change_the_pick() {
    let held = hand("5h4c");
    let options = PeggingOptions::default().with_five_penalty(0);
    assert_eq!(
        recommend_card_with(&held, &[], &RankDistribution::new(), &options),
        Ok(held[0])
    );

    let held = hand("3c5h");
    let played = hand("kd");
    let options = PeggingOptions::default().with_fifteen_bonus(-5);
    assert_eq!(
        recommend_card_with(&held, &played, &RankDistribution::new(), &options),
        Ok(held[0])
    );
}

#[test]
fn count_sums_card_values() {
    assert_eq!(count(&[]), 0);
    assert_eq!(count(&hand("ah5dkc")), 16);
}

#[test]
fn round_resets_at_thirty_one() {
    let mut round = PeggingRound::new();
    for card in hand("kdqh") {
        let outcome = round.play(card).unwrap();
        assert!(!outcome.reset);
    }
    assert_eq!(round.total(), 20);

    let outcome = round.play("js".parse().unwrap()).unwrap();
    assert_eq!(outcome.total, 30);
    assert!(!outcome.reset);

    let outcome = round.play("ac".parse().unwrap()).unwrap();
    assert_eq!(outcome.total, 31);
    assert!(outcome.reset);
    assert_eq!(round.total(), 0);
    assert!(round.played().is_empty());
    assert_eq!(round.history(), hand("kdqhjsac").as_slice());
}

#[test]
fn round_rejects_plays_over_thirty_one() {
    let mut round = PeggingRound::new();
    for card in hand("kdqhjs") {
        round.play(card).unwrap();
    }

    let before = round.clone();
    assert_eq!(
        round.play("5h".parse().unwrap()),
        Err(PlayError::OverThirtyOne { total: 35 })
    );
    assert_eq!(round, before);
}

#[test]
fn round_go_starts_a_new_count() {
    let mut round = PeggingRound::new();
    round.play("9h".parse().unwrap()).unwrap();
    round.reset();

    assert_eq!(round.total(), 0);
    assert!(round.played().is_empty());
    assert_eq!(round.history().len(), 1);
}

#[test]
fn round_advice_uses_the_current_count() {
    let mut round = PeggingRound::new();
    round.play("tc".parse().unwrap()).unwrap();

    let held = hand("3c5h");
    let card = round
        .recommend(&held, &RankDistribution::new(), &PeggingOptions::default())
        .unwrap();
    assert_eq!(card, held[1]);
}
