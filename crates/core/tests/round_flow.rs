use minilatro_core::{
    Card, Event, FixedSeed, HandCategory, PlayError, Rank, RoundConfig, RoundState, Suit,
};

fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn seeded(seed: u64) -> RoundState {
    RoundState::new(RoundConfig::default(), Some(seed))
}

#[test]
fn seed_1234_deals_the_reference_hand() {
    let round = seeded(1234);
    assert_eq!(
        round.hand(),
        &[
            c(Suit::Clubs, Rank::Jack),
            c(Suit::Diamonds, Rank::Three),
            c(Suit::Spades, Rank::Eight),
            c(Suit::Spades, Rank::Ace),
            c(Suit::Spades, Rank::Six),
            c(Suit::Diamonds, Rank::Queen),
            c(Suit::Spades, Rank::Three),
            c(Suit::Clubs, Rank::Four),
        ]
    );
    assert_eq!(round.draw_pile().len(), 44);
    assert_eq!(round.hands_left(), 4);
    assert_eq!(round.discards_left(), 4);
}

#[test]
fn seed_1234_end_to_end() {
    let mut round = seeded(1234);

    assert_eq!(round.play(&[0, 2, 4, 5, 7], true), Ok(None));
    assert_eq!(round.discards_left(), 3);
    assert_eq!(round.hands_left(), 4);
    assert_eq!(
        round.hand(),
        &[
            c(Suit::Diamonds, Rank::Three),
            c(Suit::Spades, Rank::Ace),
            c(Suit::Spades, Rank::Three),
            c(Suit::Clubs, Rank::Nine),
            c(Suit::Spades, Rank::Seven),
            c(Suit::Hearts, Rank::Ten),
            c(Suit::Hearts, Rank::Three),
            c(Suit::Spades, Rank::Two),
        ]
    );

    assert_eq!(round.play(&[3, 4, 5, 7], false), Ok(Some(15)));
    assert_eq!(round.hands_left(), 3);

    let breakdown = round
        .play_detailed(&[0, 1, 2, 3, 4], false)
        .expect("valid play")
        .expect("scored");
    assert_eq!(breakdown.category, HandCategory::FullHouse);
    assert_eq!(breakdown.value(), 284);
    assert_eq!(round.hands_left(), 2);
    assert_eq!(round.discards_left(), 3);
    assert_eq!(round.total_score(), 299);
    assert_eq!(
        round.hand(),
        &[
            c(Suit::Diamonds, Rank::King),
            c(Suit::Clubs, Rank::Three),
            c(Suit::Diamonds, Rank::Five),
            c(Suit::Diamonds, Rank::Four),
            c(Suit::Spades, Rank::Ten),
            c(Suit::Clubs, Rank::Five),
            c(Suit::Spades, Rank::Queen),
            c(Suit::Diamonds, Rank::Jack),
        ]
    );
}

#[test]
fn repeated_first_five_plays_match_reference_scores() {
    let mut round = seeded(1234);
    let scores: Vec<Option<i64>> = (0..4)
        .map(|_| round.play(&[0, 1, 2, 3, 4], false).expect("valid play"))
        .collect();
    assert_eq!(scores, vec![Some(16), Some(15), Some(16), Some(40)]);
    assert!(round.is_ended());
    assert_eq!(round.draw_pile().len(), 24);
}

#[test]
fn same_seed_same_round() {
    let actions: [(&[usize], bool); 5] = [
        (&[1, 2], true),
        (&[0, 1, 2, 3, 4], false),
        (&[7, 6, 5, 4], true),
        (&[2], false),
        (&[0, 3, 5], false),
    ];
    let mut a = seeded(77);
    let mut b = seeded(77);
    assert_eq!(a.hand(), b.hand());
    assert_eq!(a.draw_pile().cards(), b.draw_pile().cards());
    for (indices, discard) in actions {
        assert_eq!(a.play(indices, discard), b.play(indices, discard));
        assert_eq!(a.hand(), b.hand());
    }
}

#[test]
fn reset_restores_allowances_and_reshuffles() {
    let mut round = seeded(1234);
    round.play(&[0], true).expect("discard");
    round.play(&[0], false).expect("play");
    round.reset(Some(42));
    assert_eq!(round.hands_left(), 4);
    assert_eq!(round.discards_left(), 4);
    assert_eq!(round.total_score(), 0);
    assert!(round.removed().is_empty());
    assert_eq!(round.seed(), 42);
    assert_eq!(round.hand()[0], c(Suit::Clubs, Rank::Two));
    assert_eq!(round.hand()[7], c(Suit::Spades, Rank::Nine));
}

#[test]
fn validation_rejects_in_priority_order() {
    let mut round = seeded(3);
    assert_eq!(
        round.play(&[0, 1, 2, 3, 4, 5], false),
        Err(PlayError::TooManyCards)
    );
    assert_eq!(round.play(&[0, 8], false), Err(PlayError::InvalidIndices));
    assert_eq!(round.play(&[2, 2], false), Err(PlayError::DuplicateCards));
    assert_eq!(
        round.play(&[0, 1, 2, 3, 4, 5, 99], true),
        Err(PlayError::TooManyCards)
    );
    assert_eq!(round.hands_left(), 4);
    assert_eq!(round.discards_left(), 4);
    assert_eq!(round.hand().len(), 8);

    for _ in 0..4 {
        round.play(&[0], true).expect("discard");
    }
    assert_eq!(round.play(&[0], true), Err(PlayError::NotEnoughDiscards));
    assert_eq!(
        round.play(&[0, 1, 2, 3, 4, 5], true),
        Err(PlayError::NotEnoughDiscards)
    );

    for _ in 0..4 {
        round.play(&[0], false).expect("play");
    }
    assert!(round.is_ended());
    assert_eq!(round.play(&[0], false), Err(PlayError::NotEnoughHands));
    assert_eq!(
        round.play(&[0, 1, 2, 3, 4, 5], false),
        Err(PlayError::NotEnoughHands)
    );
    assert_eq!(round.play(&[0], true), Err(PlayError::NotEnoughDiscards));
}

#[test]
fn discard_is_blocked_once_hands_are_gone() {
    let mut round = seeded(8);
    for _ in 0..4 {
        round.play(&[0, 1], false).expect("play");
    }
    assert_eq!(round.discards_left(), 4);
    assert_eq!(round.play(&[0], true), Err(PlayError::NotEnoughHands));
}

#[test]
fn six_cards_always_too_many() {
    for seed in 0..20 {
        let mut round = seeded(seed);
        assert_eq!(
            round.play(&[0, 1, 2, 3, 4, 5], seed % 2 == 0),
            Err(PlayError::TooManyCards)
        );
    }
}

#[test]
fn hand_shrinks_once_the_pile_runs_out() {
    let config = RoundConfig {
        hands: 20,
        discards: 20,
        ..RoundConfig::default()
    };
    let mut round = RoundState::new(config, Some(5));
    for _ in 0..8 {
        round.play(&[0, 1, 2, 3, 4], true).expect("discard");
    }
    assert_eq!(round.draw_pile().len(), 4);
    assert_eq!(round.hand().len(), 8);

    round.play(&[0, 1, 2, 3, 4], true).expect("discard");
    assert!(round.draw_pile().is_empty());
    assert_eq!(round.hand().len(), 7);

    round.play(&[0, 1], false).expect("play");
    assert_eq!(round.hand().len(), 5);
    assert_eq!(round.draw().len(), 5);
    assert_eq!(round.hand().len() + round.removed().len(), 52);
}

#[test]
fn seed_source_used_when_no_seed_given() {
    let from_source =
        RoundState::with_seed_source(RoundConfig::default(), Box::new(FixedSeed(1234)), None);
    let explicit = seeded(1234);
    assert_eq!(from_source.seed(), 1234);
    assert_eq!(from_source.hand(), explicit.hand());
}

#[test]
fn events_track_the_round() {
    let mut round = seeded(1234);
    round.play(&[0, 2, 4, 5, 7], true).expect("discard");
    round.play(&[3, 4, 5, 7], false).expect("play");
    let events: Vec<Event> = round.events().drain().collect();
    assert_eq!(
        events,
        vec![
            Event::RoundStarted {
                seed: 1234,
                hands: 4,
                discards: 4
            },
            Event::Dealt { count: 8 },
            Event::Dealt { count: 5 },
            Event::Discarded { count: 5 },
            Event::Dealt { count: 4 },
            Event::HandScored {
                category: HandCategory::HighCard,
                chips: 15,
                mult: 1,
                total: 15
            },
        ]
    );
    assert!(round.events().is_empty());
}

#[test]
fn reset_drops_undrained_events() {
    let mut round = seeded(1);
    for seed in 0..1000 {
        round.reset(Some(seed));
        for _ in 0..4 {
            round.play(&[0, 1, 2, 3, 4], false).expect("play");
        }
        assert!(round.is_ended());
    }
    // RoundStarted, the deal, then Dealt + HandScored per play and RoundEnded.
    assert_eq!(round.events().len(), 11);
    round.reset(Some(3));
    assert_eq!(
        round.events().drain().collect::<Vec<_>>(),
        vec![
            Event::RoundStarted {
                seed: 3,
                hands: 4,
                discards: 4
            },
            Event::Dealt { count: 8 },
        ]
    );
}
