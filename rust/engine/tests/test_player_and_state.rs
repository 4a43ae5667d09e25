use cardwar_engine::cards::{Card, Rank, Suit};
use cardwar_engine::deck::Deck;
use cardwar_engine::player::{create_player, ControlMode};
use cardwar_engine::round::{compare, draw_card, strength, RoundOutcome};

#[test]
fn players_start_with_zero_score_and_no_card() {
    let deck = Deck::new_with_seed(3);
    let p = create_player("Player North", ControlMode::Manual, deck);
    assert_eq!(p.score(), 0);
    assert!(p.current_card().is_none());
    assert_eq!(p.deck().len(), 52);
    assert_eq!(p.control(), ControlMode::Manual);
}

#[test]
fn draw_card_moves_front_card_into_play() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let two = Card::new(Rank::Two, Suit::Hearts);
    let mut p = create_player("You", ControlMode::Manual, Deck::from(vec![ace, two]));

    assert_eq!(draw_card(&mut p), Some(ace));
    assert_eq!(p.current_card(), Some(ace));
    assert_eq!(p.deck().len(), 1);
}

#[test]
fn strength_orders_ace_above_king_down_to_two() {
    let order = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];
    for pair in order.windows(2) {
        let high = Card::new(pair[0], Suit::Clubs);
        let low = Card::new(pair[1], Suit::Clubs);
        assert!(strength(high) > strength(low), "{high} should beat {low}");
    }
}

#[test]
fn comparison_is_a_pure_function_of_the_two_cards() {
    for a in cardwar_engine::cards::full_deck() {
        for b in [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::King, Suit::Spades),
        ] {
            let first = compare(a, b);
            assert_eq!(first, compare(a, b));
            let expected = match strength(a).cmp(&strength(b)) {
                std::cmp::Ordering::Greater => RoundOutcome::Winner(cardwar_engine::player::Slot::First),
                std::cmp::Ordering::Less => RoundOutcome::Winner(cardwar_engine::player::Slot::Second),
                std::cmp::Ordering::Equal => RoundOutcome::Tie,
            };
            assert_eq!(first, expected);
        }
    }
}
