use holdem_engine::action::Action;
use holdem_engine::agents::{ScriptedAgent, SourceTable};
use holdem_engine::cards::card_list;
use holdem_engine::dealer::Dealer;
use holdem_engine::deck::Deck;
use holdem_engine::hand::{Board, HoleCards};
use holdem_engine::player::PlayerId;
use holdem_engine::runner::{play_hand, HandEnding};
use holdem_engine::showdown::{settle, HandEvaluator, HandScore};
use holdem_engine::table::Table;

/// Ranks a hand by its highest hole card, which is all these scenarios
/// need to pick a winner.
struct HighCard;

impl HandEvaluator for HighCard {
    fn rank(&self, hole: &HoleCards, _board: &Board) -> HandScore {
        HandScore((hole.first().rank() as u64).max(hole.second().rank() as u64))
    }
}

fn rigged(cards: &str) -> Dealer {
    Dealer::new(Deck::from_cards(card_list(cards).expect("valid cards")))
}

fn shove_all(sources: &mut SourceTable, ids: &[PlayerId]) {
    for &id in ids {
        sources.assign(id, Box::new(ScriptedAgent::new([Action::AllIn])));
    }
}

#[test]
fn all_in_levels_carve_into_side_pots() {
    let mut table = Table::new(3, 1, 2);
    let a = table.add_player("A", 100, None).unwrap();
    let b = table.add_player("B", 50, None).unwrap();
    let c = table.add_player("C", 75, None).unwrap();
    let mut sources = SourceTable::new();
    shove_all(&mut sources, &[a, b, c]);
    // B holds the aces, C the kings, A a pair of twos.
    let mut dealer = rigged("2c Ah Kc 2d Ad Kd 3s 4s 5s 6s 7s 8s 9s Ts");

    let outcome = play_hand(&mut table, &mut dealer, &mut sources, &HighCard).unwrap();

    assert_eq!(outcome.ending, HandEnding::Showdown);
    assert_eq!(
        outcome.payouts,
        vec![(b, 150), (c, 50), (a, 25)],
        "each pot goes to the best hand that covered it"
    );
    assert_eq!(table.player(a).unwrap().stack(), 25, "uncalled top slice returns");
    assert_eq!(table.player(b).unwrap().stack(), 150);
    assert_eq!(table.player(c).unwrap().stack(), 50);
    assert_eq!(table.pot().total(), 0);
}

#[test]
fn tied_winners_split_the_slice_they_covered() {
    let mut table = Table::new(3, 1, 2);
    let a = table.add_player("A", 50, None).unwrap();
    let b = table.add_player("B", 50, None).unwrap();
    let c = table.add_player("C", 200, None).unwrap();
    let mut sources = SourceTable::new();
    shove_all(&mut sources, &[a, b, c]);
    // A and B tie on tens; C's nines only win the uncontested overage.
    let mut dealer = rigged("Tc Th 9c 3d 4s 9d 2s 3s 4s 5s 6s 7s 8s Js");

    let outcome = play_hand(&mut table, &mut dealer, &mut sources, &HighCard).unwrap();

    assert_eq!(outcome.ending, HandEnding::Showdown);
    assert_eq!(table.player(a).unwrap().stack(), 75, "shared pot splits evenly");
    assert_eq!(table.player(b).unwrap().stack(), 75, "shared pot splits evenly");
    assert_eq!(table.player(c).unwrap().stack(), 150, "overage returns uncontested");
    assert_eq!(table.pot().total(), 0);
}

#[test]
fn odd_chip_goes_to_the_first_seat_left_of_the_button() {
    let mut table = Table::new(3, 1, 2);
    let a = table.add_player("A", 10, None).unwrap();
    let b = table.add_player("B", 10, None).unwrap();
    let c = table.add_player("C", 10, None).unwrap();
    let mut dealer = rigged("Tc Th 9c 3d 4s 9d");
    dealer.deal_hole_cards(&mut table).unwrap();

    let pot = table.pot_mut();
    pot.add_contribution(a, 1);
    pot.add_contribution(b, 1);
    pot.add_contribution(c, 2);

    let payouts = settle(&mut table, &HighCard).unwrap();

    assert_eq!(payouts, vec![(b, 2), (c, 1), (a, 1)]);
    assert_eq!(table.player(b).unwrap().stack(), 12, "odd chip lands left of the button");
    assert_eq!(table.player(a).unwrap().stack(), 11);
    assert_eq!(table.player(c).unwrap().stack(), 11, "lone over-contribution comes back");
}
