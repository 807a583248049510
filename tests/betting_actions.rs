use holdem_engine::action::{Action, ActionKind};
use holdem_engine::dealer::Dealer;
use holdem_engine::deck::Deck;
use holdem_engine::player::PlayerId;
use holdem_engine::state::{ActionError, HandState};
use holdem_engine::table::Table;

fn seated(stacks: &[u64]) -> (Table, Vec<PlayerId>) {
    let mut table = Table::default();
    let ids = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| table.add_player(&format!("p{i}"), s, None).unwrap())
        .collect();
    (table, ids)
}

fn after_blinds(stacks: &[u64]) -> (Table, Vec<PlayerId>, HandState) {
    let (mut table, ids) = seated(stacks);
    Dealer::new(Deck::from_cards(Vec::new())).collect_blinds(&mut table);
    let state = HandState::new(&table);
    (table, ids, state)
}

#[test]
fn a_raise_war_ends_when_the_table_matches() {
    let (mut table, ids, mut state) = after_blinds(&[100, 100, 100, 100]);

    state.execute_action(&mut table, ids[3], Action::Raise(6)).unwrap();
    state.execute_action(&mut table, ids[0], Action::Raise(8)).unwrap();
    assert_eq!(state.current_bet(), 8);
    assert!(!state.round_complete(&table));

    state.execute_action(&mut table, ids[1], Action::Call).unwrap();
    state.execute_action(&mut table, ids[2], Action::Call).unwrap();
    let paid = state.execute_action(&mut table, ids[3], Action::Call).unwrap();

    assert_eq!(paid, 2, "the first raiser only owes the difference");
    assert_eq!(table.pot().total(), 32);
    assert!(state.round_complete(&table));
    assert_eq!(state.next_to_act(&table), None);
}

#[test]
fn calling_short_puts_the_whole_stack_in() {
    let (mut table, ids, mut state) = after_blinds(&[100, 100, 100, 30]);
    state.execute_action(&mut table, ids[0], Action::Raise(50)).unwrap();

    let short = table.player(ids[3]).unwrap();
    let valid = state.valid_actions(short);
    assert!(valid.contains(&ActionKind::Call), "a short stack may always call");
    assert!(!valid.contains(&ActionKind::Raise));

    let paid = state.execute_action(&mut table, ids[3], Action::Call).unwrap();
    assert_eq!(paid, 30);
    let short = table.player(ids[3]).unwrap();
    assert!(short.is_all_in());
    assert_eq!(short.stack(), 0);
    assert_eq!(state.current_bet(), 50, "a short call never lowers the bet");
}

#[test]
fn bets_are_checked_before_any_chip_moves() {
    let (mut table, ids) = seated(&[100, 100, 100]);
    let mut state = HandState::new(&table);
    assert_eq!(state.current_bet(), 0);

    assert_eq!(
        state.execute_action(&mut table, ids[0], Action::Bet(1)),
        Err(ActionError::BetTooSmall { amount: 1, min: 2 })
    );
    assert_eq!(
        state.execute_action(&mut table, ids[0], Action::Bet(200)),
        Err(ActionError::BetOverStack { amount: 200, stack: 100 })
    );
    assert_eq!(table.pot().total(), 0);
    assert!(state.history().is_empty());

    state.execute_action(&mut table, ids[0], Action::Bet(2)).unwrap();
    assert_eq!(table.pot().total(), 2);
    assert_eq!(state.current_bet(), 2);
    assert_eq!(state.last_raiser(), Some(0));
}

#[test]
fn actions_the_street_does_not_offer_are_refused() {
    let (mut table, ids, mut state) = after_blinds(&[100, 100, 100, 100]);

    assert_eq!(
        state.execute_action(&mut table, ids[3], Action::Check),
        Err(ActionError::Unavailable {
            player: "p3".into(),
            action: ActionKind::Check,
        }),
        "checking is not an option while a bet is owed"
    );
    assert_eq!(
        state.execute_action(&mut table, ids[3], Action::Bet(4)),
        Err(ActionError::Unavailable {
            player: "p3".into(),
            action: ActionKind::Bet,
        }),
        "an opened street takes raises, not bets"
    );
    assert_eq!(table.pot().total(), 3, "refused actions move nothing");
}

#[test]
fn a_folded_seat_is_out_of_the_hand() {
    let (mut table, ids, mut state) = after_blinds(&[100, 100, 100, 100]);
    state.execute_action(&mut table, ids[3], Action::Fold).unwrap();
    assert_eq!(
        state.execute_action(&mut table, ids[3], Action::Call),
        Err(ActionError::CannotAct("p3".into()))
    );
}

#[test]
fn the_big_blind_gets_no_option_when_everyone_just_calls() {
    let (mut table, ids, mut state) = after_blinds(&[100, 100, 100]);
    let mut acted = Vec::new();
    while let Some((_, id)) = state.next_to_act(&table) {
        acted.push(id);
        state.execute_action(&mut table, id, Action::Call).unwrap();
    }
    assert_eq!(acted, vec![ids[0], ids[1]]);
    assert!(state.round_complete(&table), "matched bets with no raiser settle the round");
    assert_eq!(table.pot().total(), 6);
}
