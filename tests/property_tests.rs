//! Property tests for deck and board invariants.
//!
//! Random operation sequences, including stale ids and out-of-order
//! events, must never break:
//! - order permutation under drags
//! - selection subset of cards
//! - idle decks carrying no drag data
//! - conservation of cards across a board

use proptest::prelude::*;

use card_deck::board::{Board, HostEvent};
use card_deck::core::{CardId, DeckConfig, DeckId, HoverPoint, Modifiers};
use card_deck::deck::{Deck, DeckState};
use card_deck::presets::KanbanBuilder;

#[derive(Clone, Debug)]
enum Op {
    PointerDown { card: u32, additive: bool, range: bool },
    BeginDrag(u32),
    Hover { card: u32, upper: bool },
    EndDrag(bool),
    ClearSelection,
}

fn point(upper: bool) -> HoverPoint {
    if upper {
        HoverPoint::UPPER
    } else {
        HoverPoint::LOWER
    }
}

// Ids 0..12 over decks of up to 8 cards, so some ids are always stale.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..12, any::<bool>(), any::<bool>())
            .prop_map(|(card, additive, range)| Op::PointerDown { card, additive, range }),
        (0u32..12).prop_map(Op::BeginDrag),
        (0u32..12, any::<bool>()).prop_map(|(card, upper)| Op::Hover { card, upper }),
        any::<bool>().prop_map(Op::EndDrag),
        Just(Op::ClearSelection),
    ]
}

fn apply(deck: &mut Deck<CardId>, op: &Op) {
    // Ignored operations are allowed; only the invariants matter.
    let _ = match *op {
        Op::PointerDown { card, additive, range } => deck
            .on_pointer_down(CardId(card), Modifiers { additive, range })
            .map(|_| ()),
        Op::BeginDrag(card) => deck.begin_drag(CardId(card)),
        Op::Hover { card, upper } => deck.notify_drag_position(CardId(card), point(upper)).map(|_| ()),
        Op::EndDrag(committed) => deck.end_drag(committed).map(|_| ()),
        Op::ClearSelection => {
            deck.clear_selection();
            Ok(())
        }
    };
}

fn check_invariants(deck: &Deck<CardId>) {
    let view = deck.view();

    for id in &view.selected {
        assert!(view.order.contains(id), "selected {id} not in deck");
    }

    if view.state == DeckState::Idle {
        assert_eq!(view.dragged, None);
        assert!(view.payload.is_empty());
        if !view.receiving {
            assert_eq!(view.hover, None);
            assert_eq!(view.insertion_index, None);
        }
    } else {
        let dragged = view.dragged.expect("dragging deck has a dragged card");
        assert!(view.payload.contains(&dragged));
        for id in &view.payload {
            assert!(view.order.contains(id));
        }
    }
}

fn sorted(mut ids: Vec<CardId>) -> Vec<CardId> {
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn prop_drags_permute_and_keep_invariants(
        len in 1u32..8,
        multi in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut config = DeckConfig::new(DeckId::new(0), "Prop");
        config.multi_select = multi;
        let initial: Vec<CardId> = (0..len).map(CardId).collect();
        let mut deck = Deck::new(config, initial.clone()).unwrap();

        for op in &ops {
            apply(&mut deck, op);
            check_invariants(&deck);

            let current: Vec<CardId> = deck.ids().collect();
            prop_assert_eq!(sorted(current), initial.clone());
        }
    }

    #[test]
    fn prop_abort_changes_nothing(
        len in 1u32..8,
        setup in prop::collection::vec(op_strategy(), 0..20),
        grab in 0u32..8,
        hovers in prop::collection::vec((0u32..8, any::<bool>()), 0..10),
    ) {
        let mut deck = Deck::new(
            DeckConfig::new(DeckId::new(0), "Prop").multi_select(),
            (0..len).map(CardId).collect(),
        )
        .unwrap();
        for op in &setup {
            apply(&mut deck, op);
        }
        // Start from idle
        let _ = deck.end_drag(false);

        let grab = CardId(grab % len);
        if !deck.is_selected(grab) {
            // begin_drag would select it; record the state it starts from
            deck.on_pointer_down(grab, Modifiers::NONE).unwrap();
        }
        let cards_before: Vec<CardId> = deck.ids().collect();
        let selection_before = deck.selected_in_order();

        deck.begin_drag(grab).unwrap();
        for (card, upper) in hovers {
            let _ = deck.notify_drag_position(CardId(card), point(upper));
        }
        deck.end_drag(false).unwrap();

        prop_assert_eq!(deck.ids().collect::<Vec<_>>(), cards_before);
        prop_assert_eq!(deck.selected_in_order(), selection_before);
        prop_assert_eq!(deck.state(), DeckState::Idle);
    }

    #[test]
    fn prop_committed_single_drag_lands_at_index(
        len in 2u32..8,
        grab in 0u32..8,
        hover in 0u32..8,
        upper in any::<bool>(),
    ) {
        let grab = CardId(grab % len);
        let hover = CardId(hover % len);
        prop_assume!(grab != hover);

        let cards: Vec<CardId> = (0..len).map(CardId).collect();
        let mut deck = Deck::new(DeckConfig::default(), cards.clone()).unwrap();

        deck.begin_drag(grab).unwrap();
        let index = deck.notify_drag_position(hover, point(upper)).unwrap().unwrap();
        let landed = deck.end_drag(true).unwrap().unwrap();

        // Reference: remove, then insert at the index shifted past the gap
        let mut expected = cards.clone();
        let from = expected.iter().position(|&c| c == grab).unwrap();
        expected.remove(from);
        let at = if from < index { index - 1 } else { index };
        expected.insert(at, grab);

        prop_assert_eq!(landed, at);
        prop_assert_eq!(deck.ids().collect::<Vec<_>>(), expected);
    }
}

#[derive(Clone, Debug)]
enum BoardOp {
    PointerDown { deck: u16, card: u32, additive: bool },
    DragStart { deck: u16, card: u32 },
    DragEnter(u16),
    DragLeave(u16),
    DragOver { deck: u16, card: u32, upper: bool },
    Drop,
    Cancel,
}

fn board_op_strategy() -> impl Strategy<Value = BoardOp> {
    prop_oneof![
        (0u16..4, 0u32..10, any::<bool>())
            .prop_map(|(deck, card, additive)| BoardOp::PointerDown { deck, card, additive }),
        (0u16..4, 0u32..10).prop_map(|(deck, card)| BoardOp::DragStart { deck, card }),
        (0u16..4).prop_map(BoardOp::DragEnter),
        (0u16..4).prop_map(BoardOp::DragLeave),
        (0u16..4, 0u32..10, any::<bool>())
            .prop_map(|(deck, card, upper)| BoardOp::DragOver { deck, card, upper }),
        Just(BoardOp::Drop),
        Just(BoardOp::Cancel),
    ]
}

fn to_event(op: &BoardOp) -> HostEvent {
    match *op {
        BoardOp::PointerDown { deck, card, additive } => HostEvent::PointerDown {
            deck: DeckId(deck),
            card: CardId(card),
            modifiers: Modifiers { additive, range: false },
        },
        BoardOp::DragStart { deck, card } => HostEvent::DragStart { deck: DeckId(deck), card: CardId(card) },
        BoardOp::DragEnter(deck) => HostEvent::DragEnter { deck: DeckId(deck) },
        BoardOp::DragLeave(deck) => HostEvent::DragLeave { deck: DeckId(deck) },
        BoardOp::DragOver { deck, card, upper } => HostEvent::DragOver {
            deck: DeckId(deck),
            card: CardId(card),
            point: point(upper),
        },
        BoardOp::Drop => HostEvent::Drop,
        BoardOp::Cancel => HostEvent::DragCancel,
    }
}

fn all_cards(board: &Board<CardId>) -> Vec<CardId> {
    sorted(board.decks().iter().flat_map(|d| d.ids().collect::<Vec<_>>()).collect())
}

proptest! {
    #[test]
    fn prop_board_conserves_cards(ops in prop::collection::vec(board_op_strategy(), 0..80)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let mut board = KanbanBuilder::new()
                .lane("Todo", (0..4).map(CardId).collect())
                .lane("Doing", (4..7).map(CardId).collect())
                .lane("Done", (7..9).map(CardId).collect())
                .wip_limit(3)
                .build()
                .unwrap();
            let initial = all_cards(&board);

            for op in &ops {
                board.dispatch(to_event(op)).await;

                assert_eq!(all_cards(&board), initial);
                for deck in board.decks() {
                    check_invariants(deck);
                }

                // Exactly the entered sibling is receiving
                let group = board.group();
                for deck in board.decks() {
                    let expected = group.is_dragging()
                        && group.entered() == Some(deck.id())
                        && group.origin() != Some(deck.id());
                    assert_eq!(deck.is_receiving(), expected, "receiving mismatch on {}", deck.id());
                }
                assert!(board.decks().iter().filter(|d| d.is_dragging()).count() <= 1);
                assert!(board.deck(DeckId(2)).unwrap().len() <= 3);
            }
        });
    }
}
