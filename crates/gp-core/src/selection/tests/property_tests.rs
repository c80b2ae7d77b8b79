//! Property tests: the ledger invariant holds for any operation sequence.

use proptest::prelude::*;

use super::fixtures::*;
use crate::ids::ArtworkId;
use crate::selection::SelectionLedger;

const PAGE_SIZE: u64 = 4;
const PAGES: u64 = 3;

#[derive(Debug, Clone)]
enum Op {
    Reconcile { page: u64, mask: Vec<bool> },
    Deselect(u64),
    ClearAll,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..PAGES, prop::collection::vec(any::<bool>(), PAGE_SIZE as usize))
            .prop_map(|(page, mask)| Op::Reconcile { page, mask }),
        2 => (1..=PAGE_SIZE * PAGES).prop_map(Op::Deselect),
        1 => Just(Op::ClearAll),
    ]
}

fn page_ids(page: u64) -> Vec<u64> {
    (1..=PAGE_SIZE).map(|n| page * PAGE_SIZE + n).collect()
}

proptest! {
    #[test]
    fn ledger_invariant_holds(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ledger = SelectionLedger::new();

        for op in ops {
            match op {
                Op::Reconcile { page: index, mask } => {
                    let ids = page_ids(index);
                    let rows = page(&ids);
                    let chosen: Vec<u64> = ids
                        .iter()
                        .zip(mask.iter())
                        .filter(|(_, keep)| **keep)
                        .map(|(id, _)| *id)
                        .collect();
                    ledger.reconcile(&rows, &pick(&rows, &chosen));

                    let visible: Vec<u64> =
                        ledger.visible_subset(&rows).iter().map(|a| a.id.value()).collect();
                    prop_assert_eq!(visible, chosen);
                }
                Op::Deselect(id) => {
                    let was_selected = ledger.contains(ArtworkId::new(id));
                    prop_assert_eq!(ledger.deselect(ArtworkId::new(id)), was_selected);
                    prop_assert!(!ledger.contains(ArtworkId::new(id)));
                }
                Op::ClearAll => {
                    ledger.clear_all();
                    prop_assert!(ledger.is_empty());
                }
            }

            assert_consistent(&ledger);
        }
    }
}
