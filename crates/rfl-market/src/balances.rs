//! # Ring Balances
//!
//! The storefront reconstructs a wallet's ring holdings from the rings
//! contract's ERC-1155 `TransferSingle` logs: every transfer into the
//! wallet adds `value` to the ring's balance, every transfer out subtracts
//! it. The same fold applies to a live event stream on top of an existing
//! snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rfl_core::RingId;

/// Sender of mint transfers.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Per-ring balances of one wallet. Missing ids are zero.
pub type RingBalances = BTreeMap<RingId, i128>;

/// Arguments of an ERC-1155 `TransferSingle` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSingle {
    /// Account that triggered the transfer.
    pub operator: String,
    /// Sender; the zero address for mints.
    pub from: String,
    /// Recipient; the zero address for burns.
    pub to: String,
    /// Ring token id.
    pub id: RingId,
    /// Number of copies moved.
    pub value: u64,
}

/// Fold transfer events into `balances` for the wallet at `address`.
///
/// Address comparison ignores case, so checksummed and lowercase forms
/// match. Events are expected to involve `address` as sender or receiver;
/// any event not sent to it counts as outgoing.
pub fn apply_transfer_events<'a>(
    address: &str,
    mut balances: RingBalances,
    events: impl IntoIterator<Item = &'a TransferSingle>,
) -> RingBalances {
    for event in events {
        let incoming = event.to.eq_ignore_ascii_case(address);
        let delta = if incoming {
            i128::from(event.value)
        } else {
            -i128::from(event.value)
        };
        *balances.entry(event.id).or_insert(0) += delta;
        tracing::trace!(ring = %event.id, incoming, value = event.value, "applied transfer");
    }
    balances
}

/// The ring minted by a transaction, from its receipt's transfer events.
pub fn minted_ring<'a>(events: impl IntoIterator<Item = &'a TransferSingle>) -> Option<RingId> {
    events
        .into_iter()
        .find(|e| e.from.eq_ignore_ascii_case(ZERO_ADDRESS))
        .map(|e| e.id)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const WALLET: &str = "0x00000000000000000000000000000000000000aa";

    proptest! {
        #[test]
        fn balance_is_inflow_minus_outflow(
            moves in proptest::collection::vec((any::<bool>(), 1u32..20, 0u64..1000), 0..50)
        ) {
            let events: Vec<TransferSingle> = moves
                .iter()
                .map(|(incoming, id, value)| {
                    let (from, to) = if *incoming { (ZERO_ADDRESS, WALLET) } else { (WALLET, ZERO_ADDRESS) };
                    TransferSingle {
                        operator: WALLET.to_string(),
                        from: from.to_string(),
                        to: to.to_string(),
                        id: RingId(*id),
                        value: *value,
                    }
                })
                .collect();
            let balances = apply_transfer_events(WALLET, RingBalances::new(), &events);
            let total: i128 = balances.values().sum();
            let expected: i128 = moves
                .iter()
                .map(|(incoming, _, v)| if *incoming { i128::from(*v) } else { -i128::from(*v) })
                .sum();
            prop_assert_eq!(total, expected);
        }
    }
}
