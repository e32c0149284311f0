//! Liquidity-side events: deposits into and withdrawals out of pools, plus
//! pool lifecycle changes.

use crate::event::EventLoad;
use runecodec_core::{
    is_rune, parse_coin, parse_coin_list, parse_f64, parse_i64, Attribute, DecodeError,
    UnknownReporter,
};
use serde::{Deserialize, Serialize};

/// Fixed suffix of dynamic transaction-id keys, e.g. `"BTC_txid"`.
const TX_ID_SUFFIX: &str = "_txid";

/// A donation of coins to a pool without minting units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Add {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub asset: String,
    pub asset_e8: i64,
    pub rune_e8: i64,
    pub memo: String,
    pub pool: String,
}

impl EventLoad for Add {
    const EVENT_TYPE: &'static str = "add";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Add::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "coin" => {
                    // One pass over the list: the rune token feeds the rune
                    // quantity, the (at most one) other token the asset side.
                    for coin in parse_coin_list(&attr.key, &attr.value)? {
                        if is_rune(&coin.asset) {
                            self.rune_e8 = coin.e8;
                        } else {
                            self.asset = coin.asset;
                            self.asset_e8 = coin.e8;
                        }
                    }
                }
                "memo" => self.memo = attr.value.clone(),
                "pool" => self.pool = attr.value.clone(),
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// Liquidity provision: both-sided or single-sided deposit minting units.
///
/// The rune-side transaction id rides on a compound key from a closed alias
/// set (`THORChain_txid`, `THOR_txid`); the asset side on a dynamically
/// named `<chain>_txid` key whose prefix is taken literally as the chain id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stake {
    pub pool: String,
    pub asset_tx: String,
    pub asset_chain: String,
    pub asset_e8: i64,
    pub rune_tx: String,
    pub rune_chain: String,
    pub rune_addr: String,
    pub rune_e8: i64,
    pub stake_units: i64,
}

impl EventLoad for Stake {
    const EVENT_TYPE: &'static str = "stake";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Stake::default();
        // At most one dynamic asset-tx key may appear; carried as explicit
        // state so a second match is a hard error, not an overwrite.
        let mut asset_tx_key: Option<&str> = None;
        for attr in attrs {
            match attr.key.as_str() {
                "pool" => self.pool = attr.value.clone(),
                "stake_units" => self.stake_units = parse_i64(&attr.key, &attr.value)?,
                "rune_address" => self.rune_addr = attr.value.clone(),
                "rune_amount" => self.rune_e8 = parse_i64(&attr.key, &attr.value)?,
                "asset_amount" => self.asset_e8 = parse_i64(&attr.key, &attr.value)?,
                "THORChain_txid" | "THOR_txid" => {
                    self.rune_tx = attr.value.clone();
                    self.rune_chain =
                        attr.key[..attr.key.len() - TX_ID_SUFFIX.len()].to_string();
                }
                key => match key.strip_suffix(TX_ID_SUFFIX) {
                    Some(chain) => {
                        if let Some(previous) = asset_tx_key {
                            return Err(DecodeError::ConflictingAttribution {
                                attribute: key.to_string(),
                                previous: previous.to_string(),
                            });
                        }
                        asset_tx_key = Some(key);
                        self.asset_chain = chain.to_string();
                        self.asset_tx = attr.value.clone();
                    }
                    None => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
                },
            }
        }
        // The log omits the rune-side tx id when both sides share one
        // transaction.
        if self.rune_tx.is_empty() {
            self.rune_tx = self.asset_tx.clone();
        }
        Ok(())
    }
}

/// Liquidity withdrawal, burning units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unstake {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub asset: String,
    pub asset_e8: i64,
    pub memo: String,
    pub pool: String,
    pub stake_units: i64,
    pub basis_points: i64,
    /// Withdrawal asymmetry in [-1, 1]. The single floating-point field in
    /// the whole model.
    pub asymmetry: f64,
}

impl EventLoad for Unstake {
    const EVENT_TYPE: &'static str = "unstake";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Unstake::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "coin" => {
                    let coin = parse_coin(&attr.key, &attr.value)?;
                    self.asset = coin.asset;
                    self.asset_e8 = coin.e8;
                }
                "memo" => self.memo = attr.value.clone(),
                "pool" => self.pool = attr.value.clone(),
                "stake_units" => self.stake_units = parse_i64(&attr.key, &attr.value)?,
                "basis_points" => self.basis_points = parse_i64(&attr.key, &attr.value)?,
                "asymmetry" => self.asymmetry = parse_f64(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// Pool status transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub asset: String,
    pub status: String,
}

impl EventLoad for Pool {
    const EVENT_TYPE: &'static str = "pool";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Pool::default();
        for attr in attrs {
            match attr.key.as_str() {
                "pool" => self.asset = attr.value.clone(),
                "pool_status" => self.status = attr.value.clone(),
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runecodec_core::{CollectingReporter, NullReporter};

    fn attrs(pairs: &[(&str, &str)]) -> Vec<Attribute> {
        pairs.iter().map(|(k, v)| Attribute::new(*k, *v)).collect()
    }

    #[test]
    fn add_splits_rune_and_asset_from_coin_list() {
        let mut add = Add::default();
        add.load(
            &attrs(&[("coin", "500000000 BTC.BTC, 100000000 THOR.RUNE")]),
            &NullReporter,
        )
        .unwrap();
        assert_eq!(add.asset, "BTC.BTC");
        assert_eq!(add.asset_e8, 500_000_000);
        assert_eq!(add.rune_e8, 100_000_000);
    }

    #[test]
    fn add_rune_only_coin_list() {
        let mut add = Add::default();
        add.load(&attrs(&[("coin", "7 BNB.RUNE-B1A")]), &NullReporter)
            .unwrap();
        assert_eq!(add.rune_e8, 7);
        assert_eq!(add.asset, "");
        assert_eq!(add.asset_e8, 0);
    }

    #[test]
    fn add_reports_unknown_key_once_and_succeeds() {
        let reporter = CollectingReporter::new();
        let mut add = Add::default();
        add.load(&attrs(&[("foo", "bar"), ("pool", "BTC.BTC")]), &reporter)
            .unwrap();
        assert_eq!(add.pool, "BTC.BTC");

        let entries = reporter.take();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event_type, "add");
        assert_eq!(entries[0].key, "foo");
        assert_eq!(entries[0].value, "bar");
    }

    #[test]
    fn add_reused_record_is_fully_overwritten() {
        let mut add = Add::default();
        add.load(
            &attrs(&[("id", "TX1"), ("memo", "first"), ("pool", "BTC.BTC")]),
            &NullReporter,
        )
        .unwrap();
        add.load(&attrs(&[("id", "TX2")]), &NullReporter).unwrap();
        assert_eq!(add.tx, "TX2");
        assert_eq!(add.memo, "");
        assert_eq!(add.pool, "");
    }

    #[test]
    fn add_duplicate_key_last_write_wins() {
        let mut add = Add::default();
        add.load(&attrs(&[("id", "TX1"), ("id", "TX2")]), &NullReporter)
            .unwrap();
        assert_eq!(add.tx, "TX2");
    }

    #[test]
    fn stake_compound_and_dynamic_tx_keys() {
        let mut stake = Stake::default();
        stake
            .load(
                &attrs(&[
                    ("THORChain_txid", "TX1"),
                    ("rune_address", "addr"),
                    ("BTC_txid", "TX2"),
                ]),
                &NullReporter,
            )
            .unwrap();
        assert_eq!(stake.rune_tx, "TX1");
        assert_eq!(stake.rune_chain, "THORChain");
        assert_eq!(stake.rune_addr, "addr");
        assert_eq!(stake.asset_tx, "TX2");
        assert_eq!(stake.asset_chain, "BTC");
    }

    #[test]
    fn stake_legacy_rune_chain_alias() {
        let mut stake = Stake::default();
        stake
            .load(&attrs(&[("THOR_txid", "TX1")]), &NullReporter)
            .unwrap();
        assert_eq!(stake.rune_tx, "TX1");
        assert_eq!(stake.rune_chain, "THOR");
    }

    #[test]
    fn stake_second_dynamic_tx_key_is_conflicting_attribution() {
        let mut stake = Stake::default();
        let err = stake
            .load(
                &attrs(&[
                    ("THORChain_txid", "TX1"),
                    ("BTC_txid", "TX2"),
                    ("ETH_txid", "TX3"),
                ]),
                &NullReporter,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ConflictingAttribution { ref attribute, ref previous }
                if attribute == "ETH_txid" && previous == "BTC_txid"
        ));
    }

    #[test]
    fn stake_rune_tx_defaults_to_asset_tx() {
        let mut stake = Stake::default();
        stake
            .load(
                &attrs(&[("rune_address", "addr"), ("BNB_txid", "TX2")]),
                &NullReporter,
            )
            .unwrap();
        assert_eq!(stake.rune_tx, "TX2");
        assert_eq!(stake.rune_chain, "");
        assert_eq!(stake.asset_chain, "BNB");
    }

    #[test]
    fn stake_scalar_fields() {
        let mut stake = Stake::default();
        stake
            .load(
                &attrs(&[
                    ("pool", "BNB.BNB"),
                    ("stake_units", "694"),
                    ("rune_amount", "1000"),
                    ("asset_amount", "500"),
                ]),
                &NullReporter,
            )
            .unwrap();
        assert_eq!(stake.pool, "BNB.BNB");
        assert_eq!(stake.stake_units, 694);
        assert_eq!(stake.rune_e8, 1000);
        assert_eq!(stake.asset_e8, 500);
    }

    #[test]
    fn unstake_parses_asymmetry_as_float() {
        let mut unstake = Unstake::default();
        unstake
            .load(
                &attrs(&[
                    ("coin", "1 BNB.BNB"),
                    ("basis_points", "10000"),
                    ("asymmetry", "0.5"),
                ]),
                &NullReporter,
            )
            .unwrap();
        assert_eq!(unstake.asset, "BNB.BNB");
        assert_eq!(unstake.basis_points, 10_000);
        assert_eq!(unstake.asymmetry, 0.5);
    }

    #[test]
    fn unstake_malformed_asymmetry_names_attribute() {
        let mut unstake = Unstake::default();
        let err = unstake
            .load(&attrs(&[("asymmetry", "abc")]), &NullReporter)
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedFloat { ref attribute, .. } if attribute == "asymmetry"
        ));
    }
}
