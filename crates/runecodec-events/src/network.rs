//! Network-level events: bonds, reserve contributions, block rewards,
//! slashes, and errata corrections.

use crate::event::EventLoad;
use runecodec_core::{parse_bool, parse_i64, Attribute, Coin, DecodeError, UnknownReporter};
use serde::{Deserialize, Serialize};

/// Node-operator bond movement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub memo: String,
    pub bond_type: String,
    pub e8: i64,
}

impl EventLoad for Bond {
    const EVENT_TYPE: &'static str = "bond";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Bond::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "memo" => self.memo = attr.value.clone(),
                "bond_type" => self.bond_type = attr.value.clone(),
                "amount" => self.e8 = parse_i64(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// A contribution to the protocol reserve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reserve {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub memo: String,
    pub addr: String,
    pub e8: i64,
}

impl EventLoad for Reserve {
    const EVENT_TYPE: &'static str = "reserve";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Reserve::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "memo" => self.memo = attr.value.clone(),
                "contributor_address" => self.addr = attr.value.clone(),
                "amount" => self.e8 = parse_i64(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// Block rewards: one well-known bond share plus an open-ended tail of
/// per-pool amounts whose keys are themselves asset identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub bond_e8: i64,
    /// Per-pool reward amounts, in attribute order.
    pub pool_rewards: Vec<Coin>,
}

impl EventLoad for Rewards {
    const EVENT_TYPE: &'static str = "rewards";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Rewards::default();
        for attr in attrs {
            match attr.key.as_str() {
                "bond_reward" => self.bond_e8 = parse_i64(&attr.key, &attr.value)?,
                // Any other key is tentatively an asset id with an integer
                // quantity; only an unparsable quantity demotes the pair to
                // the unknown channel.
                key => match attr.value.parse::<i64>() {
                    Ok(e8) => self.pool_rewards.push(Coin::new(key, e8)),
                    Err(_) => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
                },
            }
        }
        Ok(())
    }
}

/// A slash applied against a pool, with an open-ended amount tail like
/// [`Rewards`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slash {
    pub pool: String,
    /// Slashed amounts per asset, in attribute order.
    pub amounts: Vec<Coin>,
}

impl EventLoad for Slash {
    const EVENT_TYPE: &'static str = "slash";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Slash::default();
        for attr in attrs {
            match attr.key.as_str() {
                "pool" => self.pool = attr.value.clone(),
                key => match attr.value.parse::<i64>() {
                    Ok(e8) => self.amounts.push(Coin::new(key, e8)),
                    Err(_) => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
                },
            }
        }
        Ok(())
    }
}

/// A retrospective balance correction for a transaction.
///
/// The two `*_add` flags are captured during the loop and the sign flip
/// applied after it, so flag order relative to amount order does not matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Errata {
    pub in_tx: String,
    pub asset: String,
    pub asset_e8: i64,
    pub rune_e8: i64,
}

impl EventLoad for Errata {
    const EVENT_TYPE: &'static str = "errata";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Errata::default();
        let mut asset_add = true;
        let mut rune_add = true;
        for attr in attrs {
            match attr.key.as_str() {
                "in_tx_id" => self.in_tx = attr.value.clone(),
                "asset" => self.asset = attr.value.clone(),
                "asset_amt" => self.asset_e8 = parse_i64(&attr.key, &attr.value)?,
                "asset_add" => asset_add = parse_bool(&attr.key, &attr.value)?,
                "rune_amt" => self.rune_e8 = parse_i64(&attr.key, &attr.value)?,
                "rune_add" => rune_add = parse_bool(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        if !asset_add {
            self.asset_e8 = -self.asset_e8;
        }
        if !rune_add {
            self.rune_e8 = -self.rune_e8;
        }
        Ok(())
    }
}
