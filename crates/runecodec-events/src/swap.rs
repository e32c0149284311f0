//! Trade-path events: swaps and the fee, gas, outbound, and refund records
//! that surround them.

use crate::event::EventLoad;
use runecodec_core::{parse_coin, parse_coin_list, parse_i64, Attribute, DecodeError, UnknownReporter};
use serde::{Deserialize, Serialize};

/// A single-pool swap. Double swaps appear in the log as two of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub from_asset: String,
    pub from_e8: i64,
    pub memo: String,
    pub pool: String,
    /// Price limit from the memo, in e8 of the output asset.
    pub to_e8_min: i64,
    /// Trade slip in basis points.
    pub trade_slip_bp: i64,
    /// Liquidity fee in e8 of the output asset.
    pub liq_fee_e8: i64,
    /// Liquidity fee expressed in rune e8.
    pub liq_fee_in_rune_e8: i64,
}

impl EventLoad for Swap {
    const EVENT_TYPE: &'static str = "swap";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Swap::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "coin" => {
                    let coin = parse_coin(&attr.key, &attr.value)?;
                    self.from_asset = coin.asset;
                    self.from_e8 = coin.e8;
                }
                "memo" => self.memo = attr.value.clone(),
                "pool" => self.pool = attr.value.clone(),
                "price_target" => self.to_e8_min = parse_i64(&attr.key, &attr.value)?,
                "trade_slip" => self.trade_slip_bp = parse_i64(&attr.key, &attr.value)?,
                "liquidity_fee" => self.liq_fee_e8 = parse_i64(&attr.key, &attr.value)?,
                "liquidity_fee_in_rune" => {
                    self.liq_fee_in_rune_e8 = parse_i64(&attr.key, &attr.value)?
                }
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// Network fee charged on an outbound transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub tx: String,
    pub asset: String,
    pub asset_e8: i64,
    /// Rune e8 deducted from the pool to cover the fee.
    pub pool_deduct: i64,
}

impl EventLoad for Fee {
    const EVENT_TYPE: &'static str = "fee";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Fee::default();
        for attr in attrs {
            match attr.key.as_str() {
                "tx_id" => self.tx = attr.value.clone(),
                "coins" => {
                    let coin = parse_coin(&attr.key, &attr.value)?;
                    self.asset = coin.asset;
                    self.asset_e8 = coin.e8;
                }
                "pool_deduct" => self.pool_deduct = parse_i64(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// Gas spent by the network on an external chain, aggregated per block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gas {
    pub asset: String,
    pub asset_e8: i64,
    /// Rune e8 the network reimbursed the pool with.
    pub rune_e8: i64,
    pub tx_count: i64,
}

impl EventLoad for Gas {
    const EVENT_TYPE: &'static str = "gas";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Gas::default();
        for attr in attrs {
            match attr.key.as_str() {
                "asset" => self.asset = attr.value.clone(),
                "asset_amt" => self.asset_e8 = parse_i64(&attr.key, &attr.value)?,
                "rune_amt" => self.rune_e8 = parse_i64(&attr.key, &attr.value)?,
                "transaction_count" => self.tx_count = parse_i64(&attr.key, &attr.value)?,
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// A transfer the network sent out in response to an inbound transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outbound {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub asset: String,
    pub asset_e8: i64,
    pub memo: String,
    /// Id of the inbound transaction this outbound answers.
    pub in_tx: String,
}

impl EventLoad for Outbound {
    const EVENT_TYPE: &'static str = "outbound";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Outbound::default();
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
                "in_tx_id" => self.in_tx = attr.value.clone(),
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}

/// A returned inbound transaction, carrying up to two coins in wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub tx: String,
    pub chain: String,
    pub from_addr: String,
    pub to_addr: String,
    pub asset: String,
    pub asset_e8: i64,
    pub asset_2nd: String,
    pub asset_2nd_e8: i64,
    pub memo: String,
    pub code: i64,
    pub reason: String,
}

impl EventLoad for Refund {
    const EVENT_TYPE: &'static str = "refund";

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError> {
        *self = Refund::default();
        for attr in attrs {
            match attr.key.as_str() {
                "id" => self.tx = attr.value.clone(),
                "chain" => self.chain = attr.value.clone(),
                "from" => self.from_addr = attr.value.clone(),
                "to" => self.to_addr = attr.value.clone(),
                "coin" => {
                    // Positional: refunds return whatever pair the user sent,
                    // in the order the log emitted it.
                    for (i, coin) in parse_coin_list(&attr.key, &attr.value)?
                        .into_iter()
                        .enumerate()
                    {
                        if i == 0 {
                            self.asset = coin.asset;
                            self.asset_e8 = coin.e8;
                        } else {
                            self.asset_2nd = coin.asset;
                            self.asset_2nd_e8 = coin.e8;
                        }
                    }
                }
                "memo" => self.memo = attr.value.clone(),
                "code" => self.code = parse_i64(&attr.key, &attr.value)?,
                "reason" => self.reason = attr.value.clone(),
                _ => reporter.report(Self::EVENT_TYPE, &attr.key, &attr.value),
            }
        }
        Ok(())
    }
}
