//! 测试辅助模块
//! 提供常用网络、币种与单位的构造函数

#![allow(dead_code)]

use netcore::prelude::*;

pub struct CurrencyFixture {
    pub currency: Currency,
    pub base: Unit,
    pub default: Unit,
    pub extra: Vec<Unit>,
}

impl CurrencyFixture {
    pub fn association(&self) -> NetworkAssociation {
        NetworkAssociation::new(self.base.clone(), self.default.clone(), self.extra.clone())
            .expect("fixture units belong to one currency")
    }

    pub fn entry(&self) -> (Currency, NetworkAssociation) {
        (self.currency.clone(), self.association())
    }
}

/// BTC：satoshi / bitcoin，附加 mBTC
pub fn btc_fixture() -> CurrencyFixture {
    let currency = Currency::new("bitcoin-mainnet:__native__", "Bitcoin", "btc", "native", None);
    let base = Unit::create_as_base(&currency, "bitcoin-mainnet:__native__:sat", "satoshi", "SAT");
    let default = Unit::create(
        &currency,
        "bitcoin-mainnet:__native__:btc",
        "bitcoin",
        "B",
        &base,
        8,
    );
    let millis = Unit::create(
        &currency,
        "bitcoin-mainnet:__native__:mbtc",
        "millibitcoin",
        "mB",
        &base,
        5,
    );

    CurrencyFixture {
        currency,
        base,
        default,
        extra: vec![millis],
    }
}

/// ETH：wei / ether，附加 gwei
pub fn eth_fixture() -> CurrencyFixture {
    let currency = Currency::new("ethereum-mainnet:__native__", "Ethereum", "eth", "native", None);
    let base = Unit::create_as_base(&currency, "ethereum-mainnet:__native__:wei", "wei", "wei");
    let default = Unit::create(
        &currency,
        "ethereum-mainnet:__native__:eth",
        "ether",
        "E",
        &base,
        18,
    );
    let gwei = Unit::create(
        &currency,
        "ethereum-mainnet:__native__:gwei",
        "gwei",
        "gwei",
        &base,
        9,
    );

    CurrencyFixture {
        currency,
        base,
        default,
        extra: vec![gwei],
    }
}

/// ERC20 代币：最小单位与显示单位
pub fn erc20_fixture(code: &str, issuer: &str, decimals: u8) -> CurrencyFixture {
    let uids = format!("ethereum-mainnet:{}", issuer);
    let currency = Currency::new(
        uids.clone(),
        code.to_uppercase(),
        code,
        "erc20",
        Some(issuer.to_string()),
    );
    let base = Unit::create_as_base(
        &currency,
        format!("{}:{}i", uids, code),
        format!("{}i", code),
        format!("{}I", code.to_uppercase()),
    );
    let default = Unit::create(
        &currency,
        format!("{}:{}", uids, code),
        code,
        code.to_uppercase(),
        &base,
        decimals,
    );

    CurrencyFixture {
        currency,
        base,
        default,
        extra: Vec::new(),
    }
}
