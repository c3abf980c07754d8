//! 网络币种关联
//!
//! 一个币种在某网络上的单位集合：基础单位、默认显示单位及其他单位

use crate::error::{NetworkError, Result};

use super::{currency::Currency, unit::Unit};

/// 币种在网络上的单位关联
#[derive(Debug, Clone)]
pub struct NetworkAssociation {
    base_unit: Unit,
    default_unit: Unit,
    units: Vec<Unit>,
}

impl NetworkAssociation {
    /// 创建关联
    ///
    /// `units` 会自动补齐基础单位与默认单位并去重（保持插入顺序）。
    /// 所有单位必须隶属同一币种。
    pub fn new(
        base_unit: Unit,
        default_unit: Unit,
        units: impl IntoIterator<Item = Unit>,
    ) -> Result<Self> {
        let currency = base_unit.currency.clone();

        let mut all = vec![base_unit.clone()];
        if default_unit != base_unit {
            all.push(default_unit.clone());
        }
        for unit in units {
            if !all.contains(&unit) {
                all.push(unit);
            }
        }

        if let Some(stray) = all.iter().find(|u| !u.has_currency(&currency)) {
            return Err(NetworkError::UnitCurrencyMismatch {
                currency: currency.code,
                unit: stray.uids.clone(),
            });
        }

        Ok(Self {
            base_unit,
            default_unit,
            units: all,
        })
    }

    pub fn base_unit(&self) -> &Unit {
        &self.base_unit
    }

    pub fn default_unit(&self) -> &Unit {
        &self.default_unit
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// 关联所属的币种（取自基础单位）
    pub fn currency(&self) -> &Currency {
        &self.base_unit.currency
    }

    /// 校验关联是否属于给定币种
    pub(crate) fn ensure_currency(&self, currency: &Currency) -> Result<()> {
        if self.currency() != currency {
            return Err(NetworkError::UnitCurrencyMismatch {
                currency: currency.code.clone(),
                unit: self.base_unit.uids.clone(),
            });
        }
        Ok(())
    }
}
