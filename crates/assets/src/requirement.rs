//! Comparison of live contents against a requirement baseline.

use std::collections::BTreeMap;
use std::fmt;

use hangar_core::Multiset;

use crate::summary::Summary;

/// One item a container is short of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// The container holds none of the item.
    Missing { item: String, required: u64 },
    /// The container holds some, but `missing` units fewer than required.
    Short { item: String, missing: u64 },
}

impl Shortfall {
    pub fn item(&self) -> &str {
        match self {
            Shortfall::Missing { item, .. } | Shortfall::Short { item, .. } => item,
        }
    }

    /// Units needed to satisfy the requirement.
    pub fn units(&self) -> u64 {
        match self {
            Shortfall::Missing { required, .. } => *required,
            Shortfall::Short { missing, .. } => *missing,
        }
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::Missing { item, required } => {
                write!(f, " - {item} is completely missing ({required} units)")
            }
            Shortfall::Short { item, missing } => write!(f, " - {item} is missing {missing} units"),
        }
    }
}

/// Discrepancies of one container. Never empty when produced by [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerReport {
    pub label: String,
    pub shortfalls: Vec<Shortfall>,
}

impl fmt::Display for ContainerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.label)?;
        for shortfall in &self.shortfalls {
            write!(f, "\n{shortfall}")?;
        }
        Ok(())
    }
}

/// Shortfalls of `live` against `required`, in item name order.
pub fn shortfalls(live: &Multiset, required: &Multiset) -> Vec<Shortfall> {
    required
        .iter()
        .filter(|&(_, quantity)| quantity > 0)
        .filter_map(|(item, quantity)| {
            if !live.contains(item) {
                return Some(Shortfall::Missing {
                    item: item.to_string(),
                    required: quantity,
                });
            }
            let have = live.get(item);
            (have < quantity).then(|| Shortfall::Short {
                item: item.to_string(),
                missing: quantity - have,
            })
        })
        .collect()
}

/// Lazily report every container that falls short of the baseline.
///
/// Only labels present on both sides are compared; baseline labels with no
/// live container are ignored and satisfied containers yield nothing.
pub fn check<'a>(live: &'a Summary, baseline: &'a Summary) -> impl Iterator<Item = ContainerReport> + 'a {
    baseline.iter().filter_map(move |(label, required)| {
        let contents = live.get(label)?;
        let shortfalls = shortfalls(contents, required);
        (!shortfalls.is_empty()).then(|| ContainerReport {
            label: label.to_string(),
            shortfalls,
        })
    })
}

/// How shortfalls of different containers combine into a buy list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BuyMode {
    /// Each container is topped up on its own; surplus elsewhere never helps.
    #[default]
    Strict,
    /// Surplus in one container offsets deficits in others.
    ReplenishFromOthers,
}

/// Running net shortfall per item, folded across containers and characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyList {
    net: BTreeMap<String, i64>,
}

impl BuyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one character's live summary into the list.
    pub fn accumulate(&mut self, live: &Summary, baseline: &Summary, mode: BuyMode) {
        for (label, required) in baseline.iter() {
            let Some(contents) = live.get(label) else {
                continue;
            };
            for (item, quantity) in required.iter() {
                let delta = signed(quantity).saturating_sub(signed(contents.get(item)));
                if mode == BuyMode::Strict && delta <= 0 {
                    continue;
                }
                let entry = self.net.entry(item.to_string()).or_insert(0);
                *entry = entry.saturating_add(delta);
            }
        }
    }

    /// Net running value for `item`; negative means surplus so far.
    pub fn net(&self, item: &str) -> i64 {
        self.net.get(item).copied().unwrap_or(0)
    }

    /// Items still to buy; net surplus and zero entries are dropped.
    pub fn finish(&self) -> Multiset {
        self.net
            .iter()
            .filter(|&(_, &net)| net > 0)
            .map(|(item, &net)| (item.clone(), net as u64))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.net.values().all(|&net| net <= 0)
    }

    /// One `"{item} {amount}"` line per item, the in-game multibuy format.
    pub fn to_multibuy(&self) -> String {
        self.finish()
            .iter()
            .map(|(item, amount)| format!("{item} {amount}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn signed(quantity: u64) -> i64 {
    i64::try_from(quantity).unwrap_or(i64::MAX)
}

/// Accumulator in, accumulator out form of [`BuyList::accumulate`].
pub fn buy_list(live: &Summary, baseline: &Summary, mode: BuyMode, mut acc: BuyList) -> BuyList {
    acc.accumulate(live, baseline, mode);
    acc
}
