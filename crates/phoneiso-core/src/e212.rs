// crates/phoneiso-core/src/e212.rs

//! # E.212 Network Index
//!
//! Exact-key lookups only: `(mcc, mnc)` for a registered network, `mcc` alone
//! for the country a network code falls back to.

use crate::error::{PhoneIsoError, Result};
use crate::model::{is_country_code, MccEntry, NetworkEntry};
use crate::text::fold_key;
use std::collections::HashMap;

/// Highest valid MCC or MNC value.
pub const MAX_CODE: u16 = 999;

#[derive(Debug, Clone, Default)]
pub struct E212Index {
    by_mcc: HashMap<u16, Box<str>>,
    networks: HashMap<(u16, u16), NetworkEntry>,
}

impl E212Index {
    /// Builds the index. Every network's MCC must also appear in `mccs`.
    pub fn build(networks: &[NetworkEntry], mccs: &[MccEntry]) -> Result<Self> {
        let mut by_mcc = HashMap::with_capacity(mccs.len());
        for m in mccs {
            if m.mcc == 0 || m.mcc > MAX_CODE {
                return Err(PhoneIsoError::InvalidData(format!(
                    "MCC {} out of range",
                    m.mcc
                )));
            }
            if !is_country_code(&m.country) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "MCC {}: invalid country code {:?}",
                    m.mcc, m.country
                )));
            }
            if by_mcc.insert(m.mcc, m.country.as_str().into()).is_some() {
                return Err(PhoneIsoError::InvalidData(format!(
                    "duplicate MCC {}",
                    m.mcc
                )));
            }
        }

        let mut map = HashMap::with_capacity(networks.len());
        for n in networks {
            if n.mcc == 0 {
                return Err(PhoneIsoError::InvalidData(format!(
                    "network {}-{}: MCC 0 is not assignable",
                    n.mcc, n.mnc
                )));
            }
            if n.mnc > MAX_CODE {
                return Err(PhoneIsoError::InvalidData(format!(
                    "network {}-{}: MNC out of range",
                    n.mcc, n.mnc
                )));
            }
            if !by_mcc.contains_key(&n.mcc) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "network {}-{}: MCC has no country",
                    n.mcc, n.mnc
                )));
            }
            if !is_country_code(&n.country) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "network {}-{}: invalid country code {:?}",
                    n.mcc, n.mnc, n.country
                )));
            }
            if map.insert((n.mcc, n.mnc), n.clone()).is_some() {
                return Err(PhoneIsoError::InvalidData(format!(
                    "duplicate network {}-{}",
                    n.mcc, n.mnc
                )));
            }
        }

        log::debug!(
            "built E.212 index: {} MCCs, {} networks",
            by_mcc.len(),
            map.len()
        );

        Ok(E212Index {
            by_mcc,
            networks: map,
        })
    }

    /// Country of a network code, or `""`.
    ///
    /// A registered `(mcc, mnc)` pair reports its own country (MCC 340 covers
    /// several French overseas departments); otherwise the MCC's country.
    pub fn lookup(&self, mcc: u16, mnc: u16) -> &str {
        if let Some(n) = self.networks.get(&(mcc, mnc)) {
            return &n.country;
        }
        self.country_for_mcc(mcc)
    }

    /// Country of an MCC, or `""`.
    pub fn country_for_mcc(&self, mcc: u16) -> &str {
        self.by_mcc.get(&mcc).map_or("", |c| &**c)
    }

    /// Operator name of a registered network, or `""`.
    ///
    /// An unregistered pair and a registered pair without a recorded name
    /// both yield `""`; use [`E212Index::network`] to tell them apart.
    pub fn network_name(&self, mcc: u16, mnc: u16) -> &str {
        self.network(mcc, mnc).map_or("", |n| n.operator.as_str())
    }

    pub fn network(&self, mcc: u16, mnc: u16) -> Option<&NetworkEntry> {
        self.networks.get(&(mcc, mnc))
    }

    /// Registered networks of `mcc`, ordered by MNC.
    pub fn networks_for_mcc(&self, mcc: u16) -> Vec<&NetworkEntry> {
        let mut out: Vec<&NetworkEntry> = self
            .networks
            .values()
            .filter(|n| n.mcc == mcc)
            .collect();
        out.sort_unstable_by_key(|n| n.mnc);
        out
    }

    /// Networks whose operator name contains `query`, ignoring case and
    /// accents. Ordered by `(mcc, mnc)`.
    pub fn find_networks_by_operator(&self, query: &str) -> Vec<&NetworkEntry> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<&NetworkEntry> = self
            .networks
            .values()
            .filter(|n| fold_key(&n.operator).contains(&q))
            .collect();
        out.sort_unstable_by_key(|n| (n.mcc, n.mnc));
        out
    }

    pub fn mcc_count(&self) -> usize {
        self.by_mcc.len()
    }

    pub fn network_count(&self) -> usize {
        self.networks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(mcc: u16, mnc: u16, country: &str, operator: &str) -> NetworkEntry {
        NetworkEntry {
            mcc,
            mnc,
            country: country.into(),
            operator: operator.into(),
        }
    }

    fn mcc(mcc: u16, country: &str) -> MccEntry {
        MccEntry {
            mcc,
            country: country.into(),
        }
    }

    fn sample() -> E212Index {
        E212Index::build(
            &[
                net(238, 1, "DK", "TDC A/S"),
                net(238, 2, "DK", "Telenor"),
                net(238, 3, "DK", ""),
                net(340, 12, "MQ", "UTS Caraïbe"),
            ],
            &[mcc(238, "DK"), mcc(340, "GP")],
        )
        .unwrap()
    }

    #[test]
    fn country_falls_back_to_mcc() {
        let idx = sample();
        assert_eq!(idx.lookup(238, 1), "DK");
        assert_eq!(idx.lookup(238, 999), "DK");
        assert_eq!(idx.lookup(340, 12), "MQ");
        assert_eq!(idx.lookup(340, 1), "GP");
        assert_eq!(idx.lookup(0, 0), "");
    }

    #[test]
    fn name_needs_exact_pair() {
        let idx = sample();
        assert_eq!(idx.network_name(238, 1), "TDC A/S");
        assert_eq!(idx.network_name(238, 4), "");
        assert_eq!(idx.network_name(239, 1), "");
    }

    #[test]
    fn nameless_entry_is_distinguishable_through_network() {
        let idx = sample();
        assert_eq!(idx.network_name(238, 3), "");
        assert!(idx.network(238, 3).is_some());
        assert!(idx.network(238, 4).is_none());
    }

    #[test]
    fn operator_search_folds_accents_and_case() {
        let idx = sample();
        let hits = idx.find_networks_by_operator("caraibe");
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].mcc, hits[0].mnc), (340, 12));
        assert!(idx.find_networks_by_operator("  ").is_empty());
    }

    #[test]
    fn networks_for_mcc_sorted_by_mnc() {
        let idx = sample();
        let mncs: Vec<u16> = idx.networks_for_mcc(238).iter().map(|n| n.mnc).collect();
        assert_eq!(mncs, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_network_without_mcc_row() {
        let res = E212Index::build(&[net(238, 1, "DK", "TDC A/S")], &[]);
        assert!(matches!(res, Err(PhoneIsoError::InvalidData(_))));
    }

    #[test]
    fn rejects_out_of_range_codes() {
        assert!(E212Index::build(&[], &[mcc(1000, "DK")]).is_err());
        assert!(E212Index::build(&[net(238, 1000, "DK", "")], &[mcc(238, "DK")]).is_err());
    }

    #[test]
    fn rejects_mcc_zero() {
        let res = E212Index::build(&[], &[mcc(0, "ZZ")]);
        assert!(matches!(res, Err(PhoneIsoError::InvalidData(_))));

        let res = E212Index::build(&[net(0, 0, "ZZ", "Nobody")], &[mcc(238, "DK")]);
        assert!(matches!(res, Err(PhoneIsoError::InvalidData(_))));
    }
}
