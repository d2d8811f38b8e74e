use std::collections::HashMap;

use hangar_assets::{
    AssetError, AssetResult, BuyList, BuyMode, CharacterAssets, ItemId, ItemName, Multiset, NameCache,
    NameResolver, TypeId, load, parse_page,
};

/// Name backend that serves fixed tables, standing in for the naming API.
struct Tables {
    items: HashMap<ItemId, String>,
    types: HashMap<TypeId, String>,
}

impl Tables {
    fn new() -> Self {
        let types = [
            (32880, "Venture"),
            (3651, "Miner I"),
            (34, "Tritanium"),
            (17366, "Station Container"),
            (28668, "Nanite Repair Paste"),
        ];
        let items = [
            (1001, "Retriever"),
            (2001, "Stock"),
            (3001, "Retriever"),
            (4001, "Hauler"),
        ];
        Self {
            items: items.iter().map(|&(id, n)| (ItemId::new(id), n.to_string())).collect(),
            types: types.iter().map(|&(id, n)| (TypeId::new(id), n.to_string())).collect(),
        }
    }
}

impl NameResolver for Tables {
    fn item_names(&self, item_ids: &[ItemId]) -> AssetResult<Vec<ItemName>> {
        Ok(item_ids
            .iter()
            .filter_map(|id| {
                self.items.get(id).map(|name| ItemName {
                    item_id: *id,
                    name: name.clone(),
                })
            })
            .collect())
    }

    fn type_name(&self, type_id: TypeId) -> AssetResult<Option<String>> {
        Ok(self.types.get(&type_id).cloned())
    }
}

fn record(item_id: i64, type_id: i64, location_id: i64, flag: &str, location_type: &str, quantity: u64) -> String {
    let singleton = flag == "Hangar";
    format!(
        r#"{{"item_id":{item_id},"type_id":{type_id},"location_id":{location_id},"location_flag":"{flag}","location_type":"{location_type}","is_singleton":{singleton},"quantity":{quantity}}}"#
    )
}

fn page(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}

const STATION: i64 = 60_003_760;

/// Pilot A: a Venture with 40 Tritanium in cargo, a stock container with 30.
fn pilot_a() -> CharacterAssets {
    let body = page(&[
        // Child before parent on purpose.
        record(1003, 34, 1001, "Cargo", "item", 40),
        record(1002, 3651, 1001, "HiSlot0", "item", 1),
        record(1001, 32880, STATION, "Hangar", "station", 1),
        record(2001, 17366, STATION, "Hangar", "station", 1),
        record(2002, 34, 2001, "Unlocked", "item", 30),
    ]);
    let records = parse_page(&body).unwrap();
    CharacterAssets::assemble("Pilot A", records, &Tables::new(), &mut NameCache::new()).unwrap()
}

/// Pilot B: an unrelated hauler container holding 80 Tritanium.
fn pilot_b() -> CharacterAssets {
    let body = page(&[
        record(4001, 17366, STATION, "Hangar", "station", 1),
        record(4002, 34, 4001, "Unlocked", "item", 80),
    ]);
    let records = parse_page(&body).unwrap();
    CharacterAssets::assemble("Pilot B", records, &Tables::new(), &mut NameCache::new()).unwrap()
}

const BASELINE: &str = "\
Retriever (Venture):
  Miner I: 2
  Tritanium: 100
Hauler (Station Container):
  Tritanium: 0
Nowhere (Venture):
  Tritanium: 5000
";

#[test]
fn summary_reflects_live_contents() {
    let a = pilot_a();
    let venture = a.summary().get("Retriever (Venture)").unwrap();
    let expected: Multiset = [("Miner I", 1), ("Tritanium", 40)].into_iter().collect();
    assert_eq!(venture, &expected);
    assert_eq!(a.summary().get("Stock (Station Container)").unwrap().get("Tritanium"), 30);
}

#[test]
fn check_lists_each_short_item_once() {
    let baseline = load(BASELINE).unwrap();
    let a = pilot_a();
    let reports: Vec<String> = a.check(&baseline).map(|r| r.to_string()).collect();
    assert_eq!(
        reports,
        vec!["Retriever (Venture):\n - Miner I is missing 1 units\n - Tritanium is missing 60 units".to_string()]
    );
    assert_eq!(pilot_b().check(&baseline).count(), 0);
}

#[test]
fn strict_buy_list_across_characters() {
    let baseline = load(BASELINE).unwrap();
    let acc = pilot_a().buy_list(&baseline, BuyMode::Strict, BuyList::new());
    let acc = pilot_b().buy_list(&baseline, BuyMode::Strict, acc);

    let expected: Multiset = [("Miner I", 1), ("Tritanium", 60)].into_iter().collect();
    assert_eq!(acc.finish(), expected);
    assert_eq!(acc.to_multibuy(), "Miner I 1\nTritanium 60");
}

#[test]
fn replenish_buy_list_across_characters() {
    let baseline = load(BASELINE).unwrap();
    let acc = pilot_a().buy_list(&baseline, BuyMode::ReplenishFromOthers, BuyList::new());
    let acc = pilot_b().buy_list(&baseline, BuyMode::ReplenishFromOthers, acc);

    // 60 short in the Venture, 80 spare in the hauler.
    assert_eq!(acc.net("Tritanium"), -20);
    let expected: Multiset = [("Miner I", 1)].into_iter().collect();
    assert_eq!(acc.finish(), expected);
}

#[test]
fn duplicate_record_aborts_assembly() {
    let body = page(&[
        record(1001, 32880, STATION, "Hangar", "station", 1),
        record(1001, 32880, STATION, "Hangar", "station", 1),
    ]);
    let records = parse_page(&body).unwrap();
    let err = CharacterAssets::assemble("Pilot A", records, &Tables::new(), &mut NameCache::new()).unwrap_err();
    assert_eq!(err, AssetError::DuplicateItem(ItemId::new(1001)));
}

#[test]
fn malformed_baseline_is_rejected_whole() {
    let err = load("Retriever (Venture):\n  Tritanium: many\n").unwrap_err();
    assert!(matches!(err, AssetError::MalformedDocument(_)));
    assert!(err.is_baseline_fault());
}
