//! Form reducer behaviour, submitted through a scripted `WarehouseApi`

use std::sync::Mutex;

use async_trait::async_trait;
use shared::models::{WarehouseCreated, Zone};
use warehouse_client::{
    ClientError, ClientResult, FormError, FormState, ShelfDelta, WarehouseApi,
};

/// Records every submitted layout and answers with a fixed outcome
struct ScriptedApi {
    reject_with: Option<String>,
    sent: Mutex<Vec<Vec<Zone>>>,
}

impl ScriptedApi {
    fn accepting() -> Self {
        Self {
            reject_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WarehouseApi for ScriptedApi {
    async fn add_warehouse(&self, zones: &[Zone]) -> ClientResult<WarehouseCreated> {
        self.sent.lock().unwrap().push(zones.to_vec());
        match &self.reject_with {
            Some(message) => Err(ClientError::Validation {
                code: Some(1005),
                message: message.clone(),
            }),
            None => Ok(WarehouseCreated {
                warehouse_id: 7,
                zone_count: zones.len(),
                shelf_count: zones.iter().map(|z| z.shelves.len()).sum(),
            }),
        }
    }
}

fn with_zone(form: &FormState, label: i32, names: &[&str]) -> FormState {
    let (form, _) = form
        .select_zone(label)
        .unwrap()
        .commit_zone(names.iter().copied())
        .unwrap();
    form
}

#[test]
fn test_select_zone_rejects_out_of_range() {
    let form = FormState::new();
    for label in [0, -1, 13] {
        assert!(matches!(
            form.select_zone(label),
            Err(FormError::ZoneOutOfRange { label: l }) if l == label
        ));
    }
}

#[test]
fn test_commit_then_reselect_restores_names_in_order() {
    let form = with_zone(&FormState::new(), 3, &["A", "B", "C"]);
    let form = form.select_zone(5).unwrap();
    assert_eq!(form.shelf_count(), 0);
    assert!(form.slots().iter().all(String::is_empty));

    let form = form.select_zone(3).unwrap();
    assert_eq!(form.active_zone(), 3);
    assert_eq!(form.shelf_count(), 3);
    assert_eq!(&form.slots()[..3], ["A", "B", "C"]);
    assert!(form.slots()[3..].iter().all(String::is_empty));
}

#[test]
fn test_commit_reports_saved_zone() {
    let form = FormState::new().select_zone(2).unwrap();
    let (form, committed) = form.commit_zone(["Rack1"]).unwrap();

    assert_eq!(committed.label, 2);
    assert_eq!(committed.to_string(), "Zone 2 successfully saved.");
    assert_eq!(form.zone(2).unwrap(), &Zone::with_shelves(2, ["Rack1"]));
}

#[test]
fn test_duplicate_of_other_zone_leaves_state_untouched() {
    let form = with_zone(&FormState::new(), 2, &["Rack1"]);
    let form = form.select_zone(5).unwrap();

    let err = form.commit_zone(["Rack2", "Rack1"]).unwrap_err();

    assert!(matches!(err, FormError::DuplicateShelfName { ref name } if name == "Rack1"));
    assert_eq!(err.to_string(), "Duplicate shelf names are not allowed!");
    assert!(form.zone(5).unwrap().shelves.is_empty());
}

#[test]
fn test_recommitting_same_zone_may_reuse_its_own_names() {
    let form = with_zone(&FormState::new(), 4, &["A", "B"]);
    let (form, _) = form.commit_zone(["B", "A", "C"]).unwrap();

    assert_eq!(
        form.zone(4).unwrap().shelf_names().collect::<Vec<_>>(),
        vec!["B", "A", "C"]
    );
}

#[test]
fn test_repeat_inside_one_commit_is_rejected() {
    let form = FormState::new();
    assert!(matches!(
        form.commit_zone(["X", "X"]),
        Err(FormError::DuplicateShelfName { .. })
    ));
}

#[test]
fn test_blank_name_is_rejected() {
    let form = FormState::new();
    assert!(matches!(
        form.commit_zone(["A", "   "]),
        Err(FormError::BlankShelfName { slot: 2 })
    ));
}

#[test]
fn test_more_than_ten_names_is_rejected() {
    let names: Vec<String> = (0..11).map(|i| format!("S{i}")).collect();
    assert!(matches!(
        FormState::new().commit_zone(names),
        Err(FormError::TooManyShelves { count: 11 })
    ));
}

#[test]
fn test_commit_active_zone_uses_visible_slots_only() {
    let form = FormState::new()
        .select_zone(6)
        .unwrap()
        .adjust_shelf_count(ShelfDelta::Increase)
        .adjust_shelf_count(ShelfDelta::Increase)
        .adjust_shelf_count(ShelfDelta::Increase)
        .set_slot(0, "North")
        .unwrap()
        .set_slot(1, "South")
        .unwrap()
        .set_slot(2, "East")
        .unwrap()
        .adjust_shelf_count(ShelfDelta::Decrease);

    // Hidden slot text survives shrinking but is not committed.
    assert_eq!(form.slots()[2], "East");

    let (form, committed) = form.commit_active_zone().unwrap();
    assert_eq!(committed.label, 6);
    assert_eq!(
        form.zone(6).unwrap().shelf_names().collect::<Vec<_>>(),
        vec!["North", "South"]
    );
}

#[test]
fn test_set_slot_out_of_range() {
    assert!(matches!(
        FormState::new().set_slot(10, "x"),
        Err(FormError::SlotOutOfRange { index: 10 })
    ));
}

#[test]
fn test_committing_every_zone_keeps_twelve_ordered_entries() {
    let mut form = FormState::new();
    for label in 1..=12 {
        let (first, second) = (format!("S{label}"), format!("T{label}"));
        form = with_zone(&form, label, &[first.as_str()]);
        form = with_zone(&form, label, &[second.as_str()]);
    }

    assert_eq!(form.zones().len(), 12);
    for (zone, label) in form.zones().iter().zip(1..=12) {
        assert_eq!(zone, &Zone::with_shelves(label, [format!("T{label}")]));
    }
}

#[test]
fn test_reset_all_discards_everything() {
    let form = with_zone(&FormState::new(), 9, &["Q"]);
    assert_eq!(form.reset_all(), FormState::new());
}

#[tokio::test]
async fn test_submit_success_resets_form() {
    let api = ScriptedApi::accepting();
    let form = with_zone(&FormState::new(), 3, &["A", "B"]);

    let (next, created) = form.submit_all(&api).await.unwrap();

    assert_eq!(next, FormState::new());
    assert_eq!(created.warehouse_id, 7);
    assert_eq!(created.zone_count, 12);
    assert_eq!(created.shelf_count, 2);

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].len(), 12);
    assert_eq!(sent[0][2], Zone::with_shelves(3, ["A", "B"]));
}

#[tokio::test]
async fn test_submit_failure_keeps_form() {
    let api = ScriptedApi::rejecting("Shelf name Rack1 is used more than once");
    let form = with_zone(&FormState::new(), 3, &["A"]);

    let err = form.submit_all(&api).await.unwrap_err();

    assert!(matches!(
        err,
        FormError::Submit(ClientError::Validation { code: Some(1005), .. })
    ));
    assert_eq!(form.zone(3).unwrap().shelves.len(), 1);
}
