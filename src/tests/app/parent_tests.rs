use serde_json::json;

use crate::app::{CollectionPanel, ParentForm};
use crate::form::{CollectionEditorView, RecordError};
use crate::tests::{Link, link_config, link_editor};

#[test]
fn attach_mirrors_an_empty_collection() {
    let form = ParentForm::new()
        .with_collection("links", link_editor())
        .expect("attach");
    assert_eq!(form.to_value(), json!({ "links": [] }));
    assert!(!form.is_dirty());
}

#[test]
fn attach_loads_items_from_an_existing_record() {
    let record = json!({
        "numero": "0001234-56.2024.8.26.0100",
        "links": [{ "titulo": "STJ", "link": "https://stj.jus.br" }],
    });
    let form = ParentForm::from_record(record)
        .expect("object record")
        .with_collection("links", link_editor())
        .expect("attach");

    let panel = form.panel(0).expect("panel");
    assert_eq!(panel.title(), "Links");
    assert!(panel.can_view_list());
    assert_eq!(form.record()["numero"], json!("0001234-56.2024.8.26.0100"));
}

#[test]
fn attach_rejects_malformed_collections() {
    let mut form = ParentForm::from_record(json!({ "links": "nope" })).expect("object record");
    let err = form.attach("links", link_editor()).unwrap_err();
    assert!(matches!(err, RecordError::NotAnArray { .. }));

    let mut form =
        ParentForm::from_record(json!({ "links": [{ "titulo": "STJ" }] })).expect("object record");
    let err = form.attach("links", link_editor()).unwrap_err();
    assert!(matches!(err, RecordError::Decode { .. }));
}

#[test]
fn null_collection_loads_as_empty() {
    let form = ParentForm::from_record(json!({ "numero": "42", "links": null }))
        .expect("object record")
        .with_collection("links", link_editor())
        .expect("attach");

    assert_eq!(form.record()["links"], json!([]));
    assert!(!form.panel(0).expect("panel").can_view_list());
}

#[test]
fn non_object_record_is_refused() {
    assert!(ParentForm::from_record(json!([1, 2])).is_err());
}

#[test]
fn sync_projects_committed_items_only() {
    let mut form = ParentForm::new()
        .with_collection("links", link_editor())
        .expect("attach");
    let panel = form.panel_mut(0).expect("panel");
    panel.open_add();
    panel.focus_field(0);
    for ch in "STJ".chars() {
        panel.edit_focused(crate::form::TextEdit::Insert(ch));
    }

    assert!(!form.sync());
    assert_eq!(form.record()["links"], json!([]));
    assert!(!form.is_dirty());

    let panel = form.panel_mut(0).expect("panel");
    panel.focus_field(1);
    for ch in "https://stj.jus.br".chars() {
        panel.edit_focused(crate::form::TextEdit::Insert(ch));
    }
    assert!(panel.save().is_saved());

    assert!(form.sync());
    assert_eq!(
        form.record()["links"],
        json!([{ "titulo": "STJ", "link": "https://stj.jus.br" }])
    );
    assert!(form.is_dirty());
    assert!(!form.sync());

    form.mark_saved();
    assert!(!form.is_dirty());
}

#[test]
fn each_collection_keeps_its_own_field() {
    let view = CollectionEditorView::with_items(
        link_config(),
        vec![Link::new("STF", "https://stf.jus.br")],
    );
    let mut form = ParentForm::new()
        .with_collection("links", link_editor())
        .expect("attach")
        .with_collection("fontes", view)
        .expect("attach");

    assert_eq!(form.len(), 2);
    assert_eq!(form.field_name(1), Some("fontes"));
    let panel = form.panel_mut(1).expect("panel");
    panel.open_list();
    panel.delete_selected();
    assert!(panel.resolve_delete(true));
    assert!(form.sync());

    assert_eq!(form.to_value(), json!({ "links": [], "fontes": [] }));
}
