use serde_json::json;

use crate::form::{ArrayEditController, Record};
use crate::tests::Link;

fn seeded() -> ArrayEditController<Link> {
    ArrayEditController::with_items(vec![
        Link::new("STJ", "https://stj.jus.br"),
        Link::new("STF", "https://stf.jus.br"),
        Link::new("TST", "https://tst.jus.br"),
    ])
}

#[test]
fn append_keeps_existing_items_in_order() {
    let mut controller = seeded();
    let before = controller.items().to_vec();
    controller.append(Link::new("TRF1", "https://trf1.jus.br"));

    assert_eq!(controller.len(), 4);
    assert_eq!(&controller.items()[..3], before.as_slice());
    assert_eq!(controller.items()[3].titulo, "TRF1");
    assert!(controller.draft().is_empty());
    assert_eq!(controller.edit_cursor(), None);
}

#[test]
fn replace_touches_only_the_target_index() {
    let mut controller = seeded();
    controller.begin_edit(1);
    controller.replace(1, Link::new("STF (novo)", "https://portal.stf.jus.br"));

    assert_eq!(controller.len(), 3);
    assert_eq!(controller.items()[0].titulo, "STJ");
    assert_eq!(controller.items()[1].titulo, "STF (novo)");
    assert_eq!(controller.items()[2].titulo, "TST");
    assert!(!controller.is_editing());
    assert!(controller.draft().is_empty());
}

#[test]
fn replace_out_of_range_changes_nothing() {
    let mut controller = seeded();
    controller.begin_edit(0);
    let revision = controller.revision();
    controller.replace(7, Link::new("x", "y"));

    assert_eq!(controller.len(), 3);
    assert_eq!(controller.edit_cursor(), Some(0));
    assert_eq!(controller.draft().text("titulo"), Some("STJ"));
    assert_eq!(controller.revision(), revision);
}

#[test]
fn remove_shifts_later_items_down() {
    let mut controller = seeded();
    controller.remove(0);

    let titles: Vec<_> = controller.items().iter().map(|l| l.titulo.as_str()).collect();
    assert_eq!(titles, ["STF", "TST"]);
}

#[test]
fn remove_out_of_range_is_ignored() {
    let mut controller = seeded();
    let revision = controller.revision();
    controller.remove(3);
    assert_eq!(controller.len(), 3);
    assert_eq!(controller.revision(), revision);
}

#[test]
fn removing_the_edited_item_drops_the_draft() {
    let mut controller = seeded();
    controller.begin_edit(1);
    controller.remove(1);

    assert_eq!(controller.edit_cursor(), None);
    assert!(controller.draft().is_empty());
}

#[test]
fn removing_before_the_cursor_keeps_it_on_the_same_record() {
    let mut controller = seeded();
    controller.begin_edit(2);
    controller.remove(0);

    assert_eq!(controller.edit_cursor(), Some(1));
    assert_eq!(controller.items()[1].titulo, "TST");
    assert_eq!(controller.draft().text("titulo"), Some("TST"));
}

#[test]
fn draft_edits_never_touch_items() {
    let mut controller = seeded();
    controller.begin_edit(0);
    controller.set_draft_field("titulo", json!("Alterado"));

    assert_eq!(controller.items()[0].titulo, "STJ");
    assert_eq!(controller.draft().text("titulo"), Some("Alterado"));
    assert_eq!(controller.draft().text("link"), Some("https://stj.jus.br"));
}

#[test]
fn begin_edit_copies_the_record_and_cancel_discards_it() {
    let mut controller = seeded();
    controller.begin_edit(2);
    assert_eq!(controller.draft(), &controller.items()[2].to_draft());
    assert_eq!(controller.edit_cursor(), Some(2));

    controller.cancel_edit();
    assert_eq!(controller.edit_cursor(), None);
    assert!(controller.draft().is_empty());
    assert_eq!(controller.len(), 3);
}

#[test]
fn begin_edit_past_end_is_ignored() {
    let mut controller = seeded();
    controller.begin_edit(9);
    assert_eq!(controller.edit_cursor(), None);
    assert!(controller.draft().is_empty());
}

#[test]
fn revision_tracks_item_changes_only() {
    let mut controller: ArrayEditController<Link> = ArrayEditController::new();
    assert_eq!(controller.revision(), 0);

    controller.set_draft_field("titulo", json!("STJ"));
    controller.begin_edit(0);
    assert_eq!(controller.revision(), 0);

    controller.append(Link::new("STJ", "https://stj.jus.br"));
    controller.replace(0, Link::new("STF", "https://stf.jus.br"));
    controller.remove(0);
    assert_eq!(controller.revision(), 3);

    controller.set_items(vec![Link::new("TST", "https://tst.jus.br")]);
    assert_eq!(controller.revision(), 4);
    assert_eq!(
        controller.items_value(),
        json!([{ "titulo": "TST", "link": "https://tst.jus.br" }])
    );
}

#[test]
fn loading_a_shorter_list_drops_an_unreachable_edit() {
    let mut controller = seeded();
    controller.begin_edit(2);
    controller.set_items(vec![Link::new("TRF1", "https://trf1.jus.br")]);

    assert_eq!(controller.len(), 1);
    assert_eq!(controller.edit_cursor(), None);
    assert!(controller.draft().is_empty());
}

#[test]
fn loading_keeps_an_edit_still_in_range() {
    let mut controller = seeded();
    controller.begin_edit(0);
    controller.set_draft_field("titulo", json!("STJ (rascunho)"));
    controller.set_items(vec![
        Link::new("TRF1", "https://trf1.jus.br"),
        Link::new("TRF2", "https://trf2.jus.br"),
    ]);

    assert_eq!(controller.edit_cursor(), Some(0));
    assert_eq!(controller.draft().text("titulo"), Some("STJ (rascunho)"));
}
