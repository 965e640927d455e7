use std::cell::Cell;

use serde_json::{Value, json};

use crate::domain::{DescriptorList, FieldDescriptor};
use crate::form::{
    CollectionConfig, CollectionEditorView, ConfirmRequest, ItemSummary, ModalState, SaveOutcome,
    TextEdit,
};
use crate::tests::{Link, link_config, link_editor};

fn fill(view: &mut CollectionEditorView<Link>, titulo: &str, link: &str) {
    assert!(view.change_field("titulo", json!(titulo)));
    assert!(view.change_field("link", json!(link)));
}

fn with_two() -> CollectionEditorView<Link> {
    CollectionEditorView::with_items(
        link_config(),
        vec![
            Link::new("STJ", "https://stj.jus.br"),
            Link::new("STF", "https://stf.jus.br"),
        ],
    )
}

#[test]
fn adds_a_link_to_an_empty_collection() {
    let mut view = link_editor();
    assert!(view.open_add());
    fill(&mut view, "STJ", "https://stj.jus.br");

    assert_eq!(view.save(), SaveOutcome::Appended(0));
    assert_eq!(view.items(), &[Link::new("STJ", "https://stj.jus.br")]);
    assert_eq!(view.modal(), ModalState::Closed);
    assert!(view.draft().is_empty());
}

#[test]
fn save_with_a_missing_required_field_changes_nothing() {
    let mut view = link_editor();
    view.open_add();
    view.change_field("titulo", json!("STJ"));

    let outcome = view.save();
    assert_eq!(
        outcome,
        SaveOutcome::Invalid {
            missing: vec!["link".to_string()]
        }
    );
    assert!(view.items().is_empty());
    assert!(matches!(view.modal(), ModalState::Form { .. }));
    assert_eq!(view.draft().text("titulo"), Some("STJ"));
    assert_eq!(view.notice(), Some("Required field(s) missing: Link"));
}

#[test]
fn whitespace_only_values_count_as_missing() {
    let mut view = link_editor();
    view.open_add();
    fill(&mut view, "   ", "https://stj.jus.br");
    assert!(!view.is_draft_valid());
    assert!(!view.save().is_saved());
    assert!(view.items().is_empty());
}

#[test]
fn notice_clears_once_the_draft_becomes_valid() {
    let mut view = link_editor();
    view.open_add();
    view.save();
    assert!(view.notice().is_some());
    view.change_field("titulo", json!("STJ"));
    assert!(view.notice().is_some());
    view.change_field("link", json!("https://stj.jus.br"));
    assert_eq!(view.notice(), None);
}

#[test]
fn editing_replaces_in_place() {
    let mut view = with_two();
    assert!(view.open_edit(0));
    assert_eq!(view.draft().text("titulo"), Some("STJ"));
    view.change_field("titulo", json!("Superior Tribunal de Justiça"));

    assert_eq!(view.save(), SaveOutcome::Replaced(0));
    assert_eq!(view.items()[0].titulo, "Superior Tribunal de Justiça");
    assert_eq!(view.items()[0].link, "https://stj.jus.br");
    assert_eq!(view.items()[1].titulo, "STF");
    assert_eq!(view.items().len(), 2);
}

#[test]
fn cancelling_an_edit_leaves_items_untouched() {
    let mut view = with_two();
    view.open_edit(1);
    view.change_field("titulo", json!("rascunho"));
    assert!(view.cancel());

    assert_eq!(view.items()[1].titulo, "STF");
    assert!(view.draft().is_empty());
    assert_eq!(view.controller().edit_cursor(), None);
    assert_eq!(view.modal(), ModalState::Closed);
}

#[test]
fn declined_delete_keeps_the_item() {
    let mut view = with_two();
    let asked = Cell::new(0);
    let removed = view.delete_with(
        &mut |_: &ConfirmRequest| {
            asked.set(asked.get() + 1);
            false
        },
        0,
    );

    assert!(!removed);
    assert_eq!(asked.get(), 1);
    assert_eq!(view.items().len(), 2);
    assert_eq!(view.modal(), ModalState::Closed);
}

#[test]
fn confirmed_delete_removes_exactly_one_item() {
    let mut view = with_two();
    let removed = view.delete_with(&mut |_: &ConfirmRequest| true, 0);

    assert!(removed);
    assert_eq!(view.items(), &[Link::new("STF", "https://stf.jus.br")]);
}

#[test]
fn delete_prompt_names_the_item() {
    let mut view = with_two();
    let request = view.request_delete(1).expect("prompt");
    assert_eq!(request.title, "Remove entry");
    assert!(request.message.ends_with("STF"));
    assert_eq!(view.modal(), ModalState::Confirm { index: 1, from_list: false });

    assert!(view.cancel());
    assert_eq!(view.items().len(), 2);
}

#[test]
fn delete_is_refused_while_the_form_is_open() {
    let mut view = with_two();
    view.open_edit(0);
    assert_eq!(view.request_delete(0), None);
    assert!(!view.delete_with(&mut |_: &ConfirmRequest| true, 0));
    assert_eq!(view.items().len(), 2);
}

#[test]
fn list_delete_returns_to_the_list() {
    let mut view = with_two();
    assert!(view.open_list());
    view.list_select(1);
    assert_eq!(view.modal(), ModalState::List { selected: 1 });

    assert!(view.delete_selected().is_some());
    assert!(view.resolve_delete(true));
    assert_eq!(view.modal(), ModalState::List { selected: 0 });

    view.delete_selected();
    view.resolve_delete(true);
    assert!(view.items().is_empty());
    assert_eq!(view.modal(), ModalState::Closed);
}

#[test]
fn list_requires_items() {
    let mut view = link_editor();
    assert!(!view.can_view_list());
    assert!(!view.open_list());
    assert_eq!(view.modal(), ModalState::Closed);
}

#[test]
fn edit_from_list_replaces_the_selected_item() {
    let mut view = with_two();
    view.open_list();
    view.list_select(5);
    assert!(view.edit_selected());
    assert_eq!(view.controller().edit_cursor(), Some(1));
    view.change_field("link", json!("https://portal.stf.jus.br"));
    assert_eq!(view.save(), SaveOutcome::Replaced(1));
    assert_eq!(view.items()[1].link, "https://portal.stf.jus.br");
}

#[test]
fn reopening_add_starts_from_a_blank_draft() {
    let mut view = link_editor();
    view.open_add();
    view.change_field("titulo", json!("meio"));
    view.cancel();
    view.open_add();
    assert!(view.draft().is_empty());
}

#[test]
fn read_only_collection_refuses_edits() {
    let config = link_config().with_can_edit(false);
    let mut view =
        CollectionEditorView::with_items(config, vec![Link::new("STJ", "https://stj.jus.br")]);

    assert!(!view.open_add());
    assert!(!view.open_edit(0));
    assert_eq!(view.request_delete(0), None);
    assert!(view.open_list());
    assert!(!view.edit_selected());
}

#[test]
fn change_field_needs_an_open_form_and_a_known_name() {
    let mut view = link_editor();
    assert!(!view.change_field("titulo", json!("STJ")));
    view.open_add();
    assert!(!view.change_field("desconhecido", json!("x")));
    assert!(view.draft().get("desconhecido").is_none());
}

#[test]
fn reloading_items_closes_an_open_edit() {
    let mut view = with_two();
    view.open_edit(1);
    view.change_field("titulo", json!("STF (rascunho)"));
    view.set_items(vec![
        Link::new("TRF1", "https://trf1.jus.br"),
        Link::new("TRF2", "https://trf2.jus.br"),
    ]);

    assert_eq!(view.modal(), ModalState::Closed);
    assert!(view.draft().is_empty());
    assert_eq!(view.controller().edit_cursor(), None);
    assert_eq!(view.save(), SaveOutcome::NotOpen);
    assert_eq!(view.items()[1].titulo, "TRF2");
}

#[test]
fn reloading_a_shorter_list_keeps_the_list_in_range() {
    let mut view = with_two();
    view.open_list();
    view.list_select(1);
    view.set_items(vec![Link::new("STJ", "https://stj.jus.br")]);
    assert_eq!(view.modal(), ModalState::List { selected: 0 });

    view.set_items(Vec::new());
    assert_eq!(view.modal(), ModalState::Closed);
}

fn audiencias(required: bool) -> CollectionEditorView<Audiencia> {
    let descriptors = DescriptorList::new(vec![
        FieldDescriptor::date("data", "Data").required(),
        FieldDescriptor::choice("tipo", "Tipo", [("una", "Una"), ("virtual", "Virtual")])
            .with_required(required),
    ])
    .expect("descriptors");
    CollectionEditorView::new(CollectionConfig::new("Audiências", descriptors, |a: &Audiencia, _| {
        ItemSummary::new(a.data.clone())
    }))
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Audiencia {
    data: String,
    #[serde(default)]
    tipo: Option<String>,
}

#[test]
fn choice_fields_only_take_declared_values() {
    let mut view = audiencias(true);
    view.open_add();
    view.change_field("data", json!("2024-05-10"));

    assert!(!view.change_field("tipo", json!("bogus")));
    assert!(!view.change_field("tipo", Value::Null));
    assert!(!view.change_field("tipo", json!(3)));
    assert!(view.draft().get("tipo").is_none());
    assert!(matches!(view.save(), SaveOutcome::Invalid { .. }));
    assert!(view.items().is_empty());

    assert!(view.change_field("tipo", json!("una")));
    assert_eq!(view.save(), SaveOutcome::Appended(0));
    assert_eq!(view.items()[0].tipo.as_deref(), Some("una"));
}

#[test]
fn optional_choice_can_be_cleared() {
    let mut view = audiencias(false);
    view.open_add();
    view.change_field("data", json!("2024-05-10"));
    assert!(view.change_field("tipo", json!("virtual")));
    assert!(view.change_field("tipo", Value::Null));
    assert_eq!(view.save(), SaveOutcome::Appended(0));
    assert_eq!(view.items()[0].tipo, None);
}

#[test]
fn typing_goes_to_the_focused_field() {
    let mut view = link_editor();
    view.open_add();
    for ch in "STJ".chars() {
        view.edit_focused(TextEdit::Insert(ch));
    }
    assert!(view.focus_field(1));
    assert_eq!(view.focused_field().map(|f| f.name.as_str()), Some("link"));
    view.edit_focused(TextEdit::Insert('h'));
    view.edit_focused(TextEdit::Backspace);
    assert!(!view.edit_focused(TextEdit::Backspace));

    assert_eq!(view.draft().text("titulo"), Some("STJ"));
    assert_eq!(view.draft().text("link"), Some(""));
    view.focus_field(1);
    assert_eq!(view.focused_field().map(|f| f.name.as_str()), Some("titulo"));
}

#[test]
fn format_hints_do_not_block_saving() {
    let mut view = link_editor();
    view.open_add();
    fill(&mut view, "STJ", "stj.jus.br");
    assert_eq!(view.format_warnings().len(), 1);
    assert_eq!(view.save(), SaveOutcome::Appended(0));
}

#[test]
fn summaries_use_the_render_callback() {
    let view = with_two();
    let summaries = view.summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].headline, "STF");
    assert_eq!(summaries[1].details, ["https://stf.jus.br"]);
}

#[test]
fn optional_fields_may_be_left_out() {
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Citacao {
        autor: String,
        #[serde(default)]
        pagina: Option<String>,
    }

    let descriptors = DescriptorList::new(vec![
        FieldDescriptor::text("autor", "Autor").required(),
        FieldDescriptor::text("pagina", "Página"),
    ])
    .expect("descriptors");
    let config = CollectionConfig::new("Citações", descriptors, |c: &Citacao, _| {
        ItemSummary::new(c.autor.clone())
    });
    let mut view = CollectionEditorView::new(config);
    view.open_add();
    view.change_field("autor", json!("Pontes de Miranda"));
    view.change_field("pagina", Value::Null);

    assert_eq!(view.save(), SaveOutcome::Appended(0));
    assert_eq!(view.items()[0].pagina, None);
}
