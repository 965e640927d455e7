use serde_json::json;

use crate::domain::{DescriptorError, FieldKind, parse_descriptor_sets, parse_descriptors};

#[test]
fn parses_every_kind() {
    let list = parse_descriptors(&json!([
        { "name": "titulo", "label": "Título", "kind": "text", "required": true },
        { "name": "link", "label": "Link", "kind": "url", "placeholder": "https://" },
        { "name": "data", "label": "Data", "kind": "date" },
        { "name": "hora", "label": "Hora", "kind": "time" },
        { "name": "obs", "label": "Observações", "kind": "longText", "layoutFullWidth": true },
        {
            "name": "tipo", "label": "Tipo", "kind": "choice",
            "choices": [{ "value": "conciliacao", "label": "Conciliação" }]
        }
    ]))
    .expect("valid descriptors");

    assert_eq!(list.len(), 6);
    let kinds: Vec<_> = list.iter().map(|field| field.kind.key()).collect();
    assert_eq!(kinds, ["text", "url", "date", "time", "longText", "choice"]);
    assert!(list.get("titulo").expect("titulo").required);
    assert_eq!(list.get("link").and_then(|f| f.placeholder.as_deref()), Some("https://"));
    assert!(list.get("obs").expect("obs").full_width);
    assert!(matches!(&list.get("tipo").expect("tipo").kind, FieldKind::Choice(options) if options.len() == 1));
}

#[test]
fn unknown_kind_fails_fast() {
    let err = parse_descriptors(&json!([{ "name": "n", "label": "N", "kind": "number" }])).unwrap_err();
    assert_eq!(
        err,
        DescriptorError::UnknownKind {
            name: "n".into(),
            kind: "number".into()
        }
    );
}

#[test]
fn unknown_keys_are_malformed() {
    let err =
        parse_descriptors(&json!([{ "name": "n", "label": "N", "kind": "text", "size": 3 }])).unwrap_err();
    assert!(matches!(err, DescriptorError::Malformed { index: 0, .. }));
}

#[test]
fn choice_without_options_is_rejected() {
    let err = parse_descriptors(&json!([{ "name": "tipo", "label": "Tipo", "kind": "choice" }])).unwrap_err();
    assert_eq!(err, DescriptorError::MissingChoices("tipo".into()));
}

#[test]
fn parses_sets_by_collection() {
    let sets = parse_descriptor_sets(&json!({
        "links": [{ "name": "titulo", "label": "Título", "kind": "text" }],
        "citacoes": [{ "name": "autor", "label": "Autor", "kind": "text" }]
    }))
    .expect("valid sets");
    let names: Vec<_> = sets.iter().map(|(name, _)| name.as_str()).collect();
    assert!(names.contains(&"links"));
    assert!(names.contains(&"citacoes"));
    assert!(parse_descriptor_sets(&json!([])).is_err());
}

#[test]
fn choices_on_other_kinds_are_malformed() {
    let err = parse_descriptors(&json!([
        { "name": "titulo", "label": "Título", "kind": "text" },
        {
            "name": "local", "label": "Local", "kind": "text",
            "choices": [{ "value": "sp", "label": "São Paulo" }]
        }
    ]))
    .unwrap_err();
    assert!(matches!(err, DescriptorError::Malformed { index: 1, .. }));
    assert!(err.to_string().contains("must not declare choices"));
}
