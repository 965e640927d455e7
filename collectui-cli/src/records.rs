use collectui::{
    CollectionConfig, CollectionEditorView, ConfirmRequest, DescriptorList, ItemSummary,
    ParentForm, Severity, Theme, parse_descriptor_sets,
};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const DESCRIPTORS: &str = include_str!("processo.descriptors.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub titulo: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citacao {
    pub autor: String,
    pub obra: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pagina: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub trecho: Option<String>,
}

/// A hearing scheduled for the case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audiencia {
    pub data: String,
    pub hora: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tipo: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub local: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub observacoes: Option<String>,
}

/// Optional text fields come back from the form as empty strings when left
/// blank; those are stored as absent.
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn tipo_label(tipo: &str) -> &str {
    match tipo {
        "conciliacao" => "Conciliação",
        "instrucao" => "Instrução e julgamento",
        "una" => "Una",
        "virtual" => "Virtual",
        other => other,
    }
}

/// Build the case form with its three embedded collections, pre-populated
/// from `record` when one was given.
pub fn processo_form(record: Option<Value>, readonly: bool) -> Result<ParentForm> {
    let descriptors: Value =
        serde_json::from_str(DESCRIPTORS).wrap_err("bundled descriptors are not valid JSON")?;
    let mut sets =
        parse_descriptor_sets(&descriptors).wrap_err("bundled descriptors are invalid")?;
    let mut take = |name: &str| -> Result<DescriptorList> {
        let position = sets
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| eyre!("no descriptors for collection `{name}`"))?;
        Ok(sets.swap_remove(position).1)
    };

    let links = CollectionConfig::new("Links", take("links")?, |link: &Link, _| {
        ItemSummary::new(&link.titulo).detail(&link.link)
    })
    .with_icon("🔗")
    .with_theme(Theme::Blue)
    .with_add_label("Add link")
    .with_empty_text("No links yet")
    .with_can_edit(!readonly);

    let citacoes = CollectionConfig::new("Citações", take("citacoes")?, |citacao: &Citacao, _| {
        let mut summary = ItemSummary::new(format!("{}, {}", citacao.autor, citacao.obra));
        if let Some(pagina) = &citacao.pagina {
            summary = summary.detail(format!("p. {pagina}"));
        }
        summary.detail(citacao.trecho.clone().unwrap_or_default())
    })
    .with_icon("❝")
    .with_theme(Theme::Purple)
    .with_add_label("Add citation")
    .with_empty_text("No citations yet")
    .with_can_edit(!readonly);

    let audiencias =
        CollectionConfig::new("Audiências", take("audiencias")?, |audiencia: &Audiencia, _| {
            let mut summary = ItemSummary::new(format!("{} {}", audiencia.data, audiencia.hora));
            if let Some(tipo) = &audiencia.tipo {
                summary = summary.detail(tipo_label(tipo));
            }
            summary.detail(audiencia.local.clone().unwrap_or_default())
        })
        .with_icon("⚖")
        .with_theme(Theme::Orange)
        .with_add_label("Schedule hearing")
        .with_empty_text("No hearings scheduled")
        .with_delete_confirmation(
            ConfirmRequest::new("Cancel hearing", "The hearing will be removed from this case.")
                .with_buttons("Remove", "Keep")
                .with_severity(Severity::Danger),
        )
        .with_can_edit(!readonly);

    let form = match record {
        Some(record) => ParentForm::from_record(record).map_err(Report::msg)?,
        None => ParentForm::new(),
    };
    form.with_collection("links", CollectionEditorView::new(links))
        .and_then(|form| form.with_collection("citacoes", CollectionEditorView::new(citacoes)))
        .and_then(|form| form.with_collection("audiencias", CollectionEditorView::new(audiencias)))
        .wrap_err("case record does not match its collections")
}
