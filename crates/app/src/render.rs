use models::{Field, Resource};
use serde_json::Value;
use views::{FormViewModel, HomeViewModel, ListViewModel, LoadState, Screen};

/// Formats one field of a serialized entity
fn cell(entity: &Value, field: &Field) -> String {
    match entity.get(field.name) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Bool(false)) => "no".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Renders a list view-model as a tab-separated table, columns taken from the field schema
pub fn render_list<E: Resource>(title: &str, view: &ListViewModel<E>) -> String {
    let mut lines = vec![format!("{title} ({})", view.count)];

    match view.state {
        LoadState::Idle | LoadState::Loading => lines.push("Loading...".to_string()),
        LoadState::Failed => {
            if let Some(error) = &view.error {
                lines.push(format!("Error: {error}"));
            }
        }
        LoadState::Loaded if view.items.is_empty() => lines.push("(none)".to_string()),
        LoadState::Loaded => {
            let header: Vec<&str> = std::iter::once("id")
                .chain(E::FIELDS.iter().map(|f| f.label))
                .collect();
            lines.push(header.join("\t"));

            for item in &view.items {
                let value = serde_json::to_value(item).unwrap_or(Value::Null);
                let row: Vec<String> = std::iter::once(item.id().unwrap_or("-").to_string())
                    .chain(E::FIELDS.iter().map(|f| cell(&value, f)))
                    .collect();
                lines.push(row.join("\t"));
            }
        }
    }

    lines.join("\n")
}

/// Renders a form view-model as `label: value` lines, required fields marked with `*`
pub fn render_form<E: Screen>(view: &FormViewModel<E>) -> String {
    let title = match view.form.id() {
        Some(id) => format!("Edit {} {id}", E::KIND.singular()),
        None => format!("New {}", E::KIND.singular()),
    };
    let mut lines = vec![title];

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }

    let value = serde_json::to_value(&view.form).unwrap_or(Value::Null);
    for field in E::FIELDS {
        let marker = if field.required { "*" } else { "" };
        lines.push(format!("{}{marker}: {}", field.label, cell(&value, field)));
    }

    lines.join("\n")
}

/// Renders the dashboard; failed sections are called out below the tables
pub fn render_home(view: &HomeViewModel) -> String {
    let mut sections = vec![
        render_list("Bookings", &view.bookings),
        render_list("Rooms", &view.rooms),
        render_list("Customers", &view.customers),
    ];

    if !view.failed.is_empty() {
        let names: Vec<String> = view.failed.iter().map(ToString::to_string).collect();
        sections.push(format!("Could not load: {}", names.join(", ")));
    }

    sections.join("\n\n")
}
