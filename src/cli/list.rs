use tabled::Table;

use crate::{checklist::ALL_GROUPS, info, types::GroupOptionRow, warning};

use super::{load, session};

/// Prints the checklist, optionally restricted to one group.
///
/// # Example Usage
///
/// ```bash
/// apichecklist list
/// apichecklist list --group Pets
/// ```
pub async fn list(group: Option<String>) {
    let mut controller = session().await;
    if !load(&mut controller).await {
        return;
    }

    if let Some(group) = group {
        if !controller.select_group(&group) {
            warning!(
                "Unknown group {}. Available: {}",
                group,
                controller.state().group_names().join(", ")
            );
            return;
        }
    }

    print!("{}", controller.rendered());
}

/// Prints the filter options with how far each group is checked.
pub async fn groups() {
    let mut controller = session().await;
    if !load(&mut controller).await {
        return;
    }

    let snapshot = controller.state().snapshot();
    let rows: Vec<GroupOptionRow> = std::iter::once(GroupOptionRow {
        group: ALL_GROUPS.to_string(),
        apis: snapshot.values().map(Vec::len).sum(),
        checked: snapshot
            .values()
            .flatten()
            .filter(|api| api.checked)
            .count(),
    })
    .chain(snapshot.iter().map(|(name, apis)| GroupOptionRow {
        group: name.clone(),
        apis: apis.len(),
        checked: apis.iter().filter(|api| api.checked).count(),
    }))
    .collect();

    info!("{} groups", snapshot.len());
    println!("{}", Table::new(rows));
}
