//! Team roster import from CSV (`id,name` with a header row).

use crate::models::{Team, TournamentError};
use serde::Deserialize;
use std::io::Read;
use uuid::Uuid;

#[derive(Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
}

/// Read teams from CSV. A blank id gets a fresh one; a row without a name is rejected.
pub fn teams_from_csv<R: Read>(reader: R) -> Result<Vec<Team>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut teams = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        // Row 1 is the header.
        let line = i + 2;
        let row = row.map_err(|e| {
            TournamentError::InvalidInput(format!("roster row {}: {}", line, e))
        })?;
        if row.name.is_empty() {
            return Err(TournamentError::InvalidInput(format!(
                "roster row {}: team name is empty",
                line
            )));
        }
        let id = row
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        teams.push(Team::new(id, row.name));
    }
    Ok(teams)
}
