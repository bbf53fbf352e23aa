//! Team, sprint and student listings

use teamgrade::config::ClientConfig;
use teamgrade::output::{Listing, OutputMode};
use teamgrade::services::{sprint, student, team};

use super::context;

/// List teams, or show one
pub async fn teams(id: Option<i64>, output_mode: OutputMode) -> anyhow::Result<()> {
    let api = context::connect(&ClientConfig::load())?;
    let teams = match id {
        Some(id) => vec![team::get_team_by_id(&api, id).await?],
        None => team::get_teams(&api).await?,
    };

    let mut listing = Listing::new("Teams");
    for team in teams {
        let leader = team.leader.map(|leader| format!("leader: {}", leader.name));
        listing.push(team.id, team.name, leader);
    }
    listing.render(output_mode);
    Ok(())
}

/// List sprints in order
pub async fn sprints(graded: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let api = context::connect(&ClientConfig::load())?;
    let sprints = if graded {
        sprint::get_graded_sprints(&api).await?
    } else {
        sprint::get_sprints(&api).await?
    };

    let today = chrono::Local::now().date_naive();
    let mut listing = Listing::new("Sprints");
    for sprint in &sprints {
        let mut detail = format!("{} → {}", sprint.start_date, sprint.end_date);
        if sprint.contains(today) {
            detail.push_str(" (current)");
        }
        listing.push(sprint.id, format!("Sprint {}", sprint.sprint_order), Some(detail));
    }
    listing.render(output_mode);
    Ok(())
}

/// List students, optionally of one team
pub async fn students(team_id: Option<i64>, output_mode: OutputMode) -> anyhow::Result<()> {
    let api = context::connect(&ClientConfig::load())?;
    let students = match team_id {
        Some(team_id) => student::get_students_by_team_id(&api, team_id, true).await?,
        None => student::get_all_students(&api).await?,
    };

    let mut listing = Listing::new("Students");
    for student in students {
        let team = student.team.map(|team| team.name);
        listing.push(student.id, student.name, team);
    }
    listing.render(output_mode);
    Ok(())
}
