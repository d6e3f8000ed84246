use ringside_core::AppState;
use ringside_core::batch::{ReplayJob, stage_batch};
use ringside_core::reader::read_replay_file;
use ringside_types::formatting::format_thousands;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Analyze transcripts and fold the results into the session roster.
///
/// File reads and staging run without the write lock; it is taken only
/// to apply the merges at the end.
pub async fn analyze(paths: &[String], state: Arc<RwLock<AppState>>) -> Result<(), String> {
    if paths.is_empty() {
        return Err("error: no transcript paths given".to_string());
    }

    let resolved: Vec<(String, PathBuf)> = {
        let state = state.read().await;
        paths
            .iter()
            .map(|p| (p.clone(), state.resolve_replay_path(p)))
            .collect()
    };

    let mut jobs = Vec::new();
    for (source, path) in resolved {
        match read_replay_file(&path) {
            Ok(events) => jobs.push(ReplayJob { source, events }),
            Err(error) => {
                tracing::warn!(%source, %error, "replay unreadable");
                println!("skipping {source}: {error}");
            }
        }
    }
    if jobs.is_empty() {
        return Err("error: no readable transcripts".to_string());
    }

    let snapshot = state.read().await.roster.clone();
    let (reports, failures) = stage_batch(&jobs, &snapshot);
    for failure in &failures {
        println!("skipping {}: {}", failure.source, failure.error);
    }

    let mut state = state.write().await;
    for report in &reports {
        tracing::info!(match_id = %report.match_id, "merging match report");
        println!("merged match {}", report.match_id);
        state.roster.merge_report(report);
    }
    println!(
        "{} match(es) merged, {} skipped",
        reports.len(),
        failures.len()
    );
    Ok(())
}

pub async fn roster(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let state = state.read().await;
    if state.roster.is_empty() {
        println!("roster is empty, run analyze first");
        return Ok(());
    }

    let mut players: Vec<&str> = state.roster.players().collect();
    players.sort_unstable();
    println!("{:<20} {:>9} {:>12} {:>6}", "Player", "Team", "Damage", "Kills");
    for player in players {
        let team = state.roster.team(player).expect("player listed");
        let damage: i64 = team.species_entries().map(|c| c.total_damage()).sum();
        let kills: u32 = team.species_entries().map(|c| c.kills).sum();
        println!(
            "{:<20} {:>9} {:>12} {:>6}",
            player,
            team.len(),
            format_thousands(damage),
            kills
        );
    }
    Ok(())
}

pub async fn show(player: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let state = state.read().await;
    let Some(team) = state.roster.team(player) else {
        return Err(format!("error: no roster entry for '{player}'"));
    };

    println!(
        "{:<16} {:<12} {:>7} {:>12} {:>6} {:>6}",
        "Species", "Nickname", "Matches", "Damage", "Kills", "Turns"
    );
    for combatant in team.species_entries() {
        println!(
            "{:<16} {:<12} {:>7} {:>12} {:>6} {:>6}",
            combatant.species(),
            combatant.nickname().unwrap_or("-"),
            combatant.matches_played(),
            format_thousands(combatant.total_damage()),
            combatant.total_kills(),
            combatant.total_turns()
        );
    }
    Ok(())
}

pub async fn export(path: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let json = {
        let state = state.read().await;
        state.roster.export_json().map_err(|e| e.to_string())?
    };
    std::fs::write(path, json).map_err(|e| e.to_string())?;
    println!("roster written to {path}");
    Ok(())
}

pub async fn set_directory(path: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    if !std::path::Path::new(path).is_dir() {
        return Err(format!("error: '{path}' is not a directory"));
    }
    let mut state = state.write().await;
    state.config.replay_directory = path.to_string();
    state.save_config().map_err(|e| e.to_string())?;
    println!("replay directory set to {path}");
    Ok(())
}

pub async fn show_settings(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let state = state.read().await;
    println!("replay_directory = {}", state.config.replay_directory);
    Ok(())
}

pub fn exit() {
    println!("bye");
}
