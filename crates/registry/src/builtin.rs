//! The built-in task table.
//!
//! Operation names are the identifiers of the automation actions; the
//! registry never calls them.

use std::sync::Arc;

use tasklet_input::{HardSweepBox, NormalSweepBox, TeamBox};
use tasklet_types::{ParamKind, StageCatalogs};
use tracing::debug;

use crate::{ParamError, TaskParam, TaskParamBuilder, TaskRegistry};

fn param(key: &str, kind: ParamKind, title: &str, description: &str) -> TaskParamBuilder {
    TaskParam::builder(key).kind(kind).title(title).description(description)
}

/// Builds the registry of every built-in task.
///
/// Called once by the entry point; the sweep tasks validate against `catalogs`.
pub fn builtin_registry(catalogs: StageCatalogs) -> Result<TaskRegistry, ParamError> {
    let normal = Arc::new(catalogs.normal);
    let hard = Arc::new(catalogs.hard);

    let skip = || {
        param(
            "skip",
            ParamKind::Boolean,
            "Skip battle",
            "True: retreat from the first floor without fighting.\nFalse: clear the first floor.",
        )
        .build()
    };
    let club_name = || param("clubname", ParamKind::Text, "Guild name", "Name of the guild to join").build();
    let main_map = || {
        param(
            "map",
            ParamKind::Integer,
            "Main map",
            "If the furthest stage reached is A-B, the main map is A.",
        )
        .build()
    };

    let registry = TaskRegistry::new()
        .add("h1", "hanghui", "Guild donation", "Donate equipment to the guild automatically", None)
        .add("h2", "tichuhanghui", "Kick from guild", "Kick the top-ranked member out of the guild", None)
        .add(
            "h3",
            "yaoqinghanghui",
            "Invite to guild",
            "Invite a player into the guild",
            Some(vec![param("inviteUID", ParamKind::Text, "UID", "UID of the player to invite").build()?]),
        )
        .add("h4", "jieshouhanghui", "Accept guild invite", "Accept a pending guild invitation", None)
        .add("h5", "joinhanghui", "Join guild", "Search for a guild and join it", Some(vec![club_name()?]))
        .add(
            "h6",
            "dianzan",
            "Guild like",
            "Give a like to a guild member",
            Some(vec![
                param(
                    "sortflag",
                    ParamKind::Integer,
                    "Who to like",
                    "0 or 1\n0: like the vice leader.\n1: like the member with the highest power.",
                )
                .default_value(0)
                .build()?,
            ]),
        )
        .add("h7", "zhiyuan", "Support setup", "Set support characters by power ranking (highest)", None)
        .add(
            "h8",
            "joinhanghui",
            "Join guild",
            "Search for a guild and join it (full image recognition)",
            Some(vec![club_name()?]),
        )
        .add("d1", "dixiacheng_ocr", "Dungeon (OCR)", "Borrow a character in the dungeon for mana", Some(vec![skip()?]))
        .add("d2", "dixiacheng", "Dungeon", "Borrow a character in the dungeon for mana", Some(vec![skip()?]))
        .add("d3", "dixiachengYunhai", "Cloud sea dungeon", "Clear the cloud sea dungeon", None)
        .add("d4", "dixiachengDuanya", "Cliff dungeon", "Clear the cliff dungeon", None)
        .add(
            "d5",
            "shuatuDD",
            "Clear dungeon",
            "Generic dungeon clearing",
            Some(vec![
                param("dxc_id", ParamKind::Integer, "Dungeon id", "Which dungeon to clear.\nSupported: 3").build()?,
                param(
                    "mode",
                    ParamKind::Integer,
                    "Mode",
                    "mode 0: skip the boss, clear the small floors with team 1\n\
                     mode 1: fight the boss with teams 1, 2, 3... after clearing the floors with team 1\n\
                     mode 2: fight the boss with teams 2, 3... after clearing the floors with team 1",
                )
                .build()?,
                param(
                    "stop_criteria",
                    ParamKind::Integer,
                    "Stop condition",
                    "0: stop as soon as anyone falls in battle\n\
                     1: keep fighting until the current team is wiped out\n\
                     Meeting the condition on a small floor ends the run.\n\
                     In mode 2 the next team takes over against the boss until every team has fought.",
                )
                .default_value(0)
                .build()?,
                param(
                    "after_stop",
                    ParamKind::Integer,
                    "After stopping",
                    "0: return to the main page\n\
                     1: retreat, then return to the main page\n\
                     Also applies after the small floors when the boss is skipped.",
                )
                .default_value(0)
                .build()?,
                param(
                    "teams",
                    ParamKind::List,
                    "Team list",
                    "Teams used in the dungeon, in order: first, second, third...\n\
                     Each item is a string:\n\
                     empty: keep the previous team\n\
                     \"zhanli\": pick the five strongest by power ranking\n\
                     \"a-b\": team b (1 to 3) of formation group a (1 to 5)",
                )
                .input_box(TeamBox)
                .build()?,
            ]),
        )
        .add("j1", "doJJC", "Arena", "Fight in the arena", None)
        .add("j2", "doPJJC", "Princess arena", "Fight in the princess arena", None)
        .add("r1", "gonghuizhijia", "Guild home rewards", "Collect the guild home rewards", None)
        .add("r2", "mianfeiniudan", "Free gacha", "Draw the free gacha", None)
        .add("r3", "mianfeishilian", "Free 10-pull", "Draw the free 10-pull, if available", None)
        .add("r4", "shouqu", "Collect gifts", "Collect every gift", None)
        .add(
            "r5",
            "shouqurenwu",
            "Collect missions",
            "Collect every mission reward.\nWith both daily and story missions present this runs twice.",
            None,
        )
        .add(
            "r6",
            "goumaitili",
            "Buy stamina",
            "Buy stamina a number of times",
            Some(vec![param("times", ParamKind::Integer, "Purchases", "How many times to buy stamina").build()?]),
        )
        .add(
            "r7",
            "goumaimana",
            "Buy mana",
            "Buy mana a number of times",
            Some(vec![
                param(
                    "mode",
                    ParamKind::Integer,
                    "Mode",
                    "0: times counts single mana purchases\n1: times counts 10x mana purchases (costs gems)",
                )
                .default_value(1)
                .build()?,
                param(
                    "times",
                    ParamKind::Integer,
                    "Purchases",
                    "How many times to buy mana (the first single purchase is not counted)",
                )
                .build()?,
            ]),
        )
        .add("r8", "buyExp", "Buy experience", "Buy every experience potion in the shop", None)
        .add(
            "r9",
            "tansuo",
            "Exploration",
            "Run the exploration activity",
            Some(vec![
                param(
                    "mode",
                    ParamKind::Integer,
                    "Mode",
                    "An integer from 0 to 3\n\
                     mode 0: sweep the top stage\n\
                     mode 1: sweep the second stage\n\
                     mode 2: clear the top stage manually once, then sweep the second stage\n\
                     mode 3: clear the top stage manually once, then sweep the top stage",
                )
                .build()?,
            ]),
        )
        .add(
            "t1",
            "rename",
            "Rename",
            "Change the player name",
            Some(vec![param("name", ParamKind::Text, "New name", "Your new name").build()?]),
        )
        .add("s1", "shuajingyan", "Experience 1-1", "Sweep stage 1-1 for the best experience rate", Some(vec![main_map()?]))
        .add("s1-3", "shuajingyan3", "Experience 3-1", "Sweep stage 3-1, which uses fewer tickets", Some(vec![main_map()?]))
        .add(
            "s2",
            "shuatuNN",
            "Sweep normal stages",
            "Sweep the listed normal stages with tickets",
            Some(vec![
                param("tu_dict", ParamKind::List, "Sweep list", "Normal stages to sweep")
                    .input_box(NormalSweepBox::new(normal))
                    .build()?,
            ]),
        )
        .add(
            "s3",
            "shuatuHH",
            "Sweep hard stages",
            "Sweep the listed hard stages with tickets",
            Some(vec![
                param("tu_dict", ParamKind::List, "Sweep list", "Hard stages to sweep")
                    .input_box(HardSweepBox::new(hard))
                    .build()?,
            ]),
        )
        .add(
            "s4",
            "doActivityHard",
            "Sweep event stages",
            "Sweep event stages with tickets (coordinates change with every event)",
            None,
        );

    debug!(tasks = registry.len(), "built-in registry ready");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_builtin_task_is_registered_in_order() {
        let registry = builtin_registry(StageCatalogs::default()).expect("built-in registry");
        assert_eq!(registry.len(), 30);
        let first: Vec<&str> = registry.iter().take(3).map(|(abbreviation, _)| abbreviation).collect();
        assert_eq!(first, vec!["h1", "h2", "h3"]);
        assert_eq!(registry.iter().last().map(|(abbreviation, _)| abbreviation), Some("s4"));
    }

    #[test]
    fn dungeon_teams_use_the_team_editor() {
        let registry = builtin_registry(StageCatalogs::default()).unwrap();
        let task = registry.get("d5").unwrap();
        let keys: Vec<&str> = task.params.iter().map(TaskParam::key).collect();
        assert_eq!(keys, vec!["dxc_id", "mode", "stop_criteria", "after_stop", "teams"]);
        let teams = task.param("teams").unwrap();
        assert_eq!(teams.check(&json!(["1-2", "zhanli"]), false), Ok(true));
        assert_eq!(teams.check(&json!(["9-9"]), false), Ok(false));
    }

    #[test]
    fn sweep_tasks_validate_serialized_plans() {
        let registry = builtin_registry(StageCatalogs::default()).unwrap();
        let normal = registry.get("s2").unwrap().param("tu_dict").unwrap();
        assert_eq!(normal.check(&json!(["1-2-3"]), false), Ok(true));
        assert_eq!(normal.check(&json!(["1-2-x"]), false), Ok(false));
    }
}
