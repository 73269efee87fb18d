//! Team name normalization and matchup key generation.
//!
//! The two providers spell team names differently ("LA Lakers" vs
//! "Los Angeles Lakers"), so games are joined on a canonicalized
//! `away@home` key rather than on raw display names.

use std::collections::HashMap;

/// Configuration for normalization
#[derive(Debug, Clone)]
pub struct NormalizationConfig {
    /// Team alias dictionary (maps variant spellings to the canonical name)
    pub team_aliases: HashMap<String, String>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            team_aliases: build_default_aliases(),
        }
    }
}

/// Normalize a team name to a canonical form.
///
/// Rules applied:
/// 1. Lowercase
/// 2. Strip period characters
/// 3. Collapse whitespace runs to a single space, trim the ends
/// 4. Apply the team alias dictionary
///
/// Empty or absent input normalizes to the empty string, not an error.
///
/// Two distinct raw names collapsing to the same key would make the
/// downstream join ambiguous; that is an accepted data-quality
/// limitation of the source feeds.
pub fn normalize_team_name(name: &str, config: &NormalizationConfig) -> String {
    let lowered = name.to_lowercase().replace('.', "");
    let cleaned = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    match config.team_aliases.get(&cleaned) {
        Some(canonical) => canonical.clone(),
        None => cleaned,
    }
}

/// Build the join key for a matchup: `"{away}@{home}"` with both sides
/// normalized.
///
/// Both providers list games as away-at-home, so the key is directional
/// rather than symmetric.
pub fn matchup_key(away: &str, home: &str, config: &NormalizationConfig) -> String {
    format!(
        "{}@{}",
        normalize_team_name(away, config),
        normalize_team_name(home, config)
    )
}

/// Build the default team alias dictionary.
///
/// Covers the 30 NBA franchises; every canonical name maps to itself so
/// that normalization is idempotent, and each franchise carries at least
/// one common abbreviation seen in the odds and statistics feeds.
/// Aliases are stored pre-cleaned (lowercase, no periods).
fn build_default_aliases() -> HashMap<String, String> {
    let mut aliases = HashMap::new();

    add_aliases(&mut aliases, "atlanta hawks", &["atl hawks", "hawks"]);
    add_aliases(&mut aliases, "boston celtics", &["bos celtics", "celtics"]);
    add_aliases(
        &mut aliases,
        "brooklyn nets",
        &["bkn nets", "bklyn nets", "nets"],
    );
    add_aliases(&mut aliases, "charlotte hornets", &["cha hornets"]);
    add_aliases(&mut aliases, "chicago bulls", &["chi bulls", "bulls"]);
    add_aliases(
        &mut aliases,
        "cleveland cavaliers",
        &["cle cavaliers", "cavaliers", "cavs"],
    );
    add_aliases(
        &mut aliases,
        "dallas mavericks",
        &["dal mavericks", "mavericks", "mavs"],
    );
    add_aliases(&mut aliases, "denver nuggets", &["den nuggets", "nuggets"]);
    add_aliases(&mut aliases, "detroit pistons", &["det pistons", "pistons"]);
    add_aliases(
        &mut aliases,
        "golden state warriors",
        &["gs warriors", "gsw", "warriors"],
    );
    add_aliases(&mut aliases, "houston rockets", &["hou rockets", "rockets"]);
    add_aliases(&mut aliases, "indiana pacers", &["ind pacers", "pacers"]);
    add_aliases(
        &mut aliases,
        "los angeles clippers",
        &["la clippers", "lac"],
    );
    add_aliases(&mut aliases, "los angeles lakers", &["la lakers", "lal"]);
    add_aliases(
        &mut aliases,
        "memphis grizzlies",
        &["mem grizzlies", "grizzlies"],
    );
    add_aliases(&mut aliases, "miami heat", &["mia heat", "heat"]);
    add_aliases(&mut aliases, "milwaukee bucks", &["mil bucks", "bucks"]);
    add_aliases(
        &mut aliases,
        "minnesota timberwolves",
        &["minnesota wolves", "min timberwolves", "timberwolves"],
    );
    add_aliases(
        &mut aliases,
        "new orleans pelicans",
        &["no pelicans", "nop", "pelicans"],
    );
    add_aliases(&mut aliases, "new york knicks", &["ny knicks", "knicks"]);
    add_aliases(
        &mut aliases,
        "oklahoma city thunder",
        &["okc thunder", "thunder"],
    );
    add_aliases(&mut aliases, "orlando magic", &["orl magic", "magic"]);
    add_aliases(
        &mut aliases,
        "philadelphia 76ers",
        &["phi 76ers", "76ers", "sixers"],
    );
    add_aliases(&mut aliases, "phoenix suns", &["phx suns", "suns"]);
    add_aliases(
        &mut aliases,
        "portland trail blazers",
        &["portland blazers", "por trail blazers", "trail blazers"],
    );
    add_aliases(&mut aliases, "sacramento kings", &["sac kings", "kings"]);
    add_aliases(&mut aliases, "san antonio spurs", &["sa spurs", "spurs"]);
    add_aliases(&mut aliases, "toronto raptors", &["tor raptors", "raptors"]);
    add_aliases(&mut aliases, "utah jazz", &["uta jazz", "jazz"]);
    add_aliases(
        &mut aliases,
        "washington wizards",
        &["was wizards", "wizards"],
    );

    aliases
}

/// Helper to add multiple aliases pointing to a canonical name
fn add_aliases(map: &mut HashMap<String, String>, canonical: &str, aliases: &[&str]) {
    for alias in aliases {
        map.insert(alias.to_string(), canonical.to_string());
    }
    // Also map canonical to itself for consistency
    map.insert(canonical.to_string(), canonical.to_string());
}
