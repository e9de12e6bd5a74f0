//! Reference tables of known directives, commands and conditionals
//!
//! The tables are plain immutable data. [`ReferenceTables::standard`] builds the
//! built-in set once per process; validators take a `&ReferenceTables` so tests can
//! substitute their own.
//!
//! Lookups are case-insensitive: every name is stored lowercased and queries are
//! lowercased before lookup. Allowed values are matched exactly as written.
//!
//! Generated entries
//!
//!     Some keys are derived from base tables when the standard set is built:
//!         - `no<key>` for every negatable key, with the base key's values
//!         - `@<unit>` and `target=<unit>` for every known unit
//!         - `<unit>target` chains for the common units

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Documentation grouping of slash commands. Validation treats all commands as one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
    Combat,
    Targeting,
    Pet,
    Equipment,
    Chat,
    Social,
    Emote,
    Group,
    Interface,
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandCategory::Combat => "combat",
            CommandCategory::Targeting => "targeting",
            CommandCategory::Pet => "pet",
            CommandCategory::Equipment => "equipment",
            CommandCategory::Chat => "chat",
            CommandCategory::Social => "social",
            CommandCategory::Emote => "emote",
            CommandCategory::Group => "group",
            CommandCategory::Interface => "interface",
        };
        write!(f, "{}", name)
    }
}

const DIRECTIVES: &[&str] = &["#showtooltip", "#show", "#hide", "#icon"];

const COMMANDS: &[(CommandCategory, &[&str])] = &[
    (
        CommandCategory::Combat,
        &[
            "/cast",
            "/use",
            "/castsequence",
            "/castrandom",
            "/userandom",
            "/stopcasting",
            "/stopspelltarget",
            "/startattack",
            "/stopattack",
            "/cancelaura",
            "/cancelform",
            "/cancelqueuedspell",
            "/stopmacro",
            "/click",
            "/dismount",
            "/leavevehicle",
            "/usetalents",
        ],
    ),
    (
        CommandCategory::Targeting,
        &[
            "/target",
            "/tar",
            "/targetexact",
            "/targetenemy",
            "/targetenemyplayer",
            "/targetfriend",
            "/targetfriendplayer",
            "/targetparty",
            "/targetraid",
            "/targetlasttarget",
            "/targetlastenemy",
            "/targetlastfriend",
            "/cleartarget",
            "/assist",
            "/focus",
            "/clearfocus",
            "/targetmarker",
            "/tm",
            "/worldmarker",
            "/wm",
            "/clearworldmarker",
            "/cwm",
        ],
    ),
    (
        CommandCategory::Pet,
        &[
            "/petattack",
            "/petfollow",
            "/petstay",
            "/petmoveto",
            "/petpassive",
            "/petdefensive",
            "/petassist",
            "/petautocaston",
            "/petautocastoff",
            "/petautocasttoggle",
            "/petdismiss",
            "/summonpet",
            "/dismisspet",
            "/randompet",
            "/randomfavoritepet",
        ],
    ),
    (
        CommandCategory::Equipment,
        &["/equip", "/equipslot", "/equipset", "/usetoy"],
    ),
    (
        CommandCategory::Chat,
        &[
            "/say",
            "/s",
            "/yell",
            "/y",
            "/party",
            "/p",
            "/raid",
            "/ra",
            "/raidwarning",
            "/rw",
            "/instance",
            "/i",
            "/guild",
            "/g",
            "/officer",
            "/o",
            "/whisper",
            "/w",
            "/tell",
            "/t",
            "/reply",
            "/r",
            "/emote",
            "/e",
            "/me",
            "/1",
            "/2",
            "/3",
            "/4",
            "/5",
        ],
    ),
    (
        CommandCategory::Social,
        &[
            "/invite",
            "/inv",
            "/uninvite",
            "/kick",
            "/follow",
            "/fol",
            "/trade",
            "/duel",
            "/forfeit",
            "/inspect",
            "/ignore",
            "/unignore",
            "/who",
            "/afk",
            "/dnd",
            "/roll",
            "/random",
            "/rnd",
        ],
    ),
    (
        CommandCategory::Emote,
        &[
            "/bow", "/charge", "/cheer", "/cry", "/dance", "/flex", "/hug", "/kiss", "/kneel",
            "/laugh", "/lol", "/point", "/roar", "/rude", "/salute", "/sit", "/sleep", "/stand",
            "/thank", "/wave", "/wink", "/yawn",
        ],
    ),
    (
        CommandCategory::Group,
        &[
            "/readycheck",
            "/leave",
            "/promote",
            "/mainassist",
            "/maintank",
            "/clearmainassist",
            "/clearmaintank",
            "/lootmethod",
            "/pvp",
        ],
    ),
    (
        CommandCategory::Interface,
        &[
            "/run",
            "/script",
            "/console",
            "/reload",
            "/dump",
            "/framestack",
            "/fstack",
            "/macro",
            "/help",
            "/logout",
            "/camp",
            "/quit",
            "/exit",
            "/played",
            "/time",
            "/stopwatch",
            "/calendar",
            "/combatlog",
            "/chatlog",
        ],
    ),
];

const NO_VALUES: &[&str] = &[];

/// Base conditional keys: (key, allowed values, negatable with a `no` prefix)
const CONDITIONALS: &[(&str, &[&str], bool)] = &[
    ("mod", &["shift", "ctrl", "alt"], true),
    ("modifier", &["shift", "ctrl", "alt"], true),
    (
        "button",
        &["1", "2", "3", "4", "5", "LeftButton", "RightButton", "MiddleButton", "Button4", "Button5"],
        false,
    ),
    (
        "btn",
        &["1", "2", "3", "4", "5", "LeftButton", "RightButton", "MiddleButton", "Button4", "Button5"],
        false,
    ),
    ("stance", &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"], true),
    ("form", &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"], true),
    ("bar", &["1", "2", "3", "4", "5", "6"], true),
    ("actionbar", &["1", "2", "3", "4", "5", "6"], true),
    ("bonusbar", &["1", "2", "3", "4", "5"], true),
    ("spec", &["1", "2", "3", "4"], false),
    ("group", &["party", "raid"], true),
    ("combat", NO_VALUES, true),
    ("harm", NO_VALUES, true),
    ("help", NO_VALUES, true),
    ("dead", NO_VALUES, true),
    ("exists", NO_VALUES, true),
    ("stealth", NO_VALUES, true),
    ("mounted", NO_VALUES, true),
    ("flying", NO_VALUES, true),
    ("flyable", NO_VALUES, true),
    ("advflyable", NO_VALUES, true),
    ("swimming", NO_VALUES, true),
    ("indoors", NO_VALUES, true),
    ("outdoors", NO_VALUES, true),
    ("resting", NO_VALUES, true),
    ("channeling", NO_VALUES, true),
    ("channel", NO_VALUES, true),
    ("equipped", NO_VALUES, true),
    ("worn", NO_VALUES, true),
    ("pet", NO_VALUES, true),
    ("party", NO_VALUES, true),
    ("raid", NO_VALUES, true),
    ("talent", NO_VALUES, true),
    ("pvptalent", NO_VALUES, true),
    ("known", NO_VALUES, true),
    ("cursor", NO_VALUES, true),
    ("extrabar", NO_VALUES, true),
    ("overridebar", NO_VALUES, true),
    ("possessbar", NO_VALUES, true),
    ("shapeshift", NO_VALUES, true),
    ("vehicleui", NO_VALUES, true),
    ("unithasvehicleui", NO_VALUES, true),
    ("canexitvehicle", NO_VALUES, true),
    ("petbattle", NO_VALUES, true),
    ("dragonriding", NO_VALUES, true),
];

/// Units a target condition may name
const UNITS: &[&str] = &[
    "player",
    "target",
    "focus",
    "mouseover",
    "cursor",
    "pet",
    "vehicle",
    "none",
    "anyenemy",
    "anyfriend",
    "anyinteract",
    "npc",
    "softenemy",
    "softfriend",
    "softinteract",
];

/// Units that also form `<unit>target` chains
const CHAINABLE_UNITS: &[&str] = &["target", "focus", "mouseover", "pet", "player"];

/// Indexed unit families: (prefix, highest index)
const NUMBERED_UNITS: &[(&str, usize)] = &[
    ("party", 4),
    ("partypet", 4),
    ("raid", 40),
    ("raidpet", 40),
    ("arena", 5),
    ("boss", 8),
];

/// Immutable lookup tables used by validation and analysis
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    directives: BTreeSet<String>,
    commands: BTreeMap<String, CommandCategory>,
    conditionals: BTreeMap<String, Vec<String>>,
}

static STANDARD: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::build_standard);

impl ReferenceTables {
    /// Build a table set from explicit data. Names are lowercased.
    pub fn new<'a>(
        directives: impl IntoIterator<Item = &'a str>,
        commands: impl IntoIterator<Item = (&'a str, CommandCategory)>,
        conditionals: impl IntoIterator<Item = (&'a str, Vec<&'a str>)>,
    ) -> Self {
        Self {
            directives: directives.into_iter().map(str::to_lowercase).collect(),
            commands: commands
                .into_iter()
                .map(|(name, category)| (name.to_lowercase(), category))
                .collect(),
            conditionals: conditionals
                .into_iter()
                .map(|(key, values)| {
                    (
                        key.to_lowercase(),
                        values.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        }
    }

    /// The built-in tables, initialised on first use and never mutated
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD
    }

    fn build_standard() -> Self {
        let commands = COMMANDS
            .iter()
            .flat_map(|(category, names)| names.iter().map(move |name| (*name, *category)));

        let mut conditionals: Vec<(String, Vec<&str>)> = Vec::new();
        for (key, values, negatable) in CONDITIONALS {
            conditionals.push((key.to_string(), values.to_vec()));
            if *negatable {
                conditionals.push((format!("no{}", key), values.to_vec()));
            }
        }
        for unit in standard_units() {
            conditionals.push((format!("@{}", unit), Vec::new()));
            conditionals.push((format!("target={}", unit), Vec::new()));
        }

        let tables = Self::new(
            DIRECTIVES.iter().copied(),
            commands,
            conditionals
                .iter()
                .map(|(key, values)| (key.as_str(), values.clone())),
        );
        log::debug!(
            "reference tables built: {} directives, {} commands, {} conditional keys",
            tables.directives.len(),
            tables.commands.len(),
            tables.conditionals.len()
        );
        tables
    }

    pub fn is_known_directive(&self, directive: &str) -> bool {
        self.directives.contains(&directive.to_lowercase())
    }

    pub fn is_known_command(&self, verb: &str) -> bool {
        self.commands.contains_key(&verb.to_lowercase())
    }

    pub fn is_known_key(&self, key: &str) -> bool {
        self.conditionals.contains_key(&key.to_lowercase())
    }

    pub fn command_category(&self, verb: &str) -> Option<CommandCategory> {
        self.commands.get(&verb.to_lowercase()).copied()
    }

    /// Allowed values for a key; `None` when the key is unknown, empty when any value
    /// (or none) is accepted
    pub fn allowed_values_for(&self, key: &str) -> Option<&[String]> {
        self.conditionals
            .get(&key.to_lowercase())
            .map(|values| values.as_slice())
    }

    /// Sorted, lowercased directive names
    pub fn known_directives(&self) -> Vec<String> {
        self.directives.iter().cloned().collect()
    }

    /// Sorted, lowercased command verbs
    pub fn known_commands(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Sorted, lowercased conditional keys
    pub fn known_conditional_keys(&self) -> Vec<String> {
        self.conditionals.keys().cloned().collect()
    }

    pub fn commands_by_category(&self) -> BTreeMap<CommandCategory, Vec<String>> {
        let mut grouped: BTreeMap<CommandCategory, Vec<String>> = BTreeMap::new();
        for (name, category) in &self.commands {
            grouped.entry(*category).or_default().push(name.clone());
        }
        grouped
    }
}

fn standard_units() -> Vec<String> {
    let mut units: Vec<String> = UNITS.iter().map(|u| u.to_string()).collect();
    for (prefix, highest) in NUMBERED_UNITS {
        units.extend((1..=*highest).map(|i| format!("{}{}", prefix, i)));
    }
    let chains: Vec<String> = CHAINABLE_UNITS
        .iter()
        .map(|u| format!("{}target", u))
        .chain(["targettargettarget".to_string()])
        .collect();
    for chain in chains {
        if !units.contains(&chain) {
            units.push(chain);
        }
    }
    units
}
