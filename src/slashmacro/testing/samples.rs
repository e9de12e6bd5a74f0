//! A curated corpus of macros shared by tests
//!
//! Each sample records whether it passes validation so that property and scenario tests
//! can draw from the same verified texts.

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub text: &'static str,
    /// Passes full validation with the standard tables
    pub valid: bool,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "tooltip-directive",
        text: "#showtooltip Fireball",
        valid: true,
    },
    Sample {
        name: "single-condition",
        text: "/cast [mod:shift] Polymorph",
        valid: true,
    },
    Sample {
        name: "fallback-clause",
        text: "#showtooltip\n/cast [mod:shift] Polymorph; Frostbolt",
        valid: true,
    },
    Sample {
        name: "stacked-sets",
        text: "/cast [mod:shift][@focus] Polymorph",
        valid: true,
    },
    Sample {
        name: "mouseover-heal",
        text: "#showtooltip\n/cast [@mouseover,help,nodead][help,nodead][@player] Flash Heal",
        valid: true,
    },
    Sample {
        name: "always-true",
        text: "/cast [mod:alt] Blink; [] Frost Nova",
        valid: true,
    },
    Sample {
        name: "multi-line",
        text: "#showtooltip\n/stopcasting\n/cast [@focus,harm,nodead] Counterspell\n; interrupt focus",
        valid: true,
    },
    Sample {
        name: "pet-attack",
        text: "/petattack [@mouseover,harm]\n/cast [nocombat] Summon Water Elemental",
        valid: true,
    },
    Sample {
        name: "unknown-command",
        text: "/notacommand [badkey] Foo",
        valid: false,
    },
    Sample {
        name: "unclosed-bracket",
        text: "/cast [mod:shift Polymorph",
        valid: false,
    },
    Sample {
        name: "comments-only",
        text: "; nothing to do",
        valid: false,
    },
];

pub fn sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

pub fn valid_samples() -> impl Iterator<Item = &'static Sample> {
    SAMPLES.iter().filter(|s| s.valid)
}
