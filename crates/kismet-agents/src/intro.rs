//! Narrative identity derived from an archetype.
//!
//! Everything here is a pure function of the trait vector: a one-line soul
//! note keyed on the dominant trait, a short personality summary, the three
//! domains an agent initially gravitates towards, and the deterministic
//! destiny seed.

use kismet_types::{Archetype, Domain};

/// Pillar threshold: traits at or above this value earn an adjective.
const PILLAR_THRESHOLD: f64 = 7.0;

/// Number of initial goal domains.
const INITIAL_GOAL_COUNT: usize = 3;

/// A one-line poetic note capturing the archetype's dominant trait.
///
/// Ties resolve to the trait listed first: curiosity, warmth, drive,
/// stability, creativity, sociability.
pub fn soul_note(archetype: &Archetype) -> String {
    let t = &archetype.traits;
    let candidates = [
        (t.curiosity, "restless winds that chase every question"),
        (t.warmth, "ember-soft light that heals cold rooms"),
        (t.drive, "focused lightning chasing distant summits"),
        (t.stability, "quiet stone that anchors trembling ground"),
        (t.creativity, "kaleidoscopes that bloom inside the mind"),
        (t.sociability, "crowd-surfing laughter threaded with care"),
    ];

    let mut dominant: Option<(f64, &str)> = None;
    for (value, tone) in candidates {
        match dominant {
            Some((best, _)) if value <= best => {}
            _ => dominant = Some((value, tone)),
        }
    }
    let tone = dominant.map_or("mysterious chords humming beneath the skin", |(_, tone)| tone);

    format!("{} carries {tone}.", archetype.name)
}

/// A concise summary such as `Neer is empathetic, steady, and gregarious,
/// guided by heart-forward instincts.`
pub fn personality_summary(archetype: &Archetype) -> String {
    let t = &archetype.traits;
    let mut pillars: Vec<&str> = [
        (t.drive, "ambitious"),
        (t.warmth, "empathetic"),
        (t.curiosity, "inquisitive"),
        (t.stability, "steady"),
        (t.creativity, "imaginative"),
        (t.sociability, "gregarious"),
    ]
    .into_iter()
    .filter(|(value, _)| *value >= PILLAR_THRESHOLD)
    .map(|(_, word)| word)
    .collect();

    if pillars.is_empty() {
        pillars.push("balanced");
    }

    let tone = match pillars.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {last}", rest.join(", ")),
        Some((only, _)) => (*only).to_owned(),
        None => String::from("balanced"),
    };

    format!(
        "{} is {tone}, guided by {}.",
        archetype.name,
        describe_orientation(archetype)
    )
}

/// Describe whether the archetype leans towards love or ambition.
pub fn describe_orientation(archetype: &Archetype) -> &'static str {
    let t = &archetype.traits;
    if t.love_orientation > t.drive {
        "heart-forward instincts"
    } else if t.drive > t.love_orientation {
        "relentless purpose"
    } else {
        "an equal pull toward love and ambition"
    }
}

/// The three domains the archetype initially gravitates towards.
pub fn initial_goals(archetype: &Archetype) -> Vec<Domain> {
    let t = &archetype.traits;
    let mut pulls = [
        (Domain::Love, t.love_orientation),
        (Domain::Career, t.drive),
        (Domain::Social, t.sociability),
        (Domain::Learning, t.curiosity),
        (Domain::Physical, (t.stability + t.hardworking) / 2.0),
        (Domain::Rest, 10.0 - t.impulse),
    ];
    // Stable: equal pulls keep the order above.
    pulls.sort_by(|a, b| b.1.total_cmp(&a.1));
    pulls
        .into_iter()
        .take(INITIAL_GOAL_COUNT)
        .map(|(domain, _)| domain)
        .collect()
}

/// Deterministic destiny seed in `[0, 1]`.
///
/// `raw = (curiosity + creativity + love_orientation + memory_depth) / 40`,
/// scaled by `0.6 + stability / 20` and clamped.
pub fn destiny_seed(archetype: &Archetype) -> f64 {
    let t = &archetype.traits;
    let raw = (t.curiosity + t.creativity + t.love_orientation + t.memory_depth) / 40.0;
    (raw * (0.6 + t.stability / 20.0)).clamp(0.0, 1.0)
}
