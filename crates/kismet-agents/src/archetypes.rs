//! The fixed table of default archetypes.
//!
//! Ten named personality profiles seed the default world. Trait order in the
//! compact rows below follows the field order of [`Traits`].

use kismet_types::{AgentLabel, Archetype, Traits};

use crate::error::AgentError;

/// Build an archetype from a compact trait row.
///
/// Row order: love orientation, drive, sociability, stability, curiosity,
/// creativity, hardworking, intelligence base, warmth, impulse, trauma
/// sensitivity, memory depth.
fn archetype(name: &str, label: &str, row: [f64; 12]) -> Archetype {
    let [
        love_orientation,
        drive,
        sociability,
        stability,
        curiosity,
        creativity,
        hardworking,
        intelligence_base,
        warmth,
        impulse,
        trauma_sensitivity,
        memory_depth,
    ] = row;
    Archetype {
        name: name.to_owned(),
        label: AgentLabel::from(label),
        traits: Traits {
            love_orientation,
            drive,
            sociability,
            stability,
            curiosity,
            creativity,
            hardworking,
            intelligence_base,
            warmth,
            impulse,
            trauma_sensitivity,
            memory_depth,
        },
    }
}

/// The ten default archetypes, in roster order.
pub fn default_archetypes() -> Vec<Archetype> {
    vec![
        archetype("Vayu", "vayu", [7.0, 8.0, 6.0, 4.0, 9.0, 7.0, 5.0, 7.0, 6.0, 8.0, 5.0, 5.0]),
        archetype("Agni", "agni", [6.0, 9.0, 7.0, 5.0, 7.0, 8.0, 8.0, 7.0, 5.0, 7.0, 6.0, 6.0]),
        archetype("Dhara", "dhara", [8.0, 6.0, 8.0, 7.0, 5.0, 6.0, 7.0, 6.0, 8.0, 4.0, 7.0, 8.0]),
        archetype("Jvala", "jvala", [5.0, 9.0, 5.0, 3.0, 8.0, 9.0, 6.0, 8.0, 4.0, 9.0, 4.0, 4.0]),
        archetype("Neer", "neer", [9.0, 5.0, 7.0, 8.0, 6.0, 7.0, 6.0, 7.0, 9.0, 3.0, 8.0, 9.0]),
        archetype("Kash", "kash", [4.0, 7.0, 4.0, 6.0, 7.0, 5.0, 8.0, 8.0, 3.0, 5.0, 5.0, 7.0]),
        archetype("Vrishti", "vrishti", [7.0, 6.0, 9.0, 6.0, 8.0, 8.0, 5.0, 6.0, 8.0, 6.0, 7.0, 6.0]),
        archetype("Pashan", "pashan", [5.0, 5.0, 3.0, 9.0, 4.0, 4.0, 9.0, 6.0, 4.0, 2.0, 3.0, 9.0]),
        archetype("Ahnil", "ahnil", [6.0, 8.0, 6.0, 7.0, 6.0, 6.0, 7.0, 8.0, 6.0, 5.0, 6.0, 7.0]),
        archetype("Prith", "prith", [8.0, 7.0, 8.0, 8.0, 5.0, 5.0, 8.0, 7.0, 9.0, 3.0, 8.0, 8.0]),
    ]
}

/// Look up a default archetype by label.
///
/// # Errors
///
/// Returns [`AgentError::UnknownArchetype`] if no default archetype has the
/// given label.
pub fn archetype_by_label(label: &str) -> Result<Archetype, AgentError> {
    default_archetypes()
        .into_iter()
        .find(|archetype| archetype.label.as_str() == label)
        .ok_or_else(|| AgentError::UnknownArchetype {
            label: label.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn ten_archetypes_with_unique_labels() {
        let archetypes = default_archetypes();
        assert_eq!(archetypes.len(), 10);
        let labels: BTreeSet<_> = archetypes.iter().map(|a| a.label.clone()).collect();
        assert_eq!(labels.len(), 10);
    }

    #[test]
    fn traits_stay_on_ten_point_scale() {
        for archetype in default_archetypes() {
            let t = archetype.traits;
            for value in [
                t.love_orientation,
                t.drive,
                t.sociability,
                t.stability,
                t.curiosity,
                t.creativity,
                t.hardworking,
                t.intelligence_base,
                t.warmth,
                t.impulse,
                t.trauma_sensitivity,
                t.memory_depth,
            ] {
                assert!((0.0..=10.0).contains(&value), "{} out of range", archetype.name);
            }
        }
    }

    #[test]
    fn lookup_by_label() {
        let neer = archetype_by_label("neer");
        assert!(neer.is_ok());
        let neer = neer.ok().map(|a| a.traits.warmth).unwrap_or_default();
        assert!((neer - 9.0).abs() < f64::EPSILON);
        assert!(archetype_by_label("nobody").is_err());
    }
}
