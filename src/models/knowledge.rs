use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specialty {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered catalogue of specialties and the symptom keywords that point to them.
///
/// Order matters: detection walks the specialties front to back and the first
/// match wins, so a keyword listed under two specialties resolves to the
/// earlier one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    pub specialties: Vec<Specialty>,
}

const BUILT_IN: &[(&str, &[&str])] = &[
    (
        "Cardiologist",
        &[
            "heart", "chest", "pain", "attack", "pulse", "pressure", "palpitation", "angina",
            "shortness of breath", "cardiac",
        ],
    ),
    (
        "Dermatologist",
        &[
            "skin", "rash", "acne", "hair", "itch", "spots", "pimples", "mole", "eczema", "scalp",
            "burn", "allergy",
        ],
    ),
    (
        "Ophthalmologist",
        &[
            "eye", "vision", "blur", "blind", "see", "glasses", "lens", "sight", "cataract",
            "redness", "watery",
        ],
    ),
    (
        "Dentist",
        &[
            "tooth", "teeth", "gum", "cavity", "mouth", "root canal", "brace", "filling", "ache",
            "floss", "dental",
        ],
    ),
    (
        "Neurologist",
        &[
            "brain", "headache", "dizzy", "migraine", "nerves", "seizure", "stroke", "tremor",
            "memory", "numbness", "tingling",
        ],
    ),
    (
        "General Physician",
        &[
            "fever", "cold", "flu", "checkup", "cough", "weakness", "vomit", "nausea", "fatigue",
            "viral", "infection", "sick",
        ],
    ),
    (
        "Orthopedist",
        &[
            "bone", "joint", "knee", "fracture", "back", "spine", "muscle", "ligament", "shoulder",
            "arthritis", "sprain", "injury",
        ],
    ),
    (
        "Pediatrician",
        &[
            "child", "baby", "kid", "infant", "toddler", "growth", "vaccine", "pediatric",
            "newborn",
        ],
    ),
    (
        "ENT Specialist",
        &[
            "ear", "nose", "throat", "sinus", "hearing", "smell", "tonsil", "swallow", "voice",
            "sneeze",
        ],
    ),
    (
        "Gynecologist",
        &[
            "period", "pregnancy", "menstrual", "baby", "womb", "fertility", "cramps", "cycle",
            "reproductive",
        ],
    ),
    (
        "Psychiatrist",
        &[
            "depression", "anxiety", "stress", "mental", "sleep", "insomnia", "mood", "panic",
            "therapy", "sad",
        ],
    ),
];

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            specialties: BUILT_IN
                .iter()
                .map(|(name, keywords)| Specialty {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl KnowledgeBase {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let mut kb: KnowledgeBase = serde_json::from_str(s)?;
        anyhow::ensure!(!kb.specialties.is_empty(), "knowledge base has no specialties");

        let mut seen = HashSet::new();
        for specialty in &mut kb.specialties {
            specialty.name = specialty.name.trim().to_string();
            anyhow::ensure!(!specialty.name.is_empty(), "specialty name must not be empty");
            anyhow::ensure!(
                seen.insert(specialty.name.to_lowercase()),
                "duplicate specialty: {}",
                specialty.name
            );

            specialty.keywords = specialty
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .collect();
            anyhow::ensure!(
                specialty.keywords.iter().all(|k| !k.is_empty()),
                "empty keyword under {}",
                specialty.name
            );
        }
        Ok(kb)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specialties.iter().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_order_is_fixed() {
        let kb = KnowledgeBase::default();
        let names: Vec<&str> = kb.names().collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "Cardiologist");
        assert_eq!(names[10], "Psychiatrist");
        let pediatrician = names.iter().position(|n| *n == "Pediatrician").unwrap();
        let gynecologist = names.iter().position(|n| *n == "Gynecologist").unwrap();
        assert!(pediatrician < gynecologist);
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"specialties":[{"name":"Dentist","keywords":["Tooth"," gum "]},{"name":"Cardiologist","keywords":["heart"]}]}"#;
        let kb = KnowledgeBase::from_json(json).unwrap();
        assert_eq!(kb.specialties.len(), 2);
        assert_eq!(kb.specialties[0].name, "Dentist");
        assert_eq!(kb.specialties[0].keywords, vec!["tooth", "gum"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(KnowledgeBase::from_json("not json").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_catalogue() {
        assert!(KnowledgeBase::from_json(r#"{"specialties":[]}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let json = r#"{"specialties":[{"name":"Dentist","keywords":["tooth"]},{"name":"dentist","keywords":["gum"]}]}"#;
        assert!(KnowledgeBase::from_json(json).is_err());
    }

    #[test]
    fn test_parse_rejects_blank_keyword() {
        let json = r#"{"specialties":[{"name":"Dentist","keywords":["tooth","  "]}]}"#;
        assert!(KnowledgeBase::from_json(json).is_err());
    }
}
