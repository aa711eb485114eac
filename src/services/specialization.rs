use crate::models::KnowledgeBase;

/// Picks a specialty for free-text input.
///
/// A specialty named outright ("I need a dentist") wins over any keyword.
/// Otherwise words are scanned left to right and the first word containing a
/// keyword decides; ties inside one word go to the earlier specialty.
pub fn detect_specialization<'a>(kb: &'a KnowledgeBase, input: &str) -> Option<&'a str> {
    let lower = input.to_lowercase();

    if let Some(specialty) = kb
        .specialties
        .iter()
        .find(|s| lower.contains(&s.name.to_lowercase()))
    {
        return Some(&specialty.name);
    }

    for word in lower.split_whitespace() {
        for specialty in &kb.specialties {
            if specialty.keywords.iter().any(|k| word.contains(k.as_str())) {
                return Some(&specialty.name);
            }
        }
    }

    None
}
