//! Noun lemmatizer: irregular plurals from a table, regular plurals by
//! suffix rules.
//!
//! Without a dictionary the suffix rules cannot tell a plural from a word that
//! merely ends in `s`, so the rules are guarded (`-ss`, `-us`, `-is`, short
//! words) and known false positives are listed as invariant. Every output is a
//! fixed point of [`lemmatize`].

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("alumni", "alumnus"),
    ("theses", "thesis"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("appendices", "appendix"),
    ("vertices", "vertex"),
    ("buses", "bus"),
    ("gases", "gas"),
];

const INVARIANT: &[&str] = &[
    "series", "species", "news", "physics", "mathematics", "economics", "politics", "ethics",
    "athletics", "gymnastics", "linguistics", "statistics", "lens", "bias", "atlas", "canvas",
    "chaos", "cosmos", "ethos", "pathos", "kudos", "always", "perhaps", "whereas", "besides",
    "sometimes", "afterwards", "towards", "nevertheless", "thanks", "means", "aids",
];

/// Nouns whose singular ends in `-ie`, so `-ies` must only lose the `s`.
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "zombie", "rookie", "calorie", "prairie", "hippie", "selfie", "brownie",
    "genie", "smoothie", "goalie", "auntie", "necktie", "pixie", "sortie", "birdie", "hoodie",
    "freebie", "groupie", "newbie", "veggie", "magpie", "lingerie",
];

/// Nouns whose singular ends in `-che`, so `-ches` must only lose the `s`.
const CHE_NOUNS: &[&str] = &[
    "ache", "headache", "cache", "niche", "moustache", "mustache", "avalanche", "cliche", "quiche",
    "creche", "psyche", "microfiche",
];

/// Reduce `word` (lower-case) to its base form.
pub fn lemmatize(word: &str) -> String {
    let mut current = word.to_string();
    while let Some(next) = step(&current) {
        current = next;
    }
    current
}

fn step(word: &str) -> Option<String> {
    if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return Some((*base).to_string());
    }
    if INVARIANT.contains(&word) || IRREGULAR.iter().any(|(_, base)| *base == word) {
        return None;
    }
    let len = word.chars().count();
    if len < 4 || !word.ends_with('s') {
        return None;
    }
    let strip = |n: usize| word[..word.len() - n].to_string();

    if word.ends_with("sses") || word.ends_with("shes") || word.ends_with("xes") || word.ends_with("zzes") {
        return Some(strip(2));
    }
    if word.ends_with("ches") {
        let singular = strip(1);
        return Some(if CHE_NOUNS.contains(&singular.as_str()) { singular } else { strip(2) });
    }
    if word.ends_with("ies") && len > 4 {
        let singular = strip(1);
        if IE_NOUNS.contains(&singular.as_str()) {
            return Some(singular);
        }
        return Some(format!("{}y", strip(3)));
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    Some(strip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_outputs_are_fixed_points() {
        for (_, base) in IRREGULAR {
            assert_eq!(step(base), None, "{base} must not change further");
        }
        for word in INVARIANT {
            assert_eq!(lemmatize(word), *word);
        }
    }
}
